//! Pixel <-> axial conversion for a pointy-top hex layout

use crate::board::Hex;
use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A position in window pixel space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps board cells onto window pixels.
///
/// `origin` is the pixel center of hex (0,0); `circumradius` is the distance
/// from a cell center to any of its corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub origin: Point,
    pub circumradius: f64,
}

impl Layout {
    pub const fn new(origin: Point, circumradius: f64) -> Self {
        Self { origin, circumradius }
    }

    /// Distance from a cell center to the middle of an edge
    pub fn inradius(&self) -> f64 {
        self.circumradius * SQRT_3 / 2.0
    }

    /// Canonical pixel center of a cell
    pub fn axial_to_pixel(&self, hex: Hex) -> Point {
        let (q, r) = (hex.q as f64, hex.r as f64);
        Point::new(
            self.origin.x + self.circumradius * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            self.origin.y + self.circumradius * 1.5 * r,
        )
    }

    /// Nearest on-board cell to a pixel, or `None` off the board
    pub fn pixel_to_axial(&self, x: f64, y: f64) -> Option<Hex> {
        let x = x - self.origin.x;
        let y = y - self.origin.y;
        let frac_q = (SQRT_3 / 3.0 * x - y / 3.0) / self.circumradius;
        let frac_r = (2.0 / 3.0 * y) / self.circumradius;
        cube_round(frac_q, frac_r, -frac_q - frac_r)
    }

    /// Corner pixels of a cell, clockwise from the upper-right corner
    pub fn corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.axial_to_pixel(hex);
        std::array::from_fn(|i| {
            let angle = (60.0 * i as f64 - 30.0).to_radians();
            Point::new(
                center.x + self.circumradius * angle.cos(),
                center.y + self.circumradius * angle.sin(),
            )
        })
    }
}

/// Round fractional cube coordinates to a cell.
///
/// The component with the largest rounding error is recomputed from the other
/// two. Ties go to q over r, and r over s.
fn cube_round(frac_q: f64, frac_r: f64, frac_s: f64) -> Option<Hex> {
    if !(frac_q.is_finite() && frac_r.is_finite()) {
        return None;
    }

    let mut q = frac_q.round();
    let mut r = frac_r.round();
    let s = frac_s.round();

    let dq = (q - frac_q).abs();
    let dr = (r - frac_r).abs();
    let ds = (s - frac_s).abs();

    if dq >= dr && dq >= ds {
        q = -r - s;
    } else if dr >= ds {
        r = -q - s;
    }
    // else s absorbs the error and is implied by q and r

    Hex::checked(q as i32, r as i32)
}
