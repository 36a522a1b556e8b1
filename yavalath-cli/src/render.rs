//! Text rendering of the board
//!
//! Rows run from r = -4 (top) to r = 4 (bottom). Each row is indented by
//! one column per step away from the middle row so neighbors line up.

use yavalath_core::{Board, LineRun, Occupancy, Player, BOARD_RADIUS};

fn glyph(cell: Occupancy) -> char {
    match cell {
        Occupancy::Empty => '.',
        Occupancy::Occupied(Player::White) => 'W',
        Occupancy::Occupied(Player::Black) => 'B',
    }
}

/// Render the board; cells on `highlight` are drawn as `*`
pub fn render_board(board: &Board, highlight: Option<&LineRun>) -> String {
    let mut out = String::new();
    for r in -BOARD_RADIUS..=BOARD_RADIUS {
        out.push_str(&" ".repeat(r.unsigned_abs() as usize));
        let row: Vec<String> = board
            .cells()
            .filter(|(hex, _)| hex.r == r)
            .map(|(hex, cell)| {
                let marked = highlight.is_some_and(|run| run.cells.contains(&hex));
                let c = if marked { '*' } else { glyph(cell) };
                c.to_string()
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
