//! Server state management
//!
//! One shared hot-seat game plus the display geometry used to resolve clicks.

use std::sync::RwLock;
use yavalath_core::{DisplayConfig, GameSession, Layout};

/// Server-wide shared state
pub struct ServerState {
    pub display: DisplayConfig,
    pub layout: Layout,
    pub game: RwLock<GameSession>,
}

impl ServerState {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            layout: display.layout(),
            display,
            game: RwLock::new(GameSession::new()),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
