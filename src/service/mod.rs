//! 服務層模組
//!
//! 提供呈現層所需的狀態管理、視圖構建與可用動作摘要

pub mod actions;
pub mod state;
pub mod view;

pub use actions::{actions_from_state, AvailableActions};
pub use state::{CardSource, GameEvent, GameState};
pub use view::{view_from_state, CardView, ItemView, SlotView, ViewState};

#[cfg(test)]
mod integration_tests;
