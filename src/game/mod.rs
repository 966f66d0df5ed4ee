//! 遊戲核心模組
//!
//! 包含地城卡牌遊戲的核心定義：
//! - `constants`: 遊戲常量
//! - `cards`: 卡牌與花色定義
//! - `decks`: 遊戲模式、牌組分割與洗牌
//! - `layout`: 地城布局（直欄疊放／菱形依賴）與遮擋對照表
//! - `reveal`: 翻牌解析器（含鬼牌級聯的定點解析）
//! - `attack`: 攻擊槽驗證
//! - `items`: K 道具與一次性能力
//! - `phase`: 遊戲階段與勝負狀態
//! - `errors`: 規則違反錯誤
//!
//! 狀態的持有與變異在 `service` 模組。

pub mod attack;
pub mod cards;
pub mod constants;
pub mod decks;
pub mod errors;
pub mod items;
pub mod layout;
pub mod phase;
pub mod reveal;

// Re-export 常用類型
pub use cards::{full_deck, Card, Suit};
pub use constants::*;
pub use decks::{build_decks, GameConfig, GameMode, ModeDef, MODE_DEFS};
pub use errors::ActionError;
pub use items::{ItemCard, KingAbility};
pub use layout::{blocker_columns, DungeonLayout, MonsterSlot, SlotPos};
pub use phase::{GameEnd, Outcome, Stage};
pub use reveal::{resolve_removal, sweep_initial_jokers, RevealReport};
