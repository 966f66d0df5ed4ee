//! 地城卡牌遊戲規則引擎
//!
//! 單人地城探索卡牌遊戲：玩家從能量牌庫抽牌攻擊地城中的怪物牌，
//! 在傷害堆達到上限前清空地城。
//!
//! 引擎本身不做任何 I/O；外部的呈現層（UI）透過 [`service::GameState`]
//! 的操作方法送入玩家意圖，並以 [`service::view_from_state`] /
//! [`service::actions_from_state`] 取得可序列化的狀態快照來渲染。

pub mod game;
pub mod service;

pub use game::{
    ActionError, Card, GameConfig, GameEnd, GameMode, Outcome, SlotPos, Stage, Suit,
};
pub use service::{
    actions_from_state, view_from_state, AvailableActions, CardSource, GameEvent, GameState,
    ViewState,
};
