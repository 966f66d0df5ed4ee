//! 視圖構建
//!
//! 構建呈現層用的可序列化狀態快照，包含：
//! - 勝負狀態與待決選擇
//! - 手牌與儲備牌
//! - 地城布局（蓋著的怪物不洩漏牌面）
//! - 可攻擊目標與每槽攻擊進度
//! - 牌庫／牌堆計數與道具欄
//!
//! 快照是純資料，可直接以 `serde_json` 序列化跨越 UI 邊界。

use serde::Serialize;

use super::state::GameState;
use crate::game::{Card, GameMode, ItemCard, KingAbility, MonsterSlot, Outcome, SlotPos, Stage};

/// 一張牌在視圖中的樣子
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardView {
    pub suit: crate::game::Suit,
    pub rank: u8,
    pub label: String,
    pub value: u8,
    pub doubled: bool,
}

impl CardView {
    fn from_card(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            label: card.label(),
            value: card.power(),
            doubled: card.doubled,
        }
    }
}

/// 一個怪物槽位在視圖中的樣子
#[derive(Clone, Debug, Serialize)]
pub struct SlotView {
    pub revealed: bool,
    /// 蓋著的槽位為 `None`，不洩漏牌面
    pub card: Option<CardView>,
    pub attack_cards: Vec<CardView>,
    /// 前兩槽目前的攻擊力總和（翻開時）
    pub power_total: Option<u8>,
}

impl SlotView {
    fn from_slot(slot: &MonsterSlot) -> Self {
        if slot.revealed {
            Self {
                revealed: true,
                card: Some(CardView::from_card(&slot.card)),
                attack_cards: slot.attack_cards.iter().map(CardView::from_card).collect(),
                power_total: Some(slot.power_total()),
            }
        } else {
            Self {
                revealed: false,
                card: None,
                attack_cards: Vec::new(),
                power_total: None,
            }
        }
    }
}

/// 道具欄中的一張 K 在視圖中的樣子
#[derive(Clone, Debug, Serialize)]
pub struct ItemView {
    pub suit: crate::game::Suit,
    pub used: bool,
    pub description: &'static str,
}

impl ItemView {
    fn from_item(item: &ItemCard) -> Self {
        Self {
            suit: item.card.suit,
            used: item.used,
            description: KingAbility::from_suit(item.card.suit)
                .map(|a| a.description())
                .unwrap_or(""),
        }
    }
}

/// 呈現層的完整狀態快照
#[derive(Clone, Debug, Serialize)]
pub struct ViewState {
    pub mode: GameMode,
    pub outcome: Outcome,
    pub awaiting_bottom_choice: bool,
    pub hand: Vec<CardView>,
    /// 儲備牌（經典模式規則生效且傷害堆非空時）
    pub reserve: Option<CardView>,
    pub dungeon: Vec<Vec<Option<SlotView>>>,
    pub attackable: Vec<SlotPos>,
    pub deck_remaining: usize,
    pub damage_count: usize,
    pub damage_limit: usize,
    pub clear_count: usize,
    pub inventory: Vec<ItemView>,
}

impl ViewState {
    /// 序列化為 JSON（跨越 UI 邊界的格式）
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("view state serializes")
    }
}

/// 從遊戲狀態構建視圖快照
pub fn view_from_state(state: &GameState) -> ViewState {
    let dungeon = state
        .layout
        .groups()
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|slot| slot.as_ref().map(SlotView::from_slot))
                .collect()
        })
        .collect();

    ViewState {
        mode: state.config.mode,
        outcome: state.outcome(),
        awaiting_bottom_choice: matches!(state.stage, Stage::BottomCardChoice),
        hand: state.hand.iter().map(CardView::from_card).collect(),
        reserve: state.reserve_card().map(CardView::from_card),
        dungeon,
        attackable: state.layout.revealed_positions(),
        deck_remaining: state.power_deck.len(),
        damage_count: state.damage_pile.len(),
        damage_limit: state.damage_limit(),
        clear_count: state.clear_pile.len(),
        inventory: state.inventory.iter().map(ItemView::from_item).collect(),
    }
}

// ============================================================================
// 單元測試
// ============================================================================
