//! 可用動作摘要
//!
//! 從遊戲狀態構建目前合法意圖的摘要，供呈現層啟用／停用對應的
//! 控制項，避免送出必然被拒絕的意圖。

use serde::Serialize;

use super::state::GameState;
use crate::game::{KingAbility, SlotPos, Stage, Suit};

/// 目前可用的玩家意圖
#[derive(Clone, Debug, Serialize)]
pub struct AvailableActions {
    /// 可抽牌（手牌已空；牌庫見底時抽牌仍合法，結果是落敗轉移）
    pub can_draw: bool,
    /// 可棄牌（手牌非空）
    pub can_discard: bool,
    /// 有可出的牌與可攻擊的目標
    pub can_place: bool,
    /// 儲備牌目前可用
    pub can_use_reserve: bool,
    /// 可攻擊的槽位座標
    pub attackable: Vec<SlotPos>,
    /// 可啟動的 K 道具（未使用且資源前置條件滿足）
    pub usable_kings: Vec<Suit>,
    /// 方塊 K 的底牌選擇待決（此時只接受 `resolve_bottom_card`）
    pub awaiting_bottom_choice: bool,
}

/// 從遊戲狀態構建可用動作摘要
pub fn actions_from_state(state: &GameState) -> AvailableActions {
    let none = AvailableActions {
        can_draw: false,
        can_discard: false,
        can_place: false,
        can_use_reserve: false,
        attackable: Vec::new(),
        usable_kings: Vec::new(),
        awaiting_bottom_choice: false,
    };

    match state.stage {
        Stage::End(_) => none,
        Stage::BottomCardChoice => AvailableActions {
            awaiting_bottom_choice: true,
            ..none
        },
        Stage::InProgress => {
            let attackable = state.layout.revealed_positions();
            let reserve_usable = state.reserve_card().is_some();
            let has_playable = !state.hand.is_empty() || reserve_usable;

            let usable_kings = state
                .inventory
                .iter()
                .filter(|item| !item.used)
                .filter_map(|item| {
                    let ability = KingAbility::from_suit(item.card.suit)?;
                    let ready = if ability.needs_hand_target() {
                        !state.hand.is_empty()
                    } else {
                        !state.power_deck.is_empty()
                    };
                    ready.then_some(item.card.suit)
                })
                .collect();

            AvailableActions {
                can_draw: state.hand.is_empty(),
                can_discard: !state.hand.is_empty(),
                can_place: has_playable && !attackable.is_empty(),
                can_use_reserve: reserve_usable,
                attackable,
                usable_kings,
                awaiting_bottom_choice: false,
            }
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================
