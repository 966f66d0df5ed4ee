//! 攻擊判定
//!
//! 純驗證邏輯：判斷一張牌能否放入怪物的指定攻擊槽。
//! 通過驗證後的實際移動由 `service::GameState` 執行。
//!
//! 每個槽位的狀態機：`Hidden → Revealed → Attacking(0..2 填入) →
//! Defeated`。攻擊牌嚴格依序填入，因此 `attack_cards.len()` 就是
//! 下一個可填的槽索引。

use super::cards::Card;
use super::constants::{ATTACK_SLOT_COUNT, SUIT_SLOT};
use super::errors::ActionError;
use super::layout::MonsterSlot;

/// 驗證把 `card` 放入 `slot` 的第 `slot_index` 個攻擊槽
///
/// 檢查順序：槽位佔用 → 花色槽前置條件（能量槽未滿）→ 依序填入 →
/// 能量總和 → 花色相符（鬼牌豁免）。呼叫端保證 `slot` 已翻開且
/// 不是鬼牌（翻開的鬼牌會被自動清除，永遠不會成為攻擊目標）。
pub fn validate_placement(
    slot: &MonsterSlot,
    card: &Card,
    slot_index: usize,
) -> Result<(), ActionError> {
    let filled = slot.attack_cards.len();

    if slot_index < filled {
        return Err(ActionError::SlotOccupied { slot: slot_index });
    }
    if slot_index >= ATTACK_SLOT_COUNT {
        return Err(ActionError::OutOfOrder {
            slot: slot_index,
            next: filled,
        });
    }
    if slot_index == SUIT_SLOT && filled < SUIT_SLOT {
        return Err(ActionError::IncompletePower);
    }
    if slot_index > filled {
        return Err(ActionError::OutOfOrder {
            slot: slot_index,
            next: filled,
        });
    }

    if slot_index == SUIT_SLOT {
        let required = slot.card.value();
        let available = slot.power_total();
        if available < required {
            return Err(ActionError::InsufficientPower {
                required,
                available,
            });
        }
        if card.suit != slot.card.suit && !card.is_joker() {
            return Err(ActionError::SuitMismatch {
                required: slot.card.suit,
            });
        }
    }

    Ok(())
}

// ============================================================================
// 單元測試
// ============================================================================
