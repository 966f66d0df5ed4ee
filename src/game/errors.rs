//! 規則違反錯誤
//!
//! 所有錯誤都是可恢復的驗證失敗：操作失敗時引擎狀態完全不變，
//! 呼叫端可以直接把錯誤渲染成訊息再接受下一個意圖。

use serde::Serialize;

use super::cards::Suit;

/// 玩家意圖被拒絕的原因
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ActionError {
    /// 攻擊槽已有牌。
    #[error("attack slot {slot} is already filled")]
    SlotOccupied { slot: usize },

    /// 攻擊槽必須依序填入。
    #[error("attack slots must be filled in order (next open slot is {next})")]
    OutOfOrder { slot: usize, next: usize },

    /// 花色槽之前必須先填滿兩個能量槽。
    #[error("both power slots must be filled before the suit slot")]
    IncompletePower,

    /// 能量槽總和不足以擊敗怪物。
    #[error("not enough power: need at least {required}, have {available}")]
    InsufficientPower { required: u8, available: u8 },

    /// 花色槽的牌必須與怪物同花色（鬼牌豁免）。
    #[error("the suit slot card must match the monster's suit ({})", .required.symbol())]
    SuitMismatch { required: Suit },

    /// 道具已經用過。
    #[error("this item has already been used")]
    AlreadyUsed,

    /// 手牌是空的。
    #[error("the hand is empty")]
    EmptyHand,

    /// 能量牌庫是空的。
    #[error("the power deck is empty")]
    EmptyDeck,

    /// 指定的手牌不存在。
    #[error("no such card to select")]
    NoCardSelected,

    /// 手牌還沒用完或棄掉，不能再抽。
    #[error("the hand must be emptied before drawing again")]
    HandNotEmpty,

    /// 儲備牌不可用（模式／配置不允許，或傷害堆是空的）。
    #[error("the reserve card is not available")]
    ReserveUnavailable,

    /// 目標位置沒有可攻擊的怪物。
    #[error("no attackable monster at that position")]
    TargetNotFound,

    /// 道具欄中沒有這個道具。
    #[error("no such item in the inventory")]
    ItemNotFound,

    /// 方塊 K 的底牌選擇尚未解決。
    #[error("the bottom-card choice must be resolved first")]
    AwaitingBottomCard,

    /// 沒有待解決的底牌選擇。
    #[error("no bottom-card choice is pending")]
    NoBottomCardPending,

    /// 遊戲已經結束。
    #[error("the game is over")]
    GameOver,
}
