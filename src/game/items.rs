//! 道具系統
//!
//! 進階模式中被擊敗的 K 收入道具欄，每張提供一個依花色決定的
//! 一次性能力。

use serde::{Deserialize, Serialize};

use super::cards::{Card, Suit};

/// 道具欄中的一張 K
///
/// `used` 註記由道具欄持有，不屬於卡牌身份；同一張牌在清除堆中的
/// 複本不受影響。
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ItemCard {
    pub card: Card,
    pub used: bool,
}

impl ItemCard {
    pub fn new(card: Card) -> Self {
        Self { card, used: false }
    }
}

/// K 的一次性能力（依花色）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KingAbility {
    /// 紅心：將一張手牌放到能量牌庫底部
    Hearts,
    /// 方塊：查看能量牌庫底牌，可選擇移到頂部
    Diamonds,
    /// 黑桃：將一張手牌的數值加倍
    Spades,
    /// 梅花：立即額外抽一張牌
    Clubs,
}

impl KingAbility {
    /// 由 K 的花色取得能力（鬼牌花色沒有對應能力）
    pub fn from_suit(suit: Suit) -> Option<KingAbility> {
        match suit {
            Suit::Hearts => Some(KingAbility::Hearts),
            Suit::Diamonds => Some(KingAbility::Diamonds),
            Suit::Spades => Some(KingAbility::Spades),
            Suit::Clubs => Some(KingAbility::Clubs),
            Suit::Joker => None,
        }
    }

    /// 能力說明（用於呈現層）
    pub fn description(&self) -> &'static str {
        match self {
            KingAbility::Hearts => "Place a hand card at the bottom of the power deck",
            KingAbility::Diamonds => "Look at the bottom card of the power deck",
            KingAbility::Spades => "Double a hand card's power value",
            KingAbility::Clubs => "Draw an extra card",
        }
    }

    /// 是否需要選擇一張手牌作為目標
    pub fn needs_hand_target(&self) -> bool {
        matches!(self, KingAbility::Hearts | KingAbility::Spades)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
