//! 卡牌定義

use serde::{Deserialize, Serialize};

use super::constants::{JOKER_VALUE, RANK_COUNT, SUIT_COUNT};

/// 花色
///
/// 鬼牌自成一個「花色」：它不屬於四種一般花色，在花色槽判定時
/// 享有豁免（可代替任何花色）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
    Joker,
}

impl Suit {
    /// 四種一般花色（用於建構牌組）
    pub fn all_standard() -> &'static [Suit] {
        &[Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
    }

    /// 花色符號（用於呈現層訊息）
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Joker => "★",
        }
    }
}

/// 一張卡牌
///
/// 卡牌本身是值語意：身份只由 (suit, rank) 決定，兩張實體牌只有
/// 鬼牌可能同身份。`doubled` 是持有容器所擁有的可變註記
/// （黑桃 K 道具效果），不是卡牌身份的一部分。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8, // 1..=13 (Ace = 1)；鬼牌固定為 10
    /// 數值已被加倍（黑桃 K 能力，一次性）
    #[serde(default)]
    pub doubled: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            doubled: false,
        }
    }

    pub fn joker() -> Self {
        Self::new(Suit::Joker, JOKER_VALUE)
    }

    /// 是否為鬼牌
    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }

    /// 是否為人頭牌 (J, Q, K)
    pub fn is_face(&self) -> bool {
        !self.is_joker() && self.rank >= 11
    }

    /// 基礎數值（A=1、J=11、Q=12、K=13、鬼牌=10）
    pub fn value(&self) -> u8 {
        if self.is_joker() {
            JOKER_VALUE
        } else {
            self.rank
        }
    }

    /// 攻擊計算用的有效數值（套用加倍註記）
    pub fn power(&self) -> u8 {
        if self.doubled {
            self.value() * 2
        } else {
            self.value()
        }
    }

    /// 牌面文字（A、2..10、J、Q、K、JOKER）
    pub fn label(&self) -> String {
        if self.is_joker() {
            return "JOKER".to_string();
        }
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

/// 建構完整牌組：52 張一般牌 + 2 張鬼牌
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(SUIT_COUNT * RANK_COUNT as usize + 2);
    for &suit in Suit::all_standard() {
        for rank in 1..=RANK_COUNT {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.push(Card::joker());
    deck.push(Card::joker());
    deck
}

// ============================================================================
// 單元測試
// ============================================================================
