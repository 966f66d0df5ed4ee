//! 遊戲模式與牌組系統
//!
//! 定義兩種遊戲模式的規則參數，以及完整牌組到怪物牌庫／能量牌庫
//! 的分割。
//!
//! # 架構
//!
//! 使用聲明式 `MODE_DEFS` 表定義模式的元數據。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::cards::{full_deck, Card};
use super::constants::{ADVANCED_DAMAGE_LIMIT, CLASSIC_DAMAGE_LIMIT};

// ============================================================================
// 模式定義系統
// ============================================================================

/// 模式定義結構
#[derive(Clone, Copy)]
pub struct ModeDef {
    pub name: &'static str,
    /// 傷害堆達到此張數即落敗
    pub damage_limit: usize,
    /// 鬼牌是否加入怪物牌庫（否則留在能量牌庫）
    pub jokers_in_monster_deck: bool,
    /// 擊敗的 K 是否收入道具欄
    pub collects_kings: bool,
    /// 是否允許儲備牌規則（傷害堆頂牌可當手牌使用）
    pub reserve_rule_available: bool,
    /// 獲勝時是否回報分數（剩餘能量牌庫張數）
    pub reports_score: bool,
}

/// 模式定義表（順序與 GameMode 枚舉一致）
pub static MODE_DEFS: [ModeDef; 2] = [
    // 0: Classic - 4 直欄疊放布局
    ModeDef {
        name: "Classic",
        damage_limit: CLASSIC_DAMAGE_LIMIT,
        jokers_in_monster_deck: false,
        collects_kings: false,
        reserve_rule_available: true,
        reports_score: true,
    },
    // 1: Advanced - 菱形依賴布局
    ModeDef {
        name: "Advanced",
        damage_limit: ADVANCED_DAMAGE_LIMIT,
        jokers_in_monster_deck: true,
        collects_kings: true,
        reserve_rule_available: false,
        reports_score: false,
    },
];

/// 遊戲模式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// 經典模式：4 直欄、每欄 3 隻怪物、傷害上限 7
    Classic,

    /// 進階模式：菱形布局、鬼牌入地城、K 為道具、傷害上限 5
    Advanced,
}

impl GameMode {
    /// 所有模式
    pub fn all() -> &'static [GameMode] {
        &[GameMode::Classic, GameMode::Advanced]
    }

    pub fn to_index(&self) -> usize {
        match self {
            GameMode::Classic => 0,
            GameMode::Advanced => 1,
        }
    }

    /// 模式名稱
    pub fn name(&self) -> &'static str {
        MODE_DEFS[self.to_index()].name
    }

    /// 傷害上限
    pub fn damage_limit(&self) -> usize {
        MODE_DEFS[self.to_index()].damage_limit
    }

    /// 鬼牌是否屬於怪物牌庫
    pub fn jokers_in_monster_deck(&self) -> bool {
        MODE_DEFS[self.to_index()].jokers_in_monster_deck
    }

    /// 擊敗的 K 是否收入道具欄
    pub fn collects_kings(&self) -> bool {
        MODE_DEFS[self.to_index()].collects_kings
    }

    /// 儲備牌規則是否可用
    pub fn reserve_rule_available(&self) -> bool {
        MODE_DEFS[self.to_index()].reserve_rule_available
    }

    /// 獲勝時是否回報分數
    pub fn reports_score(&self) -> bool {
        MODE_DEFS[self.to_index()].reports_score
    }

    /// 某張牌是否屬於此模式的怪物牌庫
    pub fn is_monster_card(&self, card: &Card) -> bool {
        card.is_face() || (self.jokers_in_monster_deck() && card.is_joker())
    }
}

/// 遊戲配置（開局時套用）
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    /// 經典模式可選規則：傷害堆頂牌可當手牌使用
    pub use_reserve_card: bool,
}

impl GameConfig {
    pub fn from_mode(mode: GameMode) -> Self {
        Self {
            mode,
            use_reserve_card: mode.reserve_rule_available(),
        }
    }

    /// 儲備牌規則實際是否生效（模式允許且配置開啟）
    pub fn reserve_active(&self) -> bool {
        self.mode.reserve_rule_available() && self.use_reserve_card
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_mode(GameMode::Classic)
    }
}

// ============================================================================
// 牌組分割與洗牌
// ============================================================================

/// 將完整牌組分割為（怪物牌庫, 能量牌庫），兩者皆已洗勻
///
/// 經典模式：12 張人頭牌入怪物牌庫，其餘 42 張（含鬼牌）入能量牌庫。
/// 進階模式：12 張人頭牌 + 2 張鬼牌入怪物牌庫，其餘 40 張入能量牌庫。
pub fn build_decks(mode: GameMode, rng: &mut StdRng) -> (Vec<Card>, Vec<Card>) {
    let mut monster_deck = Vec::new();
    let mut power_deck = Vec::new();

    for card in full_deck() {
        if mode.is_monster_card(&card) {
            monster_deck.push(card);
        } else {
            power_deck.push(card);
        }
    }

    monster_deck.shuffle(rng);
    power_deck.shuffle(rng);
    (monster_deck, power_deck)
}

// ============================================================================
// 單元測試
// ============================================================================
