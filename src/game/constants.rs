//! 遊戲常量定義

// ============================================================================
// 牌組常量
// ============================================================================

pub const SUIT_COUNT: usize = 4;         // 一般花色數
pub const RANK_COUNT: u8 = 13;           // A..K
pub const JOKER_COUNT: usize = 2;        // 鬼牌數量
pub const JOKER_VALUE: u8 = 10;          // 鬼牌的數值
pub const FULL_DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT as usize + JOKER_COUNT; // 54

// ============================================================================
// 回合規則常量
// ============================================================================

pub const DRAW_SIZE: usize = 3;          // 每次抽牌張數
pub const ATTACK_SLOT_COUNT: usize = 3;  // 每隻怪物的攻擊槽數
pub const SUIT_SLOT: usize = 2;          // 花色槽（第三槽）索引

// ============================================================================
// 地城布局常量
// ============================================================================

pub const STACKED_COLUMNS: usize = 4;        // 經典模式直欄數
pub const STACKED_COLUMN_HEIGHT: usize = 3;  // 每欄怪物數

/// 進階模式菱形布局的每列寬度（由上而下）
///
/// 總和為 14 = 12 張人頭牌 + 2 張鬼牌，恰好用完進階模式的怪物牌庫。
pub const DIAMOND_PATTERN: [usize; 7] = [1, 2, 3, 2, 1, 2, 3];

// ============================================================================
// 勝負常量
// ============================================================================

pub const CLASSIC_DAMAGE_LIMIT: usize = 7;   // 經典模式傷害上限
pub const ADVANCED_DAMAGE_LIMIT: usize = 5;  // 進階模式傷害上限
