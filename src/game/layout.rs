//! 地城布局系統
//!
//! 兩種布局拓撲：
//! - `Stacked`：經典模式，4 條獨立直欄，每欄 3 隻怪物疊放，
//!   只有每欄最上層未移除的怪物是翻開的。
//! - `Diamond`：進階模式，7 列寬度 `[1,2,3,2,1,2,3]` 的菱形依賴圖，
//!   一個槽位被其上一列（索引較小的列）的特定槽位遮擋。
//!
//! 遮擋關係以相鄰列寬度對的顯式對照表編碼（見 [`blocker_columns`]），
//! 翻牌解析器只消費這張表，不在判定時重新推導。

use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::constants::{DIAMOND_PATTERN, STACKED_COLUMNS, STACKED_COLUMN_HEIGHT};
use super::decks::GameMode;

// ============================================================================
// 怪物槽位
// ============================================================================

/// 一個怪物槽位
///
/// 每隻進入布局的怪物對應唯一一個槽位；被移除的槽位變為空墓碑
/// （容器中的 `None`），永不重用。
#[derive(Clone, Debug)]
pub struct MonsterSlot {
    pub card: Card,
    pub revealed: bool,
    /// 已放入的攻擊牌，嚴格依序填入，長度 ≤ 3
    pub attack_cards: Vec<Card>,
}

impl MonsterSlot {
    pub fn new(card: Card, revealed: bool) -> Self {
        Self {
            card,
            revealed,
            attack_cards: Vec::new(),
        }
    }

    /// 翻開槽位並清空攻擊進度
    pub fn reveal(&mut self) {
        self.revealed = true;
        self.attack_cards.clear();
    }

    /// 前兩槽的有效攻擊力總和
    pub fn power_total(&self) -> u8 {
        self.attack_cards
            .iter()
            .take(2)
            .map(|c| c.power())
            .sum()
    }
}

/// 槽位座標：`group` 在經典模式是直欄索引、進階模式是列索引，
/// `index` 是組內位置。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotPos {
    pub group: usize,
    pub index: usize,
}

impl SlotPos {
    pub fn new(group: usize, index: usize) -> Self {
        Self { group, index }
    }
}

// ============================================================================
// 布局
// ============================================================================

/// 地城布局（兩種拓撲的帶標籤變體）
#[derive(Clone, Debug)]
pub enum DungeonLayout {
    /// 經典模式：4 直欄 × 3
    Stacked {
        columns: Vec<Vec<Option<MonsterSlot>>>,
    },
    /// 進階模式：菱形 7 列
    Diamond {
        rows: Vec<Vec<Option<MonsterSlot>>>,
    },
}

impl DungeonLayout {
    /// 由已洗勻的怪物牌庫發牌生成布局
    ///
    /// 經典模式彈出 12 張牌排成 4 欄，每欄只有索引 0 翻開。
    /// 進階模式按列寬彈出 14 張牌，只有最後一列（入口列）翻開。
    pub fn generate(mode: GameMode, monster_deck: &mut Vec<Card>) -> Self {
        match mode {
            GameMode::Classic => {
                let mut columns = Vec::with_capacity(STACKED_COLUMNS);
                for _ in 0..STACKED_COLUMNS {
                    let mut column = Vec::with_capacity(STACKED_COLUMN_HEIGHT);
                    for row in 0..STACKED_COLUMN_HEIGHT {
                        let card = monster_deck.pop().expect("monster deck underflow");
                        column.push(Some(MonsterSlot::new(card, row == 0)));
                    }
                    columns.push(column);
                }
                DungeonLayout::Stacked { columns }
            }
            GameMode::Advanced => {
                let last = DIAMOND_PATTERN.len() - 1;
                let mut rows = Vec::with_capacity(DIAMOND_PATTERN.len());
                for (row_index, &width) in DIAMOND_PATTERN.iter().enumerate() {
                    let mut row = Vec::with_capacity(width);
                    for _ in 0..width {
                        let card = monster_deck.pop().expect("monster deck underflow");
                        row.push(Some(MonsterSlot::new(card, row_index == last)));
                    }
                    rows.push(row);
                }
                DungeonLayout::Diamond { rows }
            }
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            DungeonLayout::Stacked { .. } => GameMode::Classic,
            DungeonLayout::Diamond { .. } => GameMode::Advanced,
        }
    }

    /// 底層槽位組（欄或列）
    pub fn groups(&self) -> &[Vec<Option<MonsterSlot>>] {
        match self {
            DungeonLayout::Stacked { columns } => columns,
            DungeonLayout::Diamond { rows } => rows,
        }
    }

    pub fn groups_mut(&mut self) -> &mut Vec<Vec<Option<MonsterSlot>>> {
        match self {
            DungeonLayout::Stacked { columns } => columns,
            DungeonLayout::Diamond { rows } => rows,
        }
    }

    pub fn slot(&self, pos: SlotPos) -> Option<&MonsterSlot> {
        self.groups()
            .get(pos.group)?
            .get(pos.index)?
            .as_ref()
    }

    pub fn slot_mut(&mut self, pos: SlotPos) -> Option<&mut MonsterSlot> {
        self.groups_mut()
            .get_mut(pos.group)?
            .get_mut(pos.index)?
            .as_mut()
    }

    /// 移除（墓碑化）一個槽位，回傳其內容
    pub fn remove(&mut self, pos: SlotPos) -> Option<MonsterSlot> {
        self.groups_mut()
            .get_mut(pos.group)?
            .get_mut(pos.index)?
            .take()
    }

    /// 尚未移除的槽位數量
    pub fn live_count(&self) -> usize {
        self.groups()
            .iter()
            .flatten()
            .filter(|s| s.is_some())
            .count()
    }

    /// 所有仍存在槽位的座標
    pub fn live_positions(&self) -> Vec<SlotPos> {
        let mut out = Vec::new();
        for (g, group) in self.groups().iter().enumerate() {
            for (i, slot) in group.iter().enumerate() {
                if slot.is_some() {
                    out.push(SlotPos::new(g, i));
                }
            }
        }
        out
    }

    /// 所有已翻開槽位的座標（可攻擊目標）
    pub fn revealed_positions(&self) -> Vec<SlotPos> {
        let mut out = Vec::new();
        for (g, group) in self.groups().iter().enumerate() {
            for (i, slot) in group.iter().enumerate() {
                if matches!(slot, Some(s) if s.revealed) {
                    out.push(SlotPos::new(g, i));
                }
            }
        }
        out
    }
}

// ============================================================================
// 菱形遮擋對照表
// ============================================================================

/// 菱形布局中，`(row, col)` 槽位在上一列（`row - 1`）的遮擋欄位
///
/// 對照表按相鄰列寬度對列出，對應菱形視覺上的覆蓋關係：
/// - `(1, 2)`：上方單牌橫跨下方兩欄，兩欄都被它遮擋。
/// - `(2, 3)`：下方欄 `c` 被上方 `{c-1, c}` 中的有效欄遮擋。
/// - `(3, 2)`：下方欄 `c` 被上方 `{c, c+1}` 遮擋。
/// - `(2, 1)`：下方單牌被上方兩欄同時遮擋。
///
/// 列 0 沒有上一列，呼叫端不會對它查表。固定樣式
/// `[1,2,3,2,1,2,3]` 只會出現這四種相鄰寬度對。
pub fn blocker_columns(prev_width: usize, width: usize, col: usize) -> Vec<usize> {
    match (prev_width, width) {
        (1, 2) => vec![0],
        (2, 3) => {
            let mut cols = Vec::with_capacity(2);
            if col > 0 {
                cols.push(col - 1);
            }
            if col < prev_width {
                cols.push(col);
            }
            cols
        }
        (3, 2) => vec![col, col + 1],
        (2, 1) => vec![0, 1],
        _ => Vec::new(),
    }
}

// ============================================================================
// 單元測試
// ============================================================================
