//! 翻牌解析器
//!
//! 每當一個怪物槽位被移除（擊敗或鬼牌自動清除）後呼叫，決定哪些
//! 原本蓋著的怪物變為可攻擊。
//!
//! 經典模式翻開同一欄的下一張；進階模式對菱形做定點掃描：所有遮擋
//! 槽位皆已移除的蓋牌一次全部翻開，翻出的鬼牌立即移入手牌，其移除
//! 可能再觸發後續翻牌，迴圈直到沒有變化為止。

use tracing::debug;

use super::cards::Card;
use super::layout::{blocker_columns, DungeonLayout, MonsterSlot, SlotPos};

/// 一次翻牌解析的結果
#[derive(Clone, Debug, Default)]
pub struct RevealReport {
    /// 本次翻開的槽位（含隨後被自動清除的鬼牌槽位）
    pub revealed: Vec<SlotPos>,
    /// 自動移入手牌的鬼牌
    pub jokers_collected: Vec<Card>,
}

impl RevealReport {
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.jokers_collected.is_empty()
    }
}

/// 槽位移除後的翻牌解析
///
/// `pos` 是剛被移除的槽位；鬼牌直接進入 `hand`。
pub fn resolve_removal(
    layout: &mut DungeonLayout,
    pos: SlotPos,
    hand: &mut Vec<Card>,
) -> RevealReport {
    match layout {
        DungeonLayout::Stacked { columns } => reveal_next_in_column(columns, pos.group),
        DungeonLayout::Diamond { rows } => diamond_fixed_point(rows, hand),
    }
}

/// 進階模式開局掃描
///
/// 發牌時入口列可能直接出現鬼牌；依「翻開的鬼牌永不可被攻擊」規則
/// 立即移入手牌，並對其移除做完整的級聯解析。未發出鬼牌時不做事
/// （開局沒有任何移除，不觸發解析器）。
pub fn sweep_initial_jokers(layout: &mut DungeonLayout, hand: &mut Vec<Card>) -> RevealReport {
    let DungeonLayout::Diamond { rows } = layout else {
        return RevealReport::default();
    };
    let has_revealed_joker = rows
        .iter()
        .flatten()
        .flatten()
        .any(|s| s.revealed && s.card.is_joker());
    if !has_revealed_joker {
        return RevealReport::default();
    }
    diamond_fixed_point(rows, hand)
}

/// 經典模式：翻開指定欄中第一個尚未翻開的槽位
fn reveal_next_in_column(
    columns: &mut [Vec<Option<MonsterSlot>>],
    column: usize,
) -> RevealReport {
    let mut report = RevealReport::default();
    if let Some(col) = columns.get_mut(column) {
        for (index, slot) in col.iter_mut().enumerate() {
            if let Some(slot) = slot {
                if !slot.revealed {
                    slot.reveal();
                    let pos = SlotPos::new(column, index);
                    debug!(column, index, "monster revealed");
                    report.revealed.push(pos);
                    break;
                }
            }
        }
    }
    report
}

/// 進階模式：定點迴圈
///
/// 每一輪先清除所有已翻開的鬼牌（移入手牌、墓碑化），再翻開所有
/// 遮擋者已全數移除的蓋牌；任一步驟有變化就再跑一輪。
fn diamond_fixed_point(
    rows: &mut [Vec<Option<MonsterSlot>>],
    hand: &mut Vec<Card>,
) -> RevealReport {
    let widths: Vec<usize> = rows.iter().map(|r| r.len()).collect();
    let mut report = RevealReport::default();

    loop {
        let mut changed = false;

        // 已翻開的鬼牌：強制移入手牌
        for row in rows.iter_mut() {
            for slot_entry in row.iter_mut() {
                let is_exposed_joker =
                    matches!(slot_entry, Some(s) if s.revealed && s.card.is_joker());
                if is_exposed_joker {
                    let slot = slot_entry.take().unwrap();
                    debug!("joker auto-cleared into hand");
                    hand.push(slot.card);
                    report.jokers_collected.push(slot.card);
                    changed = true;
                }
            }
        }

        // 遮擋者已全數移除的蓋牌：翻開
        let mut to_reveal = Vec::new();
        for (row_index, row) in rows.iter().enumerate() {
            for (col, slot_entry) in row.iter().enumerate() {
                let hidden = matches!(slot_entry, Some(s) if !s.revealed);
                if !hidden {
                    continue;
                }
                let unblocked = if row_index == 0 {
                    // 頂列沒有遮擋者
                    true
                } else {
                    blocker_columns(widths[row_index - 1], widths[row_index], col)
                        .iter()
                        .all(|&b| rows[row_index - 1][b].is_none())
                };
                if unblocked {
                    to_reveal.push(SlotPos::new(row_index, col));
                }
            }
        }
        for pos in to_reveal {
            if let Some(slot) = rows[pos.group][pos.index].as_mut() {
                slot.reveal();
                debug!(row = pos.group, col = pos.index, "monster revealed");
                report.revealed.push(pos);
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    report
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{Card, Suit};
    use crate::game::constants::DIAMOND_PATTERN;
    use crate::game::layout::MonsterSlot;

    /// 以指定卡牌建構菱形布局（只有入口列翻開）
    fn diamond_with(cards: &[Card]) -> DungeonLayout {
        assert_eq!(cards.len(), 14);
        let last = DIAMOND_PATTERN.len() - 1;
        let mut iter = cards.iter().copied();
        let rows = DIAMOND_PATTERN
            .iter()
            .enumerate()
            .map(|(row, &width)| {
                (0..width)
                    .map(|_| Some(MonsterSlot::new(iter.next().unwrap(), row == last)))
                    .collect()
            })
            .collect();
        DungeonLayout::Diamond { rows }
    }

    fn face(rank: u8) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn stacked_with(cards: &[Card]) -> DungeonLayout {
        assert_eq!(cards.len(), 12);
        let mut iter = cards.iter().copied();
        let columns = (0..4)
            .map(|_| {
                (0..3)
                    .map(|row| Some(MonsterSlot::new(iter.next().unwrap(), row == 0)))
                    .collect()
            })
            .collect();
        DungeonLayout::Stacked { columns }
    }

    #[test]
    fn test_stacked_reveals_same_column_only() {
        let cards: Vec<Card> = (0..12).map(|i| face(11 + (i % 3) as u8)).collect();
        let mut layout = stacked_with(&cards);
        let mut hand = Vec::new();

        layout.remove(SlotPos::new(1, 0));
        let report = resolve_removal(&mut layout, SlotPos::new(1, 0), &mut hand);

        assert_eq!(report.revealed, vec![SlotPos::new(1, 1)]);
        assert!(hand.is_empty());
        // 其他欄不受影響
        for g in [0usize, 2, 3] {
            assert!(!layout.slot(SlotPos::new(g, 1)).unwrap().revealed);
        }
    }

    #[test]
    fn test_stacked_reveals_at_most_one() {
        let cards: Vec<Card> = (0..12).map(|_| face(11)).collect();
        let mut layout = stacked_with(&cards);
        let mut hand = Vec::new();

        layout.remove(SlotPos::new(0, 0));
        resolve_removal(&mut layout, SlotPos::new(0, 0), &mut hand);
        assert!(layout.slot(SlotPos::new(0, 1)).unwrap().revealed);
        assert!(!layout.slot(SlotPos::new(0, 2)).unwrap().revealed);
    }

    #[test]
    fn test_diamond_first_removal_reveals_top() {
        let cards: Vec<Card> = (0..14).map(|_| face(11)).collect();
        let mut layout = diamond_with(&cards);
        let mut hand = Vec::new();

        // 擊敗入口列中央的怪物
        layout.remove(SlotPos::new(6, 1));
        let report = resolve_removal(&mut layout, SlotPos::new(6, 1), &mut hand);

        // 頂列（無遮擋者）在第一次掃描時翻開；入口列的移除不會
        // 解鎖其他列
        assert_eq!(report.revealed, vec![SlotPos::new(0, 0)]);
    }

    #[test]
    fn test_diamond_clearing_row_reveals_row_below() {
        let cards: Vec<Card> = (0..14).map(|_| face(12)).collect();
        let mut layout = diamond_with(&cards);
        let mut hand = Vec::new();

        // 先讓頂列翻開再移除它
        layout.remove(SlotPos::new(6, 0));
        resolve_removal(&mut layout, SlotPos::new(6, 0), &mut hand);
        layout.remove(SlotPos::new(0, 0));
        let report = resolve_removal(&mut layout, SlotPos::new(0, 0), &mut hand);

        // 單牌橫跨第二列兩欄：兩欄同時翻開
        assert!(report.revealed.contains(&SlotPos::new(1, 0)));
        assert!(report.revealed.contains(&SlotPos::new(1, 1)));
    }

    #[test]
    fn test_diamond_partial_blockers_do_not_reveal() {
        let cards: Vec<Card> = (0..14).map(|_| face(13)).collect();
        let mut layout = diamond_with(&cards);
        let mut hand = Vec::new();

        // 翻開第二列
        layout.remove(SlotPos::new(6, 0));
        resolve_removal(&mut layout, SlotPos::new(6, 0), &mut hand);
        layout.remove(SlotPos::new(0, 0));
        resolve_removal(&mut layout, SlotPos::new(0, 0), &mut hand);

        // 只移除第二列其中一張：第三列中央欄（被兩欄遮擋）不得翻開
        layout.remove(SlotPos::new(1, 0));
        let report = resolve_removal(&mut layout, SlotPos::new(1, 0), &mut hand);
        assert!(report.revealed.contains(&SlotPos::new(2, 0)));
        assert!(!report.revealed.contains(&SlotPos::new(2, 1)));
        assert!(!layout.slot(SlotPos::new(2, 1)).unwrap().revealed);
    }

    #[test]
    fn test_joker_cascade_resolves_to_fixed_point() {
        // 頂列與第二列都放鬼牌：第一次移除後應連鎖清除並翻開第三列
        let mut cards: Vec<Card> = (0..14).map(|_| face(11)).collect();
        cards[0] = Card::joker(); // 列 0
        cards[1] = Card::joker(); // 列 1 欄 0
        let mut layout = diamond_with(&cards);
        let mut hand = Vec::new();

        layout.remove(SlotPos::new(6, 2));
        let report = resolve_removal(&mut layout, SlotPos::new(6, 2), &mut hand);

        // 頂列鬼牌翻開後立即入手，其移除翻開第二列；第二列欄 0 的
        // 鬼牌再入手，翻開第三列的部份欄位
        assert_eq!(report.jokers_collected.len(), 2);
        assert_eq!(hand.len(), 2);
        assert!(layout.slot(SlotPos::new(1, 1)).unwrap().revealed);
        // 列 1 欄 0 已墓碑化，列 2 欄 0 因此解鎖
        assert!(layout.slot(SlotPos::new(2, 0)).unwrap().revealed);
    }

    #[test]
    fn test_initial_joker_sweep() {
        let mut cards: Vec<Card> = (0..14).map(|_| face(12)).collect();
        cards[11] = Card::joker(); // 入口列欄 0
        let mut layout = diamond_with(&cards);
        let mut hand = Vec::new();

        let report = sweep_initial_jokers(&mut layout, &mut hand);
        assert_eq!(report.jokers_collected.len(), 1);
        assert_eq!(hand.len(), 1);
        assert!(layout.slot(SlotPos::new(6, 0)).is_none());
        // 開局移除觸發掃描：頂列翻開
        assert!(layout.slot(SlotPos::new(0, 0)).unwrap().revealed);
    }

    #[test]
    fn test_initial_sweep_without_jokers_is_noop() {
        let cards: Vec<Card> = (0..14).map(|_| face(12)).collect();
        let mut layout = diamond_with(&cards);
        let mut hand = Vec::new();

        let report = sweep_initial_jokers(&mut layout, &mut hand);
        assert!(report.is_empty());
        // 沒有移除就沒有掃描：頂列維持蓋著
        assert!(!layout.slot(SlotPos::new(0, 0)).unwrap().revealed);
    }
}
