//! 遊戲狀態管理
//!
//! [`GameState`] 擁有一局遊戲的全部狀態，並提供所有變異操作。
//! 每個操作完整執行後才接受下一個意圖（單執行緒、同步、回合制）；
//! 鬼牌級聯在單一呼叫內解析到定點，控制權不會在級聯中途交還。
//!
//! 操作成功時回傳事件列表供呈現層轉成訊息；失敗時回傳型別化的
//! [`ActionError`]，且狀態保證完全不變。

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::game::attack::validate_placement;
use crate::game::constants::{ATTACK_SLOT_COUNT, DRAW_SIZE};
use crate::game::reveal::{resolve_removal, sweep_initial_jokers};
use crate::game::{
    build_decks, ActionError, Card, DungeonLayout, GameConfig, GameEnd, ItemCard, KingAbility,
    Outcome, SlotPos, Stage, Suit,
};

// ============================================================================
// 意圖與事件
// ============================================================================

/// 出牌來源：手牌中的一張，或傷害堆頂的儲備牌（經典模式可選規則）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSource {
    Hand(usize),
    Reserve,
}

/// 操作成功後回報給呈現層的事件
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GameEvent {
    CardsDrawn { count: usize },
    HandDiscarded { count: usize },
    CardPlaced { pos: SlotPos, slot: usize },
    MonsterDefeated { pos: SlotPos, monster: Card },
    MonsterRevealed { pos: SlotPos },
    JokerCollected { card: Card },
    KingCollected { suit: Suit },
    CardBuried { card: Card },
    BottomCardRevealed { card: Card },
    BottomCardResolved { moved_to_top: bool },
    CardDoubled { hand_index: usize },
    ExtraCardDrawn { card: Card },
    GameEnded { outcome: Outcome },
}

// ============================================================================
// 遊戲狀態
// ============================================================================

/// 一局遊戲的完整狀態
pub struct GameState {
    pub config: GameConfig,
    pub rng: StdRng,

    // 牌庫與手牌
    pub power_deck: Vec<Card>,
    pub hand: Vec<Card>,

    // 地城
    pub layout: DungeonLayout,

    // 牌堆
    pub clear_pile: Vec<Card>,
    pub damage_pile: Vec<Card>,

    // 道具欄（進階模式）
    pub inventory: Vec<ItemCard>,

    // 遊戲階段
    pub stage: Stage,
}

impl GameState {
    /// 開始新遊戲：分割並洗勻兩個牌庫、生成布局，並處理開局
    /// 發到入口列的鬼牌
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (layout, power_deck, hand) = Self::deal(config, &mut rng);

        Self {
            config,
            rng,
            power_deck,
            hand,
            layout,
            clear_pile: Vec::new(),
            damage_pile: Vec::new(),
            inventory: Vec::new(),
            stage: Stage::InProgress,
        }
    }

    /// 以目前的模式與配置重新開局（沿用內部亂數流）
    pub fn reset(&mut self) {
        let (layout, power_deck, hand) = Self::deal(self.config, &mut self.rng);
        self.layout = layout;
        self.power_deck = power_deck;
        self.hand = hand;
        self.clear_pile.clear();
        self.damage_pile.clear();
        self.inventory.clear();
        self.stage = Stage::InProgress;
    }

    fn deal(config: GameConfig, rng: &mut StdRng) -> (DungeonLayout, Vec<Card>, Vec<Card>) {
        let (mut monster_deck, power_deck) = build_decks(config.mode, rng);
        let mut layout = DungeonLayout::generate(config.mode, &mut monster_deck);

        // 入口列發出的鬼牌立即移入手牌，其移除觸發完整級聯
        let mut hand = Vec::new();
        let report = sweep_initial_jokers(&mut layout, &mut hand);
        if !report.is_empty() {
            debug!(
                jokers = report.jokers_collected.len(),
                revealed = report.revealed.len(),
                "initial joker sweep"
            );
        }

        (layout, power_deck, hand)
    }

    // ========================================================================
    // 查詢
    // ========================================================================

    /// 對外回報的勝負狀態
    pub fn outcome(&self) -> Outcome {
        match self.stage {
            Stage::End(GameEnd::Win) => Outcome::Won {
                score: self
                    .config
                    .mode
                    .reports_score()
                    .then(|| self.power_deck.len()),
            },
            Stage::End(GameEnd::Lose) => Outcome::Lost,
            _ => Outcome::InProgress,
        }
    }

    /// 傷害上限（7 經典 / 5 進階）
    pub fn damage_limit(&self) -> usize {
        self.config.mode.damage_limit()
    }

    /// 儲備牌：傷害堆頂（規則生效且傷害堆非空時）
    pub fn reserve_card(&self) -> Option<&Card> {
        if self.config.reserve_active() {
            self.damage_pile.last()
        } else {
            None
        }
    }

    // ========================================================================
    // 操作
    // ========================================================================

    /// 抽牌：從能量牌庫抽至多 3 張入手
    ///
    /// 手牌必須先用完或棄掉。牌庫見底時抽牌是規則定義的落敗轉移，
    /// 不是錯誤。
    pub fn draw(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_in_progress()?;
        if !self.hand.is_empty() {
            return Err(ActionError::HandNotEmpty);
        }
        if self.power_deck.is_empty() {
            return Ok(self.finish(GameEnd::Lose));
        }

        let count = DRAW_SIZE.min(self.power_deck.len());
        for _ in 0..count {
            let card = self.power_deck.pop().expect("deck checked non-empty");
            self.hand.push(card);
        }
        debug!(count, remaining = self.power_deck.len(), "cards drawn");
        Ok(vec![GameEvent::CardsDrawn { count }])
    }

    /// 棄牌：將剩餘手牌全部移入傷害堆，並立即檢查落敗門檻
    pub fn discard(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_in_progress()?;
        if self.hand.is_empty() {
            return Err(ActionError::EmptyHand);
        }

        let count = self.hand.len();
        self.damage_pile.append(&mut self.hand);
        debug!(count, damage = self.damage_pile.len(), "hand discarded");

        let mut events = vec![GameEvent::HandDiscarded { count }];
        self.evaluate_end(&mut events);
        Ok(events)
    }

    /// 出牌攻擊：把一張牌放入目標怪物的指定攻擊槽
    ///
    /// 驗證全部通過後才消耗來源卡牌；填滿第三槽即擊敗怪物，
    /// 連帶處理清除堆、K 收集、翻牌解析與勝負判定。
    pub fn place_card(
        &mut self,
        target: SlotPos,
        source: CardSource,
        slot_index: usize,
    ) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_in_progress()?;

        let slot = self
            .layout
            .slot(target)
            .filter(|s| s.revealed)
            .ok_or(ActionError::TargetNotFound)?;

        // 先窺視來源卡牌，驗證通過後才消耗
        let card = match source {
            CardSource::Hand(index) => *self
                .hand
                .get(index)
                .ok_or(ActionError::NoCardSelected)?,
            CardSource::Reserve => {
                if !self.config.reserve_active() {
                    return Err(ActionError::ReserveUnavailable);
                }
                *self
                    .damage_pile
                    .last()
                    .ok_or(ActionError::ReserveUnavailable)?
            }
        };

        validate_placement(slot, &card, slot_index)?;

        let card = match source {
            CardSource::Hand(index) => self.hand.remove(index),
            CardSource::Reserve => self
                .damage_pile
                .pop()
                .expect("reserve checked non-empty"),
        };

        let mut events = vec![GameEvent::CardPlaced {
            pos: target,
            slot: slot_index,
        }];

        let slot = self
            .layout
            .slot_mut(target)
            .expect("target checked above");
        slot.attack_cards.push(card);

        if slot.attack_cards.len() == ATTACK_SLOT_COUNT {
            self.defeat(target, &mut events);
        }
        Ok(events)
    }

    /// 使用 K 道具能力（進階模式）
    ///
    /// `hand_index` 只有紅心／黑桃需要。前置條件失敗時 K 保持未使用。
    pub fn use_king_ability(
        &mut self,
        suit: Suit,
        hand_index: Option<usize>,
    ) -> Result<Vec<GameEvent>, ActionError> {
        self.ensure_in_progress()?;

        let item_index = self
            .inventory
            .iter()
            .position(|item| item.card.suit == suit)
            .ok_or(ActionError::ItemNotFound)?;
        if self.inventory[item_index].used {
            return Err(ActionError::AlreadyUsed);
        }
        let ability = KingAbility::from_suit(suit).ok_or(ActionError::ItemNotFound)?;

        let mut events = Vec::new();
        match ability {
            KingAbility::Hearts => {
                if self.hand.is_empty() {
                    return Err(ActionError::EmptyHand);
                }
                let index = hand_index.ok_or(ActionError::NoCardSelected)?;
                if index >= self.hand.len() {
                    return Err(ActionError::NoCardSelected);
                }
                let card = self.hand.remove(index);
                self.power_deck.insert(0, card);
                events.push(GameEvent::CardBuried { card });
            }
            KingAbility::Diamonds => {
                let card = *self.power_deck.first().ok_or(ActionError::EmptyDeck)?;
                self.stage = Stage::BottomCardChoice;
                events.push(GameEvent::BottomCardRevealed { card });
            }
            KingAbility::Spades => {
                if self.hand.is_empty() {
                    return Err(ActionError::EmptyHand);
                }
                let index = hand_index.ok_or(ActionError::NoCardSelected)?;
                let card = self
                    .hand
                    .get_mut(index)
                    .ok_or(ActionError::NoCardSelected)?;
                card.doubled = true;
                events.push(GameEvent::CardDoubled { hand_index: index });
            }
            KingAbility::Clubs => {
                // 額外抽一張，不受抽牌上限與空手限制
                let card = self.power_deck.pop().ok_or(ActionError::EmptyDeck)?;
                self.hand.push(card);
                events.push(GameEvent::ExtraCardDrawn { card });
            }
        }

        self.inventory[item_index].used = true;
        debug!(?suit, "king ability used");
        Ok(events)
    }

    /// 解決方塊 K 的底牌選擇：保留在底部，或移到牌庫頂
    pub fn resolve_bottom_card(
        &mut self,
        move_to_top: bool,
    ) -> Result<Vec<GameEvent>, ActionError> {
        match self.stage {
            Stage::BottomCardChoice => {}
            Stage::End(_) => return Err(ActionError::GameOver),
            Stage::InProgress => return Err(ActionError::NoBottomCardPending),
        }

        if move_to_top {
            let card = self.power_deck.remove(0);
            self.power_deck.push(card);
        }
        self.stage = Stage::InProgress;
        Ok(vec![GameEvent::BottomCardResolved {
            moved_to_top: move_to_top,
        }])
    }

    // ========================================================================
    // 內部流程
    // ========================================================================

    fn ensure_in_progress(&self) -> Result<(), ActionError> {
        match self.stage {
            Stage::InProgress => Ok(()),
            Stage::BottomCardChoice => Err(ActionError::AwaitingBottomCard),
            Stage::End(_) => Err(ActionError::GameOver),
        }
    }

    /// 擊敗怪物：墓碑化槽位、搬入清除堆、K 收集、翻牌解析、勝負判定
    fn defeat(&mut self, pos: SlotPos, events: &mut Vec<GameEvent>) {
        let slot = self.layout.remove(pos).expect("defeated slot exists");
        let monster = slot.card;
        debug!(group = pos.group, index = pos.index, "monster defeated");
        events.push(GameEvent::MonsterDefeated { pos, monster });

        self.clear_pile.push(monster);
        self.clear_pile.extend(slot.attack_cards);

        if self.config.mode.collects_kings() && monster.rank == 13 {
            self.inventory.push(ItemCard::new(monster));
            events.push(GameEvent::KingCollected {
                suit: monster.suit,
            });
        }

        let report = resolve_removal(&mut self.layout, pos, &mut self.hand);
        for revealed in report.revealed {
            events.push(GameEvent::MonsterRevealed { pos: revealed });
        }
        for joker in report.jokers_collected {
            events.push(GameEvent::JokerCollected { card: joker });
        }

        self.evaluate_end(events);
    }

    /// 勝負判定：先檢查清場獲勝，再檢查傷害門檻
    fn evaluate_end(&mut self, events: &mut Vec<GameEvent>) {
        if !matches!(self.stage, Stage::InProgress) {
            return;
        }
        if self.layout.live_count() == 0 {
            events.extend(self.finish(GameEnd::Win));
        } else if self.damage_pile.len() >= self.damage_limit() {
            events.extend(self.finish(GameEnd::Lose));
        }
    }

    fn finish(&mut self, end: GameEnd) -> Vec<GameEvent> {
        self.stage = Stage::End(end);
        let outcome = self.outcome();
        info!(?outcome, "game over");
        vec![GameEvent::GameEnded { outcome }]
    }
}

// ============================================================================
// 單元測試
// ============================================================================
