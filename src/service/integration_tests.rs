//! Service-layer integration tests (full-game flows)

#[cfg(test)]
mod tests {
    use crate::game::{ActionError, Card, GameConfig, GameMode, Outcome, SlotPos, Stage, Suit};
    use crate::service::state::{CardSource, GameEvent, GameState};
    use crate::service::{actions_from_state, view_from_state};

    /// Greedy driver: attack whenever any placement is legal, otherwise
    /// discard; draw when the hand is empty. Every loop iteration either
    /// consumes a card or shrinks the power deck, so the game always
    /// terminates.
    fn play_to_completion(state: &mut GameState) {
        for _ in 0..2000 {
            if state.outcome().is_over() {
                return;
            }
            if matches!(state.stage, Stage::BottomCardChoice) {
                state.resolve_bottom_card(false).unwrap();
                continue;
            }
            if state.hand.is_empty() {
                state.draw().unwrap();
                continue;
            }

            let mut placed = false;
            'targets: for pos in state.layout.revealed_positions() {
                let next = state.layout.slot(pos).unwrap().attack_cards.len();
                for i in 0..state.hand.len() {
                    if state.place_card(pos, CardSource::Hand(i), next).is_ok() {
                        placed = true;
                        break 'targets;
                    }
                }
            }
            if !placed {
                state.discard().unwrap();
            }
        }
        panic!("game did not terminate");
    }

    /// Total cards across every container except the inventory (a
    /// collected King is a bookkeeping copy of the clear-pile card).
    fn total_cards(state: &GameState) -> usize {
        let in_layout: usize = state
            .layout
            .groups()
            .iter()
            .flatten()
            .flatten()
            .map(|slot| 1 + slot.attack_cards.len())
            .sum();
        state.power_deck.len()
            + state.hand.len()
            + state.damage_pile.len()
            + state.clear_pile.len()
            + in_layout
    }

    #[test]
    fn test_classic_game_runs_to_completion() {
        for seed in 0..8 {
            let mut state = GameState::new(GameConfig::from_mode(GameMode::Classic), seed);
            assert_eq!(total_cards(&state), 54);
            play_to_completion(&mut state);
            assert!(state.outcome().is_over());
            assert_eq!(total_cards(&state), 54);
        }
    }

    #[test]
    fn test_advanced_game_runs_to_completion() {
        for seed in 0..8 {
            let mut state = GameState::new(GameConfig::from_mode(GameMode::Advanced), seed);
            assert_eq!(total_cards(&state), 54);
            play_to_completion(&mut state);
            assert!(state.outcome().is_over());
            assert_eq!(total_cards(&state), 54);
        }
    }

    #[test]
    fn test_classic_win_reports_remaining_deck_as_score() {
        let mut state = GameState::new(GameConfig::from_mode(GameMode::Classic), 4);

        // Clear everything but one revealed monster by hand.
        for pos in state.layout.live_positions() {
            if pos != SlotPos::new(0, 0) {
                state.layout.remove(pos);
            }
        }
        let monster = state.layout.slot(SlotPos::new(0, 0)).unwrap().card;
        state.hand = vec![
            Card::new(Suit::Hearts, 10),
            Card::new(Suit::Diamonds, 10),
            Card::new(monster.suit, 3),
        ];
        let deck_remaining = state.power_deck.len();

        let target = SlotPos::new(0, 0);
        state.place_card(target, CardSource::Hand(0), 0).unwrap();
        state.place_card(target, CardSource::Hand(0), 1).unwrap();
        let events = state.place_card(target, CardSource::Hand(0), 2).unwrap();

        // Win is evaluated in the same call that removed the last slot.
        assert!(events.contains(&GameEvent::GameEnded {
            outcome: Outcome::Won {
                score: Some(deck_remaining)
            }
        }));
        assert_eq!(
            state.outcome(),
            Outcome::Won {
                score: Some(deck_remaining)
            }
        );
        // Further intents are rejected after the end.
        assert_eq!(state.draw(), Err(ActionError::GameOver));
    }

    #[test]
    fn test_advanced_win_carries_no_score() {
        let mut state = GameState::new(GameConfig::from_mode(GameMode::Advanced), 4);
        for pos in state.layout.live_positions() {
            state.layout.remove(pos);
        }
        // Force an evaluation through a discard.
        state.hand = vec![Card::new(Suit::Hearts, 2)];
        let events = state.discard().unwrap();
        assert!(events.contains(&GameEvent::GameEnded {
            outcome: Outcome::Won { score: None }
        }));
    }

    #[test]
    fn test_joker_cascade_happens_within_one_call() {
        let mut state = GameState::new(GameConfig::from_mode(GameMode::Advanced), 6);

        // Rebuild the diamond with known cards: a joker on top, queens
        // everywhere else. Defeating one entry monster must reveal the
        // top, collect the joker, and reveal the second row, all in a
        // single call.
        let last = crate::game::DIAMOND_PATTERN.len() - 1;
        let rows = crate::game::DIAMOND_PATTERN
            .iter()
            .enumerate()
            .map(|(row, &width)| {
                (0..width)
                    .map(|_| {
                        let card = if row == 0 {
                            Card::joker()
                        } else {
                            Card::new(Suit::Spades, 12)
                        };
                        Some(crate::game::MonsterSlot::new(card, row == last))
                    })
                    .collect()
            })
            .collect();
        state.layout = crate::game::DungeonLayout::Diamond { rows };
        let target = SlotPos::new(6, 1);
        let monster = state.layout.slot(target).unwrap().card;

        state.hand = vec![
            Card::new(Suit::Hearts, 10),
            Card::new(Suit::Diamonds, 10),
            Card::joker(),
        ];
        let hand_before = state.hand.len();
        state.place_card(target, CardSource::Hand(0), 0).unwrap();
        state.place_card(target, CardSource::Hand(0), 1).unwrap();
        let events = state.place_card(target, CardSource::Hand(0), 2).unwrap();

        assert!(events.contains(&GameEvent::MonsterDefeated {
            pos: target,
            monster
        }));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::JokerCollected { .. })));
        // The collected joker landed in the hand during the same call.
        assert_eq!(state.hand.len(), hand_before - 3 + 1);
        // The row under the cleared top card is now attackable.
        assert!(state.layout.slot(SlotPos::new(1, 0)).unwrap().revealed);
        assert!(state.layout.slot(SlotPos::new(1, 1)).unwrap().revealed);
    }

    #[test]
    fn test_full_turn_cycle_with_view_and_actions() {
        let mut state = GameState::new(GameConfig::from_mode(GameMode::Classic), 9);

        let view = view_from_state(&state);
        assert_eq!(view.deck_remaining, 42);
        assert_eq!(view.attackable.len(), 4);
        assert!(actions_from_state(&state).can_draw);

        state.draw().unwrap();
        let view = view_from_state(&state);
        assert_eq!(view.hand.len(), 3);
        assert_eq!(view.deck_remaining, 39);
        assert!(!actions_from_state(&state).can_draw);

        state.discard().unwrap();
        let view = view_from_state(&state);
        assert!(view.hand.is_empty());
        assert_eq!(view.damage_count, 3);
        // Reserve rule makes the damage-pile top visible again.
        assert!(view.reserve.is_some());
        assert!(actions_from_state(&state).can_use_reserve);
    }

    #[test]
    fn test_sequential_fill_enforced_through_engine() {
        let mut state = GameState::new(GameConfig::from_mode(GameMode::Classic), 12);
        let target = state.layout.revealed_positions()[0];
        state.hand = vec![Card::new(Suit::Hearts, 8), Card::new(Suit::Clubs, 8)];

        assert_eq!(
            state.place_card(target, CardSource::Hand(0), 1),
            Err(ActionError::OutOfOrder { slot: 1, next: 0 })
        );
        assert_eq!(
            state.place_card(target, CardSource::Hand(0), 2),
            Err(ActionError::IncompletePower)
        );

        state.place_card(target, CardSource::Hand(0), 0).unwrap();
        assert_eq!(
            state.place_card(target, CardSource::Hand(0), 0),
            Err(ActionError::SlotOccupied { slot: 0 })
        );
    }
}
