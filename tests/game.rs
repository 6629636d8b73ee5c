//! Game integration tests.

use holdem_rs::{
    ActionError, ActionKind, ActionOutcome, Card, DECK_SIZE, DealError, Deck, Game, HUMAN_SEAT,
    Legality, Phase, Rank, RoundState, Session, SettleError, Settlement, Suit, TableOptions,
};

fn dealt(options: &TableOptions) -> Session {
    Session::deal_from(options, &[], Deck::standard()).unwrap()
}

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn cards_accounted(session: &Session) -> usize {
    session.deck.len()
        + session
            .players
            .iter()
            .map(|player| player.hand.len())
            .sum::<usize>()
        + session.community_cards.len()
}

fn check_around(game: &mut Game) {
    while game.round_state() == RoundState::Playing {
        game.perform_action(ActionKind::Check, None).unwrap();
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_seats(["Ann", "Ben"])
        .with_starting_chips(300)
        .with_raise_increment(25)
        .with_legality(Legality::Enforced)
        .with_settlement(Settlement::FullRotation);

    assert_eq!(options.seats, vec!["Ann".to_string(), "Ben".to_string()]);
    assert_eq!(options.starting_chips, 300);
    assert_eq!(options.raise_increment, 25);
    assert_eq!(options.legality, Legality::Enforced);
    assert_eq!(options.settlement, Settlement::FullRotation);

    let defaults = TableOptions::default();
    assert_eq!(defaults.seats, vec!["You", "Alice", "Bob", "Charlie"]);
    assert_eq!(defaults.starting_chips, 1000);
    assert_eq!(defaults.raise_increment, 10);
    assert_eq!(defaults.legality, Legality::Advisory);
    assert_eq!(defaults.settlement, Settlement::EveryAction);
}

#[test]
fn new_game_waits_until_dealt() {
    let mut game = Game::new(TableOptions::default(), 1);

    assert_eq!(game.round_state(), RoundState::Waiting);
    assert!(game.players().is_empty());
    assert_eq!(game.current_player(), None);
    assert_eq!(
        game.perform_action(ActionKind::Check, None).unwrap_err(),
        ActionError::HandNotInProgress
    );

    assert!(game.can_check());
    assert!(!game.can_call());
    assert!(!game.can_raise());
    assert_eq!(game.min_raise(), 10);
    assert_eq!(game.max_raise(), 0);
}

#[test]
fn start_new_game_deals_hole_cards() {
    let mut game = Game::new(TableOptions::default(), 42);
    game.start_new_game().unwrap();

    assert_eq!(game.round_state(), RoundState::Playing);
    assert_eq!(game.phase(), Phase::Preflop);
    assert_eq!(game.players().len(), 4);
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.pot(), 0);
    assert!(game.community_cards().is_empty());
    assert_eq!(game.cards_remaining(), DECK_SIZE - 8);
    assert!(game.is_human_turn());

    for (index, player) in game.players().iter().enumerate() {
        assert_eq!(usize::from(player.id), index);
        assert_eq!(player.hand.len(), 2);
        assert_eq!(player.chips, 1000);
        assert_eq!(player.current_bet, 0);
        assert!(!player.has_folded);
        assert!(player.is_active);
    }
    assert_eq!(game.players()[0].name, "You");
    assert!(game.players()[0].is_human());
    assert_eq!(cards_accounted(game.session()), DECK_SIZE);
}

#[test]
fn same_seed_deals_same_hand() {
    let mut first = Game::new(TableOptions::default(), 9);
    let mut second = Game::new(TableOptions::default(), 9);
    first.start_new_game().unwrap();
    second.start_new_game().unwrap();

    assert_eq!(first.session(), second.session());
}

#[test]
fn deal_errors() {
    let mut game = Game::new(TableOptions::default().with_seats(["Solo"]), 1);
    assert_eq!(game.start_new_game().unwrap_err(), DealError::NotEnoughPlayers);

    let crowd: Vec<String> = (0..27).map(|seat| format!("Seat {seat}")).collect();
    let mut game = Game::new(TableOptions::default().with_seats(crowd), 1);
    assert_eq!(
        game.start_new_game().unwrap_err(),
        DealError::DeckExhausted {
            requested: 2,
            remaining: 0,
        }
    );
    assert_eq!(game.round_state(), RoundState::Waiting);
}

#[test]
fn call_without_enough_chips_is_ignored() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    session.current_bet = 10;
    session.players[1].current_bet = 10;
    session.players[0].chips = 5;

    let (next, report) = session.apply(&options, ActionKind::Call, None).unwrap();

    assert_eq!(
        report.outcome,
        ActionOutcome::Ignored(ActionError::InsufficientChips)
    );
    assert!(!report.is_applied());
    assert_eq!(next.players[0].chips, 5);
    assert_eq!(next.players[0].current_bet, 0);
    assert_eq!(next.pot, 0);
    assert_eq!(next.current_player, 1);
    assert_eq!(next.phase, Phase::Preflop);
}

#[test]
fn call_without_enough_chips_is_rejected_when_enforced() {
    let options = TableOptions::default().with_legality(Legality::Enforced);
    let mut session = dealt(&options);
    session.current_bet = 10;
    session.players[1].current_bet = 10;
    session.players[0].chips = 5;

    let mut game = Game::with_session(options, session.clone(), 1);
    assert_eq!(
        game.perform_action(ActionKind::Call, None).unwrap_err(),
        ActionError::InsufficientChips
    );
    assert_eq!(game.session(), &session);
}

#[test]
fn raise_sets_the_table_bet() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    session.current_bet = 20;
    session.pot = 20;
    session.players[1].current_bet = 20;
    session.players[0].chips = 100;

    let (next, report) = session
        .apply(&options, ActionKind::Raise, Some(50))
        .unwrap();

    assert_eq!(report.outcome, ActionOutcome::Applied { chips: 50 });
    assert_eq!(next.players[0].chips, 50);
    assert_eq!(next.players[0].current_bet, 50);
    assert_eq!(next.pot, 70);
    assert_eq!(next.current_bet, 50);
    assert_eq!(next.current_player, 1);
    assert_eq!(report.advanced_to, None);
}

#[test]
fn raise_on_top_of_own_bet_pays_the_difference() {
    let options = TableOptions::default();
    let mut game = Game::with_session(options.clone(), dealt(&options), 1);

    game.perform_action(ActionKind::Raise, Some(20)).unwrap();
    game.perform_action(ActionKind::Raise, Some(60)).unwrap();
    game.perform_action(ActionKind::Call, None).unwrap();
    game.perform_action(ActionKind::Call, None).unwrap();

    // Player 0 owes 40 more on top of the 20 already in.
    let report = game.perform_action(ActionKind::Call, None).unwrap();
    assert_eq!(report.outcome, ActionOutcome::Applied { chips: 40 });
    assert_eq!(report.advanced_to, Some(Phase::Flop));
    assert_eq!(game.pot(), 240);
    assert_eq!(game.players()[0].chips, 940);
}

#[test]
fn raise_below_the_table_bet_is_ignored() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    session.current_bet = 40;
    session.players[1].current_bet = 40;

    let (next, report) = session
        .apply(&options, ActionKind::Raise, Some(30))
        .unwrap();

    assert_eq!(
        report.outcome,
        ActionOutcome::Ignored(ActionError::RaiseTooSmall)
    );
    assert_eq!(next.current_bet, 40);
    assert_eq!(next.players[0].chips, 1000);
}

#[test]
fn raise_without_amount() {
    let options = TableOptions::default();
    let session = dealt(&options);

    let (next, report) = session.apply(&options, ActionKind::Raise, None).unwrap();
    assert_eq!(
        report.outcome,
        ActionOutcome::Ignored(ActionError::MissingRaiseAmount)
    );
    assert_eq!(next.pot, 0);

    let (_, report) = session
        .apply(&options, ActionKind::Raise, Some(0))
        .unwrap();
    assert_eq!(
        report.outcome,
        ActionOutcome::Ignored(ActionError::MissingRaiseAmount)
    );

    let enforced = options.with_legality(Legality::Enforced);
    assert_eq!(
        session
            .apply(&enforced, ActionKind::Raise, None)
            .unwrap_err(),
        ActionError::MissingRaiseAmount
    );
}

#[test]
fn raise_needs_chips_for_the_whole_target() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    session.current_bet = 40;
    session.pot = 80;
    session.players[0].current_bet = 40;
    session.players[0].chips = 50;
    session.players[1].current_bet = 40;

    // Only 20 more would be needed, but the target exceeds the stack.
    let (next, report) = session
        .apply(&options, ActionKind::Raise, Some(60))
        .unwrap();
    assert_eq!(
        report.outcome,
        ActionOutcome::Ignored(ActionError::InsufficientChips)
    );
    assert_eq!(next.players[0].chips, 50);
    assert_eq!(next.pot, 80);
}

#[test]
fn enforced_legality_rejects_unavailable_actions() {
    let options = TableOptions::default().with_legality(Legality::Enforced);
    let mut game = Game::with_session(options.clone(), dealt(&options), 3);

    assert_eq!(
        game.perform_action(ActionKind::Raise, Some(5)).unwrap_err(),
        ActionError::RaiseTooSmall
    );

    game.perform_action(ActionKind::Raise, Some(30)).unwrap();
    let before = game.session().clone();

    assert_eq!(
        game.perform_action(ActionKind::Check, None).unwrap_err(),
        ActionError::CannotCheck
    );
    assert_eq!(
        game.perform_action(ActionKind::Raise, Some(35)).unwrap_err(),
        ActionError::RaiseTooSmall
    );
    assert_eq!(game.session(), &before);
    assert_eq!(game.current_player(), Some(1));

    game.perform_action(ActionKind::Raise, Some(40)).unwrap();
    assert_eq!(game.current_bet(), 40);
}

#[test]
fn advisory_check_facing_a_bet_still_passes_the_turn() {
    let options = TableOptions::default();
    let mut game = Game::with_session(options.clone(), dealt(&options), 3);

    game.perform_action(ActionKind::Raise, Some(30)).unwrap();
    assert!(!game.can_check());

    let report = game.perform_action(ActionKind::Check, None).unwrap();
    assert_eq!(report.outcome, ActionOutcome::Applied { chips: 0 });
    assert_eq!(game.current_player(), Some(2));
    assert_eq!(game.players()[1].current_bet, 0);
}

#[test]
fn settled_preflop_deals_the_flop() {
    let options = TableOptions::default();
    let mut game = Game::with_session(options.clone(), dealt(&options), 5);

    game.perform_action(ActionKind::Raise, Some(20)).unwrap();
    for _ in 0..2 {
        let report = game.perform_action(ActionKind::Call, None).unwrap();
        assert_eq!(report.advanced_to, None);
    }
    assert!(game.community_cards().is_empty());

    let report = game.perform_action(ActionKind::Call, None).unwrap();
    assert_eq!(report.advanced_to, Some(Phase::Flop));
    assert_eq!(game.phase(), Phase::Flop);
    assert_eq!(
        game.community_cards(),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Spades, Rank::Jack),
            card(Suit::Spades, Rank::Queen),
        ]
    );
    assert_eq!(game.pot(), 80);
    assert_eq!(game.current_bet(), 0);
    assert!(game.players().iter().all(|player| player.current_bet == 0));
    assert_eq!(game.current_player(), Some(0));
}

#[test]
fn single_check_settles_an_unbet_street() {
    let options = TableOptions::default();
    let mut game = Game::with_session(options.clone(), dealt(&options), 5);

    let report = game.perform_action(ActionKind::Check, None).unwrap();

    assert_eq!(report.advanced_to, Some(Phase::Flop));
    assert_eq!(game.community_cards().len(), 3);
    assert_eq!(game.current_player(), Some(1));
}

#[test]
fn full_rotation_waits_for_every_player() {
    let options = TableOptions::default().with_settlement(Settlement::FullRotation);
    let mut game = Game::with_session(options.clone(), dealt(&options), 5);

    for _ in 0..3 {
        let report = game.perform_action(ActionKind::Check, None).unwrap();
        assert_eq!(report.advanced_to, None);
    }
    let report = game.perform_action(ActionKind::Check, None).unwrap();
    assert_eq!(report.advanced_to, Some(Phase::Flop));

    // A raise reopens the action for players who already checked.
    game.perform_action(ActionKind::Check, None).unwrap();
    game.perform_action(ActionKind::Raise, Some(20)).unwrap();
    game.perform_action(ActionKind::Call, None).unwrap();
    game.perform_action(ActionKind::Call, None).unwrap();
    assert_eq!(game.phase(), Phase::Flop);

    let report = game.perform_action(ActionKind::Call, None).unwrap();
    assert_eq!(report.advanced_to, Some(Phase::Turn));
    assert_eq!(game.community_cards().len(), 4);
}

#[test]
fn rotation_skips_folded_players() {
    let options = TableOptions::default();
    let actions = [
        (ActionKind::Fold, None),
        (ActionKind::Check, None),
        (ActionKind::Call, None),
        (ActionKind::Raise, Some(50)),
    ];

    for (kind, amount) in actions {
        let mut session = dealt(&options);
        session.players[1].has_folded = true;

        let (next, report) = session.apply(&options, kind, amount).unwrap();
        assert_eq!(next.current_player, 2, "after {kind}");
        assert_eq!(report.next_player, Some(2));
    }
}

#[test]
fn hand_reaches_showdown_and_stops_dealing() {
    let mut game = Game::new(TableOptions::default(), 11);
    game.start_new_game().unwrap();

    check_around(&mut game);

    assert_eq!(game.phase(), Phase::Showdown);
    assert_eq!(game.round_state(), RoundState::Finished);
    assert_eq!(game.community_cards().len(), 5);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 8 - 5);
    assert!(!game.is_human_turn());

    for kind in [ActionKind::Check, ActionKind::Call, ActionKind::Fold] {
        assert_eq!(
            game.perform_action(kind, None).unwrap_err(),
            ActionError::HandFinished
        );
    }
    assert_eq!(game.community_cards().len(), 5);
}

#[test]
fn community_cards_match_each_phase() {
    let mut game = Game::new(TableOptions::default(), 12);
    game.start_new_game().unwrap();

    let mut seen = vec![(game.phase(), game.community_cards().len())];
    while game.round_state() == RoundState::Playing {
        game.perform_action(ActionKind::Check, None).unwrap();
        seen.push((game.phase(), game.community_cards().len()));
    }

    for (phase, count) in &seen {
        assert_eq!(phase.community_cards(), *count);
    }
    assert_eq!(seen.last(), Some(&(Phase::Showdown, 5)));
}

#[test]
fn last_fold_finishes_the_hand() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    for player in &mut session.players[1..] {
        player.has_folded = true;
    }

    let (next, report) = session.apply(&options, ActionKind::Fold, None).unwrap();

    assert_eq!(report.next_player, None);
    assert_eq!(report.advanced_to, None);
    assert_eq!(next.round_state, RoundState::Finished);
    assert_eq!(next.phase, Phase::Preflop);
}

#[test]
fn folded_current_player_cannot_act() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    session.players[0].has_folded = true;

    assert_eq!(
        session
            .apply(&options, ActionKind::Check, None)
            .unwrap_err(),
        ActionError::NoActingPlayer
    );
}

#[test]
fn failed_street_deal_leaves_the_session_untouched() {
    let options = TableOptions::default();
    let mut session = dealt(&options);
    session.deck = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
    ]);

    let mut game = Game::with_session(options, session.clone(), 1);
    assert_eq!(
        game.perform_action(ActionKind::Check, None).unwrap_err(),
        ActionError::Deal(DealError::DeckExhausted {
            requested: 3,
            remaining: 2,
        })
    );
    assert_eq!(game.session(), &session);
}

#[test]
fn chips_and_cards_are_conserved() {
    let mut game = Game::new(TableOptions::default(), 2024);
    game.start_new_game().unwrap();

    let mut step = 0;
    while game.round_state() == RoundState::Playing {
        assert!(step < 200, "hand did not finish");

        let view = game.betting_view();
        let (kind, amount) = if view.can_call {
            (ActionKind::Call, None)
        } else if step % 3 == 0 {
            (ActionKind::Raise, Some(view.min_raise))
        } else {
            (ActionKind::Check, None)
        };
        game.perform_action(kind, amount).unwrap();
        step += 1;

        let session = game.session();
        assert_eq!(cards_accounted(session), DECK_SIZE);
        assert_eq!(
            session.pot,
            session
                .players
                .iter()
                .map(|player| player.committed)
                .sum::<usize>()
        );
        for player in &session.players {
            assert_eq!(player.chips + player.committed, 1000);
        }
    }

    assert_eq!(game.phase(), Phase::Showdown);
    assert!(game.pot() > 0);
}

#[test]
fn betting_view_tracks_the_acting_player() {
    let mut game = Game::new(TableOptions::default(), 8);
    game.start_new_game().unwrap();

    let view = game.betting_view();
    assert!(view.can_check);
    assert!(!view.can_call);
    assert!(view.can_raise);
    assert_eq!(view.call_amount, 0);
    assert_eq!(view.min_raise, 10);
    assert_eq!(view.max_raise, 1000);

    game.perform_action(ActionKind::Raise, Some(50)).unwrap();

    let view = game.betting_view();
    assert!(!view.can_check);
    assert!(view.can_call);
    assert_eq!(view.call_amount, 50);
    assert_eq!(view.min_raise, 60);
    assert_eq!(view.max_raise, 1000);
    assert!(!game.is_human_turn());
}

#[test]
fn clamp_raise_keeps_amount_in_range() {
    let mut game = Game::new(TableOptions::default(), 8);
    game.start_new_game().unwrap();

    assert_eq!(game.clamp_raise(5), 10);
    assert_eq!(game.clamp_raise(300), 300);
    assert_eq!(game.clamp_raise(5000), 1000);
}

#[test]
fn award_pot_pays_the_named_winner() {
    let mut game = Game::new(TableOptions::default(), 31);
    game.start_new_game().unwrap();

    assert_eq!(game.award_pot(0).unwrap_err(), SettleError::HandNotFinished);

    game.perform_action(ActionKind::Raise, Some(100)).unwrap();
    game.perform_action(ActionKind::Fold, None).unwrap();
    game.perform_action(ActionKind::Call, None).unwrap();
    game.perform_action(ActionKind::Call, None).unwrap();
    assert_eq!(game.phase(), Phase::Flop);
    assert_eq!(game.pot(), 300);

    check_around(&mut game);
    assert_eq!(game.round_state(), RoundState::Finished);

    assert_eq!(game.award_pot(1).unwrap_err(), SettleError::PlayerFolded);
    assert_eq!(game.award_pot(9).unwrap_err(), SettleError::PlayerNotFound);

    let award = game.award_pot(2).unwrap();
    assert_eq!(award.winner, 2);
    assert_eq!(award.amount, 300);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.players()[2].chips, 1200);
    assert_eq!(game.players()[2].hands_won, 1);
    assert_eq!(game.players()[0].hands_lost, 1);
    assert_eq!(game.players()[1].hands_lost, 1);

    assert_eq!(game.award_pot(2).unwrap_err(), SettleError::AlreadySettled);
}

#[test]
fn next_hand_keeps_chips_until_reset() {
    let mut game = Game::new(TableOptions::default(), 77);
    game.start_new_game().unwrap();

    game.perform_action(ActionKind::Raise, Some(40)).unwrap();
    for _ in 0..3 {
        game.perform_action(ActionKind::Call, None).unwrap();
    }
    check_around(&mut game);
    game.award_pot(HUMAN_SEAT).unwrap();

    game.start_new_game().unwrap();
    let players = game.players();
    assert_eq!(players[0].chips, 1120);
    assert_eq!(players[0].hands_won, 1);
    assert_eq!(players[1].chips, 960);
    assert_eq!(players[1].hands_lost, 1);
    assert!(players.iter().all(|player| {
        player.hand.len() == 2 && player.current_bet == 0 && player.committed == 0
    }));
    assert_eq!(game.phase(), Phase::Preflop);

    game.reset_game();
    assert_eq!(game.round_state(), RoundState::Waiting);
    assert!(game.players().is_empty());
    assert!(game.community_cards().is_empty());
    assert_eq!(game.pot(), 0);

    game.start_new_game().unwrap();
    assert!(game.players().iter().all(|player| player.chips == 1000));
}

#[test]
fn action_names_parse() {
    assert_eq!("fold".parse::<ActionKind>().unwrap(), ActionKind::Fold);
    assert_eq!("check".parse::<ActionKind>().unwrap(), ActionKind::Check);
    assert_eq!(" call ".parse::<ActionKind>().unwrap(), ActionKind::Call);
    assert_eq!("r".parse::<ActionKind>().unwrap(), ActionKind::Raise);
    assert!("shove".parse::<ActionKind>().is_err());
    assert_eq!(ActionKind::Raise.to_string(), "raise");
    assert_eq!(Phase::River.to_string(), "river");
    assert_eq!(RoundState::Finished.to_string(), "finished");
}
