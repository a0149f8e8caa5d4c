//! Scenario tests driven through the public API.
//!
//! Hands are arranged with `GameBuilder::stacked_deck` so every scenario is
//! exact; later rounds are shuffled from the builder seed.

use three_card_stop::{
    Card, Deck, Game, GameConfig, GameError, PlayerId, RecordingObserver, RoundEnd, RoundEvent,
    StopVerdict, TurnRequest, TurnResult,
};

fn card(value: u8) -> Card {
    Card::new(value).unwrap()
}

/// Standard deck arranged so that `hands` are dealt in seat order and
/// `draws` are the next cards off the top.
fn stacked(hands: &[[u8; 3]], draws: &[u8]) -> Vec<Card> {
    let mut rest = Deck::standard(&GameConfig::default()).unwrap().cards().to_vec();
    let mut take = |value: u8| {
        let wanted = card(value);
        let pos = rest.iter().position(|&c| c == wanted).expect("card still in deck");
        rest.remove(pos)
    };

    let mut top: Vec<Card> = hands.iter().flatten().map(|&v| take(v)).collect();
    let mut next: Vec<Card> = draws.iter().map(|&v| take(v)).collect();

    next.reverse();
    top.reverse();
    rest.extend(next);
    rest.extend(top);
    rest
}

fn game_with(hands: &[[u8; 3]], draws: &[u8]) -> Game {
    Game::builder()
        .player_count(hands.len())
        .seed(7)
        .stacked_deck(stacked(hands, draws))
        .build()
        .unwrap()
}

fn values(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|c| c.value()).collect()
}

fn points(game: &Game) -> Vec<u32> {
    game.players().iter().map(|p| p.points()).collect()
}

#[test]
fn test_stacked_deal() {
    let game = game_with(&[[1, 2, 3], [4, 5, 6]], &[9]);

    assert_eq!(values(game.players()[0].cards()), vec![1, 2, 3]);
    assert_eq!(values(game.players()[1].cards()), vec![4, 5, 6]);
    assert_eq!(game.deck().cards().last(), Some(&card(9)));
    assert_eq!(game.players()[0].known_sum(), 3);
    assert_eq!(game.players()[0].visible_hand(), "[A, 2, ?]");
}

#[test]
fn test_lowest_stopper_scores_nothing() {
    let mut game = game_with(&[[1, 1, 1], [10, 10, 10]], &[]);

    let result = game.play_turn(TurnRequest::from_deck().with_stop()).unwrap();

    assert_eq!(result.outcome().unwrap().verdict, Some(StopVerdict::Won));
    assert_eq!(points(&game), vec![0, 30]);
}

#[test]
fn test_beaten_stopper_takes_table() {
    let mut game = game_with(&[[10, 10, 10], [1, 1, 1]], &[]);

    game.play_turn(TurnRequest::from_deck().with_stop()).unwrap();

    assert_eq!(points(&game), vec![33, 0]);
}

#[test]
fn test_three_player_stop_with_one_lower() {
    let mut game = game_with(&[[5, 5, 5], [10, 10, 10], [1, 1, 1]], &[]);

    let outcome = game.stop_round(None).unwrap();

    assert_eq!(outcome.verdict, Some(StopVerdict::Lost { penalty: 48 }));
    assert_eq!(points(&game), vec![48, 0, 0]);
}

#[test]
fn test_tie_counts_against_stopper() {
    let mut game = game_with(&[[2, 2, 2], [3, 3, 0]], &[]);

    game.stop_round(Some(PlayerId::new(1))).unwrap();

    assert_eq!(points(&game), vec![12, 0]);
}

#[test]
fn test_swap_then_stop_uses_new_hand() {
    // Swapping the King for a Jack drops P1 from 14 to 2, under P2's 3.
    let mut game = game_with(&[[1, 1, 12], [1, 2, 0]], &[0]);

    let result = game
        .play_turn(TurnRequest::from_deck().with_swap(2).with_stop())
        .unwrap();

    let outcome = result.outcome().unwrap();
    assert_eq!(outcome.verdict, Some(StopVerdict::Won));
    assert_eq!(points(&game), vec![0, 3]);
}

#[test]
fn test_peek_then_place() {
    let mut game = game_with(&[[8, 9, 12], [4, 4, 4]], &[0, 7]);
    let before = game.deck_len();

    let drawn = game.draw_from_deck().unwrap();
    assert_eq!(drawn, Card::JACK);

    game.play_turn(TurnRequest::from_deck().with_drawn_card(drawn).with_swap(2))
        .unwrap();

    let player = &game.players()[0];
    assert_eq!(values(player.cards()), vec![8, 9, 0]);
    assert!(player.is_fully_known());
    assert_eq!(game.deck_len(), before - 1);
    assert_eq!(game.top_discard(), Some(Card::KING));
    assert_eq!(game.current_player().id(), PlayerId::new(2));
}

#[test]
fn test_discard_chain() {
    let mut game = game_with(&[[6, 6, 6], [9, 8, 7]], &[2]);

    // P1 draws the 2 and throws it away; P2 picks it up.
    game.play_turn(TurnRequest::from_deck()).unwrap();
    assert_eq!(game.top_discard(), Some(card(2)));

    let result = game.play_turn(TurnRequest::from_discard().with_swap(0)).unwrap();

    assert_eq!(result, TurnResult::Continued { next: PlayerId::new(1) });
    assert_eq!(values(game.players()[1].cards()), vec![2, 8, 7]);
    assert_eq!(game.discard_pile().cards(), &[card(9)]);
}

#[test]
fn test_deck_exhaustion_scores_everyone_and_redeals() {
    let mut game = game_with(&[[5, 5, 5], [10, 10, 10]], &[]);
    while game.draw_from_deck().is_ok() {}
    assert_eq!(game.deck_len(), 0);
    assert_eq!(game.draw_from_deck(), Err(GameError::DeckEmpty));

    let result = game.play_turn(TurnRequest::from_discard().with_swap(1).with_stop()).unwrap();

    let outcome = result.outcome().unwrap();
    assert_eq!(outcome.end, RoundEnd::CardsExhausted);
    assert_eq!(outcome.verdict, None);
    assert_eq!(points(&game), vec![15, 30]);
    assert_eq!(game.deck_len(), 52 - 6);
    assert_eq!(game.discard_len(), 0);
    assert_eq!(game.round_number(), 2);
}

#[test]
fn test_elimination_skips_seat_next_round() {
    let config = GameConfig::default().with_elimination_points(30);
    let mut game = Game::builder()
        .player_count(3)
        .config(config)
        .seed(11)
        .stacked_deck(stacked(&[[0, 0, 1], [12, 12, 11], [2, 2, 2]], &[]))
        .build()
        .unwrap();

    let outcome = game.stop_round(None).unwrap();

    assert_eq!(outcome.eliminated, vec![PlayerId::new(2)]);
    assert_eq!(points(&game), vec![0, 35, 6]);
    assert!(game.players()[1].cards().is_empty());
    assert!(!game.is_game_over());

    // The seat did not move; rotation now skips player 2.
    assert_eq!(game.current_player().id(), PlayerId::new(1));
    let result = game.play_turn(TurnRequest::from_deck()).unwrap();
    assert_eq!(result, TurnResult::Continued { next: PlayerId::new(3) });
}

#[test]
fn test_game_over_after_last_elimination() {
    let config = GameConfig::default().with_elimination_points(30);
    let mut game = Game::builder()
        .player_count(2)
        .config(config)
        .seed(3)
        .stacked_deck(stacked(&[[12, 12, 12], [0, 0, 0]], &[]))
        .build()
        .unwrap();
    let recorder = RecordingObserver::new();
    game.subscribe(recorder.clone());

    game.stop_round(None).unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.winner().unwrap().id(), PlayerId::new(2));
    assert!(game.players()[0].is_eliminated());
    assert_eq!(
        recorder.events().last(),
        Some(&RoundEvent::GameOver { winner: Some(PlayerId::new(2)) })
    );

    // Eliminated seats cannot act.
    assert_eq!(
        game.play_turn(TurnRequest::from_deck()),
        Err(GameError::PlayerEliminated(PlayerId::new(1)))
    );
}

#[test]
fn test_last_outcome_tracks_rounds() {
    let mut game = game_with(&[[1, 1, 1], [10, 10, 10]], &[]);
    game.stop_round(None).unwrap();

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.round, 1);
    assert_eq!(outcome.points_for(PlayerId::new(2)), 30);
    assert_eq!(outcome.deltas[1].hand_sum, 30);

    let json = serde_json::to_string(outcome).unwrap();
    assert!(json.contains("\"Stopped\""));
}

#[test]
fn test_same_seed_same_game() {
    let a = Game::with_seed(4, 99).unwrap();
    let b = Game::with_seed(4, 99).unwrap();

    assert_eq!(a.players(), b.players());
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.seed(), 99);
}

#[test]
fn test_builder_rejects_bad_setup() {
    let mut bad = stacked(&[], &[]);
    bad[0] = Card::KING;
    bad[1] = Card::KING;
    assert_eq!(
        Game::builder().stacked_deck(bad).build().unwrap_err(),
        GameError::InvalidDeckComposition
    );

    let config = GameConfig::default().with_total_cards(54);
    assert_eq!(
        Game::builder().config(config).build().unwrap_err(),
        GameError::DeckSizeMismatch { expected: 54, actual: 52 }
    );

    let config = GameConfig::default().with_stop_sums(9, 9);
    assert!(matches!(
        Game::builder().config(config).build(),
        Err(GameError::InvalidConfig(_))
    ));

    assert!(matches!(
        Game::builder().player_count(5).build(),
        Err(GameError::InvalidPlayerCount { got: 5, min: 2, max: 4 })
    ));
}
