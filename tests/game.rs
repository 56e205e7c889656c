//! Game integration tests.

use bjduel::{
    Card, CardFace, Command, CommandStatus, DECK_SIZE, DealerAction, Deck, Game, GameOptions,
    Outcome, Phase, Rank, ResolveReason, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deal order: player, player, dealer hole, dealer up, then any later draws.
fn stacked(options: GameOptions, draws: &[Card]) -> Game {
    Game::with_deck(options, Deck::from_draw_order(draws, 99))
}

fn started(options: GameOptions, draws: &[Card]) -> Game {
    let mut game = stacked(options, draws);
    assert_eq!(game.start_round().unwrap(), CommandStatus::Applied);
    game
}

#[test]
fn deal_lays_out_two_cards_each() {
    let game = started(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
        ],
    );

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.player_hand().total(), 17);
    assert!(game.player_hand().cards().iter().all(Card::is_face_up));

    let dealer = game.dealer_hand().cards();
    assert_eq!(dealer.len(), 2);
    assert!(!dealer[0].is_face_up());
    assert!(dealer[1].is_face_up());

    let table = game.snapshot();
    assert_eq!(table.player_total, Some(17));
    assert_eq!(table.dealer_total, None);
    assert_eq!(table.dealer_cards[0].face, CardFace::Down);
    assert_eq!(table.dealer_cards[1].position, 1);
    assert_eq!(
        table.dealer_cards[1].face,
        CardFace::Up {
            rank: Rank::King,
            suit: Suit::Diamonds
        }
    );
    assert_eq!(table.banner(), None);
    assert_eq!(table.cards_remaining, DECK_SIZE);
}

#[test]
fn stand_on_seventeen_loses_to_nineteen() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
        ],
    );

    assert_eq!(game.apply(Command::Stand).unwrap(), CommandStatus::Applied);
    assert_eq!(game.phase(), Phase::Resolved);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.reason, ResolveReason::Comparison);
    assert_eq!((result.player_total, result.dealer_total), (17, 19));
    assert_eq!(game.score().pair(), (0, 1));

    let table = game.snapshot();
    assert_eq!(table.dealer_total, Some(19));
    assert_eq!(table.banner(), Some("DEALER WINS"));
}

#[test]
fn player_bust_ends_round_without_dealer_turn() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Five, Suit::Clubs),
        ],
    );

    assert_eq!(game.draw().unwrap(), CommandStatus::Applied);
    assert_eq!(game.player_hand().total(), 23);
    assert_eq!(game.phase(), Phase::Resolved);
    assert_eq!(game.dealer_hand().len(), 2);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.reason, ResolveReason::PlayerBust);
    assert_eq!(game.score().pair(), (0, 1));

    // Hole card is shown once the round is over.
    assert_eq!(game.snapshot().dealer_total, Some(16));
}

#[test]
fn equal_totals_draw_leaves_score_alone() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::King, Suit::Clubs),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Jack, Suit::Diamonds),
        ],
    );

    game.stand().unwrap();

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(game.score().pair(), (0, 0));
    assert_eq!(game.snapshot().banner(), Some("DRAW"));
}

#[test]
fn dealer_draws_to_seventeen_then_busts() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Nine, Suit::Clubs),
        ],
    );

    game.stand().unwrap();

    assert_eq!(game.dealer_hand().len(), 3);
    assert!(game.dealer_hand().cards().iter().all(Card::is_face_up));
    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.reason, ResolveReason::DealerBust);
    assert_eq!(result.dealer_total, 25);
    assert_eq!(game.score().pair(), (1, 0));
    assert_eq!(game.snapshot().banner(), Some("PLAYER WINS"));
}

#[test]
fn dealer_soft_seventeen_stands() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Six, Suit::Diamonds),
        ],
    );

    game.stand().unwrap();

    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.result().unwrap().outcome, Outcome::PlayerWins);
    assert_eq!(game.result().unwrap().reason, ResolveReason::Comparison);
}

#[test]
fn forfeit_loses_regardless_of_totals() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::King, Suit::Hearts),
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Diamonds),
        ],
    );

    assert_eq!(game.apply(Command::Forfeit).unwrap(), CommandStatus::Applied);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.reason, ResolveReason::Forfeit);
    assert_eq!(result.player_total, 21);
    assert_eq!(game.score().pair(), (0, 1));
}

#[test]
fn hole_stays_hidden_on_loss_when_configured() {
    let options = GameOptions::default().with_reveal_hole_on_player_loss(false);
    let mut game = started(
        options,
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );

    let _ = game.forfeit();

    let table = game.snapshot();
    assert_eq!(table.phase, Phase::Resolved);
    assert_eq!(table.dealer_total, None);
    assert_eq!(table.dealer_cards[0].face, CardFace::Down);
    assert_eq!(table.banner(), Some("DEALER WINS"));
}

#[test]
fn twenty_one_keeps_player_turn() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Five, Suit::Clubs),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::King, Suit::Clubs),
        ],
    );

    game.draw().unwrap();
    assert_eq!(game.player_hand().total(), 21);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn player_commands_ignored_while_idle() {
    let mut game = Game::new(GameOptions::default(), 4);
    let before = game.snapshot();

    for command in [Command::Draw, Command::Stand, Command::Forfeit] {
        assert_eq!(game.apply(command).unwrap(), CommandStatus::Ignored);
    }
    assert_eq!(game.dealer_step().unwrap(), None);
    assert_eq!(game.clear_round(), CommandStatus::Ignored);

    assert_eq!(game.snapshot(), before);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
}

#[test]
fn stepped_dealer_ignores_player_commands() {
    let options = GameOptions::default().with_dealer_autoplay(false);
    let mut game = started(
        options,
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Hearts),
        ],
    );

    game.stand().unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.snapshot().dealer_total, Some(14));

    let player_before = game.player_hand().clone();
    let dealer_before = game.dealer_hand().clone();
    let table_before = game.snapshot();
    for command in [
        Command::Draw,
        Command::Stand,
        Command::Forfeit,
        Command::StartRound,
    ] {
        assert_eq!(game.apply(command).unwrap(), CommandStatus::Ignored);
    }
    assert_eq!(game.player_hand(), &player_before);
    assert_eq!(game.dealer_hand(), &dealer_before);
    assert_eq!(game.snapshot(), table_before);

    assert_eq!(game.dealer_step().unwrap(), Some(DealerAction::Draw));
    assert_eq!(game.dealer_hand().total(), 16);
    assert_eq!(game.dealer_step().unwrap(), Some(DealerAction::Draw));
    assert_eq!(game.dealer_hand().total(), 19);
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.dealer_step().unwrap(), Some(DealerAction::Stand));
    assert_eq!(game.phase(), Phase::Resolved);
    assert_eq!(game.result().unwrap().outcome, Outcome::DealerWins);
    assert_eq!(game.dealer_step().unwrap(), None);
}

#[test]
fn start_round_ignored_during_player_turn() {
    let mut game = started(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );
    let before = game.snapshot();

    assert_eq!(game.start_round().unwrap(), CommandStatus::Ignored);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn score_accumulates_across_rounds() {
    let mut game = Game::new(GameOptions::default(), 21);

    for round in 1..=3 {
        game.apply(Command::StartRound).unwrap();
        assert_eq!(game.player_hand().len(), 2);
        assert_eq!(game.dealer_hand().len(), 2);
        let _ = game.forfeit();
        assert_eq!(game.score().dealer_wins(), round);
    }

    assert_eq!(game.score().player_wins(), 0);
    assert_eq!(game.score().to_string(), "0 : 3");

    assert_eq!(game.clear_round(), CommandStatus::Applied);
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.result(), None);
    assert_eq!(game.score().pair(), (0, 3));
}

#[test]
fn rounds_keep_dealing_past_a_full_deck() {
    let mut game = Game::new(GameOptions::default(), 8);
    let mut resolved = 0;

    for _ in 0..40 {
        game.apply(Command::StartRound).unwrap();
        while game.phase() == Phase::PlayerTurn && game.player_hand().total() < 15 {
            game.apply(Command::Draw).unwrap();
        }
        game.apply(Command::Stand).unwrap();
        assert_eq!(game.phase(), Phase::Resolved);
        resolved += 1;
    }

    let (player, dealer) = game.score().pair();
    assert!(player + dealer <= resolved);
    assert!(game.deck().rebuilds() > 0);
    assert!(game.cards_remaining() > 0);
}

#[test]
fn same_seed_deals_same_table() {
    let mut a = Game::new(GameOptions::default(), 77);
    let mut b = Game::new(GameOptions::default(), 77);
    a.start_round().unwrap();
    b.start_round().unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}
