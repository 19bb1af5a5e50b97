//! Round engine integration tests.

use casino21::{
    BalanceSink, Card, Deck, Decision, DecisionSource, Outcome, Player, Round, RoundError,
    RoundState, ScriptError, Scripted, SharedDeck, Suit, TableOptions, TableView,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn opening(player: [u8; 2], dealer: [u8; 2]) -> Vec<Card> {
    vec![
        card(Suit::Hearts, player[0]),   // player
        card(Suit::Clubs, dealer[0]),    // dealer up
        card(Suit::Diamonds, player[1]), // player
        card(Suit::Spades, dealer[1]),   // dealer hole
    ]
}

fn stacked(mut draws: Vec<Card>, extra: &[Card]) -> Deck {
    draws.extend_from_slice(extra);
    Deck::stacked(1, &draws)
}

/// Records every table it is shown.
#[derive(Default)]
struct Recorder {
    script: Vec<Decision>,
    shown: Vec<(RoundState, usize, usize, bool)>,
}

impl DecisionSource for Recorder {
    type Error = ScriptError;

    fn decide(&mut self, view: &TableView<'_>) -> Result<Decision, Self::Error> {
        assert_eq!(view.state, RoundState::PlayerTurn);
        assert!(view.hole_hidden);
        assert_eq!(view.dealer.len(), 1);
        if self.script.is_empty() {
            return Err(ScriptError::Exhausted);
        }
        Ok(self.script.remove(0))
    }

    fn show(&mut self, view: &TableView<'_>) -> Result<(), Self::Error> {
        self.shown
            .push((view.state, view.player.len(), view.dealer.len(), view.hole_hidden));
        Ok(())
    }
}

#[test]
fn dealer_bust_pays_and_credits_win() {
    let options = TableOptions::default();
    // player 10+10 = 20; dealer 10+6 = 16, draws 6 to 22
    let mut deck = stacked(opening([10, 13], [12, 6]), &[card(Suit::Hearts, 6)]);
    let mut decisions = Scripted::new([Decision::Stand]);

    let outcome = Round::new(25, &options)
        .play(&mut deck, &mut decisions)
        .unwrap();

    assert_eq!(outcome.outcome, Outcome::Win);
    assert_eq!(outcome.delta, 25);
    assert!(outcome.player_won);
    assert!(!outcome.pushed);
    assert_eq!(outcome.player_value, 20);
    assert_eq!(outcome.dealer_value, 22);

    let mut player = Player::new("Ada", 100, 3);
    outcome.apply_to(&mut player);
    assert_eq!(player.balance(), 125);
    assert_eq!(player.wins(), 4);
}

#[test]
fn equal_totals_push() {
    let options = TableOptions::default();
    let mut deck = stacked(opening([10, 8], [9, 9]), &[]);
    let mut decisions = Scripted::new([Decision::Stand]);

    let outcome = Round::new(10, &options)
        .play(&mut deck, &mut decisions)
        .unwrap();

    assert_eq!(outcome.outcome, Outcome::Push);
    assert_eq!(outcome.delta, 0);
    assert!(outcome.pushed);
    assert!(!outcome.player_won);

    let mut player = Player::new("Ada", 40, 0);
    outcome.apply_to(&mut player);
    assert_eq!(player.balance(), 40);
    assert_eq!(player.wins(), 0);
}

#[test]
fn player_bust_skips_dealer() {
    let options = TableOptions::default();
    // player 10+4 = 14, hits a king to 24; dealer sits on 12 and never draws
    let dealer_next = card(Suit::Clubs, 5);
    let mut deck = stacked(
        opening([10, 4], [10, 2]),
        &[card(Suit::Hearts, 13), dealer_next],
    );
    let mut decisions = Scripted::new([Decision::Hit, Decision::Stand]);

    let outcome = Round::new(10, &options)
        .play(&mut deck, &mut decisions)
        .unwrap();

    assert_eq!(outcome.outcome, Outcome::Bust);
    assert_eq!(outcome.delta, -10);
    assert_eq!(outcome.player_value, 24);
    assert_eq!(outcome.dealer_value, 12);
    assert_eq!(decisions.remaining(), 1);
    assert_eq!(deck.draw(), dealer_next);
}

#[test]
fn player_bust_loses_even_if_dealer_would_bust() {
    assert_eq!(Outcome::resolve(true, 22, 23), Outcome::Bust);
}

#[test]
fn dealer_stops_at_first_seventeen() {
    let options = TableOptions::default();
    let mut round = Round::new(10, &options);
    // dealer 10+2 = 12, draws 5 to 17; the 2 after it would make 19
    let mut deck = stacked(
        opening([10, 9], [10, 2]),
        &[card(Suit::Hearts, 5), card(Suit::Diamonds, 2)],
    );

    round.deal(&mut deck).unwrap();
    round.stand().unwrap();
    let drawn = round.dealer_play(&mut deck).unwrap();

    assert_eq!(drawn, vec![card(Suit::Hearts, 5)]);
    assert_eq!(round.dealer_hand().value(), 17);
    assert_eq!(round.state(), RoundState::Settlement);

    let outcome = round.settle().unwrap();
    assert_eq!(outcome.outcome, Outcome::Win);
    assert_eq!(outcome.dealer_value, 17);
}

#[test]
fn dealer_soft_seventeen_stands() {
    let options = TableOptions::default();
    let mut round = Round::new(10, &options);
    let mut deck = stacked(opening([10, 7], [1, 6]), &[]);

    round.deal(&mut deck).unwrap();
    round.stand().unwrap();
    assert!(round.dealer_play(&mut deck).unwrap().is_empty());
    assert_eq!(round.settle().unwrap().outcome, Outcome::Push);
}

#[test]
fn dealer_higher_loses() {
    let options = TableOptions::default();
    let mut deck = stacked(opening([10, 7], [10, 9]), &[]);
    let mut decisions = Scripted::new([Decision::Stand]);

    let outcome = Round::new(8, &options)
        .play(&mut deck, &mut decisions)
        .unwrap();

    assert_eq!(outcome.outcome, Outcome::Lose);
    assert_eq!(outcome.delta, -8);

    let mut player = Player::new("Ada", 5, 0);
    outcome.apply_to(&mut player);
    assert_eq!(player.balance(), 0);
}

#[test]
fn invalid_decisions_are_ignored() {
    let options = TableOptions::default();
    let mut deck = stacked(opening([10, 8], [10, 7]), &[]);
    let mut decisions = Scripted::new([
        Decision::Invalid,
        Decision::Invalid,
        Decision::Stand,
    ]);

    let outcome = Round::new(10, &options)
        .play(&mut deck, &mut decisions)
        .unwrap();

    assert_eq!(decisions.asked(), 3);
    assert_eq!(outcome.outcome, Outcome::Win);
    assert_eq!(outcome.player_value, 18);
}

#[test]
fn apply_invalid_leaves_round_untouched() {
    let options = TableOptions::default();
    let mut round = Round::new(10, &options);
    let mut deck = stacked(opening([2, 3], [10, 7]), &[card(Suit::Hearts, 4)]);
    round.deal(&mut deck).unwrap();

    let before = round.player_hand().clone();
    assert_eq!(round.apply(Decision::Invalid, &mut deck), Ok(None));
    assert_eq!(round.player_hand(), &before);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(deck.remaining(), 1);

    assert_eq!(
        round.apply(Decision::Hit, &mut deck),
        Ok(Some(card(Suit::Hearts, 4)))
    );
    assert_eq!(round.player_hand().value(), 9);
    assert_eq!(round.apply(Decision::Stand, &mut deck), Ok(None));
    assert_eq!(round.state(), RoundState::DealerTurn);
}

#[test]
fn steps_out_of_order_are_rejected() {
    let options = TableOptions::default();
    let mut round = Round::new(10, &options);
    let mut deck = stacked(opening([10, 6], [10, 7]), &[card(Suit::Hearts, 10)]);

    assert_eq!(round.hit(&mut deck), Err(RoundError::InvalidState));
    assert_eq!(round.stand(), Err(RoundError::InvalidState));
    assert_eq!(round.settle(), Err(RoundError::InvalidState));

    round.deal(&mut deck).unwrap();
    assert_eq!(round.deal(&mut deck), Err(RoundError::InvalidState));
    assert_eq!(round.dealer_play(&mut deck), Err(RoundError::InvalidState));

    round.hit(&mut deck).unwrap();
    assert!(round.player_bust());
    assert_eq!(round.state(), RoundState::Settlement);
    assert_eq!(round.dealer_play(&mut deck), Err(RoundError::InvalidState));

    let outcome = round.settle().unwrap();
    assert_eq!(outcome.outcome, Outcome::Bust);
    assert_eq!(round.state(), RoundState::Done);
    assert_eq!(round.settle(), Err(RoundError::InvalidState));
}

#[test]
fn deal_order_alternates() {
    let options = TableOptions::default();
    let mut round = Round::new(10, &options);
    let draws = opening([2, 3], [4, 5]);
    let mut deck = stacked(draws.clone(), &[]);

    round.deal(&mut deck).unwrap();

    assert_eq!(round.player_hand().cards(), &[draws[0], draws[2]]);
    assert_eq!(round.dealer_hand().cards(), &[draws[1], draws[3]]);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert!(deck.is_empty());
}

#[test]
fn view_hides_hole_until_player_turn_ends() {
    let options = TableOptions::default();
    let mut deck = stacked(opening([2, 3], [10, 7]), &[card(Suit::Hearts, 4)]);
    let mut recorder = Recorder {
        script: vec![Decision::Hit, Decision::Stand],
        ..Recorder::default()
    };

    let outcome = Round::new(10, &options)
        .play(&mut deck, &mut recorder)
        .unwrap();

    assert_eq!(outcome.outcome, Outcome::Lose);
    assert_eq!(
        recorder.shown,
        vec![
            (RoundState::PlayerTurn, 2, 1, true),
            (RoundState::PlayerTurn, 3, 1, true),
            (RoundState::Done, 3, 2, false),
        ]
    );
}

#[test]
fn hole_stays_hidden_until_dealer_turn() {
    assert!(RoundState::Dealing.hides_hole());
    assert!(RoundState::PlayerTurn.hides_hole());
    assert!(!RoundState::DealerTurn.hides_hole());
    assert!(!RoundState::Settlement.hides_hole());
    assert!(!RoundState::Done.hides_hole());

    let options = TableOptions::default();
    let mut round = Round::new(10, &options);
    let mut deck = stacked(opening([10, 8], [10, 7]), &[]);
    assert!(!round.view().hole_hidden);

    round.deal(&mut deck).unwrap();
    assert!(round.view().hole_hidden);
    assert_eq!(round.view().dealer, &[card(Suit::Clubs, 10)]);

    round.stand().unwrap();
    let view = round.view();
    assert_eq!(view.state, RoundState::DealerTurn);
    assert!(!view.hole_hidden);
    assert_eq!(view.dealer.len(), 2);
    assert_eq!(view.dealer_value, 17);
}

#[test]
fn exhausted_script_aborts_round() {
    let options = TableOptions::default();
    let mut deck = Deck::new(4);
    let mut decisions = Scripted::default();

    let result = Round::new(10, &options).play(&mut deck, &mut decisions);
    assert_eq!(result, Err(ScriptError::Exhausted));
}

#[test]
fn higher_stand_threshold() {
    let options = TableOptions::default().with_dealer_stands_on(18);
    let mut round = Round::new(10, &options);
    let mut deck = stacked(opening([10, 7], [10, 7]), &[card(Suit::Hearts, 1)]);

    round.deal(&mut deck).unwrap();
    round.stand().unwrap();
    assert_eq!(round.dealer_play(&mut deck).unwrap().len(), 1);
    assert_eq!(round.settle().unwrap().outcome, Outcome::Lose);
}

#[test]
fn balance_clamps_at_zero() {
    let mut player = Player::new("Bo", 3, 0);
    player.apply_delta(-10);
    assert_eq!(player.balance(), 0);
    player.apply_delta(7);
    assert_eq!(player.balance(), 7);
}

#[test]
fn rounds_share_one_deck() {
    let options = TableOptions::default();
    let mut deck = Deck::new(8);

    for _ in 0..30 {
        let mut decisions = Scripted::new([Decision::Stand]);
        let outcome = Round::new(2, &options)
            .play(&mut deck, &mut decisions)
            .unwrap();
        assert!(outcome.dealer_value >= 17);
    }

    assert!(deck.generation() > 1);
}

#[test]
fn round_over_locked_shared_deck() {
    let shared = SharedDeck::new(stacked(opening([10, 9], [10, 8]), &[]));
    let mut decisions = Scripted::new([Decision::Stand]);

    let outcome = Round::new(4, &TableOptions::default())
        .play(&mut *shared.lock(), &mut decisions)
        .unwrap();
    assert_eq!(outcome.outcome, Outcome::Win);

    let mut source = &shared;
    let mut round = Round::new(4, &TableOptions::default());
    round.deal(&mut source).unwrap();
    assert_eq!(shared.into_inner().generation(), 1);
}
