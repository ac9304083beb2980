//! Basic-strategy advisor tests.

use twentyone::{Action, Card, Hand, Suit, TableError, suggest};

/// Builds a hand from ranks, cycling suits so equal ranks never share one.
fn hand(ranks: &[u8]) -> Hand {
    let suits = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];
    let mut hand = Hand::new();
    for (i, &rank) in ranks.iter().enumerate() {
        hand.add_card(Card::new(suits[i % suits.len()], rank));
    }
    hand
}

const fn up(rank: u8) -> Card {
    Card::new(Suit::Clubs, rank)
}

#[test]
fn aces_and_eights_always_split() {
    for dealer in 1..=13 {
        assert_eq!(suggest(&hand(&[1, 1]), up(dealer)), Action::Split);
        assert_eq!(suggest(&hand(&[8, 8]), up(dealer)), Action::Split);
    }
}

#[test]
fn ten_value_pairs_stand() {
    assert_eq!(suggest(&hand(&[10, 10]), up(6)), Action::Stand);
    assert_eq!(suggest(&hand(&[11, 11]), up(6)), Action::Stand);
    assert_eq!(suggest(&hand(&[13, 13]), up(2)), Action::Stand);
}

#[test]
fn mixed_ten_value_cards_are_not_a_pair() {
    // A ten and a jack share a value but not a rank; this is plain hard 20.
    assert_eq!(suggest(&hand(&[10, 11]), up(6)), Action::Stand);
    assert_eq!(suggest(&hand(&[13, 12]), up(1)), Action::Stand);
}

#[test]
fn fives_double_against_weak_dealers() {
    for dealer in 2..=9 {
        assert_eq!(suggest(&hand(&[5, 5]), up(dealer)), Action::Double);
    }
    assert_eq!(suggest(&hand(&[5, 5]), up(10)), Action::Hit);
    assert_eq!(suggest(&hand(&[5, 5]), up(13)), Action::Hit);
    assert_eq!(suggest(&hand(&[5, 5]), up(1)), Action::Hit);
}

#[test]
fn nines_stand_against_seven_ten_and_ace() {
    assert_eq!(suggest(&hand(&[9, 9]), up(7)), Action::Stand);
    assert_eq!(suggest(&hand(&[9, 9]), up(10)), Action::Stand);
    assert_eq!(suggest(&hand(&[9, 9]), up(1)), Action::Stand);

    assert_eq!(suggest(&hand(&[9, 9]), up(6)), Action::Split);
    assert_eq!(suggest(&hand(&[9, 9]), up(8)), Action::Split);
}

#[test]
fn small_pairs_split_only_against_weak_dealers() {
    assert_eq!(suggest(&hand(&[2, 2]), up(7)), Action::Split);
    assert_eq!(suggest(&hand(&[2, 2]), up(8)), Action::Hit);
    assert_eq!(suggest(&hand(&[4, 4]), up(5)), Action::Split);
    assert_eq!(suggest(&hand(&[6, 6]), up(2)), Action::Split);
    assert_eq!(suggest(&hand(&[7, 7]), up(8)), Action::Hit);
    assert_eq!(suggest(&hand(&[7, 7]), up(10)), Action::Hit);
}

#[test]
fn soft_seventeen_doubles_against_three_through_six() {
    for dealer in 3..=6 {
        assert_eq!(suggest(&hand(&[1, 6]), up(dealer)), Action::Double);
    }
    assert_eq!(suggest(&hand(&[1, 6]), up(2)), Action::Hit);
    assert_eq!(suggest(&hand(&[1, 6]), up(7)), Action::Hit);

    // Three cards rule out the double.
    assert_eq!(suggest(&hand(&[1, 2, 4]), up(4)), Action::Hit);
}

#[test]
fn soft_thirteen_through_sixteen_double_against_four_through_six() {
    assert_eq!(suggest(&hand(&[1, 2]), up(4)), Action::Double);
    assert_eq!(suggest(&hand(&[1, 4]), up(6)), Action::Double);
    assert_eq!(suggest(&hand(&[1, 5]), up(5)), Action::Double);

    assert_eq!(suggest(&hand(&[1, 2]), up(3)), Action::Hit);
    assert_eq!(suggest(&hand(&[1, 5]), up(7)), Action::Hit);
    assert_eq!(suggest(&hand(&[1, 2, 2]), up(5)), Action::Hit);
}

#[test]
fn soft_eighteen_falls_through_to_hit() {
    assert_eq!(suggest(&hand(&[1, 7]), up(2)), Action::Hit);
    assert_eq!(suggest(&hand(&[1, 7]), up(6)), Action::Hit);
    assert_eq!(suggest(&hand(&[1, 7]), up(10)), Action::Hit);
    assert_eq!(suggest(&hand(&[1, 3, 4]), up(9)), Action::Hit);
}

#[test]
fn soft_nineteen_and_up_stand() {
    assert_eq!(suggest(&hand(&[1, 8]), up(6)), Action::Stand);
    assert_eq!(suggest(&hand(&[1, 9]), up(10)), Action::Stand);
    assert_eq!(suggest(&hand(&[1, 4, 4]), up(1)), Action::Stand);
}

#[test]
fn hard_eight_and_below_hit() {
    assert_eq!(suggest(&hand(&[2, 3]), up(6)), Action::Hit);
    assert_eq!(suggest(&hand(&[5, 3]), up(2)), Action::Hit);
    assert_eq!(suggest(&hand(&[2, 3, 3]), up(5)), Action::Hit);
}

#[test]
fn hard_nine_through_eleven_double_on_two_cards() {
    assert_eq!(suggest(&hand(&[6, 3]), up(3)), Action::Double);
    assert_eq!(suggest(&hand(&[6, 3]), up(6)), Action::Double);
    assert_eq!(suggest(&hand(&[6, 3]), up(2)), Action::Hit);
    assert_eq!(suggest(&hand(&[6, 3]), up(7)), Action::Hit);
    assert_eq!(suggest(&hand(&[2, 3, 4]), up(4)), Action::Hit);

    assert_eq!(suggest(&hand(&[6, 4]), up(9)), Action::Double);
    assert_eq!(suggest(&hand(&[6, 4]), up(10)), Action::Hit);
    assert_eq!(suggest(&hand(&[6, 4]), up(1)), Action::Hit);

    assert_eq!(suggest(&hand(&[6, 5]), up(10)), Action::Double);
    assert_eq!(suggest(&hand(&[6, 5]), up(1)), Action::Double);
    assert_eq!(suggest(&hand(&[2, 4, 5]), up(6)), Action::Hit);
}

#[test]
fn hard_twelve_stands_only_against_four_through_six() {
    for dealer in 4..=6 {
        assert_eq!(suggest(&hand(&[10, 2]), up(dealer)), Action::Stand);
    }
    assert_eq!(suggest(&hand(&[10, 2]), up(2)), Action::Hit);
    assert_eq!(suggest(&hand(&[10, 2]), up(3)), Action::Hit);
    assert_eq!(suggest(&hand(&[10, 2]), up(7)), Action::Hit);
}

#[test]
fn hard_thirteen_through_sixteen_stand_against_six_or_less() {
    assert_eq!(suggest(&hand(&[10, 3]), up(2)), Action::Stand);
    assert_eq!(suggest(&hand(&[10, 6]), up(6)), Action::Stand);
    assert_eq!(suggest(&hand(&[10, 6]), up(7)), Action::Hit);
    assert_eq!(suggest(&hand(&[9, 7]), up(10)), Action::Hit);
    assert_eq!(suggest(&hand(&[9, 7]), up(1)), Action::Hit);
}

#[test]
fn hard_seventeen_and_up_stand() {
    assert_eq!(suggest(&hand(&[10, 7]), up(1)), Action::Stand);
    assert_eq!(suggest(&hand(&[13, 12]), up(1)), Action::Stand);
    assert_eq!(suggest(&hand(&[10, 5, 6]), up(10)), Action::Stand);
}

#[test]
fn dealer_ace_counts_as_eleven() {
    // An ace up-card lands in the 7/10/ace bucket for nines and outside the
    // weak-dealer windows everywhere else.
    assert_eq!(suggest(&hand(&[9, 9]), up(1)), Action::Stand);
    assert_eq!(suggest(&hand(&[5, 5]), up(1)), Action::Hit);
    assert_eq!(suggest(&hand(&[6, 4]), up(1)), Action::Hit);
    assert_eq!(suggest(&hand(&[2, 2]), up(1)), Action::Hit);
}

#[test]
fn action_text_and_wire_parsing() {
    assert_eq!(Action::Hit.to_string(), "Hit");
    assert_eq!(Action::Stand.to_string(), "Stand");
    assert_eq!(Action::Double.to_string(), "Double");
    assert_eq!(Action::Split.to_string(), "Split");

    assert_eq!("hit".parse::<Action>().unwrap(), Action::Hit);
    assert_eq!("stand".parse::<Action>().unwrap(), Action::Stand);
    assert_eq!("double".parse::<Action>().unwrap(), Action::Double);
    assert_eq!("split".parse::<Action>().unwrap(), Action::Split);

    assert_eq!(
        "surrender".parse::<Action>().unwrap_err(),
        TableError::InvalidAction
    );
    assert_eq!("Hit".parse::<Action>().unwrap_err(), TableError::InvalidAction);
}
