use mmillion::cards::{parse_cards, Card, Suit::*};
use mmillion::play::{valid_play, valid_plays, PlayError};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card list")
}

#[test]
fn leading_trump_requires_broken_trump() {
    let hand = cards("Yellow 40; Red 2; Green 9");
    let trump_card = hand[0];
    assert_eq!(valid_play(trump_card, &hand, &[], Yellow, false), Ok(false));
    assert_eq!(valid_play(trump_card, &hand, &[], Yellow, true), Ok(true));
}

#[test]
fn leading_tiger_requires_broken_trump() {
    let hand = cards("Tiger; Red 2");
    assert_eq!(valid_play(Card::TIGER, &hand, &[], Yellow, false), Ok(false));
    assert_eq!(valid_play(Card::TIGER, &hand, &[], Yellow, true), Ok(true));
}

#[test]
fn leading_off_trump_is_always_legal() {
    let hand = cards("Red 2; Yellow 1");
    assert_eq!(valid_play(hand[0], &hand, &[], Yellow, false), Ok(true));
    assert_eq!(valid_play(hand[0], &hand, &[], Yellow, true), Ok(true));
}

#[test]
fn must_follow_when_holding_lead_suit() {
    let hand = cards("Green 3; Green 30; Black 40; Tiger; Bull");
    let trick = cards("Green 10; Green 1");
    let legal = valid_plays(&hand, &trick, Red, true).unwrap();
    assert_eq!(legal, cards("Green 3; Green 30"));
}

#[test]
fn any_card_when_void_in_lead_suit() {
    let hand = cards("Black 40; Red 1; Tiger; Bull");
    let trick = cards("Green 10");
    let legal = valid_plays(&hand, &trick, Red, false).unwrap();
    assert_eq!(legal, hand);
}

#[test]
fn tiger_follows_trump_lead_mid_trick() {
    let hand = cards("Tiger; Red 4; Red 5");
    let trick = cards("Red 10; Red 1");
    assert_eq!(valid_play(Card::TIGER, &hand, &trick, Red, false), Ok(true));
    assert_eq!(valid_play(Card::TIGER, &hand, &trick, Green, false), Ok(false));
}

#[test]
fn bear_and_bull_lead_only_without_alternatives() {
    // trump unbroken and only trump/Tiger besides: no other legal lead
    let hand = cards("Bear; Yellow 3; Yellow 40; Tiger");
    assert_eq!(valid_play(Card::BEAR, &hand, &[], Yellow, false), Ok(true));
    // once trump is broken the Yellow cards can lead instead
    assert_eq!(valid_play(Card::BEAR, &hand, &[], Yellow, true), Ok(false));

    let hand = cards("Bull; Red 1; Yellow 3");
    assert_eq!(valid_play(Card::BULL, &hand, &[], Yellow, false), Ok(false));
}

#[test]
fn lone_bear_may_lead() {
    assert_eq!(valid_play(Card::BEAR, &[Card::BEAR], &[], Black, false), Ok(true));
}

#[test]
fn following_after_bear_only_trick() {
    let hand = cards("Black 2; Red 4");
    let trick = [Card::BULL];
    assert_eq!(valid_plays(&hand, &trick, Black, false), Ok(hand.clone()));
}

#[test]
fn card_not_in_hand_is_an_error() {
    let hand = cards("Red 1");
    let card = Card::new(Green, 1);
    assert_eq!(valid_play(card, &hand, &[], Black, false), Err(PlayError::NotInHand(card)));
}

#[test]
fn card_already_in_trick_is_an_error() {
    let hand = cards("Red 1; Red 2");
    let trick = cards("Red 1");
    assert_eq!(
        valid_play(hand[0], &hand, &trick, Black, false),
        Err(PlayError::AlreadyPlayed(hand[0]))
    );
    assert_eq!(valid_plays(&hand, &trick, Black, false), Err(PlayError::AlreadyPlayed(hand[0])));
}
