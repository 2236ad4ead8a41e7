// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Every function takes a borrowed slice of five cards, validates it into a
//! [Hand], and never depends on the order of the cards. The category of a hand
//! is found by walking the [RULES] table from the strongest category to the
//! weakest, the first matching rule wins and gives the hand score.
use log::trace;

use crate::{Card, EvalError, Hand, Rank};

mod category;
mod value;

pub use category::{HandRank, Kind};
pub use value::HandValue;

/// The rank mask of an A-2-3-4-5 straight.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// The rank mask of five consecutive ranks starting at deuce.
const RUN: u16 = 0b1_1111;

/// A classification rule.
pub struct Rule {
    /// The category assigned by this rule.
    pub rank: HandRank,
    /// Checks if the hand belongs to the category.
    pub matches: fn(&Hand) -> bool,
    /// The score added to the category offset.
    pub tie_break: fn(&Hand) -> u32,
}

/// Classification rules ordered by precedence.
pub const RULES: &[Rule] = &[
    Rule {
        rank: HandRank::RoyalStraightFlush,
        matches: royal_straight_flush,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::StraightFlush,
        matches: straight_flush,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::BackStraight,
        matches: back_straight_flush,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::FourCard,
        matches: four_card,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::FullHouse,
        matches: full_house,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::Flush,
        matches: flush,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::Straight,
        matches: straight,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::ThreeCard,
        matches: three_card,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::TwoPairs,
        matches: two_pairs,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::OnePair,
        matches: one_pair,
        tie_break: no_tie_break,
    },
    Rule {
        rank: HandRank::HighCard,
        matches: any_hand,
        tie_break: top_card,
    },
];

/// Checks if all five cards have the same suit.
pub fn is_flush(cards: &[Card]) -> Result<bool, EvalError> {
    Hand::new(cards).map(|hand| flush(&hand))
}

/// Checks if the five cards have consecutive ranks, an A-2-3-4-5 wheel is a
/// straight too.
pub fn is_straight(cards: &[Card]) -> Result<bool, EvalError> {
    Hand::new(cards).map(|hand| straight(&hand))
}

/// Groups the cards by rank and returns the kind of the largest groups.
///
/// A three of a kind with a pair is reported as [Kind::ThreeCard], full
/// houses are told apart by [tell_hand_ranking].
pub fn find_a_kind(cards: &[Card]) -> Result<Option<Kind>, EvalError> {
    Hand::new(cards).map(|hand| kind(&hand))
}

/// Returns the hand category.
pub fn tell_hand_ranking(cards: &[Card]) -> Result<HandRank, EvalError> {
    let hand = Hand::new(cards)?;
    Ok(classify(&hand).0)
}

/// Returns the hand score.
///
/// A hand in a stronger category always scores more than a hand in a weaker
/// one, high card hands score the value of their top card. Hands in the same
/// category, other than high card, get the same score.
pub fn rank(cards: &[Card]) -> Result<u32, EvalError> {
    let hand = Hand::new(cards)?;
    Ok(classify(&hand).1)
}

/// Returns the positions of the hands with the highest score, more than one
/// position for ties.
pub fn winners<H: AsRef<[Card]>>(hands: &[H]) -> Result<Vec<usize>, EvalError> {
    let scores = hands
        .iter()
        .map(|h| rank(h.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let best = scores.iter().copied().max();
    Ok(scores
        .iter()
        .enumerate()
        .filter(|(_, s)| Some(**s) == best)
        .map(|(idx, _)| idx)
        .collect())
}

/// Finds the category and score for a hand.
pub(crate) fn classify(hand: &Hand) -> (HandRank, u32) {
    let rule = RULES
        .iter()
        .find(|rule| (rule.matches)(hand))
        .unwrap_or_else(|| unreachable!("High card matches any hand"));

    let score = rule.rank.offset() + (rule.tie_break)(hand);
    trace!("Hand {hand} is {} with score {score}", rule.rank);
    (rule.rank, score)
}

/// The top rank of a straight, a five for the wheel.
pub(crate) fn straight_top(hand: &Hand) -> Option<Rank> {
    let mask = hand.rank_mask();
    if mask == WHEEL {
        return Some(Rank::Five);
    }

    let low = mask.trailing_zeros();
    if mask.checked_shr(low) == Some(RUN) {
        Rank::from_index(low as u8 + 4)
    } else {
        None
    }
}

pub(crate) fn kind(hand: &Hand) -> Option<Kind> {
    let groups = hand.groups();
    match (groups[0].0, groups[1].0) {
        (4, _) => Some(Kind::FourCard),
        (3, _) => Some(Kind::ThreeCard),
        (2, 2) => Some(Kind::TwoPairs),
        (2, _) => Some(Kind::OnePair),
        _ => None,
    }
}

fn pairs_count(hand: &Hand) -> usize {
    hand.groups().iter().filter(|(n, _)| *n == 2).count()
}

fn flush(hand: &Hand) -> bool {
    hand.common_suit() != 0
}

fn straight(hand: &Hand) -> bool {
    straight_top(hand).is_some()
}

fn royal_straight_flush(hand: &Hand) -> bool {
    flush(hand) && straight_top(hand) == Some(Rank::Ace)
}

fn straight_flush(hand: &Hand) -> bool {
    flush(hand) && straight(hand) && hand.rank_mask() != WHEEL
}

fn back_straight_flush(hand: &Hand) -> bool {
    flush(hand) && hand.rank_mask() == WHEEL
}

fn four_card(hand: &Hand) -> bool {
    kind(hand) == Some(Kind::FourCard)
}

fn full_house(hand: &Hand) -> bool {
    kind(hand) == Some(Kind::ThreeCard) && pairs_count(hand) == 1
}

fn three_card(hand: &Hand) -> bool {
    kind(hand) == Some(Kind::ThreeCard)
}

fn two_pairs(hand: &Hand) -> bool {
    kind(hand) == Some(Kind::TwoPairs)
}

fn one_pair(hand: &Hand) -> bool {
    kind(hand) == Some(Kind::OnePair)
}

fn any_hand(_hand: &Hand) -> bool {
    true
}

fn no_tie_break(_hand: &Hand) -> u32 {
    0
}

/// The top card score, deuce=1,...,ace=13.
fn top_card(hand: &Hand) -> u32 {
    hand.cards()
        .iter()
        .map(|c| c.value() as u32 - 1)
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use std::cmp::Reverse;

    fn cards(faces: &str) -> Vec<Card> {
        faces
            .split_whitespace()
            .map(|f| Card::from_face(f).unwrap())
            .collect()
    }

    fn ranking(faces: &str) -> HandRank {
        tell_hand_ranking(&cards(faces)).unwrap()
    }

    fn score(faces: &str) -> u32 {
        rank(&cards(faces)).unwrap()
    }

    #[test]
    fn flush_detection() {
        assert!(is_flush(&cards("AC JC TC 9C 8C")).unwrap());
        assert!(is_flush(&cards("2H 3H 4H 5H 7H")).unwrap());
        assert!(!is_flush(&cards("AC JC TC 9C 8D")).unwrap());
        assert!(!is_flush(&cards("AS AH AC AD KS")).unwrap());
    }

    #[test]
    fn straight_detection() {
        assert!(is_straight(&cards("AC KH QS JD TS")).unwrap());
        assert!(is_straight(&cards("KC QH JS TD 9S")).unwrap());
        assert!(is_straight(&cards("6C 2H 4S 3D 5S")).unwrap());
        assert!(is_straight(&cards("AC 2H 3S 4D 5S")).unwrap());
        assert!(is_straight(&cards("5C 4C 3C 2C AC")).unwrap());

        // Non consecutive.
        assert!(!is_straight(&cards("AC KH QS JD 9S")).unwrap());
        // No wrap around the ace.
        assert!(!is_straight(&cards("QC KH AS 2D 3S")).unwrap());
        assert!(!is_straight(&cards("2C 3H 4S 5D 7S")).unwrap());
        // Duplicate ranks.
        assert!(!is_straight(&cards("AC KH QS JD JS")).unwrap());
        assert!(!is_straight(&cards("AC AH 2S 3D 4S")).unwrap());
    }

    #[test]
    fn straight_tops() {
        let top = |faces: &str| straight_top(&faces.parse::<Hand>().unwrap());
        assert_eq!(top("AC KH QS JD TS"), Some(Rank::Ace));
        assert_eq!(top("AC 2H 3S 4D 5S"), Some(Rank::Five));
        assert_eq!(top("6C 2H 4S 3D 5S"), Some(Rank::Six));
        assert_eq!(top("6C 2H 4S 3D 6S"), None);
    }

    #[test]
    fn a_kind_detection() {
        let find = |faces: &str| find_a_kind(&cards(faces)).unwrap();
        assert_eq!(find("9S 9H 9C 9D AC"), Some(Kind::FourCard));
        assert_eq!(find("9S 9H 9C 8D AC"), Some(Kind::ThreeCard));
        assert_eq!(find("8C 8H 8S 7C 7D"), Some(Kind::ThreeCard));
        assert_eq!(find("9S 9H 8C 8D AC"), Some(Kind::TwoPairs));
        assert_eq!(find("9S 9H 7C 8D AC"), Some(Kind::OnePair));
        assert_eq!(find("9S 2H 7C 8D AC"), None);
    }

    #[test]
    fn hand_rankings() {
        assert_eq!(ranking("AS KS QS JS TS"), HandRank::RoyalStraightFlush);
        assert_eq!(ranking("KH QH JH TH 9H"), HandRank::StraightFlush);
        assert_eq!(ranking("6D 5D 4D 3D 2D"), HandRank::StraightFlush);
        assert_eq!(ranking("AC 2C 3C 4C 5C"), HandRank::BackStraight);
        assert_eq!(ranking("9S 9H 9C 9D AC"), HandRank::FourCard);
        assert_eq!(ranking("8C 8H 8S 7C 7D"), HandRank::FullHouse);
        assert_eq!(ranking("AC JC TC 9C 8C"), HandRank::Flush);
        assert_eq!(ranking("AC KH QS JD TS"), HandRank::Straight);
        assert_eq!(ranking("AC 2H 3S 4D 5S"), HandRank::Straight);
        assert_eq!(ranking("7C 7H 7S KD 2S"), HandRank::ThreeCard);
        assert_eq!(ranking("7C 7H KS KD 2S"), HandRank::TwoPairs);
        assert_eq!(ranking("7C 7H QS KD 2S"), HandRank::OnePair);
        assert_eq!(ranking("7C 8H QS KD 2S"), HandRank::HighCard);
    }

    #[test]
    fn ranking_names() {
        let name = |faces: &str| ranking(faces).name();
        assert_eq!(name("AS KS QS JS TS"), "royal straight flush");
        assert_eq!(name("9S 9H 9C 9D AC"), "four card");
        assert_eq!(name("8C 8H 8S 7C 7D"), "full house");
        assert_eq!(name("AC JC TC 9C 8C"), "flush");
        assert_eq!(name("AC KH QS JD TS"), "straight");
    }

    #[test]
    fn scores() {
        assert_eq!(score("AS KS QS JS TS"), 23);
        assert_eq!(score("KH QH JH TH 9H"), 22);
        assert_eq!(score("AC 2C 3C 4C 5C"), 21);
        assert_eq!(score("9S 9H 9C 9D AC"), 20);
        assert_eq!(score("8C 8H 8S 7C 7D"), 19);
        assert_eq!(score("AC JC TC 9C 8C"), 18);
        assert_eq!(score("AC KH QS JD TS"), 17);
        assert_eq!(score("7C 7H 7S KD 2S"), 16);
        assert_eq!(score("7C 7H KS KD 2S"), 15);
        assert_eq!(score("7C 7H QS KD 2S"), 14);
        assert_eq!(score("7C 8H QS AD 2S"), 13);
        assert_eq!(score("7C 8H QS KD 2S"), 12);
        assert_eq!(score("7C 8H 3S 4D 2S"), 6);
    }

    #[test]
    fn same_category_same_score() {
        // Kickers don't break ties.
        assert_eq!(score("7C 7H QS KD 2S"), score("7D 7S QH KC 3S"));
        assert_eq!(score("2C 2H 3S 4D 6S"), score("AC AH KS QD JS"));
        assert_eq!(score("2C 2H 2S 3D 3S"), score("AC AH AS KD KS"));
    }

    #[test]
    fn higher_category_always_wins() {
        let worst_four = score("2C 2H 2S 2D 3S");
        let best_full = score("AC AH AS KD KS");
        assert!(worst_four > best_full);

        let worst_pair = score("2C 2H 3S 4D 5S");
        let best_high = score("AC KH QS JD 9S");
        assert!(worst_pair > best_high);

        let back = score("AH 2H 3H 4H 5H");
        assert!(back > worst_four);
        assert!(score("6H 2H 3H 4H 5H") > back);
    }

    #[test]
    fn invalid_hands() {
        let four = cards("AS KS QS JS");
        assert_eq!(rank(&four), Err(EvalError::InvalidHandSize(4)));
        assert_eq!(is_flush(&four), Err(EvalError::InvalidHandSize(4)));
        assert_eq!(is_straight(&four), Err(EvalError::InvalidHandSize(4)));
        assert_eq!(find_a_kind(&four), Err(EvalError::InvalidHandSize(4)));

        let dup = cards("9C 9C 9D 9H 2S");
        assert!(matches!(
            tell_hand_ranking(&dup),
            Err(EvalError::DuplicateCard(_))
        ));
    }

    #[test]
    fn input_not_reordered() {
        let hand = cards("2S QS 7S AS 9S");
        let copy = hand.iter().map(Card::id).collect::<Vec<_>>();
        assert_eq!(tell_hand_ranking(&hand).unwrap(), HandRank::Flush);
        assert_eq!(hand.iter().map(Card::id).collect::<Vec<_>>(), copy);
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(42);
        let hands = [
            "AS KS QS JS TS",
            "AC 2C 3C 4C 5C",
            "9S 9H 9C 9D AC",
            "8C 8H 8S 7C 7D",
            "AC JC TC 9C 8C",
            "AC 2H 3S 4D 5S",
            "7C 7H KS KD 2S",
            "7C 8H QS KD 2S",
        ];

        for faces in hands {
            let mut hand = cards(faces);
            let expected = (
                tell_hand_ranking(&hand).unwrap(),
                rank(&hand).unwrap(),
                is_flush(&hand).unwrap(),
                is_straight(&hand).unwrap(),
                find_a_kind(&hand).unwrap(),
            );

            for _ in 0..50 {
                hand.shuffle(&mut rng);
                let got = (
                    tell_hand_ranking(&hand).unwrap(),
                    rank(&hand).unwrap(),
                    is_flush(&hand).unwrap(),
                    is_straight(&hand).unwrap(),
                    find_a_kind(&hand).unwrap(),
                );
                assert_eq!(got, expected, "{faces}");
            }
        }
    }

    #[test]
    fn sort_hands_by_score() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut hands = [
            "7C 8H QS KD 2S",
            "AC KH QS JD TS",
            "9S 9H 9C 9D AC",
            "7C 7H QS KD 2S",
            "AS KS QS JS TS",
            "8C 8H 8S 7C 7D",
        ]
        .map(cards);

        let by_score = |hands: &[Vec<Card>]| {
            let mut hands = hands
                .iter()
                .map(|h| Hand::new(h).unwrap())
                .collect::<Vec<_>>();
            hands.sort_by_key(|h| Reverse(rank(h.cards()).unwrap()));
            hands
        };

        let expected = by_score(&hands);
        for hand in hands.iter_mut() {
            hand.shuffle(&mut rng);
        }

        let shuffled = by_score(&hands);
        assert_eq!(shuffled.len(), expected.len());
        for (a, b) in shuffled.iter().zip(&expected) {
            assert!(a.same_cards(b), "{a} != {b}");
        }

        let top = tell_hand_ranking(shuffled[0].cards()).unwrap();
        assert_eq!(top, HandRank::RoyalStraightFlush);
    }

    #[test]
    fn winning_hands() {
        let hands = [
            cards("7C 7H QS KD 2S"),
            cards("AC KH QS JD TS"),
            cards("3C 4H 5S 6D 7S"),
        ];
        assert_eq!(winners(&hands).unwrap(), [1, 2]);

        let hands = [cards("7C 7H QS KD 2S"), cards("AC KH 9S JD TS")];
        assert_eq!(winners(&hands).unwrap(), [0]);

        let empty: [Vec<Card>; 0] = [];
        assert!(winners(&empty).unwrap().is_empty());

        let bad = [cards("7C 7H QS KD 2S"), cards("AC KH")];
        assert_eq!(winners(&bad), Err(EvalError::InvalidHandSize(2)));
    }

    #[test]
    fn all_hands_categories() {
        let mut counts = [0usize; HandRank::ALL.len()];
        crate::Deck::new().for_each_hand(|hand| {
            let rank = tell_hand_ranking(hand).unwrap();
            counts[rank as usize] += 1;
        });

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPairs as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeCard as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourCard as usize], 624);
        assert_eq!(counts[HandRank::BackStraight as usize], 4);
        assert_eq!(counts[HandRank::StraightFlush as usize], 32);
        assert_eq!(counts[HandRank::RoyalStraightFlush as usize], 4);
    }

    #[test]
    fn concurrent_evaluation() {
        let hands = [
            cards("AS KS QS JS TS"),
            cards("8C 8H 8S 7C 7D"),
            cards("7C 8H QS KD 2S"),
        ];
        let expected = hands.iter().map(|h| rank(h).unwrap()).collect::<Vec<_>>();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        let got = hands.iter().map(|h| rank(h).unwrap()).collect::<Vec<_>>();
                        assert_eq!(got, expected);
                    }
                });
            }
        });
    }
}
