// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand ranking category, ordered from the weakest to the strongest.
///
/// The order follows the score offsets, a back straight is a suited
/// A-2-3-4-5 and sits between four of a kind and the other straight flushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category applies.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPairs,
    /// Three cards of the same rank.
    ThreeCard,
    /// Five consecutive ranks not of the same suit.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourCard,
    /// A-2-3-4-5 of the same suit, an off-suit A-2-3-4-5 is a
    /// [HandRank::Straight].
    BackStraight,
    /// Five consecutive ranks of the same suit up to king high.
    StraightFlush,
    /// A-K-Q-J-T of the same suit.
    RoyalStraightFlush,
}

impl HandRank {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandRank; 11] = {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPairs,
            ThreeCard,
            Straight,
            Flush,
            FullHouse,
            FourCard,
            BackStraight,
            StraightFlush,
            RoyalStraightFlush,
        ]
    };

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::ALL.into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "high card",
            HandRank::OnePair => "one pair",
            HandRank::TwoPairs => "two pairs",
            HandRank::ThreeCard => "three card",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourCard => "four card",
            HandRank::BackStraight => "back straight",
            HandRank::StraightFlush => "straight flush",
            HandRank::RoyalStraightFlush => "royal straight flush",
        }
    }

    /// The category base score.
    ///
    /// High card hands score the top card value (deuce=1,...,ace=13) so all
    /// other categories start above the highest card score.
    pub fn offset(&self) -> u32 {
        match self {
            HandRank::HighCard => 0,
            HandRank::OnePair => 14,
            HandRank::TwoPairs => 15,
            HandRank::ThreeCard => 16,
            HandRank::Straight => 17,
            HandRank::Flush => 18,
            HandRank::FullHouse => 19,
            HandRank::FourCard => 20,
            HandRank::BackStraight => 21,
            HandRank::StraightFlush => 22,
            HandRank::RoyalStraightFlush => 23,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Groups of cards with the same rank found in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// One pair and three unmatched cards.
    OnePair,
    /// Two pairs and an unmatched card.
    TwoPairs,
    /// Three cards of the same rank, with or without a pair.
    ThreeCard,
    /// Four cards of the same rank.
    FourCard,
}

impl Kind {
    /// The kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::OnePair => "one pair",
            Kind::TwoPairs => "two pairs",
            Kind::ThreeCard => "three card",
            Kind::FourCard => "four card",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_order() {
        for pair in HandRank::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].offset() < pair[1].offset());
        }

        // The best high card scores 13.
        assert!(HandRank::OnePair.offset() > 13);
    }

    #[test]
    fn rank_names() {
        let names = HandRank::ranks().rev().map(|r| r.to_string()).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "royal straight flush",
                "straight flush",
                "back straight",
                "four card",
                "full house",
                "flush",
                "straight",
                "three card",
                "two pairs",
                "one pair",
                "high card",
            ]
        );

        assert_eq!(Kind::FourCard.to_string(), "four card");
        assert_eq!(Kind::TwoPairs.name(), "two pairs");
    }

    #[test]
    fn wheel_categories() {
        let rank = |faces: &str| {
            let hand = faces.parse::<crate::Hand>().unwrap();
            crate::tell_hand_ranking(hand.cards()).unwrap()
        };
        assert_eq!(rank("AC 2C 3C 4C 5C"), HandRank::BackStraight);
        assert_eq!(rank("AC 2H 3S 4D 5S"), HandRank::Straight);
    }

    #[test]
    fn serde_rank() {
        let json = serde_json::to_string(&HandRank::FullHouse).unwrap();
        assert_eq!(json, "\"FullHouse\"");
        let rank: HandRank = serde_json::from_str(&json).unwrap();
        assert_eq!(rank, HandRank::FullHouse);
    }
}
