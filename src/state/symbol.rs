//! Reel symbols and their payout multipliers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A symbol that can land on a reel.
///
/// Declaration order is the reel order; index-based draws rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Cherry,
    Lemon,
    Seven,
    Bell,
    Star,
    Diamond,
}

impl Symbol {
    /// Number of distinct symbols.
    pub const COUNT: usize = 6;

    /// All symbols in reel order.
    pub const ALL: [Symbol; Self::COUNT] = [
        Self::Cherry,
        Self::Lemon,
        Self::Seven,
        Self::Bell,
        Self::Star,
        Self::Diamond,
    ];

    /// Payout factor applied to the bet when three of this symbol line up.
    pub fn multiplier(&self) -> i64 {
        match self {
            Self::Cherry => 2,
            Self::Lemon => 3,
            Self::Seven => 5,
            Self::Bell => 10,
            Self::Star => 15,
            Self::Diamond => 25,
        }
    }

    /// Image asset name used by the presentation layer.
    pub fn image(&self) -> &'static str {
        match self {
            Self::Cherry => "slot-cherries",
            Self::Lemon => "slot-lemon",
            Self::Seven => "slot-seven",
            Self::Bell => "slot-bell",
            Self::Star => "slot-star",
            Self::Diamond => "slot-diamond",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cherry => "cherry",
            Self::Lemon => "lemon",
            Self::Seven => "seven",
            Self::Bell => "bell",
            Self::Star => "star",
            Self::Diamond => "diamond",
        }
    }

    /// Position of this symbol in reel order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a symbol by its reel position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "symbol": self.as_str(),
            "image": self.image(),
            "multiplier": self.multiplier()
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(Symbol::Cherry.multiplier(), 2);
        assert_eq!(Symbol::Lemon.multiplier(), 3);
        assert_eq!(Symbol::Seven.multiplier(), 5);
        assert_eq!(Symbol::Bell.multiplier(), 10);
        assert_eq!(Symbol::Star.multiplier(), 15);
        assert_eq!(Symbol::Diamond.multiplier(), 25);
    }

    #[test]
    fn test_index_lookup() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
            assert_eq!(Symbol::from_index(i), Some(*symbol));
        }
        assert_eq!(Symbol::from_index(Symbol::COUNT), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Symbol::Diamond).unwrap();
        assert_eq!(json, "\"diamond\"");

        let parsed: Symbol = serde_json::from_str("\"bell\"").unwrap();
        assert_eq!(parsed, Symbol::Bell);
    }

    #[test]
    fn test_to_json() {
        let json = Symbol::Cherry.to_json();
        assert_eq!(json["symbol"], "cherry");
        assert_eq!(json["image"], "slot-cherries");
        assert_eq!(json["multiplier"], 2);
    }
}
