//! Error types for symbol parsing and chart construction.

use thiserror::Error;

use crate::branch::Branch;
use crate::stem::Stem;

/// Which symbol family a malformed input was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Stem,
    Branch,
    Spirit,
    Pillar,
}

impl SymbolKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
            Self::Spirit => "spirit",
            Self::Pillar => "pillar",
        }
    }
}

/// Errors from Da Liu Ren base calculations.
///
/// Every variant is fatal to the single computation that raised it. The
/// engine performs no I/O, so nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LiurenError {
    /// Input text outside the fixed 10-stem / 12-branch / 12-spirit domains.
    #[error("malformed {}: {symbol:?}", .kind.name())]
    MalformedSymbol { kind: SymbolKind, symbol: String },
    /// Stem and branch of opposite parity never meet in the 60-term cycle.
    #[error("invalid pairing: {}{} is not part of the sexagenary cycle", .stem.name(), .branch.name())]
    InvalidPairing { stem: Stem, branch: Branch },
    /// Cycle index outside 1..=60.
    #[error("invalid cycle index: {0} (expected 1..=60)")]
    InvalidCycleIndex(u8),
    /// Hour of day outside 0..=23.
    #[error("invalid hour: {0} (expected 0..=23)")]
    InvalidHour(u8),
    /// Table index outside the symbol family's range.
    #[error("invalid {} index: {index}", .kind.name())]
    InvalidIndex { kind: SymbolKind, index: u8 },
    /// Spirit ring that is not the layout of any Noble-Deity branch and direction.
    #[error("invalid spirit placement: {0}")]
    InvalidPlacement(String),
    /// Lessons that do not follow from their day pillar and plate rotation.
    #[error("invalid four lessons: {0}")]
    InvalidLessons(String),
}

impl LiurenError {
    pub(crate) fn malformed(kind: SymbolKind, symbol: &str) -> Self {
        Self::MalformedSymbol {
            kind,
            symbol: symbol.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_kind() {
        let e = LiurenError::malformed(SymbolKind::Branch, "X");
        assert_eq!(e.to_string(), "malformed branch: \"X\"");
    }

    #[test]
    fn pairing_message_shows_pair() {
        let e = LiurenError::InvalidPairing {
            stem: Stem::Jia,
            branch: Branch::Chou,
        };
        assert_eq!(
            e.to_string(),
            "invalid pairing: 甲丑 is not part of the sexagenary cycle"
        );
    }

    #[test]
    fn index_message_names_kind() {
        let e = LiurenError::InvalidIndex {
            kind: SymbolKind::Stem,
            index: 10,
        };
        assert_eq!(e.to_string(), "invalid stem index: 10");
    }
}
