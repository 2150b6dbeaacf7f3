//! Stem-branch pillars (ganzhi) and the sexagenary cycle.
//!
//! Stems advance modulo 10 and branches modulo 12 in lockstep, so only the
//! 60 pairs of matching parity occur. The 0-based ordinal `i` of a pillar
//! satisfies `i % 10 == stem.index()` and `i % 12 == branch.index()`; the
//! cycle index is `i + 1` (甲子 = 1, 癸亥 = 60).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::error::{LiurenError, SymbolKind};
use crate::stem::Stem;

/// A valid (stem, branch) pair of the 60-term cycle.
///
/// Fields are private: every value in circulation has passed the parity
/// check in [`Pillar::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch, rejecting combinations of opposite parity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, LiurenError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(LiurenError::InvalidPairing { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar for a 1-based cycle index (1 = 甲子 .. 60 = 癸亥).
    pub fn from_cycle_index(index: u8) -> Result<Self, LiurenError> {
        if !(1..=60).contains(&index) {
            return Err(LiurenError::InvalidCycleIndex(index));
        }
        let i = index - 1;
        Ok(Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        })
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based ordinal in the cycle (0..60).
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)` as `i = 6s − 5b (mod 60)`.
    pub const fn ordinal(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// 1-based cycle index (1..=60).
    pub const fn cycle_index(self) -> u8 {
        self.ordinal() + 1
    }

    /// Na-yin (sound) name and element; consecutive pillar pairs share one.
    pub const fn nayin(self) -> (&'static str, Element) {
        NAYIN[(self.ordinal() / 2) as usize]
    }

    /// True if this day pillar is its stem's double-specialization pair.
    pub const fn is_specialization(self) -> bool {
        self.stem.specialization_branch().index() == self.branch.index()
    }
}

/// All 60 pillars in cycle order.
pub fn all_pillars() -> impl Iterator<Item = Pillar> {
    (0..60u8).map(|i| Pillar {
        stem: Stem::from_index(i % 10),
        branch: Branch::from_index(i % 12),
    })
}

const NAYIN: [(&str, Element); 30] = [
    ("海中金", Element::Metal),
    ("炉中火", Element::Fire),
    ("大林木", Element::Wood),
    ("路旁土", Element::Earth),
    ("剑锋金", Element::Metal),
    ("山头火", Element::Fire),
    ("涧下水", Element::Water),
    ("城头土", Element::Earth),
    ("白蜡金", Element::Metal),
    ("杨柳木", Element::Wood),
    ("泉中水", Element::Water),
    ("屋上土", Element::Earth),
    ("霹雳火", Element::Fire),
    ("松柏木", Element::Wood),
    ("长流水", Element::Water),
    ("砂中金", Element::Metal),
    ("山下火", Element::Fire),
    ("平地木", Element::Wood),
    ("壁上土", Element::Earth),
    ("金箔金", Element::Metal),
    ("覆灯火", Element::Fire),
    ("天河水", Element::Water),
    ("大驿土", Element::Earth),
    ("钗钏金", Element::Metal),
    ("桑柘木", Element::Wood),
    ("大溪水", Element::Water),
    ("沙中土", Element::Earth),
    ("天上火", Element::Fire),
    ("石榴木", Element::Wood),
    ("大海水", Element::Water),
];

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl FromStr for Pillar {
    type Err = LiurenError;

    /// Parses two characters such as `甲子`, or `stem-branch` pinyin such as
    /// `jia-zi` / `jia zi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let (stem_part, branch_part) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a.to_string(), b.to_string()),
            _ => match t.split_once(['-', ' ']) {
                Some((a, b)) => (a.to_owned(), b.to_owned()),
                None => return Err(LiurenError::malformed(SymbolKind::Pillar, s)),
            },
        };
        let stem = stem_part.parse::<Stem>()?;
        let branch = branch_part.parse::<Branch>()?;
        Pillar::new(stem, branch)
    }
}

impl TryFrom<String> for Pillar {
    type Error = LiurenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        let jiazi = Pillar::from_cycle_index(1).unwrap();
        assert_eq!((jiazi.stem(), jiazi.branch()), (Stem::Jia, Branch::Zi));
        let guihai = Pillar::from_cycle_index(60).unwrap();
        assert_eq!((guihai.stem(), guihai.branch()), (Stem::Gui, Branch::Hai));
    }

    #[test]
    fn jiaxu_is_eleventh() {
        let p = Pillar::new(Stem::Jia, Branch::Xu).unwrap();
        assert_eq!(p.cycle_index(), 11);
    }

    #[test]
    fn ordinal_satisfies_both_moduli() {
        for p in all_pillars() {
            let i = p.ordinal();
            assert_eq!(i % 10, p.stem().index());
            assert_eq!(i % 12, p.branch().index());
        }
    }

    #[test]
    fn sixty_distinct_pillars() {
        let mut seen = std::collections::HashSet::new();
        for p in all_pillars() {
            assert!(seen.insert(p.cycle_index()));
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert_eq!(
            Pillar::new(Stem::Jia, Branch::Chou),
            Err(LiurenError::InvalidPairing {
                stem: Stem::Jia,
                branch: Branch::Chou
            })
        );
    }

    #[test]
    fn cycle_index_bounds() {
        assert_eq!(
            Pillar::from_cycle_index(0),
            Err(LiurenError::InvalidCycleIndex(0))
        );
        assert_eq!(
            Pillar::from_cycle_index(61),
            Err(LiurenError::InvalidCycleIndex(61))
        );
    }

    #[test]
    fn nayin_known() {
        let p: Pillar = "甲子".parse().unwrap();
        assert_eq!(p.nayin(), ("海中金", Element::Metal));
        let p: Pillar = "癸亥".parse().unwrap();
        assert_eq!(p.nayin(), ("大海水", Element::Water));
        let p: Pillar = "庚申".parse().unwrap();
        assert_eq!(p.nayin(), ("石榴木", Element::Wood));
    }

    #[test]
    fn parse_forms() {
        let p = Pillar::new(Stem::Bing, Branch::Yin).unwrap();
        assert_eq!("丙寅".parse::<Pillar>(), Ok(p));
        assert_eq!("bing-yin".parse::<Pillar>(), Ok(p));
        assert_eq!("Bing Yin".parse::<Pillar>(), Ok(p));
        assert_eq!(p.to_string(), "丙寅");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "甲".parse::<Pillar>(),
            Err(LiurenError::MalformedSymbol {
                kind: SymbolKind::Pillar,
                ..
            })
        ));
        assert!(matches!(
            "甲X".parse::<Pillar>(),
            Err(LiurenError::MalformedSymbol {
                kind: SymbolKind::Branch,
                ..
            })
        ));
        assert!(matches!(
            "甲丑".parse::<Pillar>(),
            Err(LiurenError::InvalidPairing { .. })
        ));
    }

    #[test]
    fn specialization_days() {
        assert!("庚申".parse::<Pillar>().unwrap().is_specialization());
        assert!("癸丑".parse::<Pillar>().unwrap().is_specialization());
        assert!(!"庚午".parse::<Pillar>().unwrap().is_specialization());
        assert_eq!(all_pillars().filter(|p| p.is_specialization()).count(), 10);
    }

    #[test]
    fn serde_uses_text_form() {
        let p: Pillar = "丁未".parse().unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"丁未\"");
        let back: Pillar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Pillar>("\"丁子\"").is_err());
    }
}
