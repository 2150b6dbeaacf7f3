//! The ten heavenly stems (tiangan) and their fixed correspondences.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::{LiurenError, SymbolKind};

/// The 10 heavenly stems, starting from Jia (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Toneless pinyin of the stem.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at `index % 10`. Wraps around the cycle; use
    /// [`Stem::try_from_index`] to reject indices past 9.
    pub const fn from_index(index: u8) -> Stem {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem at `index`, which must be in 0..10.
    pub fn try_from_index(index: u8) -> Result<Stem, LiurenError> {
        if index >= 10 {
            return Err(LiurenError::InvalidIndex {
                kind: SymbolKind::Stem,
                index,
            });
        }
        Ok(ALL_STEMS[index as usize])
    }

    /// Element: two consecutive stems per element, wood first.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Yang for even indices, yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Branch the stem lodges on when laying the first lesson.
    ///
    /// 甲寅 乙卯 丙巳 丁午 戊巳 己午 庚申 辛酉 壬亥 癸子.
    pub const fn lodging_branch(self) -> Branch {
        match self {
            Self::Jia => Branch::Yin,
            Self::Yi => Branch::Mao,
            Self::Bing => Branch::Si,
            Self::Ding => Branch::Wu,
            Self::Wu => Branch::Si,
            Self::Ji => Branch::Wu,
            Self::Geng => Branch::Shen,
            Self::Xin => Branch::You,
            Self::Ren => Branch::Hai,
            Self::Gui => Branch::Zi,
        }
    }

    /// Branch that forms this stem's double-specialization day.
    ///
    /// 甲寅 乙卯 丙午 丁未 戊戌 己未 庚申 辛酉 壬子 癸丑. Every pair has matching
    /// parity, so each is a valid day pillar.
    pub const fn specialization_branch(self) -> Branch {
        match self {
            Self::Jia => Branch::Yin,
            Self::Yi => Branch::Mao,
            Self::Bing => Branch::Wu,
            Self::Ding => Branch::Wei,
            Self::Wu => Branch::Xu,
            Self::Ji => Branch::Wei,
            Self::Geng => Branch::Shen,
            Self::Xin => Branch::You,
            Self::Ren => Branch::Zi,
            Self::Gui => Branch::Chou,
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = LiurenError;

    /// Accepts the Chinese character or case-insensitive pinyin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| stem.name() == t || stem.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| LiurenError::malformed(SymbolKind::Stem, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lookup_wraps_or_rejects() {
        assert_eq!(Stem::from_index(10), Stem::from_index(0));
        assert_eq!(Stem::try_from_index(9), Ok(Stem::from_index(9)));
        assert_eq!(
            Stem::try_from_index(10),
            Err(LiurenError::InvalidIndex {
                kind: SymbolKind::Stem,
                index: 10
            })
        );
    }

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn polarity_alternates_from_yang() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Geng.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Ren.element(), Element::Water);
    }

    #[test]
    fn specialization_pairs_share_parity() {
        for s in ALL_STEMS {
            assert_eq!(
                s.index() % 2,
                s.specialization_branch().index() % 2,
                "{}",
                s.name()
            );
        }
    }

    #[test]
    fn parse_character_and_pinyin() {
        assert_eq!("庚".parse::<Stem>(), Ok(Stem::Geng));
        assert_eq!("Geng".parse::<Stem>(), Ok(Stem::Geng));
        assert_eq!(" gui ".parse::<Stem>(), Ok(Stem::Gui));
    }

    #[test]
    fn parse_rejects_branch_character() {
        let err = "子".parse::<Stem>().unwrap_err();
        assert!(matches!(
            err,
            LiurenError::MalformedSymbol {
                kind: SymbolKind::Stem,
                ..
            }
        ));
    }
}
