//! The twelve earthly branches (dizhi) and ring arithmetic.
//!
//! The branches form a fixed ring of 12 positions starting at Zi (子).
//! Offsets wrap modulo 12 in either direction; the opposite of a branch is
//! six positions away.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::{LiurenError, SymbolKind};

/// The 12 earthly branches, starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in ring order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Compass direction attached to branches and spirits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    South,
    West,
    North,
    Center,
}

impl Direction {
    /// Chinese name (东 南 西 北 中).
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "东",
            Self::South => "南",
            Self::West => "西",
            Self::North => "北",
            Self::Center => "中",
        }
    }
}

/// Season a branch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Chinese name (春 夏 秋 冬).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "春",
            Self::Summer => "夏",
            Self::Autumn => "秋",
            Self::Winter => "冬",
        }
    }
}

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Toneless pinyin of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based ring index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index % 12`. Wraps around the ring like [`Branch::offset`];
    /// use [`Branch::try_from_index`] to reject indices past 11.
    pub const fn from_index(index: u8) -> Branch {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch at `index`, which must be in 0..12.
    pub fn try_from_index(index: u8) -> Result<Branch, LiurenError> {
        if index >= 12 {
            return Err(LiurenError::InvalidIndex {
                kind: SymbolKind::Branch,
                index,
            });
        }
        Ok(ALL_BRANCHES[index as usize])
    }

    /// Branch `steps` positions away around the ring (negative = backwards).
    pub const fn offset(self, steps: i32) -> Branch {
        let idx = (self.index() as i32 + steps).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }

    /// Next branch clockwise.
    pub const fn next(self) -> Branch {
        self.offset(1)
    }

    /// Forward (clockwise) distance from `self` to `to`, in 0..12.
    pub const fn forward_distance(self, to: Branch) -> u8 {
        (to.index() + 12 - self.index()) % 12
    }

    /// The branch six positions away (chong, clash).
    pub const fn opposite(self) -> Branch {
        self.offset(6)
    }

    /// True if the two branches sit directly across the ring.
    pub const fn is_opposite(self, other: Branch) -> bool {
        self.forward_distance(other) == 6
    }

    /// Six-harmony (liuhe) partner: 子丑 寅亥 卯戌 辰酉 巳申 午未.
    ///
    /// Partners' indices always sum to 1 (mod 12).
    pub const fn harmony_partner(self) -> Branch {
        Branch::from_index((13 - self.index()) % 12)
    }

    /// Element: 子亥 water, 寅卯 wood, 巳午 fire, 申酉 metal, four corners earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Yang for even indices, yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Direction::East,
            Self::Si | Self::Wu | Self::Wei => Direction::South,
            Self::Shen | Self::You | Self::Xu => Direction::West,
            Self::Hai | Self::Zi | Self::Chou => Direction::North,
        }
    }

    pub const fn season(self) -> Season {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Season::Spring,
            Self::Si | Self::Wu | Self::Wei => Season::Summer,
            Self::Shen | Self::You | Self::Xu => Season::Autumn,
            Self::Hai | Self::Zi | Self::Chou => Season::Winter,
        }
    }

    /// Two-hour watch as `(start_hour, end_hour)`; Zi straddles midnight (23, 1).
    pub const fn watch_hours(self) -> (u8, u8) {
        let start = (self.index() * 2 + 23) % 24;
        (start, (start + 2) % 24)
    }

    /// Three-harmony (sanhe) frame containing this branch, with its element.
    ///
    /// 申子辰 water, 亥卯未 wood, 寅午戌 fire, 巳酉丑 metal. The frame members
    /// sit four positions apart, ordered birth / peak / grave.
    pub const fn three_harmony(self) -> ([Branch; 3], Element) {
        match self.index() % 4 {
            0 => ([Branch::Shen, Branch::Zi, Branch::Chen], Element::Water),
            1 => ([Branch::Si, Branch::You, Branch::Chou], Element::Metal),
            2 => ([Branch::Yin, Branch::Wu, Branch::Xu], Element::Fire),
            _ => ([Branch::Hai, Branch::Mao, Branch::Wei], Element::Wood),
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = LiurenError;

    /// Accepts the Chinese character or case-insensitive pinyin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == t || b.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| LiurenError::malformed(SymbolKind::Branch, s))
    }
}
