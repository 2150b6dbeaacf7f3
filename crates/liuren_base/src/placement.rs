//! Noble-Deity lookup and placement of the twelve spirits on the branch ring.
//!
//! The Noble Deity (贵人) lands on a branch fixed by the day stem and by
//! whether the chart is cast in daytime. The remaining eleven spirits follow
//! it around the ring, clockwise in forward order or counter-clockwise in the
//! explicit reverse order.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::LiurenError;
use crate::spirit::{ALL_SPIRITS, REVERSE_SPIRITS, Spirit};
use crate::stem::Stem;

/// Direction in which the spirits are laid from the Noble Deity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpiritDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl SpiritDirection {
    /// Chinese name (顺 / 逆).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clockwise => "顺",
            Self::CounterClockwise => "逆",
        }
    }
}

/// Hours of the day counted as daytime, as a half-open range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaylightWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl DaylightWindow {
    /// 06:00 up to (not including) 18:00.
    pub const DEFAULT: Self = Self {
        start_hour: 6,
        end_hour: 18,
    };

    /// True if `hour` falls in the window. Hours past 23 are rejected.
    pub fn contains(&self, hour: u8) -> Result<bool, LiurenError> {
        if hour >= 24 {
            return Err(LiurenError::InvalidHour(hour));
        }
        Ok(self.start_hour <= hour && hour < self.end_hour)
    }
}

impl Default for DaylightWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Day/night resolution with the default 06:00–18:00 window.
pub fn is_daytime(hour: u8) -> Result<bool, LiurenError> {
    DaylightWindow::DEFAULT.contains(hour)
}

/// Noble-Deity branch for a day stem, as `(daytime, nighttime)`.
pub const fn noble_branches(stem: Stem) -> (Branch, Branch) {
    match stem {
        Stem::Jia | Stem::Wu | Stem::Geng => (Branch::Chou, Branch::Wei),
        Stem::Yi | Stem::Ji => (Branch::Zi, Branch::Shen),
        Stem::Bing | Stem::Ding => (Branch::Hai, Branch::You),
        Stem::Xin => (Branch::Wu, Branch::Yin),
        Stem::Ren | Stem::Gui => (Branch::Mao, Branch::Si),
    }
}

/// Noble-Deity branch for a day stem at day or night.
pub const fn noble_branch(stem: Stem, is_daytime: bool) -> Branch {
    let (day, night) = noble_branches(stem);
    if is_daytime { day } else { night }
}

/// A total, one-to-one assignment of spirits to branches.
///
/// Deserialized rings are checked against [`place_spirits_from`] for their
/// recorded Noble-Deity branch and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlacement")]
pub struct SpiritPlacement {
    spirits: [Spirit; 12],
    noble_branch: Branch,
    direction: SpiritDirection,
}

#[derive(Deserialize)]
struct RawPlacement {
    spirits: [Spirit; 12],
    noble_branch: Branch,
    direction: SpiritDirection,
}

impl TryFrom<RawPlacement> for SpiritPlacement {
    type Error = LiurenError;

    fn try_from(raw: RawPlacement) -> Result<Self, Self::Error> {
        let mut counts = [0u8; 12];
        for s in raw.spirits {
            counts[s.index() as usize] += 1;
        }
        if let Some(&s) = ALL_SPIRITS
            .iter()
            .find(|s| counts[s.index() as usize] != 1)
        {
            return Err(LiurenError::InvalidPlacement(format!(
                "{} sits on {} branches",
                s.name(),
                counts[s.index() as usize]
            )));
        }
        let expected = place_spirits_from(raw.noble_branch, raw.direction);
        if expected.spirits != raw.spirits {
            return Err(LiurenError::InvalidPlacement(format!(
                "ring does not follow the {} order from {}",
                raw.direction.name(),
                raw.noble_branch.name()
            )));
        }
        Ok(expected)
    }
}

impl SpiritPlacement {
    /// Spirit sitting on `branch`.
    pub const fn spirit_at(&self, branch: Branch) -> Spirit {
        self.spirits[branch.index() as usize]
    }

    /// Branch carrying `spirit`.
    pub fn branch_of(&self, spirit: Spirit) -> Branch {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|&b| self.spirit_at(b) == spirit)
            // Unreachable: every placement is a bijection.
            .unwrap_or(self.noble_branch)
    }

    /// Branch on which the Noble Deity was placed.
    pub const fn noble_branch(&self) -> Branch {
        self.noble_branch
    }

    pub const fn direction(&self) -> SpiritDirection {
        self.direction
    }

    /// `(branch, spirit)` pairs in branch order from 子.
    pub fn iter(&self) -> impl Iterator<Item = (Branch, Spirit)> + '_ {
        ALL_BRANCHES.iter().map(|&b| (b, self.spirit_at(b)))
    }
}

/// Place the spirits for a day stem.
pub fn place_spirits(stem: Stem, is_daytime: bool, direction: SpiritDirection) -> SpiritPlacement {
    let noble = noble_branch(stem, is_daytime);
    tracing::debug!(
        stem = stem.name(),
        is_daytime,
        noble = noble.name(),
        "noble deity placed"
    );
    place_spirits_from(noble, direction)
}

/// Place the spirits starting from an explicit Noble-Deity branch.
///
/// Used when the ring is seeded from the month general rather than the
/// day-stem table.
pub fn place_spirits_from(noble: Branch, direction: SpiritDirection) -> SpiritPlacement {
    let mut spirits = [Spirit::GuiRen; 12];
    for i in 0..12 {
        let (step, spirit) = match direction {
            SpiritDirection::Clockwise => (i as i32, ALL_SPIRITS[i]),
            SpiritDirection::CounterClockwise => (-(i as i32), REVERSE_SPIRITS[i]),
        };
        spirits[noble.offset(step).index() as usize] = spirit;
    }
    SpiritPlacement {
        spirits,
        noble_branch: noble,
        direction,
    }
}
