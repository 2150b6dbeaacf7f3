//! Input, option and result types for chart computation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use liuren_base::{
    Branch, DaylightWindow, FourLessons, Pillar, SpiritDirection, SpiritPlacement,
    ThreeTransmissions,
};
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::error::ChartError;
use crate::report::Interpretation;

/// Day/night of the chart, given directly or as an hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Day,
    Night,
    /// Hour of day (0-23), resolved against [`ChartOptions::daylight`].
    Hour(u8),
}

/// Subject of the question being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Career,
    Wealth,
    Relationship,
    Health,
    Study,
    #[default]
    Other,
}

pub const ALL_CATEGORIES: [QuestionCategory; 6] = [
    QuestionCategory::Career,
    QuestionCategory::Wealth,
    QuestionCategory::Relationship,
    QuestionCategory::Health,
    QuestionCategory::Study,
    QuestionCategory::Other,
];

impl QuestionCategory {
    /// Chinese name (事业, 财运, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "事业",
            Self::Wealth => "财运",
            Self::Relationship => "感情",
            Self::Health => "健康",
            Self::Study => "学业",
            Self::Other => "其他",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::Study => "study",
            Self::Other => "other",
        }
    }
}

impl Display for QuestionCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown question category text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for QuestionCategory {
    type Err = UnknownCategory;

    /// Accepts the Chinese or the English name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.name() == t || c.english_name().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Calendrical inputs for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    pub day: Pillar,
    pub hour: Pillar,
    pub time: TimeOfDay,
    /// Seeds the Noble Deity from the month general instead of the day stem.
    pub month_general: Option<Branch>,
    pub category: QuestionCategory,
}

impl ChartInput {
    /// Daytime chart with no month general and no category.
    pub fn new(day: Pillar, hour: Pillar) -> Self {
        Self {
            day,
            hour,
            time: TimeOfDay::Day,
            month_general: None,
            category: QuestionCategory::Other,
        }
    }
}

/// Engine settings shared across charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Window used when the input gives an hour of day.
    pub daylight: DaylightWindow,
    /// Direction in which spirits are laid out.
    pub direction: SpiritDirection,
    /// Compute the analysis section.
    pub include_analysis: bool,
    /// Compute the interpretation section (needs the analysis).
    pub include_interpretation: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            daylight: DaylightWindow::DEFAULT,
            direction: SpiritDirection::Clockwise,
            include_analysis: true,
            include_interpretation: true,
        }
    }
}

impl ChartOptions {
    /// Check the daylight window is non-empty and within one day.
    pub fn validate(&self) -> Result<(), ChartError> {
        let DaylightWindow {
            start_hour,
            end_hour,
        } = self.daylight;
        if start_hour >= end_hour || end_hour > 24 {
            return Err(ChartError::InvalidDaylightWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(())
    }
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub input: ChartInput,
    pub is_daytime: bool,
    pub placement: SpiritPlacement,
    pub lessons: FourLessons,
    pub transmissions: ThreeTransmissions,
    /// `None` unless [`ChartOptions::include_analysis`].
    pub analysis: Option<Analysis>,
    /// `None` unless [`ChartOptions::include_interpretation`].
    pub interpretation: Option<Interpretation>,
}
