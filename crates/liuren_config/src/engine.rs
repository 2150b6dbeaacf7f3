//! Engine section: day/night window and spirit direction.

use liuren_base::SpiritDirection;
use serde::{Deserialize, Serialize};

const fn default_day_start() -> u8 {
    6
}

const fn default_day_end() -> u8 {
    18
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// First daytime hour (inclusive).
    #[serde(default = "default_day_start")]
    pub day_start_hour: u8,

    /// First nighttime hour after the day (exclusive end of daytime).
    #[serde(default = "default_day_end")]
    pub day_end_hour: u8,

    /// `clockwise` or `counter-clockwise`.
    #[serde(default)]
    pub direction: SpiritDirection,

    #[serde(default = "default_true")]
    pub include_analysis: bool,

    #[serde(default = "default_true")]
    pub include_interpretation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            day_start_hour: default_day_start(),
            day_end_hour: default_day_end(),
            direction: SpiritDirection::default(),
            include_analysis: true,
            include_interpretation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EngineConfig::default();
        assert_eq!(config.day_start_hour, 6);
        assert_eq!(config.day_end_hour, 18);
        assert_eq!(config.direction, SpiritDirection::Clockwise);
        assert!(config.include_analysis);
    }
}
