//! Error types for chart computation.

use liuren_base::LiurenError;
use thiserror::Error;

/// Errors from [`compute_chart`](crate::compute_chart).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the symbolic core (bad hour, bad pairing, ...).
    #[error(transparent)]
    Base(#[from] LiurenError),
    /// Daytime window that is empty or runs past midnight.
    #[error("invalid daylight window: {start_hour}..{end_hour} (need start < end <= 24)")]
    InvalidDaylightWindow { start_hour: u8, end_hour: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_errors_pass_through() {
        let e: ChartError = LiurenError::InvalidHour(25).into();
        assert_eq!(e.to_string(), "invalid hour: 25 (expected 0..=23)");
    }

    #[test]
    fn window_message() {
        let e = ChartError::InvalidDaylightWindow {
            start_hour: 18,
            end_hour: 6,
        };
        assert!(e.to_string().contains("18..6"));
    }
}
