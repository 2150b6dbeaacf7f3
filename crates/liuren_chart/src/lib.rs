//! Da Liu Ren chart orchestration and reporting.
//!
//! [`compute_chart`] runs the symbolic core from `liuren_base` and attaches
//! the analysis and interpretation sections.

pub mod analysis;
pub mod chart;
pub mod chart_types;
pub mod error;
pub mod report;

pub use analysis::{
    Analysis, Bias, Flow, FlowAnalysis, LessonAnalysis, LessonPattern, SpiritTally, analyze,
    transmission_flow,
};
pub use chart::{compute_chart, resolve_daytime};
pub use chart_types::{
    ALL_CATEGORIES, Chart, ChartInput, ChartOptions, QuestionCategory, TimeOfDay,
    UnknownCategory,
};
pub use error::ChartError;
pub use report::{Interpretation, interpret};
