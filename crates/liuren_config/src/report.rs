//! Report section: default question category and output format.

use liuren_chart::QuestionCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Category used when a chart request names none.
    #[serde(default)]
    pub category: QuestionCategory,

    /// Emit JSON instead of text by default.
    #[serde(default)]
    pub json: bool,
}
