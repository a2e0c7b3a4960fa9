use serde::{Deserialize, Serialize};

/// Оценка выполнения плана (для подсветки в UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    Good,
    Moderate,
    Poor,
}

impl PerformanceStatus {
    /// Порог "хорошо", %
    pub const GOOD_THRESHOLD: f64 = 75.0;
    /// Порог "средне", %
    pub const MODERATE_THRESHOLD: f64 = 60.0;

    /// Классификация процента выполнения. NaN попадает в `Poor`.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= Self::GOOD_THRESHOLD {
            PerformanceStatus::Good
        } else if rate >= Self::MODERATE_THRESHOLD {
            PerformanceStatus::Moderate
        } else {
            PerformanceStatus::Poor
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PerformanceStatus::Good => "good",
            PerformanceStatus::Moderate => "moderate",
            PerformanceStatus::Poor => "poor",
        }
    }
}
