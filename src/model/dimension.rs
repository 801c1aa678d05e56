use serde::{Deserialize, Serialize};

/// The four Core 4 measurement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Speed,
    Quality,
    Impact,
    Effectiveness,
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Speed => "speed",
            Dimension::Quality => "quality",
            Dimension::Impact => "impact",
            Dimension::Effectiveness => "effectiveness",
        }
    }

    /// Unit the dimension score is reported in. Each dimension keeps its
    /// natural unit; benchmark thresholds are calibrated against these.
    pub fn unit(self) -> &'static str {
        match self {
            Dimension::Speed => "PRs/week",
            Dimension::Quality => "avg (1-5, 5 best)",
            Dimension::Impact => "% time on new features",
            Dimension::Effectiveness => "% favorable",
        }
    }

    /// Minimum raw rating that counts as favorable for the pooled
    /// overall score.
    pub fn favorable_threshold(self) -> f64 {
        match self {
            Dimension::Speed => 3.5,
            Dimension::Quality | Dimension::Impact | Dimension::Effectiveness => 4.0,
        }
    }

    /// Quality stores an ordinal where higher is better but its benchmark
    /// thresholds are pre-inverted: scores at or below a threshold fall
    /// in the better tier.
    pub fn benchmark_inverted(self) -> bool {
        matches!(self, Dimension::Quality)
    }

    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Speed,
            Dimension::Quality,
            Dimension::Impact,
            Dimension::Effectiveness,
        ]
    }
}
