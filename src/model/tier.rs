use serde::{Deserialize, Serialize};

/// Qualitative percentile tier relative to external benchmark data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Top,
    UpperMid,
    LowerMid,
    Bottom,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::UpperMid => "upperMid",
            Tier::LowerMid => "lowerMid",
            Tier::Bottom => "bottom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Top => "top 10%",
            Tier::UpperMid => "top 25%",
            Tier::LowerMid => "top 50%",
            Tier::Bottom => "below median",
        }
    }
}
