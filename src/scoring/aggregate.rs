use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::dimension::Dimension;
use crate::model::question::Question;
use crate::model::response::Response;
use crate::scoring::normalize::{self, Rating};

/// One scalar score per dimension plus the pooled overall favorability.
///
/// Each dimension reports in its own natural unit: `speed` is the mean
/// raw throughput in PRs/week, `quality` the mean ordinal (1-5, 5 best),
/// `impact` the mean feature-time band midpoint in percent,
/// `effectiveness` a 0-100 favorability percentage, and `overall` the
/// percentage of all individual non-excluded answers that were favorable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub speed: f64,
    pub quality: f64,
    pub impact: f64,
    pub effectiveness: f64,
    pub overall: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct DimAccum {
    sum: f64,
    count: usize,
    favorable: usize,
}

impl DimAccum {
    fn push(&mut self, contribution: f64, favorable: bool) {
        self.sum += contribution;
        self.count += 1;
        if favorable {
            self.favorable += 1;
        }
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Aggregate a survey's responses into per-dimension scores.
///
/// Not-applicable answers are fully excluded: they contribute to neither
/// numerator nor denominator of any mean. An empty collection (or a
/// dimension answered only with sentinels) scores 0, never NaN.
pub fn compute_scores(catalog: &Catalog, responses: &[Response]) -> ScoreSummary {
    let mut speed = DimAccum::default();
    let mut quality = DimAccum::default();
    let mut impact = DimAccum::default();
    let mut effectiveness = DimAccum::default();

    for response in responses {
        for question in catalog.questions() {
            if question.is_effectiveness() {
                for sub in question.sub_questions() {
                    if let Some(&raw) = response.ratings.get(sub.key) {
                        accumulate(&mut effectiveness, question.dimension, question, raw);
                    }
                }
                continue;
            }
            if let Some(&raw) = response.ratings.get(question.key) {
                let accum = match question.dimension {
                    Dimension::Speed => &mut speed,
                    Dimension::Quality => &mut quality,
                    Dimension::Impact => &mut impact,
                    Dimension::Effectiveness => &mut effectiveness,
                };
                accumulate(accum, question.dimension, question, raw);
            }
        }
    }

    let answered = speed.count + quality.count + impact.count + effectiveness.count;
    let favorable = speed.favorable + quality.favorable + impact.favorable + effectiveness.favorable;

    ScoreSummary {
        speed: speed.mean(),
        quality: quality.mean(),
        impact: impact.mean(),
        effectiveness: favorability_percent(effectiveness.favorable, effectiveness.count),
        overall: favorability_percent(favorable, answered),
    }
}

fn accumulate(accum: &mut DimAccum, dimension: Dimension, question: &Question, raw: f64) {
    match normalize::resolve(question, raw) {
        Rating::NotApplicable => {}
        Rating::Value(v) => {
            let contribution = match dimension {
                // Speed and Quality average the raw value itself.
                Dimension::Speed | Dimension::Quality => v,
                // Impact averages band midpoints.
                Dimension::Impact => normalize::impact_band_midpoint(v),
                // Effectiveness only pools favorability; the sum is unused.
                Dimension::Effectiveness => v,
            };
            accum.push(contribution, normalize::is_favorable(dimension, v));
        }
    }
}

/// Pooled favorable ratio as a 0-100 integer-rounded percentage.
/// Favorability is evaluated per individual answer, not per response.
fn favorability_percent(favorable: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (100.0 * favorable as f64 / total as f64).round()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/aggregate.rs"]
mod tests;
