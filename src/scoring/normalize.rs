//! Single ingestion boundary for raw rating values.
//!
//! The surrounding system historically spelled "Not Applicable" two ways:
//! -1 on newer option sets and 9 on the legacy effectiveness form. Both
//! spellings are canonicalized here, once; everything downstream matches
//! on [`Rating`] and never sees a sentinel again.

use crate::model::dimension::Dimension;
use crate::model::question::Question;

pub const NA_SENTINEL: f64 = -1.0;
pub const LEGACY_NA_SENTINEL: f64 = 9.0;

/// Canonical form of one raw answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Value(f64),
    NotApplicable,
}

impl Rating {
    pub fn value(self) -> Option<f64> {
        match self {
            Rating::Value(v) => Some(v),
            Rating::NotApplicable => None,
        }
    }
}

/// Canonicalize one raw value for one question.
///
/// -1 is always N/A. 9 is N/A exactly when 9 is not a legitimate answer
/// for the question: for every ordinal 1-5 question it is the legacy
/// sentinel, while for the continuous Speed question 9.0 is the real
/// "9+ times per week" answer.
pub fn resolve(question: &Question, raw: f64) -> Rating {
    if raw == NA_SENTINEL {
        return Rating::NotApplicable;
    }
    if raw == LEGACY_NA_SENTINEL && question.dimension != Dimension::Speed {
        return Rating::NotApplicable;
    }
    Rating::Value(raw)
}

pub fn is_favorable(dimension: Dimension, value: f64) -> bool {
    value >= dimension.favorable_threshold()
}

/// Midpoint of the feature-time percentage band an Impact ordinal maps
/// to. The Impact score is the mean of these midpoints, not of the raw
/// ordinals.
pub fn impact_band_midpoint(ordinal: f64) -> f64 {
    match ordinal.round() as i64 {
        5 => 90.0,
        4 => 70.0,
        3 => 50.0,
        2 => 30.0,
        _ => 10.0,
    }
}

/// Display-only mapping from the Quality ordinal mean to an implied
/// change-failure-rate percentage. Piecewise on the nearest ordinal
/// step, not interpolated.
pub fn quality_failure_rate_percent(mean: f64) -> f64 {
    match mean.round() as i64 {
        5.. => 0.0,
        4 => 7.5,
        3 => 12.5,
        2 => 18.0,
        _ => 25.0,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/normalize.rs"]
mod tests;
