use crate::catalog::Catalog;
use crate::model::dimension::Dimension;
use crate::model::question::Benchmarks;
use crate::model::tier::Tier;

/// Place a score in its percentile tier against one benchmark table.
/// Boundaries are inclusive in the better direction; Quality compares
/// inverted because its thresholds are stored pre-inverted.
pub fn classify(dimension: Dimension, score: f64, benchmarks: &Benchmarks) -> Tier {
    if dimension.benchmark_inverted() {
        if score <= benchmarks.p90 {
            Tier::Top
        } else if score <= benchmarks.p75 {
            Tier::UpperMid
        } else if score <= benchmarks.p50 {
            Tier::LowerMid
        } else {
            Tier::Bottom
        }
    } else if score >= benchmarks.p90 {
        Tier::Top
    } else if score >= benchmarks.p75 {
        Tier::UpperMid
    } else if score >= benchmarks.p50 {
        Tier::LowerMid
    } else {
        Tier::Bottom
    }
}

/// Tier for a dimension's score, or None when the catalog carries no
/// benchmark for that dimension. Absence of a benchmark is "no data",
/// never the bottom tier.
pub fn classify_benchmark(catalog: &Catalog, dimension: Dimension, score: f64) -> Option<Tier> {
    catalog
        .benchmarks_for(dimension)
        .map(|b| classify(dimension, score, &b))
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/classify.rs"]
mod tests;
