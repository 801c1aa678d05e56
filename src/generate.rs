//! Test-data utility: random responses that satisfy the same validation
//! contract real submissions do.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::model::dimension::Dimension;
use crate::scoring::normalize::{LEGACY_NA_SENTINEL, NA_SENTINEL};

const NA_CHANCE: f64 = 0.1;

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One random ratings map answering every required key.
///
/// Roughly one answer in ten is a sentinel, spelled the way each domain
/// historically spelled it (9 on effectiveness sub-answers, -1
/// elsewhere) so the dual-sentinel ingestion path stays exercised.
pub fn generate_ratings<R: Rng>(catalog: &Catalog, rng: &mut R) -> BTreeMap<String, f64> {
    let mut ratings = BTreeMap::new();

    for question in catalog.questions() {
        if question.is_effectiveness() {
            for sub in question.sub_questions() {
                let value = if rng.gen_bool(NA_CHANCE) {
                    LEGACY_NA_SENTINEL
                } else {
                    rng.gen_range(1..=5) as f64
                };
                ratings.insert(sub.key.to_string(), value);
            }
            continue;
        }

        let value = if rng.gen_bool(NA_CHANCE) {
            NA_SENTINEL
        } else if question.dimension == Dimension::Speed {
            // Draw from the catalog's discrete throughput options.
            let choices: Vec<f64> = question
                .options()
                .iter()
                .map(|o| o.value)
                .filter(|&v| v != NA_SENTINEL)
                .collect();
            choices[rng.gen_range(0..choices.len())]
        } else {
            rng.gen_range(1..=5) as f64
        };
        ratings.insert(question.key.to_string(), value);
    }

    ratings
}
