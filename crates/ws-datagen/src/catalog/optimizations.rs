use ws_core::classify::ConfidenceTier;
use ws_core::model::Optimization;

use super::{jitter_confidence, jitter_savings};
use crate::random::RandomSource;

struct Entry {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    savings: f64,
    effort: &'static str,
    priority: u8,
    confidence: f64,
}

const CATALOG: [Entry; 5] = [
    Entry {
        category: "space",
        title: "Consolidate underutilized meeting rooms",
        description: "Combine three low-usage meeting rooms into flexible co-working space",
        savings: 15_000.0,
        effort: "medium",
        priority: 2,
        confidence: 0.81,
    },
    Entry {
        category: "space",
        title: "Hot desking in the sales department",
        description: "Reduce dedicated desks by 30% based on remote work patterns",
        savings: 25_000.0,
        effort: "high",
        priority: 1,
        confidence: 0.76,
    },
    Entry {
        category: "energy",
        title: "Upgrade to LED lighting",
        description: "Replace fluorescent fixtures with smart LED systems",
        savings: 8_000.0,
        effort: "medium",
        priority: 3,
        confidence: 0.9,
    },
    Entry {
        category: "energy",
        title: "Install smart thermostats",
        description: "Zone-based temperature control driven by occupancy",
        savings: 12_000.0,
        effort: "low",
        priority: 2,
        confidence: 0.85,
    },
    Entry {
        category: "cost",
        title: "Renegotiate cleaning contracts",
        description: "Schedule cleaning from measured usage instead of a fixed rota",
        savings: 6_000.0,
        effort: "low",
        priority: 4,
        confidence: 0.63,
    },
];

/// Optimisations, optionally restricted to one category, ordered by
/// priority (1 first).
pub fn build_optimizations(category: Option<&str>, rng: &mut dyn RandomSource) -> Vec<Optimization> {
    let mut out: Vec<Optimization> = CATALOG
        .iter()
        .filter(|e| category.is_none_or(|c| c.eq_ignore_ascii_case(e.category)))
        .enumerate()
        .map(|(i, e)| {
            let confidence = jitter_confidence(e.confidence, rng);
            Optimization {
                id: format!("OPT_{:04}", i + 1),
                category: e.category.to_string(),
                title: e.title.to_string(),
                description: e.description.to_string(),
                implementation_effort: e.effort.to_string(),
                priority: e.priority,
                confidence,
                confidence_tier: ConfidenceTier::from_confidence(confidence),
                potential_savings: jitter_savings(e.savings, rng),
            }
        })
        .collect();
    out.sort_by_key(|o| o.priority);
    out
}
