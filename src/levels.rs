// =============================================================================
// Support / Resistance Level Detector
// =============================================================================
//
// Two passes over the closing-price series:
//
// 1. Extremum scan — a bar is a local minimum (support touch) when its close
//    is <= every close within `radius` bars on each side; symmetric rule for
//    maxima (resistance touches).  Bars closer than `radius` to either end
//    are never candidates.
// 2. Clustering — candidates are sorted by price and merged single-linkage:
//    adjacent candidates whose relative gap is within `tolerance_pct` join
//    the same cluster.  A cluster becomes one level whose price is the mean
//    of its touches and whose strength is the touch count.
//
// Levels are reported strongest first; equal strength breaks by most-recent
// touch, keeping levels that current price action still respects at the top.
// Fewer than `2 * radius + 1` bars yields empty sets, not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LevelConfig;

/// Whether a level acts as a price floor or ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelKind {
    Support,
    Resistance,
}

/// A detected price level.  `strength` counts the clustered touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub kind: LevelKind,
    pub strength: usize,
}

/// Detected levels, strongest first within each kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub support: Vec<Level>,
    pub resistance: Vec<Level>,
}

/// Detect support and resistance levels from `closes`.
pub fn detect_levels(closes: &[f64], config: &LevelConfig) -> LevelSet {
    let radius = config.radius;
    if closes.len() < 2 * radius + 1 {
        debug!(
            bars = closes.len(),
            radius,
            "detect_levels: series shorter than the extremum window, no levels"
        );
        return LevelSet::default();
    }

    let minima = extrema(closes, radius, true);
    let maxima = extrema(closes, radius, false);

    LevelSet {
        support: cluster(minima, LevelKind::Support, config),
        resistance: cluster(maxima, LevelKind::Resistance, config),
    }
}

/// Indices and prices of the local extrema of `closes`.
fn extrema(closes: &[f64], radius: usize, minima: bool) -> Vec<(usize, f64)> {
    let mut touches = Vec::new();
    for i in radius..closes.len() - radius {
        let neighborhood = &closes[i - radius..=i + radius];
        let qualifies = if minima {
            neighborhood.iter().all(|&x| closes[i] <= x)
        } else {
            neighborhood.iter().all(|&x| closes[i] >= x)
        };
        if qualifies {
            touches.push((i, closes[i]));
        }
    }
    touches
}

/// Merge touches into levels by single-linkage over the price-sorted list.
fn cluster(mut touches: Vec<(usize, f64)>, kind: LevelKind, config: &LevelConfig) -> Vec<Level> {
    if touches.is_empty() {
        return Vec::new();
    }
    touches.sort_by(|a, b| a.1.total_cmp(&b.1));

    struct Cluster {
        price_sum: f64,
        strength: usize,
        last_touch: usize,
    }

    let tolerance = config.tolerance_pct / 100.0;
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut prev_price = f64::NEG_INFINITY;

    for (index, price) in touches {
        match clusters.last_mut() {
            Some(current) if price - prev_price <= prev_price.abs() * tolerance => {
                current.price_sum += price;
                current.strength += 1;
                current.last_touch = current.last_touch.max(index);
            }
            _ => clusters.push(Cluster { price_sum: price, strength: 1, last_touch: index }),
        }
        prev_price = price;
    }

    // Strongest first; equal strength favors the most recent touch.
    clusters.sort_by(|a, b| {
        b.strength.cmp(&a.strength).then(b.last_touch.cmp(&a.last_touch))
    });
    clusters.truncate(config.max_levels);

    clusters
        .into_iter()
        .map(|c| Level { price: c.price_sum / c.strength as f64, kind, strength: c.strength })
        .collect()
}
