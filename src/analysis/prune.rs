//! Marker pruning and ranking.
//!
//! Deterministic greedy top-k-per-kind selection: severity wins over
//! temporal spread, then the kept set is restored to chronological order
//! for presentation and assigned positional ids.

use std::collections::HashMap;

use super::lexicon::MarkerCaps;
use super::marker::{Marker, MarkerKind};

/// Cap markers per kind and restore chronological order.
///
/// Candidates are ranked severity-descending (earlier events win ties) and
/// admitted while their kind's cap has room. A low-severity early marker
/// can lose its slot to a high-severity later one of the same kind; that
/// trade-off is intentional.
pub fn prune_markers(mut markers: Vec<Marker>, caps: &MarkerCaps) -> Vec<Marker> {
    markers.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then(a.event_turn_index.cmp(&b.event_turn_index))
    });

    let mut admitted: HashMap<MarkerKind, usize> = HashMap::new();
    let mut kept: Vec<Marker> = markers
        .into_iter()
        .filter(|m| {
            let count = admitted.entry(m.kind).or_insert(0);
            if *count < m.kind.cap(caps) {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect();

    kept.sort_by(|a, b| {
        a.event_turn_index
            .cmp(&b.event_turn_index)
            .then(b.severity.cmp(&a.severity))
    });

    for (position, marker) in kept.iter_mut().enumerate() {
        marker.id = format!("marker-{}", position);
    }

    kept
}
