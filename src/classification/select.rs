//! Highest-probability selection over a hypothesis list.
//!
//! The scan keeps a running best and only replaces it on a strictly greater
//! probability, so among tied maxima the earliest entry wins.

use crate::classification::ObjectClassification;
use crate::label::Label;
use crate::trace::{trace_event, trace_span};

/// Returns the hypothesis with the highest probability.
///
/// Ties resolve to the first entry in sequence order. An empty list yields
/// `(Label::Unknown, 0.0)`.
pub fn highest_prob_classification(
    classifications: &[ObjectClassification],
) -> ObjectClassification {
    let _span = trace_span!("highest_prob_classification", candidates = classifications.len())
        .entered();

    let Some((first, rest)) = classifications.split_first() else {
        trace_event!("empty_classification_list", fallback = Label::Unknown.as_str());
        return ObjectClassification::default();
    };

    let mut best = first;
    for candidate in rest {
        if candidate.probability > best.probability {
            best = candidate;
        }
    }
    *best
}

/// Returns the label of the highest-probability hypothesis, `Unknown` when empty.
pub fn highest_prob_label(classifications: &[ObjectClassification]) -> Label {
    highest_prob_classification(classifications).label
}

/// Whether the most probable label is any vehicle.
pub fn is_vehicle(classifications: &[ObjectClassification]) -> bool {
    highest_prob_label(classifications).is_vehicle()
}

/// Whether the most probable label is a car-like vehicle.
pub fn is_car_like_vehicle(classifications: &[ObjectClassification]) -> bool {
    highest_prob_label(classifications).is_car_like_vehicle()
}

/// Whether the most probable label is a large vehicle.
pub fn is_large_vehicle(classifications: &[ObjectClassification]) -> bool {
    highest_prob_label(classifications).is_large_vehicle()
}
