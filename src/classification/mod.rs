//! Classification hypotheses and their label names.
//!
//! An `ObjectClassification` pairs a [`Label`] with the probability assigned
//! to it. Hypothesis lists are plain slices in insertion order; nothing here
//! sorts, validates or normalizes probabilities.

use crate::label::{to_label, Label};
use crate::util::PerceptionUtilsResult;

pub(crate) mod select;

/// A single `(label, probability)` hypothesis for one object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectClassification {
    /// Hypothesized category.
    pub label: Label,
    /// Probability assigned to `label`; not range-checked.
    pub probability: f64,
}

impl ObjectClassification {
    /// Creates a hypothesis from its parts.
    pub fn new(label: Label, probability: f64) -> Self {
        Self { label, probability }
    }
}

/// Values that resolve to a single label name.
///
/// Implemented for a bare label, a single hypothesis, and a hypothesis list
/// (which resolves through the highest-probability selection).
pub trait LabelName {
    /// Returns the canonical name this value resolves to.
    fn label_name(&self) -> &'static str;
}

impl LabelName for Label {
    fn label_name(&self) -> &'static str {
        self.as_str()
    }
}

impl LabelName for ObjectClassification {
    fn label_name(&self) -> &'static str {
        self.label.as_str()
    }
}

impl LabelName for [ObjectClassification] {
    fn label_name(&self) -> &'static str {
        select::highest_prob_label(self).as_str()
    }
}

impl LabelName for Vec<ObjectClassification> {
    fn label_name(&self) -> &'static str {
        self.as_slice().label_name()
    }
}

/// Converts a label, hypothesis or hypothesis list to its label name.
pub fn convert_label_to_string<T: LabelName + ?Sized>(value: &T) -> String {
    value.label_name().to_owned()
}

/// Returns the label name of a single hypothesis.
pub fn classification_to_string(classification: &ObjectClassification) -> String {
    convert_label_to_string(classification)
}

/// Returns the name of the highest-probability label, `"UNKNOWN"` when empty.
pub fn classifications_to_string(classifications: &[ObjectClassification]) -> String {
    convert_label_to_string(classifications)
}

/// Builds a hypothesis from a canonical label name.
pub fn to_object_classification(
    name: &str,
    probability: f64,
) -> PerceptionUtilsResult<ObjectClassification> {
    Ok(ObjectClassification::new(to_label(name)?, probability))
}

/// Builds a one-element hypothesis list from a canonical label name.
pub fn to_object_classifications(
    name: &str,
    probability: f64,
) -> PerceptionUtilsResult<Vec<ObjectClassification>> {
    Ok(vec![to_object_classification(name, probability)?])
}
