//! Perception utilities for object classification hypotheses.
//!
//! Selects the most probable label from a list of `(label, probability)`
//! hypotheses with a deterministic first-wins tie-break, and converts labels
//! to and from their canonical uppercase names. Everything here is pure and
//! stateless; optional `tracing` and `serde` features add instrumentation and
//! serialization.

mod trace;

pub mod classification;
pub mod label;
pub mod util;

pub use classification::select::{
    highest_prob_classification, highest_prob_label, is_car_like_vehicle, is_large_vehicle,
    is_vehicle,
};
pub use classification::{
    classification_to_string, classifications_to_string, convert_label_to_string,
    to_object_classification, to_object_classifications, LabelName, ObjectClassification,
};
pub use label::{label_to_string, to_label, Label};
pub use util::{PerceptionUtilsError, PerceptionUtilsResult};
