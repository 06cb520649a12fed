//! Canonical name table shared by both conversion directions.

use crate::label::Label;

/// Label/name pairs indexed by wire code.
pub(crate) const LABEL_NAMES: [(Label, &str); Label::COUNT] = [
    (Label::Unknown, "UNKNOWN"),
    (Label::Car, "CAR"),
    (Label::Truck, "TRUCK"),
    (Label::Bus, "BUS"),
    (Label::Trailer, "TRAILER"),
    (Label::Motorcycle, "MOTORCYCLE"),
    (Label::Bicycle, "BICYCLE"),
    (Label::Pedestrian, "PEDESTRIAN"),
];

pub(crate) fn name_of(label: Label) -> &'static str {
    LABEL_NAMES[usize::from(label.code())].1
}

/// Exact, case-sensitive lookup.
pub(crate) fn label_of(name: &str) -> Option<Label> {
    LABEL_NAMES
        .iter()
        .find(|(_, candidate)| *candidate == name)
        .map(|(label, _)| *label)
}
