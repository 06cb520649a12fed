//! Semantic object labels.
//!
//! `Label` is the closed set of object categories carried by classification
//! messages. Each label has a canonical uppercase name used for display and
//! serialization, and a `u8` wire code matching the message schema. Both the
//! name and the code mappings are total in the label-to-value direction and
//! fallible in the other.

use std::fmt;
use std::str::FromStr;

use crate::trace::trace_event;
use crate::util::{PerceptionUtilsError, PerceptionUtilsResult};

pub(crate) mod names;

/// Object category of a classification hypothesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Label {
    /// No information about the category.
    #[default]
    Unknown = 0,
    Car = 1,
    Truck = 2,
    Bus = 3,
    Trailer = 4,
    Motorcycle = 5,
    Bicycle = 6,
    Pedestrian = 7,
}

impl Label {
    /// Number of defined labels.
    pub const COUNT: usize = 8;

    /// Every label, ordered by wire code.
    pub const ALL: [Label; Label::COUNT] = [
        Label::Unknown,
        Label::Car,
        Label::Truck,
        Label::Bus,
        Label::Trailer,
        Label::Motorcycle,
        Label::Bicycle,
        Label::Pedestrian,
    ];

    /// Returns the canonical uppercase name.
    pub fn as_str(self) -> &'static str {
        names::name_of(self)
    }

    /// Returns the wire code used by the classification message.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns true for every wheeled road user.
    pub fn is_vehicle(self) -> bool {
        matches!(
            self,
            Label::Car
                | Label::Truck
                | Label::Bus
                | Label::Trailer
                | Label::Motorcycle
                | Label::Bicycle
        )
    }

    /// Returns true for four-or-more-wheeled vehicles.
    pub fn is_car_like_vehicle(self) -> bool {
        matches!(self, Label::Car | Label::Truck | Label::Bus | Label::Trailer)
    }

    /// Returns true for vehicles larger than a passenger car.
    pub fn is_large_vehicle(self) -> bool {
        matches!(self, Label::Truck | Label::Bus | Label::Trailer)
    }
}

/// Parses a canonical label name.
///
/// Matching is exact and case-sensitive; anything else, including the empty
/// string, is rejected with [`PerceptionUtilsError::InvalidLabelName`].
pub fn to_label(name: &str) -> PerceptionUtilsResult<Label> {
    match names::label_of(name) {
        Some(label) => Ok(label),
        None => {
            trace_event!("invalid_label_name", input = name);
            Err(PerceptionUtilsError::InvalidLabelName {
                name: name.to_owned(),
            })
        }
    }
}

/// Returns the canonical name of `label` as an owned string.
pub fn label_to_string(label: Label) -> String {
    label.as_str().to_owned()
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = PerceptionUtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_label(s)
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.code()
    }
}

impl TryFrom<u8> for Label {
    type Error = PerceptionUtilsError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Label::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(PerceptionUtilsError::InvalidLabelCode { code })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Label {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Label {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        to_label(&name).map_err(serde::de::Error::custom)
    }
}
