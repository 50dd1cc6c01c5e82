//! Closed vocabulary of seismic source categories.
//!
//! Each member carries a fixed display label. External documents reference
//! source categories by these exact strings, so the labels are part of the
//! interchange contract and must never change.

use std::fmt;
use std::str::FromStr;

use gem_core::errors::{ErrorInfo, GemError};
use serde::de::{self, Deserializer, Visitor};
use serde::{Serialize, Serializer};

/// Seismic source category classified by geometric or mechanistic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceType {
    /// Area source.
    Area,
    /// Grid source.
    Grid,
    /// Fault source.
    Fault,
    /// Subduction fault source.
    SubductionFault,
}

impl SourceType {
    /// Every member in declaration order.
    pub const ALL: [SourceType; 4] = [
        SourceType::Area,
        SourceType::Grid,
        SourceType::Fault,
        SourceType::SubductionFault,
    ];

    /// Returns the display label of the member.
    pub const fn label(self) -> &'static str {
        match self {
            SourceType::Area => "Area Source",
            SourceType::Grid => "Grid Source",
            SourceType::Fault => "Fault Source",
            SourceType::SubductionFault => "Subduction Fault Source",
        }
    }

    /// Returns a short snake case key, stable across releases.
    pub const fn key(self) -> &'static str {
        match self {
            SourceType::Area => "area",
            SourceType::Grid => "grid",
            SourceType::Fault => "fault",
            SourceType::SubductionFault => "subduction_fault",
        }
    }

    /// Iterates over all members in declaration order.
    pub fn iter() -> impl ExactSizeIterator<Item = SourceType> {
        Self::ALL.into_iter()
    }

    /// Resolves a possibly absent label.
    ///
    /// An absent name yields [`GemError::NullInput`]; a name equal to no label
    /// yields [`GemError::InvalidArgument`]. Comparison is exact.
    pub fn lookup(name: Option<&str>) -> Result<SourceType, GemError> {
        match name {
            Some(name) => Self::from_label(name),
            None => Err(GemError::NullInput(ErrorInfo::new(
                "gem_params.null_source_name",
                "GEM source name is null",
            ))),
        }
    }

    /// Resolves a label to its member.
    pub fn from_label(name: &str) -> Result<SourceType, GemError> {
        Self::ALL
            .into_iter()
            .find(|member| member.label() == name)
            .ok_or_else(|| unknown_label(name))
    }

    /// Checks whether `name` is the label of some member. Never fails.
    pub fn is_valid(name: &str) -> bool {
        Self::ALL.iter().any(|member| member.label() == name)
    }
}

fn unknown_label(name: &str) -> GemError {
    GemError::InvalidArgument(
        ErrorInfo::new(
            "gem_params.unknown_source_type",
            "GEM source name does not exist",
        )
        .with_context("name", name)
        .with_hint(format!(
            "expected one of: {}",
            SourceType::ALL.map(SourceType::label).join(", ")
        )),
    )
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SourceType {
    type Err = GemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl TryFrom<&str> for SourceType {
    type Error = GemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_label(value)
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

struct LabelVisitor;

impl<'de> Visitor<'de> for LabelVisitor {
    type Value = SourceType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a GEM source type label")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SourceType, E> {
        SourceType::from_label(value).map_err(|err| E::custom(err.info().message.as_str()))
    }
}

impl<'de> serde::Deserialize<'de> for SourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(LabelVisitor)
    }
}
