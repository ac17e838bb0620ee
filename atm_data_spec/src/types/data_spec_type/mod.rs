//! Automation data spec type tags.
//!
//! The hierarchy is a single-parent forest:
//! ```text
//! integer
//! number
//! boolean
//! string
//! object
//!  ├── file
//!  ├── dataset
//!  ├── range
//!  ├── timeSeriesMeasurement
//!  └── onedatafsCredentials
//! array            (container, never a super/subtype of anything)
//! ```
//!
//! Supertypes are not hard-coded here: each tag's parent comes from its
//! definition record in the registry, and the walks below follow those
//! records transitively.
//!
//! # Sub-modules
//!
//! - `comparison`: ancestor/descendant walks and subtype checks
//! - `display`: wire name and fmt::Display implementation
//! - `parsing`: wire name parsing

mod comparison;
mod display;
mod parsing;

/// Discriminator naming the shape of an [`AtmDataSpec`](super::AtmDataSpec).
///
/// Declaration order is the canonical registry order used by every
/// enumeration result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtmDataSpecType {
    /// Legacy integer tag (no parameters, no supertype).
    Integer,
    /// Number with optional `integersOnly` / `allowedValues` parameters.
    Number,
    Boolean,
    String,
    Object,
    /// File reference, parameterized by a file kind.
    File,
    Dataset,
    Range,
    /// Recursive container parameterized by an item spec.
    Array,
    TimeSeriesMeasurement,
    OnedatafsCredentials,
}

impl AtmDataSpecType {
    /// Every type tag, in canonical registry order.
    pub const ALL: [AtmDataSpecType; 11] = [
        AtmDataSpecType::Integer,
        AtmDataSpecType::Number,
        AtmDataSpecType::Boolean,
        AtmDataSpecType::String,
        AtmDataSpecType::Object,
        AtmDataSpecType::File,
        AtmDataSpecType::Dataset,
        AtmDataSpecType::Range,
        AtmDataSpecType::Array,
        AtmDataSpecType::TimeSeriesMeasurement,
        AtmDataSpecType::OnedatafsCredentials,
    ];

    /// Position of this tag in [`AtmDataSpecType::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
