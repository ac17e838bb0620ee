//! Automation data spec values.
//!
//! An [`AtmDataSpec`] is a type descriptor for a value flowing through a
//! workflow argument, result or store. Only three tags carry parameters:
//! `number`, `file` and `array`. Parameters that may still be missing while a
//! spec is being edited are `Option`s; absence is never an error.

use super::{AtmDataSpecType, AtmFileType};

/// Type descriptor for a value flowing through an automation workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum AtmDataSpec {
    Integer,
    Number {
        /// When `Some(true)`, only integral values are allowed.
        integers_only: Option<bool>,
        /// Enumerated allowed values. Order is significant (the first entry
        /// becomes the default value).
        allowed_values: Option<Vec<f64>>,
    },
    Boolean,
    String,
    Object,
    File {
        file_type: Option<AtmFileType>,
    },
    Dataset,
    Range,
    Array {
        /// `None` while the item type has not been chosen yet.
        item_data_spec: Option<Box<AtmDataSpec>>,
    },
    TimeSeriesMeasurement,
    OnedatafsCredentials,
}

impl AtmDataSpec {
    /// Get the type tag of this spec.
    pub fn data_type(&self) -> AtmDataSpecType {
        match self {
            AtmDataSpec::Integer => AtmDataSpecType::Integer,
            AtmDataSpec::Number { .. } => AtmDataSpecType::Number,
            AtmDataSpec::Boolean => AtmDataSpecType::Boolean,
            AtmDataSpec::String => AtmDataSpecType::String,
            AtmDataSpec::Object => AtmDataSpecType::Object,
            AtmDataSpec::File { .. } => AtmDataSpecType::File,
            AtmDataSpec::Dataset => AtmDataSpecType::Dataset,
            AtmDataSpec::Range => AtmDataSpecType::Range,
            AtmDataSpec::Array { .. } => AtmDataSpecType::Array,
            AtmDataSpec::TimeSeriesMeasurement => AtmDataSpecType::TimeSeriesMeasurement,
            AtmDataSpec::OnedatafsCredentials => AtmDataSpecType::OnedatafsCredentials,
        }
    }

    /// Create a parameterless spec of the given type.
    ///
    /// Parameterized types get every parameter unset.
    pub fn of_type(data_type: AtmDataSpecType) -> Self {
        match data_type {
            AtmDataSpecType::Integer => AtmDataSpec::Integer,
            AtmDataSpecType::Number => AtmDataSpec::Number {
                integers_only: None,
                allowed_values: None,
            },
            AtmDataSpecType::Boolean => AtmDataSpec::Boolean,
            AtmDataSpecType::String => AtmDataSpec::String,
            AtmDataSpecType::Object => AtmDataSpec::Object,
            AtmDataSpecType::File => AtmDataSpec::File { file_type: None },
            AtmDataSpecType::Dataset => AtmDataSpec::Dataset,
            AtmDataSpecType::Range => AtmDataSpec::Range,
            AtmDataSpecType::Array => AtmDataSpec::Array {
                item_data_spec: None,
            },
            AtmDataSpecType::TimeSeriesMeasurement => AtmDataSpec::TimeSeriesMeasurement,
            AtmDataSpecType::OnedatafsCredentials => AtmDataSpec::OnedatafsCredentials,
        }
    }

    /// Create a `number` spec with the `integersOnly` flag set.
    pub fn number(integers_only: bool) -> Self {
        AtmDataSpec::Number {
            integers_only: Some(integers_only),
            allowed_values: None,
        }
    }

    /// Create a `file` spec restricted to the given file kind.
    pub fn file(file_type: AtmFileType) -> Self {
        AtmDataSpec::File {
            file_type: Some(file_type),
        }
    }

    /// Create an `array` spec of the given items.
    pub fn array_of(item: AtmDataSpec) -> Self {
        AtmDataSpec::Array {
            item_data_spec: Some(Box::new(item)),
        }
    }

    /// The item spec of an `array`, `None` for other types and open slots.
    pub fn item_data_spec(&self) -> Option<&AtmDataSpec> {
        match self {
            AtmDataSpec::Array { item_data_spec } => item_data_spec.as_deref(),
            _ => None,
        }
    }

    /// The file kind of a `file` spec, `None` for other types or when unset.
    pub fn file_type(&self) -> Option<AtmFileType> {
        match self {
            AtmDataSpec::File { file_type } => *file_type,
            _ => None,
        }
    }

    /// Check if this is a `number` spec restricted to integers.
    pub fn is_integers_only(&self) -> bool {
        matches!(
            self,
            AtmDataSpec::Number {
                integers_only: Some(true),
                ..
            }
        )
    }
}

impl std::fmt::Display for AtmDataSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtmDataSpec::Array { item_data_spec } => match item_data_spec {
                Some(item) => write!(f, "array<{}>", item),
                None => write!(f, "array<?>"),
            },
            AtmDataSpec::File {
                file_type: Some(file_type),
            } => write!(f, "file<{}>", file_type),
            AtmDataSpec::Number {
                integers_only: Some(true),
                ..
            } => write!(f, "number<integer>"),
            other => write!(f, "{}", other.data_type()),
        }
    }
}

impl From<AtmDataSpecType> for AtmDataSpec {
    fn from(data_type: AtmDataSpecType) -> Self {
        AtmDataSpec::of_type(data_type)
    }
}
