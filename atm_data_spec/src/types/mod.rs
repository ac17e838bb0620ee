//! Automation data spec type system.
//!
//! # Module Organization
//!
//! - `data_spec_type/`: AtmDataSpecType tags, names, supertype tree walks
//! - `data_spec.rs`: AtmDataSpec descriptors and their parameters
//! - `file_type.rs`: AtmFileType, the file-kind sub-lattice
//! - `conditions.rs`: AtmDataSpecParamsConditions
//! - `definitions/`: per-type definition records and the registry

mod conditions;
mod data_spec;
mod data_spec_type;
pub(crate) mod definitions;
mod file_type;

#[cfg(test)]
mod tests;

pub use conditions::AtmDataSpecParamsConditions;
pub use data_spec::AtmDataSpec;
pub use data_spec_type::AtmDataSpecType;
pub use file_type::AtmFileType;

use serde_json::Value;

/// Build a fresh value suitable for a slot described by `data_spec`.
///
/// # Examples
/// ```
/// use atm_data_spec::{get_default_value, AtmDataSpec};
/// use serde_json::json;
///
/// assert_eq!(get_default_value(&AtmDataSpec::Range), json!({ "start": 0, "end": 1, "step": 1 }));
/// assert_eq!(get_default_value(&AtmDataSpec::array_of(AtmDataSpec::String)), json!([]));
/// ```
pub fn get_default_value(data_spec: &AtmDataSpec) -> Value {
    let definition = definitions::registry::definition(data_spec.data_type());
    (definition.get_default_value)(data_spec)
}
