//! Per-type definition records.
//!
//! Every [`AtmDataSpecType`] has exactly one [`AtmDataSpecTypeDefinition`],
//! built once by `registry` and never mutated. The containment and filter
//! engines only ever reach type-specific behaviour through these records.
//!
//! # Sub-modules
//!
//! - `registry`: the process-wide table and derived subtype index
//! - `simple`: types without parameters
//! - `number`, `file`, `array`: parameterized types

mod array;
mod file;
mod number;
pub(crate) mod registry;
mod simple;

use serde_json::Value;

use super::{AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType};
use crate::config::ForbiddenTypeSemantics;
use crate::filters::{AtmDataSpecFilter, AtmDataSpecFilterEngine};

/// Returns `true` when a slot constrained by `container` params can hold any
/// value constrained by `to_contain` params. Both specs have the same tag.
pub(crate) type ParamsCompatibleFn =
    fn(container: &AtmDataSpec, to_contain: &AtmDataSpec, ignore_empty: bool) -> bool;

/// Projects filters onto the type's own parameters.
pub(crate) type ParamsConditionsFn = fn(
    filters: &[AtmDataSpecFilter],
    semantics: ForbiddenTypeSemantics,
) -> Option<AtmDataSpecParamsConditions>;

/// Extra per-type filter check run after the generic ones.
pub(crate) type ParamsMatchingFiltersFn =
    fn(spec: &AtmDataSpec, filters: &[AtmDataSpecFilter], engine: &AtmDataSpecFilterEngine) -> bool;

/// Builds a fresh value for a spec of this type.
pub(crate) type DefaultValueFn = fn(spec: &AtmDataSpec) -> Value;

/// Type definition record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AtmDataSpecTypeDefinition {
    pub(crate) data_type: AtmDataSpecType,
    /// The nearest supertype, `None` for roots.
    pub(crate) supertype: Option<AtmDataSpecType>,
    pub(crate) are_params_compatible: ParamsCompatibleFn,
    pub(crate) get_params_conditions: ParamsConditionsFn,
    pub(crate) are_params_matching_filters: ParamsMatchingFiltersFn,
    pub(crate) get_default_value: DefaultValueFn,
}

impl AtmDataSpecTypeDefinition {
    /// A record with no supertype and parameter hooks that accept everything.
    /// Type modules override the fields they need.
    pub(crate) fn base(data_type: AtmDataSpecType, get_default_value: DefaultValueFn) -> Self {
        Self {
            data_type,
            supertype: None,
            are_params_compatible: always_compatible,
            get_params_conditions: no_conditions,
            are_params_matching_filters: always_matching,
            get_default_value,
        }
    }
}

fn always_compatible(_: &AtmDataSpec, _: &AtmDataSpec, _: bool) -> bool {
    true
}

fn no_conditions(
    _: &[AtmDataSpecFilter],
    _: ForbiddenTypeSemantics,
) -> Option<AtmDataSpecParamsConditions> {
    None
}

fn always_matching(_: &AtmDataSpec, _: &[AtmDataSpecFilter], _: &AtmDataSpecFilterEngine) -> bool {
    true
}

/// Build the definition record of `data_type`.
///
/// Exhaustive on purpose: a new tag does not compile until it has a record.
pub(crate) fn build_definition(data_type: AtmDataSpecType) -> AtmDataSpecTypeDefinition {
    match data_type {
        AtmDataSpecType::Integer => simple::integer(),
        AtmDataSpecType::Number => number::definition(),
        AtmDataSpecType::Boolean => simple::boolean(),
        AtmDataSpecType::String => simple::string(),
        AtmDataSpecType::Object => simple::object(),
        AtmDataSpecType::File => file::definition(),
        AtmDataSpecType::Dataset => simple::dataset(),
        AtmDataSpecType::Range => simple::range(),
        AtmDataSpecType::Array => array::definition(),
        AtmDataSpecType::TimeSeriesMeasurement => simple::time_series_measurement(),
        AtmDataSpecType::OnedatafsCredentials => simple::onedatafs_credentials(),
    }
}
