//! Data spec filters.
//!
//! # Module Organization
//!
//! - `filter.rs`: AtmDataSpecFilter, AtmDataSpecPlacementContext
//! - `engine.rs`: AtmDataSpecFilterEngine (instance check, enumeration)
//! - `lattice.rs`: admissible-set algebra shared by tags and file kinds
//!
//! The free functions below always evaluate with the default (`legacy`)
//! `forbiddenType` semantics and never consult the environment. To use
//! another semantics, build an [`AtmDataSpecFilterEngine`] from an
//! [`EngineConfig`](crate::config::EngineConfig) (for example one loaded with
//! `EngineConfig::from_env`).

mod engine;
mod filter;
pub(crate) mod lattice;


pub use engine::AtmDataSpecFilterEngine;
pub use filter::{AtmDataSpecFilter, AtmDataSpecFilterType, AtmDataSpecPlacementContext};

use crate::config::ForbiddenTypeSemantics;
use crate::types::{AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType};

static DEFAULT_ENGINE: AtmDataSpecFilterEngine =
    AtmDataSpecFilterEngine::with_semantics(ForbiddenTypeSemantics::Legacy);

/// Check if `data_spec` satisfies all `filters` in `placement_context`.
///
/// # Examples
/// ```
/// use atm_data_spec::{
///     is_atm_data_spec_matching_filters, AtmDataSpec, AtmDataSpecFilter,
///     AtmDataSpecPlacementContext,
/// };
///
/// let filters = [AtmDataSpecFilter::type_or_subtype([AtmDataSpec::Object])];
/// assert!(is_atm_data_spec_matching_filters(
///     &AtmDataSpec::Dataset,
///     &filters,
///     AtmDataSpecPlacementContext::Root,
/// ));
/// ```
pub fn is_atm_data_spec_matching_filters(
    data_spec: &AtmDataSpec,
    filters: &[AtmDataSpecFilter],
    placement_context: AtmDataSpecPlacementContext,
) -> bool {
    DEFAULT_ENGINE.is_matching_filters(data_spec, filters, placement_context)
}

/// Filter check for a spec that may still be incomplete (`None` matches).
pub fn is_partial_atm_data_spec_matching_filters(
    data_spec: Option<&AtmDataSpec>,
    filters: &[AtmDataSpecFilter],
    placement_context: AtmDataSpecPlacementContext,
) -> bool {
    DEFAULT_ENGINE.is_partial_matching_filters(data_spec, filters, placement_context)
}

/// Type tags admissible under `filters`, in canonical registry order.
///
/// # Examples
/// ```
/// use atm_data_spec::{get_matching_atm_data_spec_types, AtmDataSpec, AtmDataSpecFilter, AtmDataSpecType};
///
/// let file = AtmDataSpec::of_type(AtmDataSpecType::File);
/// let filters = [AtmDataSpecFilter::type_or_supertype([file])];
/// assert_eq!(
///     get_matching_atm_data_spec_types(&filters),
///     vec![AtmDataSpecType::Object, AtmDataSpecType::File],
/// );
/// ```
pub fn get_matching_atm_data_spec_types(filters: &[AtmDataSpecFilter]) -> Vec<AtmDataSpecType> {
    DEFAULT_ENGINE.matching_types(filters)
}

/// Admissible parameter values of `data_type` under `filters`.
pub fn get_atm_data_spec_params_conditions(
    data_type: AtmDataSpecType,
    filters: &[AtmDataSpecFilter],
) -> Option<AtmDataSpecParamsConditions> {
    DEFAULT_ENGINE.params_conditions(data_type, filters)
}
