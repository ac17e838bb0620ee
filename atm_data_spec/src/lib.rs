//! atm_data_spec
//!
//! Type reasoning for automation data specs: the type descriptors attached to
//! workflow arguments, results and store contents.
//!
//! Two questions are answered here, both without any concrete value:
//!
//! - containment: can a value shaped like spec B occupy a slot shaped like
//!   spec A? ([`can_data_spec_contain`])
//! - admissibility: given a list of filters, which specs, type tags and
//!   parameter values remain acceptable?
//!   ([`is_atm_data_spec_matching_filters`], [`get_matching_atm_data_spec_types`],
//!   [`get_atm_data_spec_params_conditions`])
//!
//! Every function is pure and total. A spec that is still being edited (an
//! array without an item spec, a file without a kind) is "incomplete", which
//! is handled by an explicit `ignore_empty` policy rather than an error.
//!
//! # Example
//!
//! ```
//! use atm_data_spec::{
//!     can_data_spec_contain, get_matching_atm_data_spec_types, AtmDataSpec,
//!     AtmDataSpecFilter, AtmDataSpecType,
//! };
//!
//! assert!(can_data_spec_contain(&AtmDataSpec::Object, &AtmDataSpec::Dataset, false));
//!
//! let filters = [AtmDataSpecFilter::forbidden_type([AtmDataSpec::Object])];
//! let types = get_matching_atm_data_spec_types(&filters);
//! assert!(!types.contains(&AtmDataSpecType::Dataset));
//! ```

// Library code reports through `tracing`, never by printing.
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod compat;
pub mod config;
pub mod error;
pub mod filters;
pub mod types;

pub use compat::{can_data_spec_contain, can_partial_data_spec_contain};
pub use config::{EngineConfig, FilterConfig, ForbiddenTypeSemantics};
pub use error::{ConfigError, UnknownTypeName};
pub use filters::{
    get_atm_data_spec_params_conditions, get_matching_atm_data_spec_types,
    is_atm_data_spec_matching_filters, is_partial_atm_data_spec_matching_filters,
    AtmDataSpecFilter, AtmDataSpecFilterEngine, AtmDataSpecFilterType,
    AtmDataSpecPlacementContext,
};
pub use types::{
    get_default_value, AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType, AtmFileType,
};
