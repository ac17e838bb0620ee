//! Admissible parameter values for a type under a set of filters.
//!
//! Parameter editors use these to offer only the values that keep the edited
//! spec matching its filters, before any concrete spec exists.

use super::AtmFileType;
use crate::filters::AtmDataSpecFilter;

/// Per-type projection of filters onto a type's own parameters.
///
/// Types without parameters have no conditions (`None` is returned by
/// [`get_atm_data_spec_params_conditions`](crate::get_atm_data_spec_params_conditions)).
#[derive(Debug, Clone, PartialEq)]
pub enum AtmDataSpecParamsConditions {
    /// Admissible `fileType` values, in canonical order.
    File { allowed_file_types: Vec<AtmFileType> },
    /// Admissible `integersOnly` values, `false` before `true`.
    Number { integers_only_param_values: Vec<bool> },
    /// Filters that the array's item spec must satisfy.
    Array {
        item_data_spec_filters: Vec<AtmDataSpecFilter>,
    },
}
