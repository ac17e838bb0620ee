//! The `number` type and its `integersOnly` flag.

use serde_json::{json, Number, Value};

use super::AtmDataSpecTypeDefinition;
use crate::config::ForbiddenTypeSemantics;
use crate::filters::AtmDataSpecFilter;
use crate::types::{AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType};

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub(super) fn definition() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        are_params_compatible,
        get_params_conditions,
        ..AtmDataSpecTypeDefinition::base(AtmDataSpecType::Number, default_value)
    }
}

/// An integers-only slot accepts only producers that guarantee integers.
fn are_params_compatible(container: &AtmDataSpec, to_contain: &AtmDataSpec, _: bool) -> bool {
    !container.is_integers_only() || to_contain.is_integers_only()
}

fn get_params_conditions(
    filters: &[AtmDataSpecFilter],
    _: ForbiddenTypeSemantics,
) -> Option<AtmDataSpecParamsConditions> {
    let mut allow_any_number = true;
    let mut allow_integers_only = true;

    for filter in filters {
        match filter {
            // The data spec must cover a number that may be fractional.
            AtmDataSpecFilter::TypeOrSupertype { types } => {
                if types
                    .iter()
                    .any(|ty| ty.data_type() == AtmDataSpecType::Number && !ty.is_integers_only())
                {
                    allow_integers_only = false;
                }
            }
            // The data spec must fit into an integers-only number.
            AtmDataSpecFilter::TypeOrSubtype { types } => {
                if types.iter().any(AtmDataSpec::is_integers_only) {
                    allow_any_number = false;
                }
            }
            AtmDataSpecFilter::ForbiddenType { .. } => {}
        }
    }

    let integers_only_param_values = [(false, allow_any_number), (true, allow_integers_only)]
        .into_iter()
        .filter_map(|(value, allowed)| allowed.then_some(value))
        .collect();
    Some(AtmDataSpecParamsConditions::Number {
        integers_only_param_values,
    })
}

fn default_value(spec: &AtmDataSpec) -> Value {
    match spec {
        AtmDataSpec::Number {
            allowed_values: Some(values),
            ..
        } => values.first().map_or_else(|| json!(0), |&first| number_value(first)),
        _ => json!(0),
    }
}

/// Encode a number, keeping integral values as JSON integers.
fn number_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        json!(value as i64)
    } else {
        Number::from_f64(value).map_or_else(|| json!(0), Value::Number)
    }
}
