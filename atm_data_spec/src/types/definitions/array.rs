//! The recursive `array` container.
//!
//! Arrays are never a super/subtype of another tag, so containment between
//! arrays is entirely driven by their item specs. Filters reach the items in
//! two ways: `forbiddenType` filters are re-applied to the item spec in the
//! `array` placement context, and parameter conditions rewrite the filter
//! list into an item-level one.

use serde_json::json;

use super::AtmDataSpecTypeDefinition;
use crate::compat::can_partial_data_spec_contain;
use crate::config::ForbiddenTypeSemantics;
use crate::filters::{AtmDataSpecFilter, AtmDataSpecFilterEngine, AtmDataSpecPlacementContext};
use crate::types::{AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType};

pub(super) fn definition() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        are_params_compatible,
        get_params_conditions,
        are_params_matching_filters,
        ..AtmDataSpecTypeDefinition::base(AtmDataSpecType::Array, |_| json!([]))
    }
}

/// Covariant in the item spec.
fn are_params_compatible(container: &AtmDataSpec, to_contain: &AtmDataSpec, ignore_empty: bool) -> bool {
    can_partial_data_spec_contain(
        container.item_data_spec(),
        to_contain.item_data_spec(),
        ignore_empty,
    )
}

fn are_params_matching_filters(
    spec: &AtmDataSpec,
    filters: &[AtmDataSpecFilter],
    engine: &AtmDataSpecFilterEngine,
) -> bool {
    // typeOrSupertype/typeOrSubtype already reached the items through
    // containment of the whole array.
    let forbidden: Vec<AtmDataSpecFilter> = filters
        .iter()
        .filter(|filter| matches!(filter, AtmDataSpecFilter::ForbiddenType { .. }))
        .cloned()
        .collect();
    if forbidden.is_empty() {
        return true;
    }
    engine.is_partial_matching_filters(
        spec.item_data_spec(),
        &forbidden,
        AtmDataSpecPlacementContext::Array,
    )
}

fn get_params_conditions(
    filters: &[AtmDataSpecFilter],
    _: ForbiddenTypeSemantics,
) -> Option<AtmDataSpecParamsConditions> {
    let mut item_data_spec_filters = Vec::new();

    for filter in filters {
        match filter {
            AtmDataSpecFilter::TypeOrSupertype { types } => {
                if let Some(items) = required_item_specs(types) {
                    item_data_spec_filters.push(AtmDataSpecFilter::TypeOrSupertype { types: items });
                }
            }
            AtmDataSpecFilter::TypeOrSubtype { types } => {
                if let Some(items) = required_item_specs(types) {
                    item_data_spec_filters.push(AtmDataSpecFilter::TypeOrSubtype { types: items });
                }
            }
            AtmDataSpecFilter::ForbiddenType {
                types,
                ignored_contexts,
            } => {
                let mut forbidden = types.clone();
                forbidden.extend(types.iter().filter_map(AtmDataSpec::item_data_spec).cloned());
                item_data_spec_filters.push(AtmDataSpecFilter::ForbiddenType {
                    types: forbidden,
                    ignored_contexts: ignored_contexts.clone(),
                });
            }
        }
    }

    Some(AtmDataSpecParamsConditions::Array {
        item_data_spec_filters,
    })
}

/// Item specs an item must relate to, given the entries of a
/// `typeOrSupertype` / `typeOrSubtype` filter.
///
/// `None` when the filter places no constraint on items: it names no array,
/// or one of its arrays has an open item slot (which admits any item).
fn required_item_specs(types: &[AtmDataSpec]) -> Option<Vec<AtmDataSpec>> {
    let mut items = Vec::new();
    for ty in types.iter().filter(|ty| ty.data_type() == AtmDataSpecType::Array) {
        items.push(ty.item_data_spec()?.clone());
    }
    (!items.is_empty()).then_some(items)
}
