//! Containment check between data specs.
//!
//! `can_data_spec_contain(container, to_contain)` answers "may a slot typed
//! `container` hold a value typed `to_contain`?". Tags are compared through
//! the supertype tree; equal tags defer to the type's own parameter rule
//! (which is how `array` recurses into its items and `file` compares kinds).

use crate::types::definitions::registry;
use crate::types::AtmDataSpec;

/// Check if a slot described by `container` can hold a value described by
/// `to_contain`.
///
/// When `ignore_empty` is `true`, missing parameters (an array without an item
/// spec, a file without a kind) do not make the check fail; only directly
/// stated incompatibilities do.
///
/// # Examples
/// ```
/// use atm_data_spec::{can_data_spec_contain, AtmDataSpec};
///
/// assert!(can_data_spec_contain(&AtmDataSpec::Object, &AtmDataSpec::Dataset, false));
/// assert!(!can_data_spec_contain(&AtmDataSpec::Dataset, &AtmDataSpec::Object, false));
/// assert!(can_data_spec_contain(
///     &AtmDataSpec::array_of(AtmDataSpec::Object),
///     &AtmDataSpec::array_of(AtmDataSpec::Range),
///     false,
/// ));
/// ```
pub fn can_data_spec_contain(
    container: &AtmDataSpec,
    to_contain: &AtmDataSpec,
    ignore_empty: bool,
) -> bool {
    can_partial_data_spec_contain(Some(container), Some(to_contain), ignore_empty)
}

/// Containment check where either side may still be incomplete (`None`).
///
/// An incomplete side yields `ignore_empty`.
pub fn can_partial_data_spec_contain(
    container: Option<&AtmDataSpec>,
    to_contain: Option<&AtmDataSpec>,
    ignore_empty: bool,
) -> bool {
    let (Some(container), Some(to_contain)) = (container, to_contain) else {
        tracing::trace!(ignore_empty, "incomplete data spec in containment check");
        return ignore_empty;
    };

    let container_type = container.data_type();
    let contained_type = to_contain.data_type();
    if container_type == contained_type {
        let definition = registry::definition(container_type);
        (definition.are_params_compatible)(container, to_contain, ignore_empty)
    } else {
        contained_type.supertypes().contains(&container_type)
    }
}
