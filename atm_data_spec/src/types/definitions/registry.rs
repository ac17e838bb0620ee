//! Process-wide, read-only table of type definitions.
//!
//! Built lazily on first use and never mutated afterwards, so lookups are
//! safe from any thread without synchronization beyond the one-time init.

use once_cell::sync::Lazy;

use super::{build_definition, AtmDataSpecTypeDefinition};
use crate::types::AtmDataSpecType;

struct Registry {
    /// Indexed by `AtmDataSpecType::index()`.
    definitions: Vec<AtmDataSpecTypeDefinition>,
    /// Direct children of each tag, indexed like `definitions`.
    direct_subtypes: Vec<Vec<AtmDataSpecType>>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let definitions: Vec<_> = AtmDataSpecType::ALL
        .iter()
        .map(|&ty| build_definition(ty))
        .collect();

    let mut direct_subtypes = vec![Vec::new(); definitions.len()];
    for definition in &definitions {
        if let Some(parent) = definition.supertype {
            direct_subtypes[parent.index()].push(definition.data_type);
        }
    }

    tracing::trace!(types = definitions.len(), "built data spec type registry");
    Registry {
        definitions,
        direct_subtypes,
    }
});

/// Get the definition record of a type tag.
pub(crate) fn definition(data_type: AtmDataSpecType) -> &'static AtmDataSpecTypeDefinition {
    &REGISTRY.definitions[data_type.index()]
}

/// Get the tags whose nearest supertype is `data_type`, in registry order.
pub(crate) fn direct_subtypes(data_type: AtmDataSpecType) -> &'static [AtmDataSpecType] {
    &REGISTRY.direct_subtypes[data_type.index()]
}
