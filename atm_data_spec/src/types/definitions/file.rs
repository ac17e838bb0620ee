//! The `file` type and its file-kind parameter.

use serde_json::json;

use super::AtmDataSpecTypeDefinition;
use crate::config::ForbiddenTypeSemantics;
use crate::filters::lattice::{self, Projection};
use crate::filters::AtmDataSpecFilter;
use crate::types::{AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType, AtmFileType};

pub(super) fn definition() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        supertype: Some(AtmDataSpecType::Object),
        are_params_compatible,
        get_params_conditions,
        ..AtmDataSpecTypeDefinition::base(AtmDataSpecType::File, |_| json!({ "fileId": "" }))
    }
}

/// Containment one level down, over the file-kind lattice.
fn are_params_compatible(container: &AtmDataSpec, to_contain: &AtmDataSpec, ignore_empty: bool) -> bool {
    match (container.file_type(), to_contain.file_type()) {
        (Some(container_kind), Some(kind)) => container_kind.can_contain(kind),
        _ => ignore_empty,
    }
}

fn get_params_conditions(
    filters: &[AtmDataSpecFilter],
    semantics: ForbiddenTypeSemantics,
) -> Option<AtmDataSpecParamsConditions> {
    let mut allowed_file_types = AtmFileType::ALL.to_vec();

    for filter in filters {
        // A `file` entry without a kind stands for any file.
        let named: Vec<AtmFileType> = filter
            .types()
            .iter()
            .filter(|ty| ty.data_type() == AtmDataSpecType::File)
            .map(|ty| ty.file_type().unwrap_or_default())
            .collect();
        if named.is_empty() {
            continue;
        }

        let projection = match filter {
            AtmDataSpecFilter::TypeOrSupertype { .. } => Projection::TypeOrSupertype,
            AtmDataSpecFilter::TypeOrSubtype { .. } => Projection::TypeOrSubtype,
            AtmDataSpecFilter::ForbiddenType { .. } => Projection::Forbidden {
                with_descendants: semantics.enumeration_excludes_subtypes(),
            },
        };
        lattice::intersect(
            &mut allowed_file_types,
            &lattice::admissible(projection, &named),
        );
    }

    Some(AtmDataSpecParamsConditions::File { allowed_file_types })
}
