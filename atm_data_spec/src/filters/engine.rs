//! Filter evaluation.
//!
//! Two entry points share the same filter algebra:
//!
//! - instance check: does a concrete spec satisfy every filter?
//! - abstract enumeration: which type tags (and, one level down, which
//!   parameter values) can satisfy every filter before any spec exists?

use super::lattice::{self, Projection};
use super::{AtmDataSpecFilter, AtmDataSpecPlacementContext};
use crate::compat::can_data_spec_contain;
use crate::config::{EngineConfig, ForbiddenTypeSemantics};
use crate::types::definitions::registry;
use crate::types::{AtmDataSpec, AtmDataSpecParamsConditions, AtmDataSpecType};

/// Filter evaluator configured with a `forbiddenType` semantics.
///
/// Stateless apart from its configuration: cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AtmDataSpecFilterEngine {
    forbidden_type_semantics: ForbiddenTypeSemantics,
}

impl AtmDataSpecFilterEngine {
    pub const fn with_semantics(forbidden_type_semantics: ForbiddenTypeSemantics) -> Self {
        Self {
            forbidden_type_semantics,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_semantics(config.filters.forbidden_type_semantics)
    }

    pub fn forbidden_type_semantics(&self) -> ForbiddenTypeSemantics {
        self.forbidden_type_semantics
    }

    /// Check if `spec` satisfies all `filters` when placed in `placement_context`.
    pub fn is_matching_filters(
        &self,
        spec: &AtmDataSpec,
        filters: &[AtmDataSpecFilter],
        placement_context: AtmDataSpecPlacementContext,
    ) -> bool {
        self.is_partial_matching_filters(Some(spec), filters, placement_context)
    }

    /// Like [`is_matching_filters`](Self::is_matching_filters), where an
    /// incomplete spec (`None`) matches every filter.
    pub fn is_partial_matching_filters(
        &self,
        spec: Option<&AtmDataSpec>,
        filters: &[AtmDataSpecFilter],
        placement_context: AtmDataSpecPlacementContext,
    ) -> bool {
        let Some(spec) = spec else {
            return true;
        };

        for filter in filters {
            if !self.is_matching_filter(spec, filter, placement_context) {
                tracing::trace!(
                    filter_type = %filter.filter_type(),
                    data_spec = %spec,
                    placement_context = %placement_context,
                    "data spec rejected by filter"
                );
                return false;
            }
        }

        let definition = registry::definition(spec.data_type());
        (definition.are_params_matching_filters)(spec, filters, self)
    }

    fn is_matching_filter(
        &self,
        spec: &AtmDataSpec,
        filter: &AtmDataSpecFilter,
        placement_context: AtmDataSpecPlacementContext,
    ) -> bool {
        match filter {
            AtmDataSpecFilter::TypeOrSupertype { types } => {
                types.is_empty() || types.iter().any(|ty| can_data_spec_contain(spec, ty, true))
            }
            AtmDataSpecFilter::TypeOrSubtype { types } => {
                types.is_empty() || types.iter().any(|ty| can_data_spec_contain(ty, spec, true))
            }
            AtmDataSpecFilter::ForbiddenType {
                types,
                ignored_contexts,
            } => {
                ignored_contexts.contains(&placement_context)
                    || !types.iter().any(|ty| self.is_forbidden_by(spec, ty))
            }
        }
    }

    fn is_forbidden_by(&self, spec: &AtmDataSpec, forbidden: &AtmDataSpec) -> bool {
        if self.forbidden_type_semantics.instance_excludes_subtypes() {
            can_data_spec_contain(forbidden, spec, true)
        } else {
            spec.data_type() == forbidden.data_type()
        }
    }

    /// Type tags that can satisfy all `filters`, in canonical registry order.
    ///
    /// Parameters are ignored. A filter naming no types does not restrict
    /// the result.
    pub fn matching_types(&self, filters: &[AtmDataSpecFilter]) -> Vec<AtmDataSpecType> {
        let mut matching = AtmDataSpecType::ALL.to_vec();

        for filter in filters {
            let named: Vec<AtmDataSpecType> =
                filter.types().iter().map(AtmDataSpec::data_type).collect();
            if named.is_empty() {
                continue;
            }
            let projection = match filter {
                AtmDataSpecFilter::TypeOrSupertype { .. } => Projection::TypeOrSupertype,
                AtmDataSpecFilter::TypeOrSubtype { .. } => Projection::TypeOrSubtype,
                AtmDataSpecFilter::ForbiddenType { .. } => Projection::Forbidden {
                    with_descendants: self.forbidden_type_semantics.enumeration_excludes_subtypes(),
                },
            };
            lattice::intersect(&mut matching, &lattice::admissible(projection, &named));
        }

        tracing::debug!(
            filters = filters.len(),
            matching = ?matching,
            "enumerated matching data spec types"
        );
        matching
    }

    /// Admissible parameter values of `data_type` under `filters`.
    ///
    /// `None` for types without parameters.
    pub fn params_conditions(
        &self,
        data_type: AtmDataSpecType,
        filters: &[AtmDataSpecFilter],
    ) -> Option<AtmDataSpecParamsConditions> {
        let definition = registry::definition(data_type);
        (definition.get_params_conditions)(filters, self.forbidden_type_semantics)
    }
}
