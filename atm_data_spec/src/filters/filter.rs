//! Filter and placement context definitions.

use std::str::FromStr;

use crate::error::UnknownTypeName;
use crate::types::AtmDataSpec;

/// Where, within a possibly nested data spec, filters are being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtmDataSpecPlacementContext {
    /// Top level of the edited spec.
    #[default]
    Root,
    /// Item spec of an enclosing array.
    Array,
    /// Spec describing a default value.
    Default,
}

impl AtmDataSpecPlacementContext {
    pub const ALL: [AtmDataSpecPlacementContext; 3] = [
        AtmDataSpecPlacementContext::Root,
        AtmDataSpecPlacementContext::Array,
        AtmDataSpecPlacementContext::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AtmDataSpecPlacementContext::Root => "root",
            AtmDataSpecPlacementContext::Array => "array",
            AtmDataSpecPlacementContext::Default => "default",
        }
    }

    pub fn from_name(name: &str) -> Option<AtmDataSpecPlacementContext> {
        AtmDataSpecPlacementContext::ALL
            .iter()
            .copied()
            .find(|context| context.name() == name)
    }
}

impl std::fmt::Display for AtmDataSpecPlacementContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AtmDataSpecPlacementContext {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtmDataSpecPlacementContext::from_name(s)
            .ok_or_else(|| UnknownTypeName::new("placement context", s))
    }
}

/// Kind of a filter, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtmDataSpecFilterType {
    TypeOrSupertype,
    TypeOrSubtype,
    ForbiddenType,
}

impl AtmDataSpecFilterType {
    pub fn name(self) -> &'static str {
        match self {
            AtmDataSpecFilterType::TypeOrSupertype => "typeOrSupertype",
            AtmDataSpecFilterType::TypeOrSubtype => "typeOrSubtype",
            AtmDataSpecFilterType::ForbiddenType => "forbiddenType",
        }
    }
}

impl std::fmt::Display for AtmDataSpecFilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Declarative constraint narrowing which data specs are acceptable.
///
/// Filters in a list are ANDed; the `types` of a single filter are ORed.
#[derive(Debug, Clone, PartialEq)]
pub enum AtmDataSpecFilter {
    /// The data spec must be broad enough to hold at least one of `types`.
    TypeOrSupertype { types: Vec<AtmDataSpec> },
    /// The data spec must fit inside at least one of `types`.
    TypeOrSubtype { types: Vec<AtmDataSpec> },
    /// The data spec must not be any of `types`, unless evaluated in one of
    /// `ignored_contexts`.
    ForbiddenType {
        types: Vec<AtmDataSpec>,
        ignored_contexts: Vec<AtmDataSpecPlacementContext>,
    },
}

impl AtmDataSpecFilter {
    pub fn type_or_supertype(types: impl IntoIterator<Item = AtmDataSpec>) -> Self {
        AtmDataSpecFilter::TypeOrSupertype {
            types: types.into_iter().collect(),
        }
    }

    pub fn type_or_subtype(types: impl IntoIterator<Item = AtmDataSpec>) -> Self {
        AtmDataSpecFilter::TypeOrSubtype {
            types: types.into_iter().collect(),
        }
    }

    /// A `forbiddenType` filter that applies in every placement context.
    pub fn forbidden_type(types: impl IntoIterator<Item = AtmDataSpec>) -> Self {
        AtmDataSpecFilter::ForbiddenType {
            types: types.into_iter().collect(),
            ignored_contexts: Vec::new(),
        }
    }

    /// A `forbiddenType` filter that is skipped in `ignored_contexts`.
    pub fn forbidden_type_ignoring(
        types: impl IntoIterator<Item = AtmDataSpec>,
        ignored_contexts: impl IntoIterator<Item = AtmDataSpecPlacementContext>,
    ) -> Self {
        AtmDataSpecFilter::ForbiddenType {
            types: types.into_iter().collect(),
            ignored_contexts: ignored_contexts.into_iter().collect(),
        }
    }

    pub fn filter_type(&self) -> AtmDataSpecFilterType {
        match self {
            AtmDataSpecFilter::TypeOrSupertype { .. } => AtmDataSpecFilterType::TypeOrSupertype,
            AtmDataSpecFilter::TypeOrSubtype { .. } => AtmDataSpecFilterType::TypeOrSubtype,
            AtmDataSpecFilter::ForbiddenType { .. } => AtmDataSpecFilterType::ForbiddenType,
        }
    }

    /// The specs named by this filter.
    pub fn types(&self) -> &[AtmDataSpec] {
        match self {
            AtmDataSpecFilter::TypeOrSupertype { types }
            | AtmDataSpecFilter::TypeOrSubtype { types }
            | AtmDataSpecFilter::ForbiddenType { types, .. } => types,
        }
    }
}
