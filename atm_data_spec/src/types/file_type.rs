//! File kinds parameterizing the `file` data spec type.
//!
//! The kinds form a two-level lattice:
//! ```text
//! ANY
//!  ├── REGULAR
//!  ├── DIRECTORY
//!  └── SYMBOLIC_LINK
//! ```

use std::str::FromStr;

use crate::error::UnknownTypeName;

/// Kind of filesystem entry a `file` data spec refers to.
///
/// Declaration order is the canonical order used by parameter conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AtmFileType {
    /// Any entry; the root of the lattice.
    #[default]
    Any,
    Regular,
    Directory,
    SymbolicLink,
}

impl AtmFileType {
    /// Every file kind, in canonical order.
    pub const ALL: [AtmFileType; 4] = [
        AtmFileType::Any,
        AtmFileType::Regular,
        AtmFileType::Directory,
        AtmFileType::SymbolicLink,
    ];

    /// The nearest supertype of this kind, `None` for `ANY`.
    pub fn supertype(self) -> Option<AtmFileType> {
        match self {
            AtmFileType::Any => None,
            AtmFileType::Regular | AtmFileType::Directory | AtmFileType::SymbolicLink => {
                Some(AtmFileType::Any)
            }
        }
    }

    /// All ancestors of this kind, nearest first.
    pub fn supertypes(self) -> Vec<AtmFileType> {
        let mut found = Vec::new();
        let mut current = self.supertype();
        while let Some(kind) = current {
            found.push(kind);
            current = kind.supertype();
        }
        found
    }

    /// All descendants of this kind, in canonical order.
    pub fn subtypes(self) -> Vec<AtmFileType> {
        AtmFileType::ALL
            .iter()
            .copied()
            .filter(|kind| *kind != self && kind.supertypes().contains(&self))
            .collect()
    }

    /// Check if a file of kind `other` may be stored where `self` is expected.
    pub fn can_contain(self, other: AtmFileType) -> bool {
        self == other || other.supertypes().contains(&self)
    }

    /// Get the wire name of this kind (`"SYMBOLIC_LINK"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            AtmFileType::Any => "ANY",
            AtmFileType::Regular => "REGULAR",
            AtmFileType::Directory => "DIRECTORY",
            AtmFileType::SymbolicLink => "SYMBOLIC_LINK",
        }
    }

    /// Look up a kind by its wire name.
    ///
    /// Returns `None` for unknown names. Matching is exact (wire names are
    /// upper-case).
    pub fn from_name(name: &str) -> Option<AtmFileType> {
        AtmFileType::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for AtmFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AtmFileType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtmFileType::from_name(s).ok_or_else(|| UnknownTypeName::new("file type", s))
    }
}
