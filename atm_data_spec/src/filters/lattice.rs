//! Set algebra over small single-parent lattices.
//!
//! Abstract enumeration works the same way over data spec tags and over
//! file kinds: each filter yields a set of admissible members, and the
//! result is the intersection of those sets in canonical order.

use crate::types::{AtmDataSpecType, AtmFileType};

pub(crate) trait Lattice: Copy + Eq + 'static {
    /// Every member, in canonical order.
    fn all() -> &'static [Self];
    fn ancestors(self) -> Vec<Self>;
    fn descendants(self) -> Vec<Self>;
}

impl Lattice for AtmDataSpecType {
    fn all() -> &'static [Self] {
        &AtmDataSpecType::ALL
    }

    fn ancestors(self) -> Vec<Self> {
        self.supertypes()
    }

    fn descendants(self) -> Vec<Self> {
        self.subtypes()
    }
}

impl Lattice for AtmFileType {
    fn all() -> &'static [Self] {
        &AtmFileType::ALL
    }

    fn ancestors(self) -> Vec<Self> {
        self.supertypes()
    }

    fn descendants(self) -> Vec<Self> {
        self.subtypes()
    }
}

/// How a filter turns the members it names into an admissible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Projection {
    /// Named members and their ancestors.
    TypeOrSupertype,
    /// Named members and their descendants.
    TypeOrSubtype,
    /// Everything except the named members (and their descendants when
    /// `with_descendants` is set).
    Forbidden { with_descendants: bool },
}

/// Admissible set for one filter, in canonical order.
pub(crate) fn admissible<T: Lattice>(projection: Projection, named: &[T]) -> Vec<T> {
    let mut covered: Vec<T> = Vec::new();
    for &member in named {
        covered.push(member);
        match projection {
            Projection::TypeOrSupertype => covered.extend(member.ancestors()),
            Projection::TypeOrSubtype => covered.extend(member.descendants()),
            Projection::Forbidden { with_descendants } => {
                if with_descendants {
                    covered.extend(member.descendants());
                }
            }
        }
    }

    let keep_covered = !matches!(projection, Projection::Forbidden { .. });
    T::all()
        .iter()
        .copied()
        .filter(|member| covered.contains(member) == keep_covered)
        .collect()
}

/// Narrow `acc` to the members also present in `set`, preserving order.
pub(crate) fn intersect<T: Lattice>(acc: &mut Vec<T>, set: &[T]) {
    acc.retain(|member| set.contains(member));
}
