//! Supertype tree walks for AtmDataSpecType.

use super::AtmDataSpecType;
use crate::types::definitions::registry;

impl AtmDataSpecType {
    /// The nearest supertype of this tag, `None` for roots of the forest.
    pub fn supertype(self) -> Option<AtmDataSpecType> {
        registry::definition(self).supertype
    }

    /// All ancestors of this tag, nearest first.
    ///
    /// # Examples
    /// ```
    /// use atm_data_spec::AtmDataSpecType;
    ///
    /// assert_eq!(AtmDataSpecType::File.supertypes(), vec![AtmDataSpecType::Object]);
    /// assert!(AtmDataSpecType::Array.supertypes().is_empty());
    /// ```
    pub fn supertypes(self) -> Vec<AtmDataSpecType> {
        let mut found = Vec::new();
        let mut current = self.supertype();
        while let Some(ty) = current {
            // The registry is a forest; a cycle would be a table bug.
            if ty == self || found.contains(&ty) {
                break;
            }
            found.push(ty);
            current = ty.supertype();
        }
        found
    }

    /// All descendants of this tag, in canonical registry order.
    pub fn subtypes(self) -> Vec<AtmDataSpecType> {
        let mut found = Vec::new();
        let mut to_visit = vec![self];
        while let Some(ty) = to_visit.pop() {
            for &child in registry::direct_subtypes(ty) {
                if child != self && !found.contains(&child) {
                    found.push(child);
                    to_visit.push(child);
                }
            }
        }
        found.sort();
        found
    }

    /// Check if `self` equals `other` or is one of its descendants.
    pub fn is_type_or_subtype_of(self, other: AtmDataSpecType) -> bool {
        self == other || self.supertypes().contains(&other)
    }
}
