//! Wire name parsing for AtmDataSpecType.

use std::str::FromStr;

use super::AtmDataSpecType;
use crate::error::UnknownTypeName;

impl AtmDataSpecType {
    /// Look up a type tag by its wire name.
    ///
    /// Returns `None` for names outside the registry. Matching is exact
    /// (wire names are case-sensitive).
    pub fn from_name(name: &str) -> Option<AtmDataSpecType> {
        AtmDataSpecType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == name)
    }
}

impl FromStr for AtmDataSpecType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtmDataSpecType::from_name(s).ok_or_else(|| UnknownTypeName::new("data spec type", s))
    }
}
