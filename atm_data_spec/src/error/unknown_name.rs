use thiserror::Error;

/// A name that does not belong to one of the closed tag enumerations.
///
/// Callers holding loosely-typed input should treat this as an incomplete
/// spec rather than a hard failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} name '{name}'")]
pub struct UnknownTypeName {
    /// Which enumeration was being parsed (e.g. "data spec type").
    pub kind: &'static str,
    pub name: String,
}

impl UnknownTypeName {
    pub(crate) fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}
