//! Shared helpers for integration tests
#![allow(dead_code)]

use atm_data_spec::{AtmDataSpec, AtmDataSpecType, AtmFileType};

pub fn file_spec() -> AtmDataSpec {
    AtmDataSpec::of_type(AtmDataSpecType::File)
}

pub fn file_of(kind: AtmFileType) -> AtmDataSpec {
    AtmDataSpec::file(kind)
}

pub fn array_of(item: AtmDataSpec) -> AtmDataSpec {
    AtmDataSpec::array_of(item)
}

pub fn open_array() -> AtmDataSpec {
    AtmDataSpec::of_type(AtmDataSpecType::Array)
}

/// One complete spec per tag, with the simplest parameters filled in.
pub fn sample_specs() -> Vec<AtmDataSpec> {
    vec![
        AtmDataSpec::Integer,
        AtmDataSpec::number(false),
        AtmDataSpec::Boolean,
        AtmDataSpec::String,
        AtmDataSpec::Object,
        file_of(AtmFileType::Any),
        AtmDataSpec::Dataset,
        AtmDataSpec::Range,
        array_of(AtmDataSpec::String),
        AtmDataSpec::TimeSeriesMeasurement,
        AtmDataSpec::OnedatafsCredentials,
    ]
}
