//! Types without parameters.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};

use super::AtmDataSpecTypeDefinition;
use crate::types::{AtmDataSpec, AtmDataSpecType};

pub(super) fn integer() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition::base(AtmDataSpecType::Integer, |_| json!(0))
}

pub(super) fn boolean() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition::base(AtmDataSpecType::Boolean, |_| json!(false))
}

pub(super) fn string() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition::base(AtmDataSpecType::String, |_| json!(""))
}

pub(super) fn object() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition::base(AtmDataSpecType::Object, |_| json!({}))
}

pub(super) fn dataset() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        supertype: Some(AtmDataSpecType::Object),
        ..AtmDataSpecTypeDefinition::base(AtmDataSpecType::Dataset, |_| {
            json!({ "datasetId": "" })
        })
    }
}

pub(super) fn range() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        supertype: Some(AtmDataSpecType::Object),
        ..AtmDataSpecTypeDefinition::base(AtmDataSpecType::Range, |_| {
            json!({ "start": 0, "end": 1, "step": 1 })
        })
    }
}

pub(super) fn time_series_measurement() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        supertype: Some(AtmDataSpecType::Object),
        ..AtmDataSpecTypeDefinition::base(
            AtmDataSpecType::TimeSeriesMeasurement,
            time_series_measurement_default,
        )
    }
}

pub(super) fn onedatafs_credentials() -> AtmDataSpecTypeDefinition {
    AtmDataSpecTypeDefinition {
        supertype: Some(AtmDataSpecType::Object),
        ..AtmDataSpecTypeDefinition::base(AtmDataSpecType::OnedatafsCredentials, |_| {
            json!({ "host": "", "accessToken": "" })
        })
    }
}

fn time_series_measurement_default(_: &AtmDataSpec) -> Value {
    // Unix seconds; a clock before the epoch yields 0.
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    json!({ "timestamp": timestamp, "tsName": "", "value": 0 })
}
