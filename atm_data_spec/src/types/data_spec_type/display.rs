//! Wire name and formatting for AtmDataSpecType.

use super::AtmDataSpecType;

impl AtmDataSpecType {
    /// Get the wire name of this type tag.
    pub fn name(self) -> &'static str {
        match self {
            AtmDataSpecType::Integer => "integer",
            AtmDataSpecType::Number => "number",
            AtmDataSpecType::Boolean => "boolean",
            AtmDataSpecType::String => "string",
            AtmDataSpecType::Object => "object",
            AtmDataSpecType::File => "file",
            AtmDataSpecType::Dataset => "dataset",
            AtmDataSpecType::Range => "range",
            AtmDataSpecType::Array => "array",
            AtmDataSpecType::TimeSeriesMeasurement => "timeSeriesMeasurement",
            AtmDataSpecType::OnedatafsCredentials => "onedatafsCredentials",
        }
    }
}

impl std::fmt::Display for AtmDataSpecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
