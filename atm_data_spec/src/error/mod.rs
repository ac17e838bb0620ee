pub mod config;
pub mod unknown_name;

pub use config::ConfigError;
pub use unknown_name::UnknownTypeName;
