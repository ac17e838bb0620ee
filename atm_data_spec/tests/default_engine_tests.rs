//! The free functions ignore engine configuration in the environment.
//!
//! Kept in its own test binary because it mutates process environment.

use std::env;

use atm_data_spec::config::{CONFIG_PATH_ENV, FORBIDDEN_TYPE_SEMANTICS_ENV};
use atm_data_spec::{
    get_matching_atm_data_spec_types, is_atm_data_spec_matching_filters, AtmDataSpec,
    AtmDataSpecFilter, AtmDataSpecFilterEngine, AtmDataSpecPlacementContext, AtmDataSpecType,
    EngineConfig, ForbiddenTypeSemantics,
};
use pretty_assertions::assert_eq;

#[test]
fn test_free_functions_keep_legacy_semantics_under_env_override() {
    env::remove_var(CONFIG_PATH_ENV);
    env::set_var(FORBIDDEN_TYPE_SEMANTICS_ENV, "subtype");

    let filters = [AtmDataSpecFilter::forbidden_type([AtmDataSpec::Object])];
    let files = AtmDataSpec::array_of(AtmDataSpec::of_type(AtmDataSpecType::File));
    let root = AtmDataSpecPlacementContext::Root;

    assert!(is_atm_data_spec_matching_filters(&files, &filters, root));
    assert!(!is_atm_data_spec_matching_filters(
        &AtmDataSpec::array_of(AtmDataSpec::Object),
        &filters,
        root
    ));
    assert_eq!(
        get_matching_atm_data_spec_types(&filters),
        vec![
            AtmDataSpecType::Integer,
            AtmDataSpecType::Number,
            AtmDataSpecType::Boolean,
            AtmDataSpecType::String,
            AtmDataSpecType::Array,
        ]
    );

    // callers opt in to the environment explicitly
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(
        config.filters.forbidden_type_semantics,
        ForbiddenTypeSemantics::Subtype
    );
    let engine = AtmDataSpecFilterEngine::from_config(&config);
    assert!(!engine.is_matching_filters(&files, &filters, root));

    env::remove_var(FORBIDDEN_TYPE_SEMANTICS_ENV);
}
