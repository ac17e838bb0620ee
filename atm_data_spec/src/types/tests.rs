use super::*;
use crate::compat::{can_data_spec_contain, can_partial_data_spec_contain};
use serde_json::json;

#[test]
fn test_type_names_round_trip() {
    for ty in AtmDataSpecType::ALL {
        assert_eq!(AtmDataSpecType::from_name(ty.name()), Some(ty));
        assert_eq!(ty.to_string().parse::<AtmDataSpecType>(), Ok(ty));
    }
    assert_eq!(
        AtmDataSpecType::TimeSeriesMeasurement.name(),
        "timeSeriesMeasurement"
    );
}

#[test]
fn test_type_names_are_case_sensitive() {
    assert_eq!(AtmDataSpecType::from_name("Object"), None);
    let err = "anyValue".parse::<AtmDataSpecType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown data spec type name 'anyValue'");
}

#[test]
fn test_object_hierarchy() {
    // file, dataset, range, tsm and credentials are all objects
    for ty in [
        AtmDataSpecType::File,
        AtmDataSpecType::Dataset,
        AtmDataSpecType::Range,
        AtmDataSpecType::TimeSeriesMeasurement,
        AtmDataSpecType::OnedatafsCredentials,
    ] {
        assert_eq!(ty.supertype(), Some(AtmDataSpecType::Object));
        assert_eq!(ty.supertypes(), vec![AtmDataSpecType::Object]);
        assert!(ty.is_type_or_subtype_of(AtmDataSpecType::Object));
        assert!(!AtmDataSpecType::Object.is_type_or_subtype_of(ty));
    }
    assert_eq!(
        AtmDataSpecType::Object.subtypes(),
        vec![
            AtmDataSpecType::File,
            AtmDataSpecType::Dataset,
            AtmDataSpecType::Range,
            AtmDataSpecType::TimeSeriesMeasurement,
            AtmDataSpecType::OnedatafsCredentials,
        ]
    );
}

#[test]
fn test_roots_have_no_supertype() {
    for ty in [
        AtmDataSpecType::Integer,
        AtmDataSpecType::Number,
        AtmDataSpecType::Boolean,
        AtmDataSpecType::String,
        AtmDataSpecType::Object,
        AtmDataSpecType::Array,
    ] {
        assert_eq!(ty.supertype(), None);
        assert!(ty.supertypes().is_empty());
    }
    // integer is a separate legacy tag, not a child of number
    assert!(!AtmDataSpecType::Integer.is_type_or_subtype_of(AtmDataSpecType::Number));
    assert!(AtmDataSpecType::Array.subtypes().is_empty());
}

#[test]
fn test_file_type_lattice() {
    assert_eq!(AtmFileType::default(), AtmFileType::Any);
    assert_eq!(AtmFileType::Any.supertypes(), Vec::<AtmFileType>::new());
    assert_eq!(AtmFileType::Directory.supertypes(), vec![AtmFileType::Any]);
    assert_eq!(
        AtmFileType::Any.subtypes(),
        vec![
            AtmFileType::Regular,
            AtmFileType::Directory,
            AtmFileType::SymbolicLink
        ]
    );
    assert!(AtmFileType::Any.can_contain(AtmFileType::SymbolicLink));
    assert!(AtmFileType::Regular.can_contain(AtmFileType::Regular));
    assert!(!AtmFileType::Regular.can_contain(AtmFileType::Any));
    assert!(!AtmFileType::Regular.can_contain(AtmFileType::Directory));
}

#[test]
fn test_file_type_names() {
    assert_eq!(AtmFileType::SymbolicLink.to_string(), "SYMBOLIC_LINK");
    assert_eq!("DIRECTORY".parse::<AtmFileType>(), Ok(AtmFileType::Directory));
    assert!("directory".parse::<AtmFileType>().is_err());
}

#[test]
fn test_data_spec_display() {
    assert_eq!(AtmDataSpec::Dataset.to_string(), "dataset");
    assert_eq!(AtmDataSpec::number(true).to_string(), "number<integer>");
    assert_eq!(AtmDataSpec::number(false).to_string(), "number");
    assert_eq!(
        AtmDataSpec::file(AtmFileType::Regular).to_string(),
        "file<REGULAR>"
    );
    assert_eq!(
        AtmDataSpec::array_of(AtmDataSpec::array_of(AtmDataSpec::String)).to_string(),
        "array<array<string>>"
    );
    assert_eq!(
        AtmDataSpec::of_type(AtmDataSpecType::Array).to_string(),
        "array<?>"
    );
}

#[test]
fn test_of_type_leaves_params_unset() {
    for ty in AtmDataSpecType::ALL {
        let spec = AtmDataSpec::of_type(ty);
        assert_eq!(spec.data_type(), ty);
        assert_eq!(spec.item_data_spec(), None);
        assert_eq!(spec.file_type(), None);
        assert!(!spec.is_integers_only());
    }
}

#[test]
fn test_contain_reflexive_for_complete_specs() {
    let specs = [
        AtmDataSpec::Integer,
        AtmDataSpec::number(true),
        AtmDataSpec::number(false),
        AtmDataSpec::Boolean,
        AtmDataSpec::String,
        AtmDataSpec::Object,
        AtmDataSpec::file(AtmFileType::Directory),
        AtmDataSpec::Dataset,
        AtmDataSpec::Range,
        AtmDataSpec::array_of(AtmDataSpec::Range),
        AtmDataSpec::TimeSeriesMeasurement,
        AtmDataSpec::OnedatafsCredentials,
    ];
    for spec in &specs {
        assert!(can_data_spec_contain(spec, spec, false), "{spec}");
    }
}

#[test]
fn test_contain_follows_supertype_tree() {
    assert!(can_data_spec_contain(&AtmDataSpec::Object, &AtmDataSpec::Range, false));
    assert!(can_data_spec_contain(
        &AtmDataSpec::Object,
        &AtmDataSpec::file(AtmFileType::Regular),
        false
    ));
    assert!(!can_data_spec_contain(&AtmDataSpec::Range, &AtmDataSpec::Object, true));
    assert!(!can_data_spec_contain(&AtmDataSpec::Range, &AtmDataSpec::Dataset, true));
    assert!(!can_data_spec_contain(&AtmDataSpec::String, &AtmDataSpec::Boolean, true));
}

#[test]
fn test_contain_integer_and_number_are_unrelated() {
    assert!(!can_data_spec_contain(&AtmDataSpec::Integer, &AtmDataSpec::number(true), true));
    assert!(!can_data_spec_contain(&AtmDataSpec::number(false), &AtmDataSpec::Integer, true));
}

#[test]
fn test_contain_number_integers_only() {
    let any_number = AtmDataSpec::number(false);
    let integers = AtmDataSpec::number(true);
    let unset = AtmDataSpec::of_type(AtmDataSpecType::Number);

    assert!(can_data_spec_contain(&any_number, &integers, false));
    assert!(!can_data_spec_contain(&integers, &any_number, false));
    assert!(!can_data_spec_contain(&integers, &unset, true));
    assert!(can_data_spec_contain(&unset, &integers, false));
}

#[test]
fn test_contain_file_kinds() {
    let any = AtmDataSpec::file(AtmFileType::Any);
    let regular = AtmDataSpec::file(AtmFileType::Regular);
    let directory = AtmDataSpec::file(AtmFileType::Directory);
    let unset = AtmDataSpec::of_type(AtmDataSpecType::File);

    assert!(can_data_spec_contain(&any, &regular, false));
    assert!(!can_data_spec_contain(&regular, &any, false));
    assert!(!can_data_spec_contain(&regular, &directory, true));

    // A missing kind is only tolerated with ignore_empty
    assert!(!can_data_spec_contain(&unset, &regular, false));
    assert!(can_data_spec_contain(&unset, &regular, true));
    assert!(can_data_spec_contain(&regular, &unset, true));
}

#[test]
fn test_contain_arrays_are_covariant() {
    let objects = AtmDataSpec::array_of(AtmDataSpec::Object);
    let datasets = AtmDataSpec::array_of(AtmDataSpec::Dataset);

    assert!(can_data_spec_contain(&objects, &datasets, false));
    assert!(!can_data_spec_contain(&datasets, &objects, false));
    assert!(!can_data_spec_contain(&AtmDataSpec::Object, &objects, true));
    assert!(!can_data_spec_contain(&objects, &AtmDataSpec::Object, true));
}

#[test]
fn test_contain_nested_arrays() {
    let outer = AtmDataSpec::array_of(AtmDataSpec::array_of(AtmDataSpec::file(AtmFileType::Any)));
    let inner = AtmDataSpec::array_of(AtmDataSpec::array_of(AtmDataSpec::file(
        AtmFileType::SymbolicLink,
    )));
    assert!(can_data_spec_contain(&outer, &inner, false));
    assert!(!can_data_spec_contain(&inner, &outer, false));
}

#[test]
fn test_contain_incomplete_array_items() {
    let open = AtmDataSpec::of_type(AtmDataSpecType::Array);
    let strings = AtmDataSpec::array_of(AtmDataSpec::String);

    assert!(!can_data_spec_contain(&open, &strings, false));
    assert!(can_data_spec_contain(&open, &strings, true));
    assert!(can_data_spec_contain(&strings, &open, true));

    let open_nested = AtmDataSpec::array_of(AtmDataSpec::of_type(AtmDataSpecType::Array));
    let bools_nested = AtmDataSpec::array_of(AtmDataSpec::array_of(AtmDataSpec::Boolean));
    assert!(can_data_spec_contain(&open_nested, &bools_nested, true));
    assert!(!can_data_spec_contain(&open_nested, &bools_nested, false));
}

#[test]
fn test_partial_contain() {
    assert!(can_partial_data_spec_contain(None, Some(&AtmDataSpec::String), true));
    assert!(!can_partial_data_spec_contain(None, Some(&AtmDataSpec::String), false));
    assert!(!can_partial_data_spec_contain(Some(&AtmDataSpec::String), None, false));
    assert!(can_partial_data_spec_contain(
        Some(&AtmDataSpec::Object),
        Some(&AtmDataSpec::Dataset),
        false
    ));
}

#[test]
fn test_default_values_of_plain_types() {
    assert_eq!(get_default_value(&AtmDataSpec::Integer), json!(0));
    assert_eq!(get_default_value(&AtmDataSpec::number(false)), json!(0));
    assert_eq!(get_default_value(&AtmDataSpec::Boolean), json!(false));
    assert_eq!(get_default_value(&AtmDataSpec::String), json!(""));
    assert_eq!(get_default_value(&AtmDataSpec::Object), json!({}));
    assert_eq!(
        get_default_value(&AtmDataSpec::file(AtmFileType::Regular)),
        json!({ "fileId": "" })
    );
    assert_eq!(
        get_default_value(&AtmDataSpec::Dataset),
        json!({ "datasetId": "" })
    );
    assert_eq!(
        get_default_value(&AtmDataSpec::OnedatafsCredentials),
        json!({ "host": "", "accessToken": "" })
    );
    assert_eq!(
        get_default_value(&AtmDataSpec::of_type(AtmDataSpecType::Array)),
        json!([])
    );
}

#[test]
fn test_default_number_uses_first_allowed_value() {
    let spec = AtmDataSpec::Number {
        integers_only: Some(false),
        allowed_values: Some(vec![2.5, 1.0]),
    };
    assert_eq!(get_default_value(&spec), json!(2.5));

    let spec = AtmDataSpec::Number {
        integers_only: Some(true),
        allowed_values: Some(vec![7.0]),
    };
    assert_eq!(get_default_value(&spec), json!(7));

    let spec = AtmDataSpec::Number {
        integers_only: None,
        allowed_values: Some(Vec::new()),
    };
    assert_eq!(get_default_value(&spec), json!(0));
}

#[test]
fn test_default_time_series_measurement() {
    let value = get_default_value(&AtmDataSpec::TimeSeriesMeasurement);
    assert_eq!(value["tsName"], json!(""));
    assert_eq!(value["value"], json!(0));
    assert!(value["timestamp"].as_u64().is_some_and(|ts| ts > 0));
}

#[test]
fn test_default_values_are_fresh() {
    let mut first = get_default_value(&AtmDataSpec::Object);
    first["mutated"] = json!(true);
    assert_eq!(get_default_value(&AtmDataSpec::Object), json!({}));
}
