use apidiff::{ApidiffError, ClassifyError, DiffError, OutputError, ParseError, Side};

#[test]
fn test_parse_error_display() {
    let err = ParseError::file_not_found("build1.yaml");
    assert_eq!(err.to_string(), "File not found: build1.yaml");
}

#[test]
fn test_unknown_format_error() {
    let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
    let err = ParseError::unknown_format("/path/to/build", yaml_err);
    assert!(err.to_string().contains("Could not detect file format"));
    assert!(err.to_string().contains("/path/to/build"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_missing_index_display() {
    let err = ClassifyError::MissingIndex {
        path: "x-flows[0].name".to_string(),
        segment: "name".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No numeric index in path segment 'name' of x-flows[0].name"
    );
}

#[test]
fn test_output_error_display() {
    let err = OutputError::io(
        "report.csv",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert_eq!(err.to_string(), "Failed to write report.csv: denied");
}

#[test]
fn test_umbrella_conversions() {
    let err: ApidiffError = ParseError::file_not_found("a.yaml").into();
    assert!(matches!(err, ApidiffError::Parse(_)));

    let err: ApidiffError = DiffError::RootNotMapping {
        side: Side::Left,
        found: "sequence",
    }
    .into();
    assert!(matches!(err, ApidiffError::Diff(_)));
    assert!(err.to_string().contains("left document"));
}
