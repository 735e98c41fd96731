use failfast_core::errors::{ErrorInfo, FfError};
use failfast_core::{FailFastError, FailureClass, Rule};

fn sample_failure() -> FailFastError {
    FailFastError {
        rule: Rule::None,
        caller: "open".into(),
        message: "open: Value 'path' is none.".into(),
        class: FailureClass::FailFast,
        check_args: vec!["open".into()],
        check_extra_args: Vec::new(),
        fail_args: vec!["open".into(), "path".into()],
    }
}

#[test]
fn contract_error_surface() {
    let err = FfError::Contract(
        ErrorInfo::new("contract.missing", "no contract pending").with_context("caller", "open"),
    );
    assert_eq!(err.code(), "contract.missing");
    assert!(err.info().expect("payload").context.contains_key("caller"));
    assert!(!err.is_failure());
}

#[test]
fn failure_surface() {
    let err = FfError::from(sample_failure());
    assert!(err.is_failure());
    assert_eq!(err.code(), "failfast.failed");
    assert!(err.info().is_none());
    assert_eq!(err.to_string(), "fail-fast: open: Value 'path' is none.");
}

#[test]
fn info_display_includes_context_and_hint() {
    let info = ErrorInfo::new("template.selector", "invalid argument selector 'zz1'")
        .with_context("index", 1)
        .with_hint("selectors look like fu0");
    assert_eq!(
        info.to_string(),
        "invalid argument selector 'zz1' (code: template.selector) | context: [index=1] | hint: selectors look like fu0"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = FfError::from(sample_failure());
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Failed");
    assert_eq!(json["detail"]["rule"], "none");
    let back: FfError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, err);
}
