use std::io::Write;

use failfast::prelude::*;
use failfast::{Customization, FailFastConfig, FailFastHub, FailureClass, FloatTolerance, Rule};

const YAML: &str = r#"
tolerance:
  absolute: 0.5
customizations:
  none:
    message_format: "{} needs {}"
    message_arguments: "fu0, fu1"
  not_default:
    class: !custom validation
"#;

#[test]
fn parses_yaml_with_defaults() {
    let config = FailFastConfig::from_yaml_str(YAML).expect("parse");
    assert_eq!(config.tolerance.absolute, 0.5);
    assert_eq!(config.tolerance.relative, FloatTolerance::default().relative);
    assert_eq!(
        config.customizations[&Rule::NotDefault].class,
        Some(FailureClass::Custom("validation".into()))
    );
    config.validate().expect("valid");

    let empty = FailFastConfig::from_yaml_str("{}").expect("empty document");
    assert_eq!(empty, FailFastConfig::default());
}

#[test]
fn hub_from_file_applies_settings() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(YAML.as_bytes()).expect("write");

    let hub = FailFastHub::from_yaml_path(file.path()).expect("hub");
    let checker = hub.checker();
    let failer = hub.failer();

    assert!(checker.is_equals_almost("calc", 1.0, 1.4));
    let _ = failer.fail_equals_almost("calc", "a", "b");

    assert!(checker.is_none("boot", &None::<u8>));
    let err = failer.fail_none("boot", "settings");
    assert_eq!(err.failure().expect("failure").message, "boot needs settings");

    assert!(checker.is_not_default("boot", &3_u8));
    let err = failer.fail_not_default("boot", "retries");
    assert_eq!(
        err.failure().expect("failure").class,
        FailureClass::Custom("validation".into())
    );
    assert_eq!(failer.failure().expect("latched").rule, Rule::EqualsAlmost);
}

#[test]
fn invalid_settings_are_rejected() {
    let err = FailFastConfig::from_yaml_str("tolerance: [1, 2]").expect_err("bad shape");
    assert_eq!(err.code(), "config.parse");

    let mut config = FailFastConfig::default();
    config.customizations.insert(
        Rule::Less,
        Customization::default().with_message("{} {}", "fu0"),
    );
    let err = FailFastHub::from_config(&config).expect_err("arity");
    assert_eq!(err.code(), "template.arity");
    assert_eq!(err.info().expect("payload").context["rule"], "less");

    config.customizations.clear();
    config.tolerance.absolute = f64::INFINITY;
    assert_eq!(
        FailFastHub::from_config(&config).expect_err("tolerance").code(),
        "tolerance.invalid"
    );

    let err = FailFastConfig::load("/nonexistent/failfast.yaml").expect_err("missing file");
    assert_eq!(err.code(), "config.io");
}

#[test]
fn yaml_round_trips() {
    let config = FailFastConfig::from_yaml_str(YAML).expect("parse");
    let yaml = config.to_yaml_string().expect("serialize");
    assert_eq!(FailFastConfig::from_yaml_str(&yaml).expect("reparse"), config);
}
