use failfast_core::{CallContract, Customization, FailureClass, FloatTolerance, Rule};

#[test]
fn contract_starts_with_caller_argument() {
    let contract = CallContract::new("parse", Rule::Inside)
        .with_arg("12")
        .with_extra("0")
        .with_extra("10");
    assert_eq!(contract.check_args, vec!["parse", "12"]);
    assert_eq!(contract.check_extra_args, vec!["0", "10"]);
    assert!(contract.customization.is_empty());
}

#[test]
fn overlay_prefers_own_fields() {
    let registered = Customization::default()
        .with_message("{}", "fu0")
        .with_postfix(" (registered)");
    let per_call = Customization::default().with_class(FailureClass::Custom("io".into()));
    let merged = per_call.or(&registered);
    assert_eq!(merged.class, Some(FailureClass::Custom("io".into())));
    assert_eq!(merged.message_format.as_deref(), Some("{}"));
    assert_eq!(merged.message_postfix.as_deref(), Some(" (registered)"));
}

#[test]
fn format_without_arguments_must_have_no_placeholders() {
    let plain = Customization {
        message_format: Some("static text".into()),
        ..Customization::default()
    };
    assert!(plain.template().expect("parse").is_some());
    let broken = Customization {
        message_format: Some("{}".into()),
        ..Customization::default()
    };
    assert_eq!(broken.template().expect_err("arity").code(), "template.arity");
}

#[test]
fn tolerance_bounds_scale_with_magnitude() {
    let tolerance = FloatTolerance::new(-0.5, 0.1);
    assert_eq!(tolerance.absolute, 0.5);
    let (low, high) = tolerance.bounds(-10.0);
    assert!((low - -11.5).abs() < 1e-12);
    assert!((high - -8.5).abs() < 1e-12);
    assert!(tolerance.accepts(-10.0, -8.6));
    assert!(!tolerance.accepts(-10.0, -8.4));
    assert!(FloatTolerance::new(f64::NAN, 0.0).validate().is_err());
    FloatTolerance::default().validate().expect("defaults are valid");
}
