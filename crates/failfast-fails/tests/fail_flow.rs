mod common;

use common::pair;
use failfast_checks::{OrderChecks, SequenceChecks, TextChecks, ValueChecks};
use failfast_core::{CallContractor, FfError, Rule};
use failfast_fails::{FailurePoll, Failing, OrderFails, SequenceFails, TextFails, ValueFails};

fn open(path: Option<&str>) -> Result<usize, FfError> {
    let p = pair();
    if p.checker.is_none("open", &path) {
        return Err(p.failer.fail_none("open", "path"));
    }
    Ok(path.map_or(0, str::len))
}

#[test]
fn violated_precondition_returns_failure() {
    let err = open(None).expect_err("missing path");
    let failure = err.failure().expect("fail-fast failure");
    assert_eq!(failure.rule, Rule::None);
    assert_eq!(failure.message, "open: Value 'path' is none.");
    assert_eq!(open(Some("abc")).expect("valid"), 3);
}

#[test]
fn message_uses_checked_values_and_names() {
    let p = pair();
    assert!(!p.checker.is_inside("withdraw", &150, &0, &100));
    assert!(p.checker.is_outside("withdraw", &150, &100, &0));
    let err = p.failer.fail_outside("withdraw", "amount");
    assert_eq!(
        err.failure().expect("failure").message,
        "withdraw: Value 'amount'(150) is outside range [0;100]."
    );

    assert!(p.checker.is_without_prefix("connect", "ftp://host", "https://"));
    let err = p.failer.fail_without_prefix("connect", "url");
    assert_eq!(
        err.to_string(),
        "fail-fast: connect: String 'url'(ftp://host) does NOT have prefix 'https://'."
    );

    assert!(p.checker.is_sequence_not_equals("sync", &[1, 2], &[1, 3]));
    let err = p.failer.fail_sequence_not_equals("sync", "local", "remote");
    assert_eq!(
        err.failure().expect("failure").message,
        "sync: Sequence 'local' is NOT equal to sequence 'remote' (first difference at index 1: 2 vs 3)."
    );
}

#[test]
fn user_message_is_appended_and_selectable() {
    let p = pair();
    assert!(p.checker.is_equals("merge", &"a", &"a"));
    let err = p
        .failer
        .fail("merge", Rule::Equals, &["left", "right"], Some("branches must differ"));
    let failure = err.failure().expect("failure");
    assert_eq!(
        failure.message,
        "merge: Value 'left'(\"a\") is equal to value 'right'(\"a\"). branches must differ"
    );
    assert_eq!(failure.fail_args.last().map(String::as_str), Some("branches must differ"));
}

#[test]
fn fail_without_contract_is_a_contract_error() {
    let p = pair();
    let err = p.failer.fail_none("open", "path");
    assert_eq!(err.code(), "contract.missing");
    assert!(!p.failer.has_failed());

    assert!(p.checker.is_empty("parse", ""));
    let err = p.failer.fail_not_empty("parse", "input");
    assert_eq!(err.code(), "contract.rule_mismatch");
    assert!(p.contractor.pending_contract().is_some());
    let err = p.failer.fail_empty("parse", "input");
    assert!(err.is_failure());
}

#[test]
fn second_check_before_fail_is_not_swallowed() {
    let p = pair();
    assert!(p.checker.is_none("svc", &None::<u8>));
    assert!(p.checker.is_none("svc", &None::<u8>));
    let err = p.failer.fail_none("svc", "value");
    assert!(!err.is_failure());
    assert_eq!(err.code(), "contract.abandoned");
    assert!(!p.failer.has_failed());
    assert_eq!(p.failer.failure_count(), 0);
    assert!(p.contractor.pending_contract().is_none());

    assert!(p.checker.is_none("svc", &None::<u8>));
    assert!(p.failer.fail_none("svc", "value").is_failure());
}

#[test]
fn first_failure_is_latched_until_cleared() {
    let p = pair();
    assert!(!p.failer.has_failed());
    assert!(p.checker.is_false("start", false));
    let _ = p.failer.fail_false("start", "ready");
    assert!(p.checker.is_less("start", &1, &2));
    let _ = p.failer.fail_less("start", "low", "high");

    assert!(p.failer.has_failed());
    assert_eq!(p.failer.failure().expect("latched").rule, Rule::False);
    assert_eq!(p.failer.failure_count(), 2);

    let cleared = p.failer.clear_failure().expect("cleared failure");
    assert_eq!(cleared.rule, Rule::False);
    assert!(!p.failer.has_failed());
    assert!(p.failer.failure().is_none());
}

#[test]
fn failure_serializes_for_reporting() {
    let p = pair();
    assert!(p.checker.is_some("load", &Some(3)));
    let err = p.failer.fail_some("load", "cache");
    let json = serde_json::to_value(err.failure().expect("failure")).expect("json");
    assert_eq!(json["rule"], "some");
    assert_eq!(json["class"], "fail_fast");
    assert_eq!(json["check_args"][1], "3");
}
