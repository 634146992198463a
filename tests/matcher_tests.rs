use exhaustive::{match_tag, match_value, CaseMap, Discriminant, MatchError, Value};
use std::borrow::Cow;

fn lowercase_cases<'a>(with_fallback: bool) -> CaseMap<'a, &'a str, String> {
    let cases = CaseMap::new()
        .case("IDLE", |value: &str| value.to_lowercase())
        .case("LOADING", |value: &str| value.to_lowercase())
        .case("SUCCESS", |value: &str| value.to_lowercase())
        .case("ERROR", |value: &str| value.to_lowercase());

    if with_fallback {
        cases.fallback(|| "🚨".to_string())
    } else {
        cases
    }
}

#[test]
fn test_every_declared_case_dispatches_to_its_handler() {
    for status in ["IDLE", "LOADING", "SUCCESS", "ERROR"] {
        let label = match_value(status, lowercase_cases(false)).unwrap();
        assert_eq!(label, status.to_lowercase());
    }
}

#[test]
fn test_unknown_value_without_fallback_raises() {
    let fault = match_value("unknown", lowercase_cases(false)).unwrap_err();
    assert!(matches!(fault, MatchError::Unreachable(_)));
    assert_eq!(
        fault.to_string(),
        "Internal Error: encountered impossible value \"unknown\"",
    );
}

#[test]
fn test_unknown_value_with_fallback_returns_its_result() {
    let label = match_value("unknown", lowercase_cases(true)).unwrap();
    assert_eq!(label, "🚨");
}

#[test]
fn test_falsy_fallback_results_are_honored() {
    let flag = match_value("unknown", CaseMap::new()
        .case("ADMIN", |_: &str| true)
        .fallback(|| false))
        .unwrap();
    assert!(!flag);

    let count = match_value("unknown", CaseMap::new()
        .case("ONE", |_: &str| 1)
        .fallback(|| 0))
        .unwrap();
    assert_eq!(count, 0);

    let text = match_value("unknown", CaseMap::new()
        .case("SOME", |_: &str| "some".to_string())
        .fallback(String::new))
        .unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_boolean_discriminants_use_literal_text_keys() {
    fn bool_cases<'a>() -> CaseMap<'a, bool, String> {
        CaseMap::new()
            .case("true", |value: bool| value.to_string())
            .case("false", |value: bool| value.to_string())
    }

    assert_eq!(match_value(true, bool_cases()).unwrap(), "true");
    assert_eq!(match_value(false, bool_cases()).unwrap(), "false");

    // Simulates a static-check escape: the same keys, but a value from
    // outside the boolean domain.
    let fault = match_value("unknown", CaseMap::new()
        .case("true", |value: &str| value.to_string())
        .case("false", |value: &str| value.to_string()))
        .unwrap_err();
    assert!(matches!(fault, MatchError::Unreachable(_)));
}

#[test]
fn test_custom_enum_discriminant() {
    enum Channel {
        Stable,
        Beta,
        Nightly,
    }

    impl Discriminant for Channel {
        fn case_key(&self) -> Cow<'_, str> {
            Cow::Borrowed(match self {
                Channel::Stable => "stable",
                Channel::Beta => "beta",
                Channel::Nightly => "nightly",
            })
        }
    }

    let cadence = match_value(Channel::Nightly, CaseMap::new()
        .case("stable", |_| "monthly")
        .case("beta", |_| "weekly")
        .case("nightly", |_| "daily"))
        .unwrap();
    assert_eq!(cadence, "daily");
}

#[test]
fn test_handler_results_pass_through_unchanged() {
    let outcome = match_value("bad", CaseMap::new()
        .case("good", |_: &str| Ok(1))
        .case("bad", |_: &str| Err("boom".to_string())))
        .unwrap();
    assert_eq!(outcome, Err::<i32, String>("boom".to_string()));
}

#[test]
#[should_panic(expected = "handler exploded")]
fn test_handler_panics_are_not_caught() {
    let _: Result<(), MatchError> = match_value("IDLE", CaseMap::new()
        .case("IDLE", |_: &str| panic!("handler exploded")));
}

fn state_lower(event: &Value) -> String {
    match event.get("state") {
        Some(Value::Text(state)) => state.to_lowercase(),
        other => panic!("state is not text: {other:?}"),
    }
}

#[test]
fn test_tagged_match_dispatches_on_the_field() {
    let success = Value::object([
        ("state", Value::from("SUCCESS")),
        ("data", Value::from("✅")),
    ]);

    let label = match_tag(&success, "state", CaseMap::new()
        .case("IDLE", state_lower)
        .case("SUCCESS", state_lower))
        .unwrap();
    assert_eq!(label, "success");

    let idle = Value::object([("state", Value::from("IDLE"))]);
    let label = match_tag(&idle, "state", CaseMap::new()
        .case("IDLE", state_lower)
        .case("SUCCESS", state_lower))
        .unwrap();
    assert_eq!(label, "idle");
}

#[test]
fn test_tagged_match_passes_the_whole_subject() {
    let event = Value::object([
        ("state", Value::from("SUCCESS")),
        ("data", Value::from("✅")),
    ]);

    let data = match_tag(&event, "state", CaseMap::new()
        .case("SUCCESS", |event: &Value| {
            assert_eq!(event.get("state"), Some(Value::from("SUCCESS")));
            event.get("data")
        }))
        .unwrap();
    assert_eq!(data, Some(Value::from("✅")));
}

#[test]
fn test_tagged_match_on_boolean_field() {
    let feature = Value::object([("enabled", Value::Bool(false))]);

    let label = match_tag(&feature, "enabled", CaseMap::new()
        .case("true", |_: &Value| "on")
        .case("false", |_: &Value| "off"))
        .unwrap();
    assert_eq!(label, "off");
}

#[test]
fn test_tagged_match_with_missing_field_raises_undefined() {
    let event = Value::object([("data", Value::from("✅"))]);

    let fault = match_tag(&event, "state", CaseMap::new()
        .case("IDLE", state_lower)
        .case("SUCCESS", state_lower))
        .unwrap_err();
    assert_eq!(
        fault.to_string(),
        "Internal Error: encountered impossible value \"undefined\"",
    );
}

#[test]
fn test_tagged_match_with_unkeyable_field_describes_it() {
    let event = Value::object([("state", Value::Int(7))]);

    let fault = match_tag(&event, "state", CaseMap::new()
        .case("IDLE", state_lower))
        .unwrap_err();
    assert_eq!(
        fault.to_string(),
        "Internal Error: encountered impossible value \"7\"",
    );
}

#[test]
fn test_tagged_match_fallback() {
    let event = Value::object([("state", Value::from("CANCELLED"))]);

    let label = match_tag(&event, "state", CaseMap::new()
        .case("IDLE", state_lower)
        .case("SUCCESS", state_lower)
        .fallback(|| "unhandled".to_string()))
        .unwrap();
    assert_eq!(label, "unhandled");
}

#[test]
fn test_case_map_membership_surface() {
    let cases: CaseMap<'_, &str, ()> = CaseMap::new()
        .case("IDLE", |_| ())
        .fallback(|| ());

    assert!(cases.contains("IDLE"));
    assert!(!cases.contains("SUCCESS"));
    assert!(cases.has_fallback());
}
