use std::borrow::Cow;

use crate::cases::CaseMap;
use crate::error::MatchError;
use crate::report::report_unreachable;
use crate::value::Value;

/// A value from a finite, statically-known set that selects a handler
///
/// The only requirement is a textual case key, which is what [`CaseMap`]
/// keys on. Implementations are provided for string types and for `bool`
/// (keyed as `"true"`/`"false"`, since only text can key a case map).
/// Implement it for your own enums to match on them directly:
///
/// ```
/// use std::borrow::Cow;
/// use exhaustive::{match_value, CaseMap, Discriminant};
///
/// enum Channel { Stable, Beta }
///
/// impl Discriminant for Channel {
///     fn case_key(&self) -> Cow<'_, str> {
///         Cow::Borrowed(match self {
///             Channel::Stable => "stable",
///             Channel::Beta => "beta",
///         })
///     }
/// }
///
/// let cadence = match_value(Channel::Beta, CaseMap::new()
///     .case("stable", |_| "monthly")
///     .case("beta", |_| "weekly"))
///     .unwrap();
///
/// assert_eq!(cadence, "weekly");
/// ```
pub trait Discriminant {
    /// The textual key this value dispatches on
    fn case_key(&self) -> Cow<'_, str>;
}

impl Discriminant for bool {
    fn case_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl Discriminant for &str {
    fn case_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl Discriminant for String {
    fn case_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Discriminant for Cow<'_, str> {
    fn case_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

/// Matches a bare discriminant against its case map
///
/// The handler registered under the discriminant's key receives the
/// discriminant itself and its output is returned unchanged; the matcher
/// adds no wrapping and catches nothing a handler raises. When no key
/// matches, a declared fallback resolves the call; with no fallback the
/// discriminant is handed to [`report_unreachable`] and the resulting fault
/// is returned.
///
/// # Errors
///
/// Returns [`MatchError::Unreachable`] when the discriminant matches no
/// case and no fallback was declared.
///
/// # Examples
///
/// ```
/// use exhaustive::{match_value, CaseMap, MatchError};
///
/// fn label(status: &str) -> Result<String, MatchError> {
///     match_value(status, CaseMap::new()
///         .case("IDLE", |value: &str| value.to_lowercase())
///         .case("LOADING", |value: &str| value.to_lowercase())
///         .case("SUCCESS", |value: &str| value.to_lowercase())
///         .case("ERROR", |value: &str| value.to_lowercase()))
/// }
///
/// assert_eq!(label("SUCCESS").unwrap(), "success");
/// assert!(label("unknown").is_err());
/// ```
pub fn match_value<D, Out>(discriminant: D, mut cases: CaseMap<'_, D, Out>) -> Result<Out, MatchError>
where
    D: Discriminant,
{
    let key = discriminant.case_key().into_owned();

    if let Some(handler) = cases.take(&key) {
        return Ok(handler(discriminant));
    }

    if let Some(fallback) = cases.take_fallback() {
        return Ok(fallback());
    }

    Err(report_unreachable(&Value::Text(key)))
}

/// Matches an object on the value of one of its fields
///
/// The discriminant is `subject`'s `tag` field; its case key is the field's
/// text, or `"true"`/`"false"` for a boolean field. The matched handler
/// receives the whole subject, not just the field, so the remaining fields
/// stay available in the branch that knows what shape they have.
///
/// A missing `tag` field, or one holding a value that cannot key a case
/// (a number, an object), matches nothing and resolves through the fallback
/// or the unreachable report like any other unmatched discriminant.
///
/// # Errors
///
/// Returns [`MatchError::Unreachable`] when the field value matches no case
/// and no fallback was declared; the fault describes the field value (the
/// literal text `undefined` when the field is absent).
///
/// # Examples
///
/// ```
/// use exhaustive::{match_tag, CaseMap, Value};
///
/// let event = Value::object([
///     ("state", Value::from("SUCCESS")),
///     ("data", Value::from("✅")),
/// ]);
///
/// let payload = match_tag(&event, "state", CaseMap::new()
///     .case("IDLE", |_: &Value| None)
///     .case("SUCCESS", |event: &Value| match event.get("data") {
///         Some(Value::Text(data)) => Some(data),
///         _ => None,
///     }))
///     .unwrap();
///
/// assert_eq!(payload.as_deref(), Some("✅"));
/// ```
pub fn match_tag<'s, Out>(
    subject: &'s Value,
    tag: &str,
    mut cases: CaseMap<'_, &'s Value, Out>,
) -> Result<Out, MatchError> {
    let field = subject.get(tag).unwrap_or(Value::Undefined);

    if let Some(key) = field.case_key() {
        if let Some(handler) = cases.take(&key) {
            return Ok(handler(subject));
        }
    }

    if let Some(fallback) = cases.take_fallback() {
        return Ok(fallback());
    }

    Err(report_unreachable(&field))
}
