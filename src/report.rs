use crate::error::MatchError;
use crate::value::{JsonFault, Value};

/// Builds the fault for a value that should have been statically impossible
///
/// This is the last line of defense behind compile-time exhaustiveness: it
/// is only reached when an unhandled value appears anyway, through unchecked
/// external input, version skew between peers, or an unsound cast. The
/// returned fault is meant to be raised immediately:
///
/// ```
/// use exhaustive::{report_unreachable, Value};
///
/// let fault = report_unreachable(&Value::from("corrupt"));
/// assert_eq!(
///     fault.to_string(),
///     "Internal Error: encountered impossible value \"corrupt\"",
/// );
/// ```
///
/// The description embedded in the message is produced by kind:
///
/// - `Symbol(name)` becomes `Symbol(<name>)`
/// - `Undefined` becomes the literal text `undefined`
/// - `Text` is used raw, without quoting or escaping
/// - everything else is serialized as JSON; a cyclic graph becomes
///   `circular object` and a bigint becomes `<digits> (bigint)`
///
/// Any other serialization failure is returned as
/// [`MatchError::Description`] instead of the internal-error fault, so a bug
/// in the description pipeline never masquerades as an unreachable value.
pub fn report_unreachable(value: &Value) -> MatchError {
    match describe(value) {
        Ok(description) => MatchError::Unreachable(description),
        Err(fault) => fault,
    }
}

fn describe(value: &Value) -> Result<String, MatchError> {
    match value {
        Value::Symbol(name) => Ok(format!("Symbol({name})")),
        Value::Undefined => Ok("undefined".to_string()),
        Value::Text(text) => Ok(text.clone()),
        other => match other.to_json() {
            Ok(json) => Ok(json),
            Err(JsonFault::Circular) => Ok("circular object".to_string()),
            Err(JsonFault::BigInt(digits)) => Ok(format!("{digits} (bigint)")),
            Err(JsonFault::Other(error)) => Err(MatchError::Description(error)),
        },
    }
}
