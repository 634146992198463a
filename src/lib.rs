//! # exhaustive
//!
//! Runtime-checked exhaustive matching over closed sets of values.
//!
//! Rust's `match` already forces you to handle every variant of an enum you
//! control. This crate covers the values you *don't* control: string and
//! boolean unions arriving from unchecked external input, and objects
//! discriminated by a tag field, where "every variant" is a promise made by
//! a protocol or a peer rather than by the compiler. Each possible value
//! gets a handler; if an unhandled value appears anyway (version skew, an
//! unsound cast, a peer that lies), the built-in unreachable reporter turns
//! it into a clear internal-error fault instead of a silent misdispatch.
//!
//! ## Key Features
//!
//! - **Two call shapes**: [`match_value`] dispatches on a bare string or
//!   boolean, [`match_tag`] dispatches on a named field of an object and
//!   hands the whole object to the matched handler
//! - **Explicit membership**: case lookup is an own-key test on the
//!   [`CaseMap`] you built; nothing inherited, nothing implicit
//! - **Honest fallback**: the fallback counts as declared by presence, so a
//!   fallback returning `false`, `0` or `""` works like any other
//! - **Defensive reporter**: [`report_unreachable`] describes any runtime
//!   value, including cyclic graphs and bigints, without ever crashing
//!   uninformatively
//! - **No state**: every call builds its own [`CaseMap`] and drops it; the
//!   library holds nothing between invocations
//!
//! ## Usage Examples
//!
//! ### Matching a string union
//!
//! ```rust
//! use exhaustive::{match_value, CaseMap, MatchError};
//!
//! fn label(status: &str) -> Result<String, MatchError> {
//!     match_value(status, CaseMap::new()
//!         .case("IDLE", |value: &str| value.to_lowercase())
//!         .case("LOADING", |value: &str| value.to_lowercase())
//!         .case("SUCCESS", |value: &str| value.to_lowercase())
//!         .case("ERROR", |value: &str| value.to_lowercase()))
//! }
//!
//! fn main() -> Result<(), MatchError> {
//!     assert_eq!(label("IDLE")?, "idle");
//!     assert_eq!(label("SUCCESS")?, "success");
//!
//!     // A value outside the declared set is reported, not misdispatched.
//!     let fault = label("unknown").unwrap_err();
//!     assert_eq!(
//!         fault.to_string(),
//!         "Internal Error: encountered impossible value \"unknown\"",
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Declaring a fallback
//!
//! ```rust
//! use exhaustive::{match_value, CaseMap};
//!
//! let label = match_value("unknown", CaseMap::new()
//!     .case("IDLE", |value: &str| value.to_lowercase())
//!     .case("LOADING", |value: &str| value.to_lowercase())
//!     .fallback(|| "🚨".to_string()))
//!     .unwrap();
//!
//! assert_eq!(label, "🚨");
//! ```
//!
//! ### Matching on a tag field
//!
//! ```rust
//! use exhaustive::{match_tag, CaseMap, MatchError, Value};
//!
//! fn summarize(event: &Value) -> Result<String, MatchError> {
//!     match_tag(event, "state", CaseMap::new()
//!         .case("IDLE", |_: &Value| "waiting".to_string())
//!         .case("SUCCESS", |event: &Value| match event.get("data") {
//!             Some(Value::Text(data)) => format!("done: {data}"),
//!             _ => "done".to_string(),
//!         }))
//! }
//!
//! fn main() -> Result<(), MatchError> {
//!     let event = Value::object([
//!         ("state", Value::from("SUCCESS")),
//!         ("data", Value::from("✅")),
//!     ]);
//!
//!     assert_eq!(summarize(&event)?, "done: ✅");
//!     Ok(())
//! }
//! ```
//!
//! ### Reporting an impossible value directly
//!
//! ```rust
//! use exhaustive::{report_unreachable, Value};
//!
//! let graph = Value::object([("next", Value::Null)]);
//! graph.insert("next", graph.clone());
//!
//! assert_eq!(
//!     report_unreachable(&graph).to_string(),
//!     "Internal Error: encountered impossible value \"circular object\"",
//! );
//! ```

mod cases;
mod error;
mod matcher;
mod report;
mod value;

pub use cases::CaseMap;
pub use error::MatchError;
pub use matcher::{match_tag, match_value, Discriminant};
pub use report::report_unreachable;
pub use value::{ArrayRef, ObjectRef, Value};
