use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

type Handler<'a, In, Out> = Box<dyn FnOnce(In) -> Out + 'a>;
type Fallback<'a, Out> = Box<dyn FnOnce() -> Out + 'a>;

/// A per-invocation mapping from case keys to handlers
///
/// `CaseMap` is the runtime half of exhaustive matching: each possible
/// discriminant value (as text) maps to a handler of one argument, and an
/// optional fallback handler stands in for every key that was not declared.
/// Membership is an explicit own-key test on the map's declared key set;
/// there is no inherited lookup of any kind, so a discriminant can never
/// accidentally match a key the caller did not register.
///
/// Handlers are `FnOnce`: a map is built for a single [`crate::match_value`]
/// or [`crate::match_tag`] call and consumed by it.
///
/// # Examples
///
/// ```
/// use exhaustive::{match_value, CaseMap};
///
/// let label = match_value("LOADING", CaseMap::new()
///     .case("IDLE", |value: &str| value.to_lowercase())
///     .case("LOADING", |value: &str| value.to_lowercase()))
///     .unwrap();
///
/// assert_eq!(label, "loading");
/// ```
///
/// Whether the fallback counts as declared depends only on it having been
/// set, never on what it returns, so fallbacks returning `false`, `0` or an
/// empty string work like any other:
///
/// ```
/// use exhaustive::{match_value, CaseMap};
///
/// let allowed = match_value("unknown", CaseMap::new()
///     .case("ADMIN", |_: &str| true)
///     .fallback(|| false))
///     .unwrap();
///
/// assert!(!allowed);
/// ```
pub struct CaseMap<'a, In, Out> {
    handlers: HashMap<Cow<'static, str>, Handler<'a, In, Out>>,
    fallback: Option<Fallback<'a, Out>>,
}

impl<'a, In, Out> CaseMap<'a, In, Out> {
    /// Creates an empty case map
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: None,
        }
    }

    /// Registers the handler for one case key
    ///
    /// Registering the same key twice keeps the later handler.
    pub fn case<F>(mut self, key: impl Into<Cow<'static, str>>, handler: F) -> Self
    where
        F: FnOnce(In) -> Out + 'a,
    {
        self.handlers.insert(key.into(), Box::new(handler));
        self
    }

    /// Declares the fallback handler, invoked when no case key matches
    pub fn fallback<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> Out + 'a,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Whether `key` was registered as a case
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Whether a fallback handler was declared
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub(crate) fn take(&mut self, key: &str) -> Option<Handler<'a, In, Out>> {
        self.handlers.remove(key)
    }

    pub(crate) fn take_fallback(&mut self) -> Option<Fallback<'a, Out>> {
        self.fallback.take()
    }
}

impl<In, Out> Default for CaseMap<'_, In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Out> fmt::Debug for CaseMap<'_, In, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.handlers.keys().map(|key| key.as_ref()).collect();
        keys.sort_unstable();
        f.debug_struct("CaseMap")
            .field("cases", &keys)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
