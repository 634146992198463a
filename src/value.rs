use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

/// Shared storage for object fields, allowing self-referential graphs
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// Shared storage for array elements, allowing self-referential graphs
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// A dynamically-typed runtime value
///
/// `Value` models the kinds of data that arrive from unchecked boundaries
/// (deserialized input, foreign interfaces, version-skewed peers): the JSON
/// scalars plus a few kinds JSON cannot carry, such as an absent marker
/// ([`Value::Undefined`]), named unique tokens ([`Value::Symbol`]) and
/// arbitrary-precision integers ([`Value::BigInt`]).
///
/// Objects and arrays hold their contents behind `Rc<RefCell<_>>`, so cyclic
/// graphs are constructible; [`crate::report_unreachable`] recognizes these
/// and describes them as `circular object` rather than recursing forever.
///
/// # Examples
///
/// ```
/// use exhaustive::Value;
///
/// let event = Value::object([
///     ("state", Value::from("SUCCESS")),
///     ("attempts", Value::from(3i64)),
/// ]);
///
/// assert_eq!(event.get("state"), Some(Value::from("SUCCESS")));
/// assert_eq!(event.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent/uninitialized marker
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A unique token identified only by its textual tag
    Symbol(String),
    /// An arbitrary-precision integer, stored as its decimal digits
    BigInt(String),
    Array(ArrayRef),
    Object(ObjectRef),
}

impl Value {
    /// Builds an object value from `(field, value)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use exhaustive::Value;
    ///
    /// let user = Value::object([("name", Value::from("alice"))]);
    /// assert_eq!(user.get("name"), Some(Value::from("alice")));
    /// ```
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let fields = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect::<BTreeMap<_, _>>();
        Value::Object(Rc::new(RefCell::new(fields)))
    }

    /// Builds an array value from its elements
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Returns a clone of the named field, or `None` when `self` is not an
    /// object or the field is absent
    pub fn get(&self, field: &str) -> Option<Value> {
        match self {
            Value::Object(fields) => fields.borrow().get(field).cloned(),
            _ => None,
        }
    }

    /// Inserts or replaces a field on an object value
    ///
    /// Returns `false` (leaving `self` untouched) when `self` is not an
    /// object. Inserting a clone of the object into itself is how a cyclic
    /// graph is made:
    ///
    /// ```
    /// use exhaustive::Value;
    ///
    /// let graph = Value::object([("next", Value::Null)]);
    /// assert!(graph.insert("next", graph.clone()));
    /// ```
    pub fn insert(&self, field: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Object(fields) => {
                fields.borrow_mut().insert(field.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Appends an element to an array value
    ///
    /// Returns `false` (leaving `self` untouched) when `self` is not an
    /// array.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    /// The textual case key of this value when it can discriminate a tagged
    /// union: the raw text for [`Value::Text`], `"true"`/`"false"` for
    /// [`Value::Bool`], `None` for every other kind
    pub(crate) fn case_key(&self) -> Option<String> {
        match self {
            Value::Text(text) => Some(text.clone()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Serializes the value as JSON text
    ///
    /// Cycles and bigints are rejected up front with a typed fault so the
    /// caller can distinguish them from genuine serializer failures.
    pub(crate) fn to_json(&self) -> Result<String, JsonFault> {
        self.scan(&mut Vec::new())?;
        serde_json::to_string(self).map_err(JsonFault::Other)
    }

    /// Walks the value graph rejecting cycles and bigints
    ///
    /// `trail` holds the shared containers currently being visited; seeing
    /// one of them again means the graph loops back on itself.
    fn scan(&self, trail: &mut Vec<*const ()>) -> Result<(), JsonFault> {
        match self {
            Value::BigInt(digits) => Err(JsonFault::BigInt(digits.clone())),
            Value::Array(items) => {
                let ptr = Rc::as_ptr(items) as *const ();
                if trail.contains(&ptr) {
                    return Err(JsonFault::Circular);
                }
                trail.push(ptr);
                for item in items.borrow().iter() {
                    item.scan(trail)?;
                }
                trail.pop();
                Ok(())
            }
            Value::Object(fields) => {
                let ptr = Rc::as_ptr(fields) as *const ();
                if trail.contains(&ptr) {
                    return Err(JsonFault::Circular);
                }
                trail.push(ptr);
                for field in fields.borrow().values() {
                    field.scan(trail)?;
                }
                trail.pop();
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Why [`Value::to_json`] could not produce output
#[derive(Debug)]
pub(crate) enum JsonFault {
    /// The value graph contains a reference back to itself
    Circular,
    /// A bigint (decimal digits attached) has no JSON representation
    BigInt(String),
    /// The serializer failed for some other reason
    Other(serde_json::Error),
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Undefined and symbols have no JSON form; emit null like a
            // lenient JS-style serializer would.
            Value::Undefined | Value::Null | Value::Symbol(_) => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Int(number) => serializer.serialize_i64(*number),
            Value::Float(number) => serializer.serialize_f64(*number),
            Value::Text(text) => serializer.serialize_str(text),
            Value::BigInt(digits) => Err(S::Error::custom(format!(
                "bigint {digits} is not representable in JSON"
            ))),
            Value::Array(items) => {
                let items = items.borrow();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let fields = fields.borrow();
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}
