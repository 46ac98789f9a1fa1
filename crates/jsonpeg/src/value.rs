//! Semantic value types produced by the grammar.
//!
//! This module defines the [`Value`] enum, the tree built by the terminal and
//! reducer rules, and its textual rendering.
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// Object representation: unique keys, order irrelevant to equality.
pub type Map = BTreeMap<String, Value>;
/// Array representation.
pub type Array = Vec<Value>;

/// A value in the JSON subset recognized by [`Grammar::json`].
///
/// The subset has four kinds of values:
///
/// - String, taken verbatim from between the quotes (no escapes)
/// - Number, kept as the literal run of digits
/// - Array
/// - Object
///
/// # Examples
///
/// ```
/// use jsonpeg::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// map.insert("n".to_string(), Value::Number("17".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value","n":17}"#);
/// ```
///
/// [`Grammar::json`]: crate::Grammar::json
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Text between a pair of double quotes.
    String(String),
    /// A run of digits, not interpreted.
    Number(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A mapping from string keys to values.
    Object(Map),
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpeg::Value;
    ///
    /// assert!(Value::Number("42".into()).is_number());
    /// assert!(!Value::String("42".into()).is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The text of a [`String`] value.
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The digit text of a [`Number`] value.
    ///
    /// Interpreting the digits is left to the caller:
    ///
    /// ```
    /// use jsonpeg::Value;
    ///
    /// let n = Value::Number("017".into());
    /// assert_eq!(n.as_digits(), Some("017"));
    /// assert_eq!(n.as_digits().and_then(|d| d.parse::<u32>().ok()), Some(17));
    /// ```
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn as_digits(&self) -> Option<&str> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The elements of an [`Array`] value.
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The entries of an [`Object`] value.
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` when the value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(key))
    }
}

// Strings are written verbatim: the grammar has no escapes, so a string
// containing `"` cannot be re-read.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Number(n) => f.write_str(n),
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{k}\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
