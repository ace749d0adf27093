//! Request parameters.
//!
//! ARI takes its parameters as flat key/value pairs, either in the query
//! string or in a form-encoded body. A handful of parameters are structured
//! (the `variables` object of an originate request), so values are a small
//! tagged union and every non-string value is sent as its JSON text.

use serde_json::{Map, Number, Value};

use crate::error::{AriError, AriResult};

/// One parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Number(Number),
    Bool(bool),
    Map(Map<String, Value>),
}

impl ParamValue {
    /// Wire text for this value: strings verbatim, everything else as JSON.
    pub fn encode(&self) -> String {
        match self {
            ParamValue::String(s) => s.clone(),
            ParamValue::Number(n) => n.to_string(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Map(m) => Value::Object(m.clone()).to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Map<String, Value>> for ParamValue {
    fn from(value: Map<String, Value>) -> Self {
        ParamValue::Map(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Number(Number::from(value))
                }
            }
        )*
    };
}

from_integer!(i32, i64, u16, u32, u64);

impl TryFrom<Value> for ParamValue {
    type Error = AriError;

    fn try_from(value: Value) -> AriResult<Self> {
        match value {
            Value::String(s) => Ok(ParamValue::String(s)),
            Value::Number(n) => Ok(ParamValue::Number(n)),
            Value::Bool(b) => Ok(ParamValue::Bool(b)),
            Value::Object(m) => Ok(ParamValue::Map(m)),
            other => Err(AriError::Encode(format!(
                "unsupported parameter value: {other}"
            ))),
        }
    }
}

/// Insertion-ordered parameter mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `application/x-www-form-urlencoded` text, used for both query strings
    /// and request bodies.
    pub fn to_form_string(&self) -> AriResult<String> {
        let pairs: Vec<(&str, String)> = self.iter().map(|(k, v)| (k, v.encode())).collect();
        serde_urlencoded::to_string(&pairs).map_err(|e| AriError::Encode(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl TryFrom<Value> for Params {
    type Error = AriError;

    /// Accepts a JSON object; `null` yields empty parameters.
    fn try_from(value: Value) -> AriResult<Self> {
        match value {
            Value::Null => Ok(Params::new()),
            Value::Object(map) => {
                let mut params = Params::new();
                for (k, v) in map {
                    params.insert(k, ParamValue::try_from(v)?);
                }
                Ok(params)
            }
            other => Err(AriError::Encode(format!(
                "parameters must be a JSON object, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_sent_verbatim() {
        assert_eq!(ParamValue::from("SIP/alice").encode(), "SIP/alice");
    }

    #[test]
    fn scalars_are_json_encoded() {
        assert_eq!(ParamValue::from(30).encode(), "30");
        assert_eq!(ParamValue::from(-1i64).encode(), "-1");
        assert_eq!(ParamValue::from(true).encode(), "true");
    }

    #[test]
    fn maps_are_json_encoded() {
        let Value::Object(vars) = json!({"CALLERID(name)": "Alice"}) else {
            unreachable!()
        };
        assert_eq!(
            ParamValue::from(vars).encode(),
            r#"{"CALLERID(name)":"Alice"}"#
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::new().with("a", "1").with("b", "2");
        params.insert("a", "3");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::from("3")));
    }

    #[test]
    fn form_string_keeps_order_and_escapes() {
        let params = Params::new()
            .with("endpoint", "SIP/alice bob")
            .with("timeout", 30)
            .with("variables", json!({"CALLERID(name)": "Alice"}).as_object().cloned().unwrap());
        assert_eq!(
            params.to_form_string().unwrap(),
            "endpoint=SIP%2Falice+bob&timeout=30\
             &variables=%7B%22CALLERID%28name%29%22%3A%22Alice%22%7D"
        );
    }

    #[test]
    fn empty_params_encode_to_empty_string() {
        assert_eq!(Params::new().to_form_string().unwrap(), "");
    }

    #[test]
    fn from_json_object() {
        let params = Params::try_from(json!({"lang": "en", "format": "gsm"})).unwrap();
        assert_eq!(params.len(), 2);
        assert!(Params::try_from(Value::Null).unwrap().is_empty());
        assert!(matches!(
            Params::try_from(json!(["x"])),
            Err(AriError::Encode(_))
        ));
        assert!(matches!(
            Params::try_from(json!({"channel": ["a", "b"]})),
            Err(AriError::Encode(_))
        ));
    }
}
