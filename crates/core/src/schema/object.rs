//! JSON object walker backing the payload contracts.

use serde_json::{Map, Value};

use crate::types::{CurrencyCode, Email, OrderStatus, Timestamp};

use super::error::{ErrorCode, FieldError};

/// Walks one JSON object, pulling declared fields out of it and recording
/// every violation it sees along the way.
///
/// Declared keys are removed from the map as they are read; whatever is
/// still present at [`ObjectReader::finish`] is the passthrough set. Errors
/// accumulate in call order, so a contract that reads fields in declaration
/// order reports violations in declaration order.
pub(crate) struct ObjectReader {
    map: Map<String, Value>,
    path: Vec<String>,
    errors: Vec<FieldError>,
}

impl ObjectReader {
    /// Start reading a top-level payload. Anything but a JSON object is a
    /// single `invalid_type` violation at the root (empty path).
    pub(crate) fn root(value: Value) -> Result<Self, Vec<FieldError>> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path: Vec::new(),
                errors: Vec::new(),
            }),
            _ => Err(vec![FieldError::new(
                Vec::new(),
                ErrorCode::InvalidType,
                "expected a JSON object",
            )]),
        }
    }

    fn nested(map: Map<String, Value>, path: Vec<String>) -> Self {
        Self {
            map,
            path,
            errors: Vec::new(),
        }
    }

    fn field_path(&self, key: &str) -> Vec<String> {
        let mut path = self.path.clone();
        path.push(key.to_owned());
        path
    }

    fn record(&mut self, key: &str, code: ErrorCode, message: impl Into<String>) {
        let path = self.field_path(key);
        self.errors.push(FieldError::new(path, code, message));
    }

    /// Remove a declared key from the map. Explicit `null` counts as absent.
    fn take(&mut self, key: &str) -> Option<Value> {
        match self.map.remove(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub(crate) fn required_string(&mut self, key: &str) -> Option<String> {
        match self.take(key) {
            None => {
                self.record(key, ErrorCode::Required, "required");
                None
            }
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected string");
                None
            }
        }
    }

    pub(crate) fn required_nonempty_string(&mut self, key: &str) -> Option<String> {
        let s = self.required_string(key)?;
        if s.is_empty() {
            self.record(key, ErrorCode::TooSmall, "must not be empty");
            return None;
        }
        Some(s)
    }

    pub(crate) fn optional_string(&mut self, key: &str) -> Option<String> {
        match self.take(key) {
            None => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected string");
                None
            }
        }
    }

    pub(crate) fn required_email(&mut self, key: &str) -> Option<Email> {
        let s = self.required_string(key)?;
        match Email::parse(&s) {
            Ok(email) => Some(email),
            Err(_) => {
                self.record(key, ErrorCode::InvalidEmail, "invalid email format");
                None
            }
        }
    }

    pub(crate) fn required_timestamp(&mut self, key: &str) -> Option<Timestamp> {
        let s = self.required_string(key)?;
        self.parse_timestamp(key, &s)
    }

    pub(crate) fn optional_timestamp(&mut self, key: &str) -> Option<Timestamp> {
        let s = self.optional_string(key)?;
        self.parse_timestamp(key, &s)
    }

    fn parse_timestamp(&mut self, key: &str, s: &str) -> Option<Timestamp> {
        match Timestamp::parse(s) {
            Ok(ts) => Some(ts),
            Err(_) => {
                self.record(
                    key,
                    ErrorCode::InvalidTimestamp,
                    "expected an ISO-8601 date-time",
                );
                None
            }
        }
    }

    pub(crate) fn required_currency(&mut self, key: &str) -> Option<CurrencyCode> {
        let s = self.required_string(key)?;
        match CurrencyCode::parse(&s) {
            Ok(code) => Some(code),
            Err(_) => {
                self.record(key, ErrorCode::InvalidLength, "must be exactly 3 characters");
                None
            }
        }
    }

    pub(crate) fn required_number_min(&mut self, key: &str, min: f64) -> Option<f64> {
        match self.take(key) {
            None => {
                self.record(key, ErrorCode::Required, "required");
                None
            }
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) if value >= min => Some(value),
                Some(_) => {
                    self.record(key, ErrorCode::TooSmall, format!("must be at least {min}"));
                    None
                }
                None => {
                    self.record(key, ErrorCode::InvalidType, "expected number");
                    None
                }
            },
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected number");
                None
            }
        }
    }

    pub(crate) fn optional_number(&mut self, key: &str) -> Option<f64> {
        match self.take(key) {
            None => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected number");
                None
            }
        }
    }

    pub(crate) fn required_integer_min(&mut self, key: &str, min: i64) -> Option<i64> {
        match self.take(key) {
            None => {
                self.record(key, ErrorCode::Required, "required");
                None
            }
            Some(Value::Number(n)) => match json_integer(&n) {
                Some(value) if value >= min => Some(value),
                Some(_) => {
                    self.record(key, ErrorCode::TooSmall, format!("must be at least {min}"));
                    None
                }
                None => {
                    self.record(key, ErrorCode::InvalidType, "expected integer");
                    None
                }
            },
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected integer");
                None
            }
        }
    }

    pub(crate) fn optional_string_array(&mut self, key: &str) -> Option<Vec<String>> {
        let values = match self.take(key) {
            None => return None,
            Some(Value::Array(values)) => values,
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected array of strings");
                return None;
            }
        };

        let mut out = Vec::with_capacity(values.len());
        let mut all_strings = true;
        for (index, value) in values.into_iter().enumerate() {
            match value {
                Value::String(s) => out.push(s),
                _ => {
                    let mut path = self.field_path(key);
                    path.push(index.to_string());
                    self.errors.push(FieldError::new(
                        path,
                        ErrorCode::InvalidType,
                        "expected string",
                    ));
                    all_strings = false;
                }
            }
        }
        all_strings.then_some(out)
    }

    pub(crate) fn optional_status(&mut self, key: &str) -> Option<OrderStatus> {
        let s = match self.take(key) {
            None => return None,
            Some(Value::String(s)) => s,
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected string");
                return None;
            }
        };
        match OrderStatus::from_wire(&s) {
            Some(status) => Some(status),
            None => {
                self.record(
                    key,
                    ErrorCode::InvalidEnum,
                    format!("expected one of: {}", OrderStatus::WIRE_VALUES.join(", ")),
                );
                None
            }
        }
    }

    /// Read an optional nested object. `read` sees a reader rooted at the
    /// nested path; undeclared keys inside the nested object are dropped.
    pub(crate) fn optional_object<T>(
        &mut self,
        key: &str,
        read: impl FnOnce(&mut Self) -> T,
    ) -> Option<T> {
        match self.take(key) {
            None => None,
            Some(Value::Object(map)) => {
                let mut nested = Self::nested(map, self.field_path(key));
                let parsed = read(&mut nested);
                let nested_errors = nested.errors;
                let clean = nested_errors.is_empty();
                self.errors.extend(nested_errors);
                clean.then_some(parsed)
            }
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected object");
                None
            }
        }
    }

    /// Read a required array of objects with a minimum length. Each element
    /// is validated independently so one bad element does not hide
    /// violations in the others.
    pub(crate) fn required_object_array<T>(
        &mut self,
        key: &str,
        min_len: usize,
        read: impl Fn(&mut Self) -> Option<T>,
    ) -> Option<Vec<T>> {
        let values = match self.take(key) {
            None => {
                self.record(key, ErrorCode::Required, "required");
                return None;
            }
            Some(Value::Array(values)) => values,
            Some(_) => {
                self.record(key, ErrorCode::InvalidType, "expected array");
                return None;
            }
        };
        if values.len() < min_len {
            self.record(
                key,
                ErrorCode::TooFewItems,
                format!("must contain at least {min_len} item(s)"),
            );
            return None;
        }

        let expected = values.len();
        let mut out = Vec::with_capacity(expected);
        for (index, value) in values.into_iter().enumerate() {
            let mut path = self.field_path(key);
            path.push(index.to_string());
            match value {
                Value::Object(map) => {
                    let mut nested = Self::nested(map, path);
                    let parsed = read(&mut nested);
                    let nested_errors = nested.errors;
                    let clean = nested_errors.is_empty();
                    self.errors.extend(nested_errors);
                    match parsed {
                        Some(item) if clean => out.push(item),
                        _ => {}
                    }
                }
                _ => {
                    self.errors
                        .push(FieldError::new(path, ErrorCode::InvalidType, "expected object"));
                }
            }
        }
        (out.len() == expected).then_some(out)
    }

    /// Consume the reader, yielding the passthrough fields and every
    /// recorded violation.
    pub(crate) fn finish(self) -> (Map<String, Value>, Vec<FieldError>) {
        (self.map, self.errors)
    }
}

/// Interpret a JSON number as an integer. Accepts floats with a zero
/// fractional part (`2.0`), since upstream systems serialize integers both
/// ways.
#[allow(clippy::cast_possible_truncation)]
fn json_integer(n: &serde_json::Number) -> Option<i64> {
    if let Some(value) = n.as_i64() {
        return Some(value);
    }
    let value = n.as_f64()?;
    (value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0)
        .then(|| value as i64)
}
