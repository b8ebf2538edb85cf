use crate::{Error, Value};

use std::collections::BTreeMap;

/// A field in an update call.
///
/// `Keep` leaves the field out of the request, `Clear` sends `<nil/>` so the server unsets it,
/// and `Set` sends the new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

/// The named-parameter struct sent with every call.
///
/// Absent optional arguments are never included.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Params(BTreeMap::new())
    }

    /// Adds a parameter.
    pub fn set<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Adds a parameter if `value` is `Some`.
    pub fn opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Adds a parameter for a `Patch`: nothing for `Keep`, nil for `Clear`.
    pub fn patch<V: Into<Value>>(self, key: &str, patch: Patch<V>) -> Self {
        match patch {
            Patch::Keep => self,
            Patch::Clear => self.set(key, Value::Nil),
            Patch::Set(value) => self.set(key, value),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fails unless at least one of `keys` is present.
    pub fn require_any(&self, keys: &[&str]) -> Result<(), Error> {
        if keys.iter().any(|key| self.0.contains_key(*key)) {
            Ok(())
        } else {
            Err(Error::validation(format!("at least one of {} is required", keys.join(", "))))
        }
    }

    /// Fails if there is nothing besides the identifying `keys`, i.e. an update would not change
    /// anything.
    pub fn require_changes(&self, keys: &[&str]) -> Result<(), Error> {
        if self.0.keys().any(|key| !keys.contains(&key.as_str())) {
            Ok(())
        } else {
            Err(Error::validation("no fields to update"))
        }
    }

    /// Fails if a floating point parameter is infinite or NaN, which has no XML-RPC encoding.
    pub fn require_finite(&self) -> Result<(), Error> {
        for (key, value) in &self.0 {
            if let Value::Double(d) = *value {
                if !d.is_finite() {
                    return Err(Error::validation(format!("{} must be a finite number, got {}", key, d)));
                }
            }
        }
        Ok(())
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        Value::Struct(params.0)
    }
}

/// Fails unless `amount` is a positive, finite number.
pub(crate) fn require_positive(amount: f64) -> Result<(), Error> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(Error::validation(format!("amount must be positive, got {}", amount)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_values() {
        let params = Params::new()
            .set("i_account", 5)
            .opt("username", None::<String>)
            .opt("limit", Some(10))
            .patch("email", Patch::<String>::Keep)
            .patch("i_time_zone", Patch::<i64>::Clear);

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("i_account"), Some(&Value::Int(5)));
        assert_eq!(params.get("limit"), Some(&Value::Int(10)));
        assert_eq!(params.get("i_time_zone"), Some(&Value::Nil));
        assert_eq!(params.get("username"), None);
    }

    #[test]
    fn require_any() {
        let params = Params::new().set("username", "alice");
        assert!(params.require_any(&["i_account", "username"]).is_ok());

        let err = Params::new().require_any(&["i_account", "username"]).unwrap_err();
        assert_eq!(err.to_string(), "validation error: at least one of i_account, username is required");
    }

    #[test]
    fn require_changes() {
        let params = Params::new().set("i_account", 1);
        assert!(matches!(params.require_changes(&["i_account"]), Err(Error::Validation(_))));

        let params = params.set("blocked", true);
        assert!(params.require_changes(&["i_account"]).is_ok());
    }

    #[test]
    fn rejects_non_finite_doubles() {
        assert!(Params::new().set("credit_limit", 25.0).require_finite().is_ok());
        assert!(Params::new().set("name", "x").require_finite().is_ok());

        let err = Params::new().set("credit_limit", f64::INFINITY).require_finite().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("credit_limit"));
        assert!(Params::new().set("balance", f64::NAN).require_finite().is_err());
    }

    #[test]
    fn amounts() {
        assert!(require_positive(10.5).is_ok());
        assert!(require_positive(0.0).is_err());
        assert!(require_positive(-1.0).is_err());
        assert!(require_positive(f64::NAN).is_err());
    }

    #[test]
    fn empty_params_are_a_struct() {
        assert_eq!(Value::from(Params::new()), Value::Struct(BTreeMap::new()));
    }
}
