use std::collections::BTreeMap;

use serde_json::Value;

/// A replacement set of custom claims for one user. The whole map is sent
/// as-is; the backend does not merge it with previously set claims.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims(BTreeMap<String, Value>);

#[derive(Debug)]
pub struct InvalidClaim(String);

impl std::fmt::Display for InvalidClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid claim '{}', expected key=value", self.0)
    }
}

impl std::error::Error for InvalidClaim {}

impl Claims {
    pub fn admin() -> Self {
        Claims(BTreeMap::from([("admin".to_string(), Value::Bool(true))]))
    }

    /// Parses `key=value` arguments. Values are read as JSON first so that
    /// `true`, `42` or `"x"` keep their type; anything that is not valid
    /// JSON becomes a plain string. A repeated key keeps the last value.
    pub fn from_args<'a, I: IntoIterator<Item = &'a str>>(args: I) -> Result<Self, InvalidClaim> {
        let mut claims = BTreeMap::new();
        for arg in args {
            let (key, value) = arg
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| InvalidClaim(arg.to_string()))?;
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| Value::String(value.to_string()));
            claims.insert(key.to_string(), value);
        }
        Ok(Claims(claims))
    }

    /// The wire encoding expected by the Identity Toolkit: the claim map as
    /// a JSON object serialized into a string.
    pub fn to_attribute_string(&self) -> String {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_the_admin_claim() {
        assert_eq!(Claims::admin().to_attribute_string(), r#"{"admin":true}"#);
    }

    #[test]
    fn it_parses_the_admin_argument_to_the_default_claim() {
        let claims = Claims::from_args(["admin=true"]).unwrap();
        assert_eq!(claims, Claims::admin());
    }

    #[test]
    fn it_keeps_json_value_types_and_falls_back_to_strings() {
        let claims = Claims::from_args(["level=3", "name=bob"]).unwrap();
        assert_eq!(claims.to_attribute_string(), r#"{"level":3,"name":"bob"}"#);
    }

    #[test]
    fn it_keeps_the_last_value_for_a_repeated_key() {
        let claims = Claims::from_args(["admin=true", "admin=false"]).unwrap();
        assert_eq!(claims.to_attribute_string(), r#"{"admin":false}"#);
    }

    #[test]
    fn it_rejects_arguments_without_a_value() {
        let error = Claims::from_args(["admin"]).unwrap_err();
        assert_eq!(
            format!("{}", error),
            "invalid claim 'admin', expected key=value"
        );
    }

    #[test]
    fn it_rejects_an_empty_key() {
        assert!(Claims::from_args(["=true"]).is_err());
    }
}
