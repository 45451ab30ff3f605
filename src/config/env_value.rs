// ABOUTME: Environment values passed to every deployment command.
// ABOUTME: A value is either a literal or a reference to a host variable with an optional fallback.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// Resolve against the current process environment.
    pub fn resolve(&self) -> Result<String> {
        match self {
            EnvValue::Literal(value) => Ok(value.clone()),
            EnvValue::FromEnv { var, default } => std::env::var(var)
                .ok()
                .or_else(|| default.clone())
                .ok_or_else(|| Error::MissingEnvVar(var.clone())),
        }
    }
}

/// Resolve every entry, failing on the first missing variable without a default.
pub fn resolve_env_map(map: &HashMap<String, EnvValue>) -> Result<HashMap<String, String>> {
    map.iter()
        .map(|(name, value)| Ok((name.clone(), value.resolve()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_resolves_to_itself() {
        let value = EnvValue::Literal("stack".to_string());
        assert_eq!(value.resolve().unwrap(), "stack");
    }

    #[test]
    fn reference_uses_host_variable_then_default() {
        let value = EnvValue::FromEnv {
            var: "STACKPILOT_ENV_VALUE_TEST".to_string(),
            default: Some("fallback".to_string()),
        };

        temp_env::with_var("STACKPILOT_ENV_VALUE_TEST", Some("from-host"), || {
            assert_eq!(value.resolve().unwrap(), "from-host");
        });
        temp_env::with_var_unset("STACKPILOT_ENV_VALUE_TEST", || {
            assert_eq!(value.resolve().unwrap(), "fallback");
        });
    }

    #[test]
    fn missing_reference_without_default_fails() {
        let value = EnvValue::FromEnv {
            var: "STACKPILOT_ENV_VALUE_MISSING".to_string(),
            default: None,
        };

        temp_env::with_var_unset("STACKPILOT_ENV_VALUE_MISSING", || {
            let err = value.resolve().unwrap_err();
            assert!(matches!(err, Error::MissingEnvVar(ref v) if v == "STACKPILOT_ENV_VALUE_MISSING"));
        });
    }
}
