//! Pass options.
//!
//! Loaded from JSON with camelCase keys; every field has a default so an empty
//! object (or no file at all) gives the stock behaviour.
//!
//! ```json
//! { "inheritsFunction": "goog.inherits", "dropSuperInExterns": true }
//! ```

use serde::{Deserialize, Serialize};

/// Registration function emitted by class lowering.
pub const DEFAULT_INHERITS_FUNCTION: &str = "$jscomp.inherits";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranspileOptions {
    /// Qualified name of the `inherits(Child, Parent)` registration call.
    pub inherits_function: String,
    /// Delete `super` statements found in externs instead of lowering them.
    pub drop_super_in_externs: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            inherits_function: DEFAULT_INHERITS_FUNCTION.to_string(),
            drop_super_in_externs: true,
        }
    }
}

impl TranspileOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options = TranspileOptions::from_json("{}").expect("parse");
        assert_eq!(options, TranspileOptions::default());
        assert_eq!(options.inherits_function, "$jscomp.inherits");
        assert!(options.drop_super_in_externs);
    }

    #[test]
    fn test_camel_case_keys() {
        let options = TranspileOptions::from_json(
            r#"{ "inheritsFunction": "goog.inherits", "dropSuperInExterns": false }"#,
        )
        .expect("parse");
        assert_eq!(options.inherits_function, "goog.inherits");
        assert!(!options.drop_super_in_externs);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(TranspileOptions::from_json(r#"{ "dropSuperInExterns": "maybe" }"#).is_err());
    }
}
