//! Declarative per-route validation rules.
//!
//! A rule set is an ordered list of (field, check, message) entries bound to
//! a route at registration time. The runner evaluates every rule against the
//! raw JSON body and collects all violations in declaration order; an empty
//! result means the request may proceed to its handler.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Where a validated value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One rule violation. `msg` is the contractual part; `path` and `location`
/// tell clients which field failed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "El precio debe ser mayor que 0")]
    pub msg: String,
    #[schema(example = "price")]
    pub path: String,
    pub location: Location,
}

/// Field predicate applied by a rule.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Present, not null, and not an empty or whitespace-only string.
    NotEmpty,
    /// A JSON number, or a string parsing as a finite float.
    Numeric,
    /// Numeric interpretation exists and is strictly positive.
    GreaterThanZero,
    /// A JSON bool, or the strings "true"/"false".
    Boolean,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

/// Body rules for product creation. Order is part of the response contract:
/// an empty body fails all four.
pub const CREATE_RULES: &[Rule] = &[
    Rule {
        field: "name",
        check: Check::NotEmpty,
        message: "El nombre del producto no puede ir vacío",
    },
    Rule {
        field: "price",
        check: Check::Numeric,
        message: "El precio debe ser un número",
    },
    Rule {
        field: "price",
        check: Check::NotEmpty,
        message: "El precio del producto no puede ir vacío",
    },
    Rule {
        field: "price",
        check: Check::GreaterThanZero,
        message: "El precio debe ser mayor que 0",
    },
];

/// Full-update rules: the creation rules plus the availability flag. The
/// positivity message differs from the create route's on purpose; each route
/// surfaces its own literal.
pub const UPDATE_RULES: &[Rule] = &[
    Rule {
        field: "name",
        check: Check::NotEmpty,
        message: "El nombre del producto no puede ir vacío",
    },
    Rule {
        field: "price",
        check: Check::Numeric,
        message: "El precio debe ser un número",
    },
    Rule {
        field: "price",
        check: Check::NotEmpty,
        message: "El precio del producto no puede ir vacío",
    },
    Rule {
        field: "price",
        check: Check::GreaterThanZero,
        message: "Precio no válido",
    },
    Rule {
        field: "availability",
        check: Check::Boolean,
        message: "Valor para disponibilidad no válido",
    },
];

pub const INVALID_ID_MSG: &str = "ID no válido";

pub struct RequestValidator;

impl RequestValidator {
    /// Evaluate every rule against the body, collecting violations in
    /// declaration order. Pure; no short-circuiting.
    pub fn run(rules: &[Rule], body: &Value) -> Vec<FieldError> {
        rules
            .iter()
            .filter(|rule| !passes(rule.check, body.get(rule.field)))
            .map(|rule| FieldError {
                msg: rule.message.to_string(),
                path: rule.field.to_string(),
                location: Location::Body,
            })
            .collect()
    }

    /// Check that the `:id` path parameter parses as an integer identifier.
    pub fn check_id(raw: &str) -> Result<i32, FieldError> {
        raw.parse::<i32>().map_err(|_| FieldError {
            msg: INVALID_ID_MSG.to_string(),
            path: "id".to_string(),
            location: Location::Params,
        })
    }
}

/// Numeric interpretation of a JSON value, matching loose form input: JSON
/// numbers pass, and so do strings holding a finite float.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn passes(check: Check, value: Option<&Value>) -> bool {
    match check {
        Check::NotEmpty => match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        },
        Check::Numeric => value.map_or(false, |v| numeric_value(v).is_some()),
        Check::GreaterThanZero => value.and_then(numeric_value).map_or(false, |n| n > 0.0),
        Check::Boolean => match value {
            Some(Value::Bool(_)) => true,
            Some(Value::String(s)) => s == "true" || s == "false",
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_fails_all_four_creation_rules() {
        let errors = RequestValidator::run(CREATE_RULES, &json!({}));
        assert_eq!(errors.len(), 4);
        let messages: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "El nombre del producto no puede ir vacío",
                "El precio debe ser un número",
                "El precio del producto no puede ir vacío",
                "El precio debe ser mayor que 0",
            ]
        );
    }

    #[test]
    fn zero_price_fails_only_the_positivity_rule() {
        let errors = RequestValidator::run(
            CREATE_RULES,
            &json!({ "name": "Monitor Curvo", "price": 0 }),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "El precio debe ser mayor que 0");
        assert_eq!(errors[0].path, "price");
    }

    #[test]
    fn non_numeric_price_fails_numeric_and_positivity() {
        let errors = RequestValidator::run(
            CREATE_RULES,
            &json!({ "name": "Monitor Curvo", "price": "Hola" }),
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].msg, "El precio debe ser un número");
        assert_eq!(errors[1].msg, "El precio debe ser mayor que 0");
    }

    #[test]
    fn valid_creation_body_passes() {
        let errors = RequestValidator::run(
            CREATE_RULES,
            &json!({ "name": "Mouse", "price": 50 }),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn numeric_string_price_is_accepted() {
        let errors = RequestValidator::run(
            CREATE_RULES,
            &json!({ "name": "Mouse", "price": "49.99" }),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_only_name_is_empty() {
        let errors = RequestValidator::run(CREATE_RULES, &json!({ "name": "   ", "price": 10 }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "name");
    }

    #[test]
    fn update_rules_reject_non_boolean_availability() {
        let errors = RequestValidator::run(
            UPDATE_RULES,
            &json!({ "name": "Mouse", "price": 50, "availability": "si" }),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Valor para disponibilidad no válido");
    }

    #[test]
    fn update_rules_use_their_own_positivity_message() {
        let errors = RequestValidator::run(
            UPDATE_RULES,
            &json!({ "name": "Monitor Curvo", "price": 0, "availability": true }),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Precio no válido");
        assert_eq!(errors[0].path, "price");
    }

    #[test]
    fn update_rules_accept_boolean_availability() {
        let errors = RequestValidator::run(
            UPDATE_RULES,
            &json!({ "name": "Mouse", "price": 50, "availability": false }),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn id_must_be_an_integer() {
        let err = RequestValidator::check_id("not-valid-url").unwrap_err();
        assert_eq!(err.msg, INVALID_ID_MSG);
        assert_eq!(err.location, Location::Params);
        assert_eq!(RequestValidator::check_id("42").unwrap(), 42);
    }

    #[test]
    fn non_object_body_fails_every_field_rule() {
        let errors = RequestValidator::run(CREATE_RULES, &json!("texto"));
        assert_eq!(errors.len(), 4);
    }
}
