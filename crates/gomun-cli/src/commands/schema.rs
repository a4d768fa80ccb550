use anyhow::{Context, bail};
use gomun_core::Session;
use gomun_core::entities::{Company, Expert, NotificationItem, Profile};
use gomun_core::payloads::{ProfilePayload, RegisterRequest};
use gomun_core::responses::{AuthResponse, RemoteExpert, RemoteNotification};
use schemars::schema_for;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const SCHEMA_TYPES: &[&str] = &[
    "session",
    "auth-response",
    "expert",
    "company",
    "notification",
    "profile",
    "remote-expert",
    "remote-notification",
    "register-request",
    "profile-payload",
];

#[derive(Debug, Serialize)]
struct ValidationReport {
    type_name: String,
    valid: bool,
    errors: Vec<String>,
}

/// Handle `gomun schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(&args.type_name)?;

    let Some(path) = &args.validate else {
        return output(&schema, flags.format);
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let instance: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let errors = validate(&schema, &instance)?;
    let valid = errors.is_empty();
    output(
        &ValidationReport {
            type_name: args.type_name.clone(),
            valid,
            errors,
        },
        flags.format,
    )?;

    if !valid {
        bail!("{} does not match the {} schema", path.display(), args.type_name);
    }
    Ok(())
}

fn schema_value(type_name: &str) -> anyhow::Result<Value> {
    let key = type_name.trim().to_ascii_lowercase().replace('_', "-");
    let schema = match key.as_str() {
        "session" => schema_for!(Session),
        "auth-response" => schema_for!(AuthResponse),
        "expert" => schema_for!(Expert),
        "company" => schema_for!(Company),
        "notification" => schema_for!(NotificationItem),
        "profile" => schema_for!(Profile),
        "remote-expert" => schema_for!(RemoteExpert),
        "remote-notification" => schema_for!(RemoteNotification),
        "register-request" => schema_for!(RegisterRequest),
        "profile-payload" => schema_for!(ProfilePayload),
        _ => bail!(
            "unknown schema type '{type_name}' (expected one of: {})",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

fn validate(schema: &Value, instance: &Value) -> anyhow::Result<Vec<String>> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|error| anyhow::anyhow!("generated schema is invalid: {error}"))?;
    Ok(validator
        .iter_errors(instance)
        .map(|error| error.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in SCHEMA_TYPES {
            let schema = schema_value(name).expect("known type");
            assert!(schema.is_object(), "{name}");
        }
        assert!(schema_value("Remote_Expert").is_ok());
        assert!(schema_value("invoice").is_err());
    }

    #[test]
    fn stored_session_validates() {
        let schema = schema_value("session").unwrap();
        let good = serde_json::json!({
            "token": "t", "role": "expert", "name": "n", "email": "e", "expiresAt": 1_700_000_000_000_i64
        });
        assert!(validate(&schema, &good).unwrap().is_empty());

        let bad = serde_json::json!({"token": "t", "role": "admin"});
        assert!(!validate(&schema, &bad).unwrap().is_empty());
    }
}
