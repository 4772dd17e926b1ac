//! `consistgen id` command.

use serde_json::json;

use crate::config::{IdConfig, ProvidersConfig};
use crate::context::ProviderContext;

/// Flags accepted by the `id` command.
#[derive(Debug, Clone, Default)]
pub struct IdArgs {
    /// Fixed identifier override.
    pub value: Option<String>,
    /// Use random UUIDs.
    pub random: bool,
}

/// Execute the `id` command.
///
/// # Errors
///
/// Returns an error string if the provider context cannot be built.
pub fn run(config: &ProvidersConfig, args: &IdArgs, json: bool) -> Result<String, String> {
    let id = if args.random {
        IdConfig::Random
    } else if let Some(value) = &args.value {
        IdConfig::Fixed { value: Some(value.clone()) }
    } else {
        config.id.clone()
    };
    let config = ProvidersConfig { id, ..config.clone() };
    let ctx = ProviderContext::from_config(&config).map_err(|e| e.to_string())?;

    let id = ctx.ids.generate_id();
    if json {
        return Ok(json!({ "id": id }).to_string());
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::id::NIL_ID;

    #[test]
    fn default_is_nil() {
        assert_eq!(run(&ProvidersConfig::default(), &IdArgs::default(), false).unwrap(), NIL_ID);
    }

    #[test]
    fn value_flag_overrides_config() {
        let config = ProvidersConfig { id: IdConfig::Random, ..ProvidersConfig::default() };
        let args = IdArgs { value: Some("abc".into()), random: false };
        assert_eq!(run(&config, &args, false).unwrap(), "abc");
    }

    #[test]
    fn random_flag_yields_uuid() {
        let args = IdArgs { value: None, random: true };
        let out = run(&ProvidersConfig::default(), &args, false).unwrap();
        assert!(uuid::Uuid::parse_str(&out).is_ok());
        assert_ne!(out, NIL_ID);
    }

    #[test]
    fn json_output() {
        let out = run(&ProvidersConfig::default(), &IdArgs::default(), true).unwrap();
        assert_eq!(out, format!("{{\"id\":\"{NIL_ID}\"}}"));
    }
}
