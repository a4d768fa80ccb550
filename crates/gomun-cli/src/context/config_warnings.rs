use gomun_config::GomunConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GomunConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GomunConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_single_underscore_key(&env_keys, "GOMUN_API_") {
        warnings.push(
            "API config appears default while GOMUN_API_* env vars exist. Use double underscores (example: GOMUN_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.storage.dir.is_empty() && has_single_underscore_key(&env_keys, "GOMUN_STORAGE_") {
        warnings.push(
            "Storage config appears default while GOMUN_STORAGE_* env vars exist. Use double underscores (example: GOMUN_STORAGE__DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_on_single_underscore_api_key() {
        let warnings =
            collect_unconfigured_warnings(&GomunConfig::default(), env(&["GOMUN_API_BASE_URL"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("GOMUN_API__BASE_URL"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &GomunConfig::default(),
            env(&["GOMUN_API__BASE_URL", "GOMUN_STORAGE__DIR", "GOMUN_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_api_suppresses_warning() {
        let mut config = GomunConfig::default();
        config.api.base_url = "http://localhost:8000".into();
        let warnings = collect_unconfigured_warnings(&config, env(&["GOMUN_API_BASE_URL"]));
        assert!(warnings.is_empty());
    }
}
