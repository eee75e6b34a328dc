use anyhow::Context;
use serde_json::Value;

use crate::domain::config::AuthConfig;

/// Resolves the API bearer token once per run: the `--api-key` flag
/// wins, then `auth.api_key` from config, then Secrets Manager.
pub fn resolve_api_key(flag: Option<&str>, auth: &AuthConfig) -> anyhow::Result<String> {
    if let Some(key) = flag {
        return Ok(key.to_string());
    }
    if let Some(key) = auth.api_key.as_deref() {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    fetch_from_secrets_manager(auth)
}

fn fetch_from_secrets_manager(auth: &AuthConfig) -> anyhow::Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime for the Secrets Manager client")?;
    let config = runtime.block_on(
        aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(auth.region.clone()))
            .load(),
    );
    let client = aws_sdk_secretsmanager::Client::new(&config);

    let output = runtime
        .block_on(client.get_secret_value().secret_id(&auth.secret_name).send())
        .with_context(|| format!("fetching secret {}", auth.secret_name))?;
    let raw = output
        .secret_string()
        .with_context(|| format!("secret {} has no string payload", auth.secret_name))?;

    let parsed: Value = serde_json::from_str(raw)
        .with_context(|| format!("secret {} is not JSON", auth.secret_name))?;
    parsed
        .get(&auth.secret_field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .with_context(|| {
            format!(
                "secret {} has no {} field",
                auth.secret_name, auth.secret_field
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_config_key() {
        let auth = AuthConfig {
            api_key: Some("from-config".to_string()),
            ..AuthConfig::default()
        };
        assert_eq!(
            resolve_api_key(Some("from-flag"), &auth).unwrap(),
            "from-flag"
        );
        assert_eq!(resolve_api_key(None, &auth).unwrap(), "from-config");
    }

}
