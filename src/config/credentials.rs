use tracing::debug;

/// Resolve a credential value. A leading '$' marks an environment variable
/// reference; an unset variable leaves the literal in place.
pub fn resolve_credential(value: &str) -> String {
    let Some(var_name) = value.strip_prefix('$') else {
        return value.to_string();
    };
    match std::env::var(var_name) {
        Ok(resolved) => {
            debug!(var = %var_name, "Resolved credential from environment");
            resolved
        }
        Err(_) => {
            debug!(var = %var_name, "Environment variable not set, using literal");
            value.to_string()
        }
    }
}

/// Scrub known secrets out of a string before it reaches logs or error
/// output. Very short secrets are left alone to avoid mangling unrelated
/// text.
pub fn redact_secrets(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}
