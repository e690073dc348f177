use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads `env_var` and parses it as `T`, falling back to `default` when the
/// variable is unset or does not parse. Parse failures are logged.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        error!("Failed to parse {}={:?} ({:?}), using default", env_var, raw, e);
        default
    })
}

/// Reads `env_var` and parses it as `T`; `None` when unset, blank or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| raw.trim().parse::<T>().ok())
}

/// Reads a base URL from `env_var`, without trailing slashes
pub fn get_env_url_or_default(env_var: &str, default: &str) -> String {
    get_env_or_default(env_var, default.to_string())
        .trim_end_matches('/')
        .to_string()
}
