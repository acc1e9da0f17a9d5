/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable and parses it, falling back to `default`
///
/// Unset or blank variables give `default` silently; values that fail to
/// parse are logged and also give `default`.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match lookup_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}='{}': {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Reads an environment variable and parses it, returning None if unset, blank or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    lookup_env(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Reads an environment variable, treating blank values as absent
pub fn lookup_env(env_var: &str) -> Option<String> {
    non_blank(env::var(env_var).ok())
}

/// Reads an environment variable exactly as set
pub fn raw_env(env_var: &str) -> Option<String> {
    env::var(env_var).ok()
}

/// Drops values that are empty or only whitespace
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
