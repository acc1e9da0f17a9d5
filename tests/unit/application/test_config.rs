use market_desk::application::config::{
    Config, MissingSetting, PolygonConfig, SupabaseConfig,
};
use market_desk::constants::POLYGON_BASE_URL;
use market_desk::error::AppError;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_load_complete_configuration() {
    let load = Config::from_lookup(lookup_from(&[
        ("NEXT_PUBLIC_POLYGON_API_KEY", "poly-key"),
        ("NEXT_PUBLIC_SUPABASE_URL", "https://project.supabase.co"),
        ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
    ]));

    assert!(load.is_complete());
    assert_eq!(load.config.polygon.api_key, "poly-key");
    assert_eq!(load.config.polygon.base_url, POLYGON_BASE_URL);
    assert_eq!(load.config.supabase.url, "https://project.supabase.co");
    assert_eq!(load.config.supabase.anon_key, "anon");
}

#[test]
fn test_load_with_nothing_set_uses_empty_strings() {
    let load = Config::from_lookup(|_| None);

    assert_eq!(
        load.missing,
        vec![
            MissingSetting::PolygonApiKey,
            MissingSetting::SupabaseUrl,
            MissingSetting::SupabaseAnonKey,
        ]
    );
    assert_eq!(load.config.polygon.api_key, "");
    assert_eq!(load.config.supabase, SupabaseConfig::new("", ""));
}

#[test]
fn test_blank_values_count_as_missing() {
    let load = Config::from_lookup(lookup_from(&[
        ("NEXT_PUBLIC_POLYGON_API_KEY", "key"),
        ("NEXT_PUBLIC_SUPABASE_URL", "   "),
        ("NEXT_PUBLIC_SUPABASE_ANON_KEY", ""),
    ]));

    assert_eq!(
        load.missing,
        vec![MissingSetting::SupabaseUrl, MissingSetting::SupabaseAnonKey]
    );
    assert!(load.config.supabase.is_incomplete());
}

#[test]
fn test_whitespace_polygon_key_is_kept_verbatim() {
    let load = Config::from_lookup(lookup_from(&[("NEXT_PUBLIC_POLYGON_API_KEY", " ")]));
    assert_eq!(load.config.polygon.api_key, " ");
    assert!(!load.missing.contains(&MissingSetting::PolygonApiKey));
}

#[test]
fn test_empty_polygon_key_is_missing() {
    let load = Config::from_lookup(lookup_from(&[("NEXT_PUBLIC_POLYGON_API_KEY", "")]));
    assert_eq!(load.config.polygon.api_key, "");
    assert!(load.missing.contains(&MissingSetting::PolygonApiKey));
}

#[test]
fn test_base_url_override() {
    let load = Config::from_lookup(lookup_from(&[("POLYGON_BASE_URL", "http://127.0.0.1:9999")]));
    assert_eq!(load.config.polygon.base_url, "http://127.0.0.1:9999");
}

#[test]
fn test_into_config_proceeds_despite_missing_settings() {
    let config = Config::from_lookup(|_| None).into_config();
    assert_eq!(config.polygon.api_key, "");
    assert_eq!(config.supabase.url, "");
}

#[test]
fn test_into_complete_lists_missing_settings() {
    let load = Config::from_lookup(lookup_from(&[("NEXT_PUBLIC_POLYGON_API_KEY", "key")]));
    match load.into_complete() {
        Err(AppError::InvalidInput(msg)) => {
            assert!(msg.contains("NEXT_PUBLIC_SUPABASE_URL"));
            assert!(msg.contains("NEXT_PUBLIC_SUPABASE_ANON_KEY"));
            assert!(!msg.contains("NEXT_PUBLIC_POLYGON_API_KEY"));
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_missing_setting_display_is_env_var() {
    assert_eq!(
        MissingSetting::PolygonApiKey.to_string(),
        "NEXT_PUBLIC_POLYGON_API_KEY"
    );
}

#[test]
fn test_polygon_config_builder() {
    let config = PolygonConfig::new("abc").with_base_url("http://localhost:1234");
    assert_eq!(config.api_key, "abc");
    assert_eq!(config.base_url, "http://localhost:1234");
}

#[test]
fn test_config_serialization() {
    let config = Config {
        polygon: PolygonConfig::new("abc"),
        supabase: SupabaseConfig::new("https://x.supabase.co", "anon"),
    };

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}
