use market_desk::web::{AppConfig, BuildMode, PwaOptions, app_config, with_pwa};
use serde_json::json;
use std::env;

#[test]
fn test_base_config_enables_strict_mode() {
    assert!(AppConfig::default().react_strict_mode);
}

#[test]
fn test_pwa_disabled_in_development_only() {
    assert!(!app_config(BuildMode::Development).is_pwa_enabled());
    assert!(app_config(BuildMode::Production).is_pwa_enabled());
    assert!(app_config(BuildMode::Test).is_pwa_enabled());
}

#[test]
fn test_pwa_options_defaults() {
    let options = PwaOptions::for_mode(BuildMode::Production);
    assert_eq!(options.dest, "public");
    assert!(options.register);
    assert!(options.skip_waiting);
    assert!(!options.disable);
}

#[test]
fn test_with_pwa_wraps_base_config() {
    let base = AppConfig {
        react_strict_mode: false,
    };
    let config = with_pwa(PwaOptions::for_mode(BuildMode::Production))(base);
    assert_eq!(config.base, base);
}

#[test]
fn test_build_mode_parse() {
    assert_eq!("development".parse::<BuildMode>().unwrap(), BuildMode::Development);
    assert_eq!("test".parse::<BuildMode>().unwrap(), BuildMode::Test);
    assert_eq!("production".parse::<BuildMode>().unwrap(), BuildMode::Production);
    assert_eq!("staging".parse::<BuildMode>().unwrap(), BuildMode::Production);
}

#[test]
fn test_build_mode_from_env() {
    unsafe {
        env::set_var("NODE_ENV", "development");
        assert_eq!(BuildMode::from_env(), BuildMode::Development);
        env::remove_var("NODE_ENV");
        assert_eq!(BuildMode::from_env(), BuildMode::Production);
    }
}

#[test]
fn test_config_json_shape() {
    let value = serde_json::to_value(app_config(BuildMode::Development)).unwrap();
    assert_eq!(
        value,
        json!({
            "reactStrictMode": true,
            "pwa": {
                "dest": "public",
                "register": true,
                "skipWaiting": true,
                "disable": true
            }
        })
    );
}
