use std::path::PathBuf;

use hook_ranker::config::{InputConfig, RankerConfig};

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("hook-ranker-{}-{}", name, std::process::id()))
        .join("ranker.toml")
}

#[test]
fn defaults_match_product_settings() {
    let config = RankerConfig::default();

    assert_eq!(config.selection.template_limit, 5);
    assert_eq!(config.selection.power_hook_limit, 10);
    assert!((config.jitter.template_max - 3.0).abs() < 1e-6);
    assert!((config.jitter.power_hook_max - 5.0).abs() < 1e-6);
    assert!(config.jitter.seed.is_none());
    assert_eq!(config.input.min_chars, 10);
    assert_eq!(config.input.max_chars, 10_000);
}

#[test]
fn partial_toml_keeps_defaults() {
    let config: RankerConfig =
        toml::from_str("[selection]\ntemplate_limit = 3\n").expect("valid toml");

    assert_eq!(config.selection.template_limit, 3);
    assert_eq!(config.selection.power_hook_limit, 10);
    assert_eq!(config.input.max_chars, 10_000);
}

#[test]
fn written_config_loads_back() {
    let path = temp_config_path("roundtrip");
    let mut config = RankerConfig::default();
    config.selection.power_hook_limit = 4;
    config.jitter.power_hook_max = 2.0;
    config.write(&path).expect("config writes");

    let (loaded, loaded_path) = RankerConfig::load(Some(path.clone())).expect("config loads");
    assert_eq!(loaded_path, Some(path.clone()));
    assert!((loaded.jitter.power_hook_max - 2.0).abs() < 1e-6);

    let _ = std::fs::remove_dir_all(path.parent().expect("temp dir"));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let path = temp_config_path("missing");
    let (config, _) = RankerConfig::load(Some(path)).expect("defaults load");
    assert!((config.jitter.template_max - 3.0).abs() < 1e-6);
}

#[test]
fn input_validation_enforces_bounds() {
    let input = InputConfig::default();

    assert!(input.validate("   short   ").is_err());
    assert!(input.validate(&"a".repeat(10_001)).is_err());
    assert_eq!(
        input.validate("  long enough content  ").as_deref(),
        Ok("long enough content")
    );
}

#[test]
fn environment_overrides_file_values() {
    const VARS: [&str; 5] = [
        "TEMPLATE_LIMIT",
        "POWER_HOOK_LIMIT",
        "JITTER_SEED",
        "TEMPLATES_PATH",
        "POWER_HOOKS_PATH",
    ];
    let path = temp_config_path("env");
    let mut config = RankerConfig::default();
    config.selection.template_limit = 2;
    config.selection.power_hook_limit = 3;
    config.write(&path).expect("config writes");

    std::env::set_var("TEMPLATE_LIMIT", "7");
    std::env::set_var("POWER_HOOK_LIMIT", "4");
    std::env::set_var("JITTER_SEED", "99");
    std::env::set_var("TEMPLATES_PATH", "alt/templates.json");
    std::env::set_var("POWER_HOOKS_PATH", "alt/power-hooks.json");
    let (loaded, _) = RankerConfig::load(Some(path.clone())).expect("config loads");

    assert_eq!(loaded.selection.template_limit, 7);
    assert_eq!(loaded.selection.power_hook_limit, 4);
    assert_eq!(loaded.jitter.seed, Some(99));
    assert_eq!(loaded.corpus.templates_path, PathBuf::from("alt/templates.json"));
    assert_eq!(loaded.corpus.power_hooks_path, PathBuf::from("alt/power-hooks.json"));

    std::env::set_var("TEMPLATE_LIMIT", "many");
    std::env::set_var("POWER_HOOK_LIMIT", "-1");
    std::env::set_var("JITTER_SEED", "seed");
    std::env::set_var("TEMPLATES_PATH", "  ");
    std::env::set_var("POWER_HOOKS_PATH", "");
    let (unparsable, _) = RankerConfig::load(Some(path.clone())).expect("config loads");

    assert_eq!(unparsable.selection.template_limit, 2);
    assert_eq!(unparsable.selection.power_hook_limit, 3);
    assert_eq!(unparsable.jitter.seed, None);
    assert_eq!(unparsable.corpus.templates_path, PathBuf::from("data/templates.json"));
    assert_eq!(unparsable.corpus.power_hooks_path, PathBuf::from("data/power-hooks.json"));

    for name in VARS {
        std::env::remove_var(name);
    }
    let _ = std::fs::remove_dir_all(path.parent().expect("temp dir"));
}
