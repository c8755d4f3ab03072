use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_simscore_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var(Config::ENV_MODEL_PATH);
        env::remove_var(Config::ENV_TOKENIZER_PATH);
        env::remove_var(Config::ENV_EMBEDDER_STUB);
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.model_path.is_none());
    assert!(config.tokenizer_path.is_none());
    assert!(!config.embedder_stub);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_simscore_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert!(config.model_path.is_none());
    assert!(config.tokenizer_path.is_none());
    assert!(!config.embedder_stub);
}

#[test]
#[serial]
fn test_from_env_reads_paths() {
    clear_simscore_env();

    let config = with_env_vars(
        &[
            (Config::ENV_MODEL_PATH, "/models/minilm"),
            (Config::ENV_TOKENIZER_PATH, "/models/minilm/tokenizer.json"),
        ],
        || Config::from_env().expect("should parse"),
    );

    assert_eq!(config.model_path, Some(PathBuf::from("/models/minilm")));
    assert_eq!(
        config.tokenizer_path,
        Some(PathBuf::from("/models/minilm/tokenizer.json"))
    );
}

#[test]
#[serial]
fn test_from_env_ignores_blank_paths() {
    clear_simscore_env();

    let config = with_env_vars(&[(Config::ENV_MODEL_PATH, "   ")], || {
        Config::from_env().expect("should parse")
    });

    assert!(config.model_path.is_none());
}

#[test]
#[serial]
fn test_from_env_stub_flag_variants() {
    clear_simscore_env();

    for value in ["1", "true", "YES", "on"] {
        let config = with_env_vars(&[(Config::ENV_EMBEDDER_STUB, value)], || {
            Config::from_env().expect("should parse")
        });
        assert!(config.embedder_stub, "expected '{value}' to enable stub");
    }

    for value in ["0", "false", "no", "off", ""] {
        let config = with_env_vars(&[(Config::ENV_EMBEDDER_STUB, value)], || {
            Config::from_env().expect("should parse")
        });
        assert!(!config.embedder_stub, "expected '{value}' to disable stub");
    }
}

#[test]
#[serial]
fn test_from_env_rejects_garbage_stub_flag() {
    clear_simscore_env();

    let result = with_env_vars(&[(Config::ENV_EMBEDDER_STUB, "maybe")], Config::from_env);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidFlag { name, .. }) if name == Config::ENV_EMBEDDER_STUB
    ));
}

#[test]
fn test_validate_passes_with_no_paths() {
    let config = Config::default();
    config.validate().expect("empty config should validate");
}

#[test]
fn test_validate_rejects_missing_model_path() {
    let config = Config {
        model_path: Some(PathBuf::from("/definitely/not/a/real/dir")),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_rejects_tokenizer_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        tokenizer_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(ConfigError::NotAFile { .. })));
}

#[test]
fn test_validate_accepts_existing_tokenizer_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let tokenizer = dir.path().join("tokenizer.json");
    std::fs::write(&tokenizer, "{}").expect("write tokenizer");

    let config = Config {
        model_path: Some(dir.path().to_path_buf()),
        tokenizer_path: Some(tokenizer),
        ..Default::default()
    };

    config.validate().expect("existing paths should validate");
}
