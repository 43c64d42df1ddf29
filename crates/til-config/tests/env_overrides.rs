use figment::Jail;
use til_config::{PROJECT_CONFIG_FILE, TilConfig};

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[source]\nfolder = \"FromToml\"\n")?;
        jail.set_env("TIL_SOURCE__FOLDER", "FromEnv");
        jail.set_env("TIL_SOURCE__FETCH_LIMIT", "3");

        let config = TilConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.source.folder, "FromEnv");
        assert_eq!(config.source.fetch_limit, 3);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "TIL_PATHS__POSTS_DIR=notes/out\n")?;

        let config = TilConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.paths.posts_dir, "notes/out");
        Ok(())
    });
}

#[test]
fn malformed_dotenv_is_reported() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "TIL_SOURCE__FOLDER='unterminated\n")?;

        let error = TilConfig::load_with_dotenv(jail.directory()).expect_err(".env is malformed");
        assert!(matches!(error, til_config::ConfigError::Dotenv { .. }), "{error}");
        Ok(())
    });
}
