//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use rapport_config::RapportConfig;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://risk.example.org"
user_agent = "clinic-desk/2"

[session]
path = "/var/lib/rapport/session.json"

[web]
frontend_url = "http://localhost:5500"
"#,
        )?;

        let config: RapportConfig = Figment::from(Serialized::defaults(RapportConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://risk.example.org");
        assert_eq!(config.api.user_agent, "clinic-desk/2");
        assert_eq!(
            config.session.path_override(),
            Some("/var/lib/rapport/session.json")
        );
        assert_eq!(config.web.frontend_url, "http://localhost:5500");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[web]\nfrontend_url = \"http://x\"\n")?;

        let config: RapportConfig = Figment::from(Serialized::defaults(RapportConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, rapport_config::DEFAULT_BASE_URL);
        assert!(config.session.path_override().is_none());
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".rapport")).expect("mkdir .rapport");
        jail.create_file(
            ".rapport/config.toml",
            "[api]\nbase_url = \"http://10.0.0.5:8000\"\n",
        )?;

        let config = RapportConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".rapport")).expect("mkdir .rapport");
        jail.create_file(
            ".rapport/config.toml",
            "[api]\nbase_url = \"http://from-toml:8000\"\n",
        )?;
        jail.set_env("RAPPORT_API__BASE_URL", "http://from-env:8000");

        let config = RapportConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env:8000");
        Ok(())
    });
}

#[test]
fn env_sets_session_path() {
    Jail::expect_with(|jail| {
        jail.set_env("RAPPORT_SESSION__PATH", "/tmp/rapport-session.json");

        let config: RapportConfig = Figment::from(Serialized::defaults(RapportConfig::default()))
            .merge(Env::prefixed("RAPPORT_").split("__"))
            .extract()?;

        assert_eq!(
            config.session.path_override(),
            Some("/tmp/rapport-session.json")
        );
        Ok(())
    });
}
