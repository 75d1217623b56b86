use figment::Jail;
use ghday_config::GhdayConfig;
use pretty_assertions::assert_eq;

#[test]
fn conventional_github_variables_fill_config() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GITHUB_TOKEN", "ghp_conventional");
        jail.set_env("GITHUB_USER", "alice");

        let config = GhdayConfig::load(None).expect("config loads");
        assert_eq!(config.github.token, "ghp_conventional");
        assert_eq!(config.github.user, "alice");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_conventional_variables() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GITHUB_TOKEN", "ghp_conventional");
        jail.set_env("GHDAY_GITHUB__TOKEN", "ghp_prefixed");

        let config = GhdayConfig::load(None).expect("config loads");
        assert_eq!(config.github.token, "ghp_prefixed");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("ghday.toml", "[github]\nuser = \"from-toml\"\n")?;
        jail.set_env("GITHUB_USER", "from-env");

        let config = GhdayConfig::load(None).expect("config loads");
        assert_eq!(config.github.user, "from-env");
        Ok(())
    });
}

#[test]
fn nested_sections_map_from_double_underscore() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GHDAY_GENERAL__DEADLINE_SECS", "20");
        jail.set_env("GHDAY_GITHUB__API_URL", "http://localhost:8080");

        let config = GhdayConfig::load(None).expect("config loads");
        assert_eq!(config.general.deadline_secs, 20);
        assert_eq!(config.github.api_url, "http://localhost:8080");
        Ok(())
    });
}

#[test]
fn unrelated_github_variables_are_ignored() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GITHUB_ACTIONS", "true");

        let config = GhdayConfig::load(None).expect("config loads");
        assert!(!config.github.is_configured());
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(".env", "GHDAY_GITHUB__USER=dotenv-user\n")?;

        let config = GhdayConfig::load_with_dotenv(None).expect("config loads");
        assert_eq!(config.github.user, "dotenv-user");
        Ok(())
    });
}
