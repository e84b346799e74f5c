use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sked_core::models::DEFAULT_LIST_LIMIT;

pub const CONFIG_FILE: &str = "sked.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the `scheduler` table.
    pub database_path: String,
    /// Maximum number of rows printed by `sked list`.
    pub list_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "scheduler.db".to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment(CONFIG_FILE).extract()
    }

    fn figment(file: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("SKED_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_env() {
        figment::Jail::expect_with(|_jail| {
            assert_eq!(Config::new()?, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                database_path = "from-file.db"
                list_limit = 10
                "#,
            )?;
            jail.set_env("SKED_DATABASE_PATH", "from-env.db");

            let config = Config::new()?;
            assert_eq!(config.database_path, "from-env.db");
            assert_eq!(config.list_limit, 10);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_env_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"database_path = "kept.db""#)?;
            jail.set_env("SKED_LIST_LIMIT", "abc");

            assert!(Config::new().is_err());
            Ok(())
        });
    }
}
