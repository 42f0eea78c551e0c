use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - fails without DATABASE_URL
        let retry = RetryConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            retry,
            server,
            environment,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/inventory")),
                ("RUN_MIGRATIONS", None),
                ("PORT", Some("9090")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.run_migrations);
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.database.url(), "postgresql://localhost/inventory");
                assert_eq!(config.app.name, "product_service");
            },
        );
    }

    #[test]
    fn test_run_migrations_can_be_disabled() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/inventory")),
                ("RUN_MIGRATIONS", Some("false")),
            ],
            || assert!(!Config::from_env().unwrap().run_migrations),
        );
    }
}
