use std::{env, fmt, num::ParseIntError, path::Path};

use model::{construct::Related, day::Day};
use thiserror::Error;

pub mod data_model;
pub mod lifecycle;
pub mod queries;
pub mod schema;

pub use lifecycle::Lifecycle;

pub const ENV_DATABASE: &str = "PG_NAME";
pub const ENV_HOST: &str = "PG_HOST";
pub const ENV_PORT: &str = "PG_PORT";
pub const ENV_USER: &str = "PG_USER";
pub const ENV_PASSWORD: &str = "PG_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("PG_PORT is not a valid port: {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("could not read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConnectionInfo {
    /// Reads the connection info from the process environment. Every value is
    /// required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads `path` into the environment, without overriding variables which
    /// are already set, and reads the connection info from there.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::from_path(path)?;
        Self::from_env()
    }

    /// Like [`Self::from_env`], but picks up a `.env` file in the working
    /// directory or its parents if there is one.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("loaded {}", path.display()),
            Err(why) if why.not_found() => {}
            Err(why) => return Err(why.into()),
        }
        Self::from_env()
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let database = required(ENV_DATABASE)?;
        let hostname = required(ENV_HOST)?;
        let port = required(ENV_PORT)?;
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort {
                value: port.clone(),
                source,
            })?;
        let username = required(ENV_USER)?;
        let password = required(ENV_PASSWORD)?;
        Ok(Self {
            username,
            password,
            hostname,
            port,
            database,
        })
    }

    pub fn postgres_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.hostname, self.port, self.database
        )
    }
}

impl fmt::Debug for DatabaseConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectionInfo")
            .field("username", &self.username)
            .field("password", &"***")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

/// Handle to the logbook database. Cloning is cheap, all clones share one
/// connection pool.
#[derive(Clone)]
pub struct PgDatabase {
    connection: sqlx::PgPool,
    name: String,
}

impl PgDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> Result<Self, sqlx::Error> {
        let url = database_connection_info.postgres_url();
        let pool = sqlx::postgres::PgPool::connect(&url).await?;

        Ok(Self::from_pool(pool, database_connection_info.database))
    }

    pub fn from_pool<S: Into<String>>(pool: sqlx::PgPool, name: S) -> Self {
        Self {
            connection: pool,
            name: name.into(),
        }
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        &self.connection
    }

    /// Name of the database this handle is connected to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores a day together with the tasks it holds in one transaction.
    ///
    /// Tasks must reference already stored locations, either through
    /// `loc_id` or a related location carrying an id. Elements of `tasks`
    /// which are not entities are ignored.
    pub async fn save_day(&self, day: &Day) -> data_model::Result<Day> {
        let mut tx = self.connection.begin().await?;

        let mut saved = queries::day::insert(&mut *tx, day).await?;
        let day_id = saved.id;
        for task in day.task_entities() {
            let mut task = task.clone();
            task.day_id = day_id;
            task.loc_id = task.location_id();
            let stored = queries::task::insert(&mut *tx, &task).await?;
            saved.tasks.push(Related::Entity(stored));
        }

        tx.commit().await?;
        Ok(saved)
    }
}
