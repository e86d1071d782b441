//! MySQL connection setup.
//!
//! The reader uses one long-lived connection for the whole run: the pool is
//! capped at a single connection, and after connecting the session is
//! switched to read-only and, where the server supports it, gets a
//! statement time limit.

use super::{ConnectionConfig, MySqlSchemaReader, dsn::normalize_connection_string};
use crate::{Result, error::Db2StructError};
use sqlx::MySqlPool;
use std::time::Duration;
use url::Url;

impl MySqlSchemaReader {
    /// Connects to MySQL and verifies the connection.
    ///
    /// # Arguments
    /// * `connection_string` - `mysql://` URL or go-sql-driver DSN
    ///
    /// # Errors
    /// Returns error if:
    /// - Connection string format is invalid or names no database
    /// - The server cannot be reached or rejects the credentials
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let url = normalize_connection_string(connection_string)?;
        let config = parse_mysql_connection_config(&url)?;

        tracing::debug!(
            "Connecting to {}",
            crate::error::redact_database_url(&url)
        );
        let pool = create_mysql_connection_pool(&url, &config)?;

        let connectivity: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&pool)
            .await
            .map_err(Db2StructError::connection_failed)?;
        if connectivity != 1 {
            return Err(Db2StructError::configuration(
                "Basic connectivity test failed: unexpected result",
            ));
        }

        tracing::info!("Connected to {}", config);
        Ok(Self::from_pool(pool, config))
    }
}

/// Parses a MySQL URL into a validated connection configuration.
///
/// # Errors
/// Returns a configuration error for malformed URLs, a zero port, a missing
/// database name, or out-of-range parameters.
pub fn parse_mysql_connection_config(connection_string: &str) -> Result<ConnectionConfig> {
    validate_mysql_connection_string(connection_string)?;

    let url = Url::parse(connection_string).map_err(|e| {
        Db2StructError::configuration(format!("Invalid MySQL connection string format: {}", e))
    })?;

    let mut config = ConnectionConfig::new(url.host_str().unwrap_or("localhost").to_string());

    if let Some(port) = url.port() {
        if port == 0 {
            return Err(Db2StructError::configuration(
                "Invalid port number: must be greater than 0",
            ));
        }
        config = config.with_port(port);
    } else {
        config = config.with_port(3306);
    }

    let database = url.path().trim_start_matches('/');
    if !database.is_empty() {
        if database.len() > 64 {
            return Err(Db2StructError::configuration(
                "Database name too long: maximum 64 characters",
            ));
        }
        config = config.with_database(database.to_string());
    }

    let username = url.username();
    if !username.is_empty() {
        config = config.with_username(username.to_string());
    }

    for (key, value) in url.query_pairs() {
        let Ok(timeout_secs) = value.parse::<u64>() else {
            continue;
        };
        if timeout_secs == 0 || timeout_secs > 300 {
            continue;
        }
        match key.as_ref() {
            "connect_timeout" => config.connect_timeout = Duration::from_secs(timeout_secs),
            "query_timeout" => config.query_timeout = Duration::from_secs(timeout_secs),
            _ => {}
        }
    }

    config.validate()?;

    Ok(config)
}

/// Validates MySQL connection URL format.
///
/// # Errors
/// Returns error if the string is not a URL, does not use the `mysql://`
/// scheme, or has no host.
pub fn validate_mysql_connection_string(connection_string: &str) -> Result<()> {
    let url = Url::parse(connection_string).map_err(|e| {
        Db2StructError::configuration(format!("Invalid MySQL connection string format: {}", e))
    })?;

    if url.scheme() != "mysql" {
        return Err(Db2StructError::configuration(
            "Connection string must use mysql:// scheme",
        ));
    }

    if url.host_str().is_none() {
        return Err(Db2StructError::configuration(
            "Connection string must specify a host",
        ));
    }

    Ok(())
}

/// A statement run on every new connection before it is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionStatement {
    pub(crate) sql: String,
    /// Optional statements may fail (for example `max_execution_time` on
    /// MariaDB or MySQL before 5.7.8) without losing the connection.
    pub(crate) required: bool,
}

/// Session setup for a configuration, in execution order.
pub(crate) fn session_statements(config: &ConnectionConfig) -> Vec<SessionStatement> {
    let mut statements = vec![SessionStatement {
        sql: format!("SET max_execution_time = {}", config.query_timeout.as_millis()),
        required: false,
    }];

    if config.read_only {
        statements.push(SessionStatement {
            sql: "SET SESSION TRANSACTION READ ONLY".to_string(),
            required: true,
        });
    }

    statements
}

/// Decides whether a failed setup statement aborts the connection.
pub(crate) fn settle_session_statement(
    statement: &SessionStatement,
    outcome: std::result::Result<(), sqlx::Error>,
) -> std::result::Result<(), sqlx::Error> {
    match outcome {
        Err(e) if !statement.required => {
            tracing::debug!("Ignoring failed session setting `{}`: {}", statement.sql, e);
            Ok(())
        }
        other => other,
    }
}

/// Creates the single-connection pool used for introspection.
fn create_mysql_connection_pool(
    connection_string: &str,
    config: &ConnectionConfig,
) -> Result<MySqlPool> {
    use sqlx::Executor;

    let statements = session_statements(config);

    let pool = sqlx::mysql::MySqlPoolOptions::new()
        .max_connections(1)
        .min_connections(0)
        .acquire_timeout(config.connect_timeout)
        .test_before_acquire(true)
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for statement in &statements {
                    let outcome = conn.execute(statement.sql.as_str()).await.map(|_| ());
                    settle_session_statement(statement, outcome)?;
                }
                Ok(())
            })
        })
        .connect_lazy(connection_string)
        .map_err(|e| Db2StructError::Connection {
            context: format!(
                "Failed to create MySQL connection pool to {}",
                crate::error::redact_database_url(connection_string)
            ),
            source: Box::new(e),
        })?;

    Ok(pool)
}
