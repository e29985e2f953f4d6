//! Database connection and lifecycle.
//!
//! The pool is constructed once at process start and handed to every
//! component; there is no lazily-initialized global handle. [`EphemeralPg`]
//! spins up a throwaway PostgreSQL instance for integration tests.

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::sleep;
use tracing::info;

/// Budget for acquiring a connection, matching the store's connect-time
/// timeout. There is no per-query deadline.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Database name used by the application and the test harness.
const DATABASE_NAME: &str = "clinic";

/// Maximum time to wait for an ephemeral instance to become ready.
const PG_READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Poll interval while waiting for readiness.
const PG_READY_POLL: Duration = Duration::from_millis(200);

/// Open a connection pool against `url`.
pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(url)
        .await
}

/// Errors from the ephemeral-instance harness.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("pg_config not found on PATH")]
    PgConfigNotFound,

    #[error("PostgreSQL command failed: {0}")]
    Command(String),

    #[error("PostgreSQL not ready after {0:?}")]
    ReadyTimeout(Duration),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A throwaway PostgreSQL instance on an ephemeral port.
///
/// Binaries are discovered via `pg_config --bindir`; data lives in a tempdir
/// that is removed on drop. Call [`EphemeralPg::stop`] before dropping so the
/// server process does not outlive its data directory.
pub struct EphemeralPg {
    bin_dir: PathBuf,
    port: u16,
    started: bool,
    tempdir: tempfile::TempDir,
}

impl EphemeralPg {
    /// Whether the harness can run here (PostgreSQL binaries on PATH).
    pub async fn available() -> bool {
        Command::new("pg_config")
            .arg("--bindir")
            .output()
            .await
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    /// Init, start, and provision a fresh instance with a `clinic` database.
    pub async fn start() -> Result<Self, DbError> {
        let output = Command::new("pg_config")
            .arg("--bindir")
            .output()
            .await
            .map_err(|_| DbError::PgConfigNotFound)?;
        if !output.status.success() {
            return Err(DbError::PgConfigNotFound);
        }
        let bin_dir = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());

        let tempdir = tempfile::tempdir()?;
        let mut pg = Self {
            bin_dir,
            port: free_port()?,
            started: false,
            tempdir,
        };

        pg.initdb().await?;
        pg.pg_ctl_start().await?;
        pg.wait_for_ready().await?;
        pg.started = true;
        pg.create_database().await?;

        info!(port = pg.port, "ephemeral PostgreSQL ready");
        Ok(pg)
    }

    /// Connection URL for the `clinic` database.
    pub fn connection_url(&self) -> String {
        format!("postgresql://localhost:{}/{DATABASE_NAME}", self.port)
    }

    /// Stop the server. The data directory goes away when `self` drops.
    pub async fn stop(&mut self) -> Result<(), DbError> {
        if !self.started {
            return Ok(());
        }
        let output = Command::new(self.bin_dir.join("pg_ctl"))
            .arg("-D")
            .arg(self.data_dir())
            .arg("-m")
            .arg("fast")
            .arg("stop")
            .output()
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DbError::Command(format!("pg_ctl stop failed: {stderr}")));
        }
        self.started = false;
        Ok(())
    }

    fn data_dir(&self) -> PathBuf {
        self.tempdir.path().join("pgdata")
    }

    async fn initdb(&self) -> Result<(), DbError> {
        let output = Command::new(self.bin_dir.join("initdb"))
            .arg("-D")
            .arg(self.data_dir())
            .arg("--no-locale")
            .arg("--encoding=UTF8")
            .output()
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DbError::Command(format!("initdb failed: {stderr}")));
        }
        Ok(())
    }

    async fn pg_ctl_start(&self) -> Result<(), DbError> {
        let socket_opts = format!(
            "-p {} -k {} -h localhost",
            self.port,
            self.data_dir().display()
        );
        let output = Command::new(self.bin_dir.join("pg_ctl"))
            .arg("-D")
            .arg(self.data_dir())
            .arg("-o")
            .arg(&socket_opts)
            .arg("-l")
            .arg(self.data_dir().join("postgresql.log"))
            .arg("start")
            .output()
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DbError::Command(format!("pg_ctl start failed: {stderr}")));
        }
        Ok(())
    }

    async fn wait_for_ready(&self) -> Result<(), DbError> {
        let deadline = tokio::time::Instant::now() + PG_READY_TIMEOUT;
        loop {
            let output = Command::new(self.bin_dir.join("pg_isready"))
                .arg("-p")
                .arg(self.port.to_string())
                .arg("-h")
                .arg("localhost")
                .output()
                .await?;
            if output.status.success() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(DbError::ReadyTimeout(PG_READY_TIMEOUT));
            }
            sleep(PG_READY_POLL).await;
        }
    }

    async fn create_database(&self) -> Result<(), DbError> {
        // CREATE DATABASE cannot run through bind parameters; the name is a
        // compile-time constant.
        let maintenance_url = format!("postgresql://localhost:{}/postgres", self.port);
        let pool = PgPool::connect(&maintenance_url).await?;
        sqlx::query(&format!("CREATE DATABASE \"{DATABASE_NAME}\""))
            .execute(&pool)
            .await?;
        pool.close().await;
        Ok(())
    }
}

/// Find a free ephemeral port by binding port 0.
fn free_port() -> Result<u16, DbError> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
