/*!
 * Status-check model and repository.
 *
 * Status checks are an append-only liveness log: a caller posts its client
 * name, the server stamps an id and UTC timestamp, and the record is never
 * mutated or deleted afterwards.
 */

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::params;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::connection::DatabaseConnection;

/// Upper bound on a single listing, matching the original read bound
const LIST_LIMIT: usize = 1000;

/// A single status-check record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    /// Generated identifier (UUID v4)
    pub id: String,
    /// Caller-supplied client name
    pub client_name: String,
    /// Server-generated creation time, UTC
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Create a new record with a generated id and the current UTC time
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Repository for status-check persistence
#[derive(Clone)]
pub struct StatusRepository {
    /// Database connection
    db: DatabaseConnection,
}

impl StatusRepository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Insert a status check
    pub async fn insert(&self, check: &StatusCheck) -> Result<()> {
        let check = check.clone();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
                    params![check.id, check.client_name, check.timestamp.to_rfc3339()],
                )?;
                Ok(())
            })
            .await?;

        debug!("Recorded status check from client");
        Ok(())
    }

    /// List persisted status checks in insertion order
    pub async fn list(&self) -> Result<Vec<StatusCheck>> {
        self.db
            .execute_async(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, client_name, timestamp FROM status_checks ORDER BY rowid LIMIT ?1",
                )?;

                let rows = stmt.query_map(params![LIST_LIMIT as i64], |row| {
                    let id: String = row.get(0)?;
                    let client_name: String = row.get(1)?;
                    let timestamp: String = row.get(2)?;
                    Ok((id, client_name, timestamp))
                })?;

                let mut checks = Vec::new();
                for row in rows {
                    let (id, client_name, timestamp) = row?;
                    let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                        .map_err(|e| {
                            anyhow::anyhow!("Invalid stored timestamp '{}': {}", timestamp, e)
                        })?
                        .with_timezone(&Utc);

                    checks.push(StatusCheck {
                        id,
                        client_name,
                        timestamp,
                    });
                }

                Ok(checks)
            })
            .await
    }

    /// Count persisted status checks
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute_async(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM status_checks", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }
}
