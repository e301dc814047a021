//! 审计日志 SurrealDB 存储层
//!
//! Append-only 设计，没有任何删除/更新接口。
//! SHA256 哈希链确保防篡改。

use sha2::{Digest, Sha256};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use super::types::{
    AuditAction, AuditChainBreak, AuditChainVerification, AuditEntry, AuditQuery,
};
use crate::utils::now_millis;

const GENESIS_HASH: &str = "genesis";

/// Storage error
#[derive(Debug, Error)]
pub enum AuditStorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<surrealdb::Error> for AuditStorageError {
    fn from(err: surrealdb::Error) -> Self {
        AuditStorageError::Database(err.to_string())
    }
}

pub type AuditStorageResult<T> = Result<T, AuditStorageError>;

impl From<AuditStorageError> for crate::utils::AppError {
    fn from(err: AuditStorageError) -> Self {
        crate::utils::AppError::internal(err.to_string())
    }
}

/// SurrealDB 反序列化用（包含 SurrealDB record id）
#[derive(Debug, Clone, serde::Deserialize)]
struct AuditRecord {
    #[allow(dead_code)]
    id: surrealdb::RecordId,
    sequence: u64,
    timestamp: i64,
    action: AuditAction,
    resource_type: String,
    resource_id: String,
    #[serde(default)]
    details: serde_json::Value,
    prev_hash: String,
    curr_hash: String,
}

impl From<AuditRecord> for AuditEntry {
    fn from(r: AuditRecord) -> Self {
        AuditEntry {
            id: r.sequence,
            timestamp: r.timestamp,
            action: r.action,
            resource_type: r.resource_type,
            resource_id: r.resource_id,
            details: r.details,
            prev_hash: r.prev_hash,
            curr_hash: r.curr_hash,
        }
    }
}

/// Append-only audit storage over the embedded database
#[derive(Clone)]
pub struct AuditStorage {
    db: Surreal<Db>,
}

impl AuditStorage {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    fn compute_hash(
        prev_hash: &str,
        sequence: u64,
        timestamp: i64,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: &serde_json::Value,
    ) -> AuditStorageResult<String> {
        let mut hasher = Sha256::new();
        hasher.update(prev_hash.as_bytes());
        hasher.update(sequence.to_be_bytes());
        hasher.update(timestamp.to_be_bytes());
        hasher.update(action.to_string().as_bytes());
        hasher.update(resource_type.as_bytes());
        hasher.update(resource_id.as_bytes());
        hasher.update(serde_json::to_vec(details)?);
        Ok(hex::encode(hasher.finalize()))
    }

    /// Last entry in the chain, if any
    async fn last_entry(&self) -> AuditStorageResult<Option<AuditRecord>> {
        let records: Vec<AuditRecord> = self
            .db
            .query("SELECT * FROM audit_log ORDER BY sequence DESC LIMIT 1")
            .await?
            .take(0)?;
        Ok(records.into_iter().next())
    }

    /// Append a new entry to the chain
    pub async fn append(
        &self,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: serde_json::Value,
    ) -> AuditStorageResult<AuditEntry> {
        let last = self.last_entry().await?;
        let (sequence, prev_hash) = match last {
            Some(last) => (last.sequence + 1, last.curr_hash),
            None => (1, GENESIS_HASH.to_string()),
        };

        let timestamp = now_millis();
        let curr_hash = Self::compute_hash(
            &prev_hash,
            sequence,
            timestamp,
            action,
            resource_type,
            resource_id,
            &details,
        )?;

        let records: Vec<AuditRecord> = self
            .db
            .query(
                "CREATE audit_log CONTENT { \
                    sequence: $sequence, timestamp: $timestamp, action: $action, \
                    resource_type: $resource_type, resource_id: $resource_id, \
                    details: $details, prev_hash: $prev_hash, curr_hash: $curr_hash \
                }",
            )
            .bind(("sequence", sequence))
            .bind(("timestamp", timestamp))
            .bind(("action", action))
            .bind(("resource_type", resource_type.to_string()))
            .bind(("resource_id", resource_id.to_string()))
            .bind(("details", details))
            .bind(("prev_hash", prev_hash))
            .bind(("curr_hash", curr_hash))
            .await?
            .take(0)?;

        records
            .into_iter()
            .next()
            .map(AuditEntry::from)
            .ok_or_else(|| AuditStorageError::Database("Failed to append audit entry".into()))
    }

    /// Query entries, newest first
    pub async fn query(&self, query: &AuditQuery) -> AuditStorageResult<Vec<AuditEntry>> {
        let mut sql = String::from("SELECT * FROM audit_log WHERE sequence > 0");
        if query.from.is_some() {
            sql.push_str(" AND timestamp >= $from");
        }
        if query.to.is_some() {
            sql.push_str(" AND timestamp <= $to");
        }
        if query.action.is_some() {
            sql.push_str(" AND action = $action");
        }
        if query.resource_type.is_some() {
            sql.push_str(" AND resource_type = $resource_type");
        }
        sql.push_str(" ORDER BY sequence DESC LIMIT $limit START $offset");

        let mut request = self.db.query(sql);
        if let Some(from) = query.from {
            request = request.bind(("from", from));
        }
        if let Some(to) = query.to {
            request = request.bind(("to", to));
        }
        if let Some(action) = query.action {
            request = request.bind(("action", action));
        }
        if let Some(resource_type) = query.resource_type.clone() {
            request = request.bind(("resource_type", resource_type));
        }
        let records: Vec<AuditRecord> = request
            .bind(("limit", query.limit))
            .bind(("offset", query.offset))
            .await?
            .take(0)?;

        Ok(records.into_iter().map(AuditEntry::from).collect())
    }

    /// Total number of entries
    pub async fn count(&self) -> AuditStorageResult<u64> {
        let counts: Vec<serde_json::Value> = self
            .db
            .query("SELECT count() AS total FROM audit_log GROUP ALL")
            .await?
            .take(0)?;
        Ok(counts
            .first()
            .and_then(|v| v.get("total"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0))
    }

    /// Verify the whole hash chain
    pub async fn verify_chain(&self) -> AuditStorageResult<AuditChainVerification> {
        let records: Vec<AuditRecord> = self
            .db
            .query("SELECT * FROM audit_log ORDER BY sequence ASC")
            .await?
            .take(0)?;

        let mut breaks = Vec::new();
        let mut expected_prev = GENESIS_HASH.to_string();
        for record in &records {
            if record.prev_hash != expected_prev {
                breaks.push(AuditChainBreak {
                    entry_id: record.sequence,
                    expected_prev_hash: expected_prev.clone(),
                    actual_prev_hash: record.prev_hash.clone(),
                });
            }
            let recomputed = Self::compute_hash(
                &record.prev_hash,
                record.sequence,
                record.timestamp,
                record.action,
                &record.resource_type,
                &record.resource_id,
                &record.details,
            )?;
            if recomputed != record.curr_hash {
                breaks.push(AuditChainBreak {
                    entry_id: record.sequence,
                    expected_prev_hash: recomputed,
                    actual_prev_hash: record.curr_hash.clone(),
                });
            }
            expected_prev = record.curr_hash.clone();
        }

        Ok(AuditChainVerification {
            total_entries: records.len() as u64,
            chain_intact: breaks.is_empty(),
            breaks,
        })
    }
}
