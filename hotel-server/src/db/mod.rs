//! Database Module
//!
//! Embedded SurrealDB storage: RocksDB engine on disk for the server,
//! in-memory engine for tests.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use repository::{HotelInfoRepository, UomRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "hotel";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::prepare(db).await
    }

    /// Open a fresh in-memory database (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        let service = Self { db };
        service.define_schema().await?;
        service.seed_reference_data().await?;
        Ok(service)
    }

    /// Indexes for the fields the API searches on
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query("DEFINE INDEX IF NOT EXISTS room_name ON TABLE room FIELDS name")
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        Ok(())
    }

    /// Seed the canonical uom and the hotel info singleton
    async fn seed_reference_data(&self) -> Result<(), AppError> {
        UomRepository::new(self.db.clone())
            .seed_default()
            .await
            .map_err(AppError::from)?;
        HotelInfoRepository::new(self.db.clone())
            .get_or_create()
            .await
            .map_err(AppError::from)?;

        tracing::info!("Database ready (namespace={NAMESPACE}, database={DATABASE})");
        Ok(())
    }
}
