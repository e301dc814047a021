//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables using Graph DB patterns.

pub mod amenity;
pub mod floor;
pub mod hotel_info;
pub mod room;
pub mod tax;
pub mod uom;

pub use amenity::AmenityRepository;
pub use floor::FloorRepository;
pub use hotel_info::HotelInfoRepository;
pub use room::RoomRepository;
pub use tax::TaxRepository;
pub use uom::UomRepository;

use crate::utils::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Occupant capacity invariant violated (num_person <= 0)
    #[error("Room capacity must be more than 0")]
    InvalidCapacity,
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::InvalidCapacity => AppError::invalid_capacity(),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
