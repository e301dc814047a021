//! Image Upload Handler
//!
//! Accepts PNG/JPEG/WebP room photos, normalizes them to JPEG and stores
//! them under a content-hash filename so re-uploads of the same image map to
//! the same file.

use axum::Json;
use axum::extract::{Multipart, State};
use image::DynamicImage;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::PathBuf;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality after normalization
const JPEG_QUALITY: u8 = 85;

/// Longest allowed edge after resize
const MAX_DIMENSION: u32 = 1920;

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub url: String,
    /// True when an identical image was already stored
    pub deduplicated: bool,
}

fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Downscale so the longest edge fits MAX_DIMENSION, then re-encode as JPEG
fn normalize_image(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

    let img = if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        img.resize(
            MAX_DIMENSION,
            MAX_DIMENSION,
            image::imageops::FilterType::Lanczos3,
        )
    } else {
        img
    };

    encode_jpeg(&img)
}

fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }
    Ok(buffer)
}

fn validate_image(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {} bytes ({}MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let ext_lower = ext.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&ext_lower.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext_lower,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    Ok(())
}

/// POST /api/images/upload - 上传客房图片
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let images_dir = state.images_dir();
    tokio::fs::create_dir_all(&images_dir)
        .await
        .map_err(|e| AppError::internal(format!("Failed to create images directory: {}", e)))?;

    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = field.file_name().map(|s| s.to_string());
            field_data = Some(field.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data
        .ok_or_else(|| AppError::validation("No 'file' field found. Field name must be 'file'"))?;
    let original_name = original_filename
        .ok_or_else(|| AppError::validation("No filename provided in file field"))?;

    if data.is_empty() {
        return Err(AppError::validation("Empty file provided"));
    }

    let ext = PathBuf::from(&original_name)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_string()))
        .ok_or_else(|| {
            AppError::validation(format!("Invalid file extension for: {}", original_name))
        })?;

    validate_image(&data, &ext)?;
    let normalized = normalize_image(&data)?;

    // Content hash is the filename, so identical images collapse to one file
    let hash = content_hash(&normalized);
    let filename = format!("{}.jpg", hash);
    let file_path = images_dir.join(&filename);

    let deduplicated = file_path.exists();
    if !deduplicated {
        tokio::fs::write(&file_path, &normalized)
            .await
            .map_err(|e| AppError::internal(format!("Failed to save file: {}", e)))?;
    }

    tracing::info!(
        original_name = %original_name,
        size = %normalized.len(),
        deduplicated = %deduplicated,
        "Image uploaded"
    );

    Ok(Json(UploadResponse {
        url: format!("/api/images/{}", filename),
        filename,
        original_name,
        size: normalized.len(),
        deduplicated,
    }))
}
