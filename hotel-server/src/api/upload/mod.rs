//! Upload Routes
//!
//! 客房图片上传与访问。

mod handler;

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use crate::core::ServerState;

/// Serve file response
enum ImageFileResponse {
    Ok(&'static str, Bytes),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for ImageFileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            ImageFileResponse::Ok(content_type, content) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content,
            )
                .into_response(),
            ImageFileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            ImageFileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve an uploaded room image
async fn serve_image(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> ImageFileResponse {
    // Path traversal guard
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return ImageFileResponse::BadRequest("Invalid filename");
    }

    let file_path = state.images_dir().join(&filename);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime_guess::from_path(&file_path)
                .first_raw()
                .unwrap_or("application/octet-stream");
            ImageFileResponse::Ok(content_type, content.into())
        }
        Err(_) => ImageFileResponse::NotFound,
    }
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/images/upload", post(handler::upload))
        .route("/api/images/{filename}", get(serve_image))
}
