//! API request handlers
//!
//! Every handler is request-scoped: the uploaded bytes, the extracted table
//! and the rendered workbook live only for the duration of one call.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::JoblistError;
use crate::excel::{DOWNLOAD_FILE_NAME, XLSX_CONTENT_TYPE};
use crate::extract::TableExtractor;
use crate::pipeline::{process_upload, DEFAULT_PREVIEW_ROWS};
use crate::types::{ExtractReport, JobRow, OUTPUT_COLUMNS};

use super::server::AppState;

/// Multipart field carrying the CSV export
pub const UPLOAD_FIELD: &str = "file";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

//==============================================================================
// Errors
//==============================================================================

/// Handler error mapped onto an HTTP status and an `ApiResponse` body
#[derive(Debug)]
pub struct ApiError(pub JoblistError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            e if e.is_malformed_input() => StatusCode::UNPROCESSABLE_ENTITY,
            JoblistError::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JoblistError> for ApiError {
    fn from(err: JoblistError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), "request failed: {}", self.0);
        (status, Json(ApiResponse::<()>::err(self.0.to_string()))).into_response()
    }
}

//==============================================================================
// Info Endpoints
//==============================================================================

const UPLOAD_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Job Listing Processor</title></head>
<body>
<h1>CSV File Processor for Collision Repair Data</h1>
<form action="/api/v1/process" method="post" enctype="multipart/form-data">
  <input type="file" name="file" accept=".csv">
  <button type="submit">Download Excel file</button>
</form>
</body>
</html>
"#;

/// GET / - Upload form
pub async fn root() -> Html<&'static str> {
    Html(UPLOAD_PAGE)
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub endpoints: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        endpoints: vec![
            "/api/v1/preview".to_string(),
            "/api/v1/process".to_string(),
        ],
    }))
}

//==============================================================================
// Upload Endpoints
//==============================================================================

/// Read the CSV bytes from the `file` field of a multipart upload
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, JoblistError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| JoblistError::Upload(format!("invalid multipart body: {}", e)))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| JoblistError::Upload(format!("failed to read upload: {}", e)))?;
            return Ok(data.to_vec());
        }
    }
    Err(JoblistError::Upload(format!(
        "missing multipart field `{}`",
        UPLOAD_FIELD
    )))
}

/// Preview query parameters
#[derive(Deserialize, Default)]
pub struct PreviewParams {
    pub rows: Option<usize>,
}

/// Preview response
#[derive(Serialize)]
pub struct PreviewResponse {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub report: ExtractReport,
    pub rows: Vec<JobRow>,
}

/// POST /api/v1/preview - Extract and return the first rows as JSON
pub async fn preview(
    Query(params): Query<PreviewParams>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<PreviewResponse>>, ApiError> {
    let raw = read_upload(multipart).await?;
    let extraction = TableExtractor::default().extract_with_report(&raw)?;
    let rows = params.rows.unwrap_or(DEFAULT_PREVIEW_ROWS);

    Ok(Json(ApiResponse::ok(PreviewResponse {
        columns: OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        total_rows: extraction.table.len(),
        rows: extraction.table.head(rows).to_vec(),
        report: extraction.report,
    })))
}

/// POST /api/v1/process - Extract, render and return the workbook download
pub async fn process(multipart: Multipart) -> Result<Response, ApiError> {
    let raw = read_upload(multipart).await?;
    let processed = process_upload(&raw)?;

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
        ),
    ];
    Ok((headers, processed.workbook.into_bytes()).into_response())
}
