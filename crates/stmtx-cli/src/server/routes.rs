//! Request handlers.

use std::io::Write;

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};

use stmtx_core::document::{extension_of, secure_filename};
use stmtx_core::statement::sample_report;
use stmtx_core::{DocumentKind, Platform, StatementReport};

use super::error::ApiError;
use super::AppState;

/// The `file` part of an upload.
struct Upload {
    filename: Option<String>,
    data: Bytes,
}

/// `POST /api/process-file`: extract figures from an uploaded statement.
pub async fn process_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StatementReport>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        debug!("Request is not a multipart form: {}", e);
        ApiError::NoFileProvided
    })?;

    let mut upload = None;
    let mut platform = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let data = field.bytes().await?;
                upload = Some(Upload { filename, data });
            }
            Some("platform") => platform = Some(field.text().await?),
            _ => {}
        }
    }

    let Upload { filename, data } = upload.ok_or(ApiError::NoFileProvided)?;
    let filename = filename.ok_or(ApiError::NoFileProvided)?;
    if filename.is_empty() {
        return Err(ApiError::EmptyFilename);
    }

    let safe_name = secure_filename(&filename);
    let kind = DocumentKind::from_filename(&safe_name)
        .ok_or_else(|| ApiError::UnsupportedFormat(filename.clone()))?;
    let suffix = extension_of(&safe_name).unwrap_or_default();

    let platform = platform
        .map(Platform::new)
        .unwrap_or_else(|| state.default_platform.clone());

    info!(
        "Processing upload '{}' ({} bytes) for '{}'",
        safe_name,
        data.len(),
        platform
    );

    let extractor = state.extractor.clone();
    let upload_dir = state.upload_dir.clone();

    let report = tokio::task::spawn_blocking(move || -> Result<StatementReport, ApiError> {
        // Removed when dropped, whichever way this closure exits
        let mut file = tempfile::Builder::new()
            .prefix("stmtx-")
            .suffix(&suffix)
            .tempfile_in(&upload_dir)?;
        file.write_all(&data)?;
        file.flush()?;

        Ok(extractor.process_file(file.path(), kind, &platform)?)
    })
    .await??;

    Ok(Json(report))
}

#[derive(Debug, Default, Deserialize)]
struct TestDataRequest {
    #[serde(default)]
    platform: Option<String>,
}

/// `POST /api/test-data`: canned figures for a platform.
pub async fn test_data(State(state): State<AppState>, body: Bytes) -> Json<StatementReport> {
    let request: TestDataRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!("Ignoring unreadable test-data body: {}", e);
        TestDataRequest::default()
    });

    let platform = request
        .platform
        .map(Platform::new)
        .unwrap_or_else(|| state.default_platform.clone());

    Json(sample_report(state.extractor.terms(), &platform))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use pretty_assertions::assert_eq;
    use rust_xlsxwriter::Workbook;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use stmtx_core::models::config::ServerConfig;
    use stmtx_core::StatementExtractor;

    use crate::server::{router, AppState};
    use super::*;

    const BOUNDARY: &str = "stmtx-test-boundary";

    fn app(upload_dir: &Path) -> Router {
        let state = AppState {
            extractor: StatementExtractor::default(),
            default_platform: Platform::default(),
            upload_dir: upload_dir.to_path_buf(),
        };
        router(state, &ServerConfig::default())
    }

    /// Multipart body from `(name, filename, data)` parts.
    fn multipart_request(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, filename, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match filename {
                Some(filename) => format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                ),
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/process-file")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![50.into(), (750 - (i as i64) * 20).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let kids: Vec<Object> = vec![page_id.into()];
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => 1,
                "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn upload_dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_data_for_usa() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/api/test-data")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"platform":"usa"}"#))
            .unwrap();

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "platform": "usa",
                "currency": "USD",
                "financialData": {"Income": 25680.92, "Expenses": -5840.34},
                "taxData": {"Income": 4325.78, "Expenses": 0},
            })
        );
    }

    #[tokio::test]
    async fn test_data_without_body_uses_uk() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/api/test-data")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["platform"], "uk");
        assert_eq!(body["currency"], "GBP");
        assert_eq!(body["financialData"]["Income"], 18877.68);
    }

    #[tokio::test]
    async fn test_docx_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let request = multipart_request(&[
            ("file", Some("notes.docx"), b"not a statement"),
            ("platform", None, b"de"),
        ]);

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Unsupported file format"));
        assert!(upload_dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_missing_file_part() {
        let dir = tempfile::tempdir().unwrap();
        let request = multipart_request(&[("platform", None, b"uk")]);

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file provided");
    }

    #[tokio::test]
    async fn test_empty_filename() {
        let dir = tempfile::tempdir().unwrap();
        let request = multipart_request(&[("file", Some(""), b"")]);

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file selected");
    }

    #[tokio::test]
    async fn test_pdf_upload() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = single_page_pdf(&["Sales summary", "Income 1,234.56", "Fees 200.00", "VAT 41.15"]);
        let request = multipart_request(&[
            ("file", Some("Statement March.PDF"), pdf.as_slice()),
            ("platform", None, b"ebay"),
        ]);

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "platform": "ebay",
                "currency": "GBP",
                "financialData": {"Income": 1234.56, "Expenses": -200.0},
                "taxData": {"Income": 41.15, "Expenses": 0},
            })
        );
        assert!(upload_dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_unreadable_pdf_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = multipart_request(&[("file", Some("broken.pdf"), b"%PDF-garbage")]);

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Error processing file"}));
        assert!(upload_dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_spreadsheet_upload_returns_zeros() {
        let dir = tempfile::tempdir().unwrap();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Income").unwrap();
        sheet.write_string(1, 0, "100").unwrap();
        let xlsx = workbook.save_to_buffer().unwrap();

        let request = multipart_request(&[
            ("file", Some("statement.xlsx"), xlsx.as_slice()),
            ("platform", None, b"fr"),
        ]);

        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "platform": "fr",
                "currency": "EUR",
                "financialData": {"Income": 0, "Expenses": 0},
                "taxData": {"Income": 0, "Expenses": 0},
            })
        );
        assert!(upload_dir_is_empty(dir.path()));
    }
}
