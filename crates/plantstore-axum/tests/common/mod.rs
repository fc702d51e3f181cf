//! Shared helpers for plantstore-axum integration tests.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use plantstore_axum::bootstrap::{CorsConfig, DEFAULT_MAX_UPLOAD_BYTES, ServerConfig, bootstrap};
use plantstore_axum::routes::create_router;

const BOUNDARY: &str = "plantstore-test-boundary";

/// A router over a fresh database and uploads directory.
pub struct TestApp {
    pub router: Router,
    pub uploads_dir: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_upload_limit(DEFAULT_MAX_UPLOAD_BYTES).await
    }

    pub async fn with_upload_limit(max_upload_bytes: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            port: 0,
            database_path: dir.path().join("data/plantstore.db"),
            uploads_dir: dir.path().join("uploads"),
            max_upload_bytes,
            cors: CorsConfig::AllowAll,
        };
        let ctx = bootstrap(&config).await.unwrap();

        Self {
            router: create_router(ctx, &config.cors),
            uploads_dir: config.uploads_dir,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn submit(&self, method: Method, uri: &str, form: &Form) -> Response<Body> {
        self.send(form.request(method, uri)).await
    }

    /// Names of the files currently in the uploads directory.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.uploads_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Create a plant and return its JSON.
    pub async fn create(&self, form: &Form) -> serde_json::Value {
        let response = self.submit(Method::POST, "/plants", form).await;
        assert_eq!(response.status(), 200);
        json_body(response).await
    }
}

/// Multipart form builder.
#[derive(Default)]
pub struct Form {
    text: Vec<(String, String)>,
    image: Option<(String, Vec<u8>)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.text.push((name.to_string(), value.to_string()));
        self
    }

    pub fn image(mut self, file_name: &str, bytes: &[u8]) -> Self {
        self.image = Some((file_name.to_string(), bytes.to_vec()));
        self
    }

    fn body(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in &self.text {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = &self.image {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn request(&self, method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.body()))
            .unwrap()
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
