use actix_web::{
    error::InternalError, get, http::header, http::StatusCode, post, web, App, HttpResponse,
    HttpServer,
};
use serde_json::json;

use crate::{
    config::Config,
    error::GridError,
    models::{AnalyzeRequest, DownloadQuery, GenerateRequest, UploadRequest},
    upstream::GridClient,
};

/// Inbound photos arrive base64-encoded inside JSON, so the body cap has to
/// sit well above actix's 2 MB default.
const JSON_PAYLOAD_LIMIT: usize = 32 * 1024 * 1024;

/// JSON extractor settings: the raised body cap, and extractor failures
/// answered in the same `{"error": ...}` shape the handlers use instead of
/// actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            let body = json!({ "error": err.to_string() });
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[post("/analyze")]
pub async fn analyze(
    request: web::Json<AnalyzeRequest>,
    state: web::Data<GridClient>,
) -> HttpResponse {
    match state.analyze(request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => failure("Analysis failed", err),
    }
}

#[post("/generate")]
pub async fn generate(
    request: web::Json<GenerateRequest>,
    state: web::Data<GridClient>,
) -> HttpResponse {
    match state.generate(request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => failure("Generation failed", err),
    }
}

#[post("/upload")]
pub async fn upload(
    request: web::Json<UploadRequest>,
    state: web::Data<GridClient>,
) -> HttpResponse {
    match state.upload(request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => failure("Upload failed", err),
    }
}

#[get("/download")]
pub async fn download(
    query: web::Query<DownloadQuery>,
    state: web::Data<GridClient>,
) -> HttpResponse {
    match state.download(&query.url).await {
        Ok(image) => HttpResponse::Ok()
            .content_type(image.content_type)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", image.filename),
            ))
            .streaming(image.bytes),
        // The proxy mirrors the origin's failure status instead of blanket 500s.
        Err(GridError::UpstreamError { status, detail }) => {
            log::error!("Download failed: origin returned {} ({})", status, detail);
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(json!({ "error": "Download failed" }))
        }
        Err(err) => failure("Download failed", err),
    }
}

/// Maps an operation error to its JSON response. Input errors surface their
/// own message; everything else logs the detail and returns the generic
/// per-operation message so provider internals stay out of client bodies.
fn failure(fallback: &str, err: GridError) -> HttpResponse {
    match err {
        GridError::InvalidInput(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        GridError::UploadRejected { details } => {
            log::error!("{}: hosting provider rejected the upload", fallback);
            HttpResponse::InternalServerError().json(json!({
                "error": fallback,
                "details": details,
            }))
        }
        err => {
            log::error!("{}: {}", fallback, err);
            HttpResponse::InternalServerError().json(json!({ "error": fallback }))
        }
    }
}

pub async fn startup(config: Config, client: GridClient) -> std::io::Result<()> {
    let state = web::Data::new(client);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .service(health)
            .service(analyze)
            .service(generate)
            .service(upload)
            .service(download)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Result,
        models::FetchedBytes,
        upstream::{ByteFetcher, ImageEditor, ImageHost, VisionModel},
    };
    use actix_web::test;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Arc;

    struct StubVision;

    #[async_trait]
    impl VisionModel for StubVision {
        async fn describe_image(
            &self,
            _media_type: &str,
            _image_base64: &str,
            _instruction: &str,
        ) -> Result<String> {
            Ok("This is a young woman with brown hair.".to_string())
        }
    }

    struct StubEditor;

    #[async_trait]
    impl ImageEditor for StubEditor {
        async fn edit_image(
            &self,
            _prompt: &str,
            _image_url: &str,
            _image_size: &str,
        ) -> Result<String> {
            Ok("https://cdn.example/grid.png".to_string())
        }
    }

    struct StubHost;

    #[async_trait]
    impl ImageHost for StubHost {
        async fn upload_image(&self, _image_base64: &str) -> Result<String> {
            Ok("https://i.ibb.co/abc/photo.jpg".to_string())
        }
    }

    struct StubFetcher {
        status: Option<u16>,
    }

    #[async_trait]
    impl ByteFetcher for StubFetcher {
        async fn fetch_bytes(&self, _url: &str) -> Result<FetchedBytes> {
            if let Some(status) = self.status {
                return Err(GridError::UpstreamError {
                    status,
                    detail: "origin error".into(),
                });
            }
            Ok(FetchedBytes {
                content_type: Some("image/jpeg".to_string()),
                bytes: Box::pin(futures::stream::iter(vec![Ok::<_, GridError>(
                    Bytes::from_static(b"grid bytes"),
                )])),
            })
        }
    }

    fn stub_client(fetch_status: Option<u16>) -> GridClient {
        GridClient::new(
            Arc::new(StubVision),
            Arc::new(StubEditor),
            Arc::new(StubHost),
            Arc::new(StubFetcher {
                status: fetch_status,
            }),
        )
    }

    macro_rules! grid_app {
        ($client:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($client))
                    .app_data(json_config())
                    .service(health)
                    .service(analyze)
                    .service(generate)
                    .service(upload)
                    .service(download),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = grid_app!(stub_client(None));
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn missing_fields_map_to_bad_request() {
        let app = grid_app!(stub_client(None));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/analyze")
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Image required");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/generate")
                .set_json(json!({ "image": "https://i.ibb.co/abc/photo.jpg" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Image and prompt required");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/upload")
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Image required");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/download").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "URL required");
    }

    #[actix_web::test]
    async fn malformed_json_still_gets_a_json_error_body() {
        let app = grid_app!(stub_client(None));
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/analyze")
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{not valid json")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("deserialize"));
    }

    #[actix_web::test]
    async fn analyze_returns_prompt_and_description() {
        let app = grid_app!(stub_client(None));
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/analyze")
                .set_json(json!({
                    "image": "data:image/jpeg;base64,AAAA",
                    "mode": "angles",
                    "aspect": "16:9",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["characterDescription"], "a young woman with brown hair.");
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("young woman with brown hair"));
        assert!(prompt.contains("3x3 grid"));
    }

    #[actix_web::test]
    async fn missing_credential_surfaces_the_generic_message() {
        let app = grid_app!(GridClient::from_config(&Config::default()));
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/analyze")
                .set_json(json!({ "image": "data:image/png;base64,AAAA" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Analysis failed");
    }

    #[actix_web::test]
    async fn upload_rejections_carry_the_provider_payload() {
        struct RejectingHost;

        #[async_trait]
        impl ImageHost for RejectingHost {
            async fn upload_image(&self, _image_base64: &str) -> Result<String> {
                Err(GridError::UploadRejected {
                    details: json!({"error": {"message": "invalid key"}}),
                })
            }
        }

        let client = GridClient::new(
            Arc::new(StubVision),
            Arc::new(StubEditor),
            Arc::new(RejectingHost),
            Arc::new(StubFetcher { status: None }),
        );
        let app = grid_app!(client);
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/upload")
                .set_json(json!({ "image": "data:image/png;base64,AAAA" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Upload failed");
        assert_eq!(body["details"]["error"]["message"], "invalid key");
    }

    #[actix_web::test]
    async fn download_streams_an_attachment() {
        let app = grid_app!(stub_client(None));
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/download?url=https://cdn.example/grid.png")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/jpeg"
        );
        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.starts_with("attachment; filename=\"grid_"));
        assert!(disposition.ends_with(".png\""));
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"grid bytes");
    }

    #[actix_web::test]
    async fn download_forwards_the_origin_status() {
        let app = grid_app!(stub_client(Some(404)));
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/download?url=https://cdn.example/missing.png")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Download failed");
    }
}
