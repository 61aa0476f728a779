#[cfg(test)]
mod tests {
    use crate::tests::support::{CapturedOutput, PanickingLog, RecordingLog};
    use access_stub::config::AppConfig;
    use access_stub::service::access_log::AccessLog;
    use access_stub::{create_app, AppState};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use std::sync::Arc;
    use tower::ServiceExt;

    // Spelled out rather than imported so a change to the model constants fails here.
    const GRANTED: &str = r#"{"access":1, "error":"blah"}"#;
    const DENIED: &str = r#"{"access":0, "error":"missing token"}"#;

    fn setup(log: Arc<dyn AccessLog>) -> Router {
        create_app(AppState::with_logger(AppConfig::default(), log))
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_length = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_length, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_token_grants_access() {
        let log = Arc::new(RecordingLog::default());
        let (status, content_length, body) =
            send(setup(log.clone()), Method::GET, "/verify?token=04a1b2c3&thing=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, GRANTED);
        assert_eq!(content_length, Some(GRANTED.len().to_string()));
        assert_eq!(
            log.events(),
            vec!["request /verify?token=04a1b2c3&thing=1", "token 04a1b2c3 thing 1"]
        );
    }

    #[tokio::test]
    async fn test_missing_token_denies_access() {
        let log = Arc::new(RecordingLog::default());
        let (status, content_length, body) =
            send(setup(log.clone()), Method::GET, "/verify?thing=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, DENIED);
        assert_eq!(content_length, Some(DENIED.len().to_string()));
        assert_eq!(log.events(), vec!["request /verify?thing=1"]);
    }

    #[tokio::test]
    async fn test_empty_token_grants_access() {
        let log = Arc::new(RecordingLog::default());
        let (_, _, body) = send(setup(log.clone()), Method::GET, "/verify?token=").await;

        assert_eq!(body, GRANTED);
        assert_eq!(log.events(), vec!["request /verify?token=", "token "]);
    }

    #[tokio::test]
    async fn test_bare_token_key_grants_access() {
        let (_, _, body) = send(setup(Arc::new(RecordingLog::default())), Method::GET, "/?token").await;
        assert_eq!(body, GRANTED);
    }

    #[tokio::test]
    async fn test_no_query_denies_access() {
        let log = Arc::new(RecordingLog::default());
        let (status, _, body) = send(setup(log.clone()), Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, DENIED);
        assert_eq!(log.events(), vec!["request /"]);
    }

    #[tokio::test]
    async fn test_any_method_and_path() {
        for (method, uri) in [
            (Method::POST, "/msglog?thing=1&token=x"),
            (Method::PUT, "/a/b/c?token=x"),
            (Method::DELETE, "/?token=x"),
        ] {
            let (status, _, body) = send(setup(Arc::new(RecordingLog::default())), method, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, GRANTED);
        }

        let (status, _, body) =
            send(setup(Arc::new(RecordingLog::default())), Method::PATCH, "/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, DENIED);
    }

    #[tokio::test]
    async fn test_bad_percent_encoding_is_tolerated() {
        let log = Arc::new(RecordingLog::default());
        let (status, _, body) = send(setup(log.clone()), Method::GET, "/verify?token=%ZZ%4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, GRANTED);

        let (_, _, body) = send(setup(log.clone()), Method::GET, "/verify?tok%ZZen=1").await;
        assert_eq!(body, DENIED);
    }

    #[tokio::test]
    async fn test_each_request_logged_once() {
        let log = Arc::new(RecordingLog::default());
        let app = setup(log.clone());

        send(app.clone(), Method::GET, "/verify?token=a").await;
        send(app.clone(), Method::GET, "/verify").await;
        send(app, Method::GET, "/verify?token=b").await;

        let requests: Vec<String> = log
            .events()
            .into_iter()
            .filter(|e| e.starts_with("request "))
            .collect();
        assert_eq!(
            requests,
            vec!["request /verify?token=a", "request /verify", "request /verify?token=b"]
        );
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let (status, _, body) = send(setup(Arc::new(PanickingLog)), Method::GET, "/verify?token=a").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": 500, "error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_request_tracing_does_not_repeat_target() {
        let mut config = AppConfig::default();
        config.log.log_requests = true;
        let app = create_app(AppState::new(config));

        let output = CapturedOutput::default();
        let _guard = tracing::subscriber::set_default(output.subscriber());
        let (_, _, body) = send(app, Method::GET, "/verify?token=04a1b2c3").await;

        assert_eq!(body, GRANTED);
        let text = output.text();
        assert!(text.contains("started processing request"));
        assert_eq!(text.matches("/verify?token=04a1b2c3").count(), 1);
    }
}
