//! Service calls against a one-shot local HTTP responder.
//!
//! Each test binds `tiny_http` on an ephemeral port, serves exactly one canned
//! response, and hands back the request so method, path, headers, and body
//! can be checked.

use std::io::Read;

use gomun_client::{ApiClient, ApiError};
use gomun_core::Role;
use gomun_core::payloads::{NotificationPayload, ProfilePayload, RegisterRequest};
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

struct Captured {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

/// Serve one response; returns the base URL and a receiver for the request.
fn serve_once(status: u16, reply: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
    let addr = server.server_addr().to_ip().expect("ip listener");
    let (tx, rx) = oneshot::channel();

    // recv() blocks, so the responder lives on the blocking pool.
    tokio::task::spawn_blocking(move || {
        let mut request = server.recv().expect("request");
        let mut request_body = String::new();
        request
            .as_reader()
            .read_to_string(&mut request_body)
            .expect("read body");

        let captured = Captured {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: request
                .headers()
                .iter()
                .map(|h| (h.field.to_string(), h.value.to_string()))
                .collect(),
            body: request_body,
        };

        let response = tiny_http::Response::from_string(reply)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes("Content-Type", "application/json")
                    .expect("header"),
            );
        request.respond(response).expect("respond");
        let _ = tx.send(captured);
    });

    (format!("http://{addr}"), rx)
}

#[tokio::test]
async fn login_posts_credentials_and_decodes_auth_record() {
    let (base, rx) = serve_once(
        200,
        r#"{"token":"tok-1","role":"expert","name":"김한울","email":"hanul@gomun.kr","expiresIn":3600}"#,
    );
    let client = ApiClient::new(&base).expect("client");

    let auth = client
        .login(Role::Expert, "hanul@gomun.kr", "gomun123")
        .await
        .expect("login");
    assert_eq!(auth.token, "tok-1");
    assert_eq!(auth.expires_in, Some(3600));

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/api/login");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert!(req.header("authorization").is_none());
    assert_eq!(
        req.json_body(),
        serde_json::json!({"role":"expert","email":"hanul@gomun.kr","password":"gomun123"})
    );
}

#[tokio::test]
async fn login_rejection_surfaces_backend_detail() {
    let (base, _rx) = serve_once(401, r#"{"detail":"계정 정보를 확인해 주세요."}"#);
    let client = ApiClient::new(&base).expect("client");

    let err = client
        .login(Role::Company, "nobody@gomun.kr", "wrong")
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "계정 정보를 확인해 주세요.");
}

#[tokio::test]
async fn register_sends_role_specific_fields() {
    let (base, rx) = serve_once(
        200,
        r#"{"token":"tok-2","role":"company","name":"라이즈웨이브","email":"hr@risewave.kr","expiresIn":3600}"#,
    );
    let client = ApiClient::new(&base).expect("client");

    let request = RegisterRequest {
        role: Role::Company,
        name: "라이즈웨이브".into(),
        email: "hr@risewave.kr".into(),
        password: "gomun1234".into(),
        company_name: Some("라이즈웨이브".into()),
        specialty: None,
    };
    let auth = client.register(&request).await.expect("register");
    assert_eq!(auth.role, Role::Company);

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/api/register");
    let body = req.json_body();
    assert_eq!(body["companyName"], "라이즈웨이브");
    assert!(body.get("specialty").is_none());
}

#[tokio::test]
async fn fetch_experts_is_unauthenticated_get() {
    let (base, rx) = serve_once(
        200,
        r#"[{"name":"박도윤","email":"doyun@gomun.kr","title":"재무","rating":4.5}]"#,
    );
    let client = ApiClient::new(&format!("{base}/api/")).expect("client");

    let experts = client.fetch_experts().await.expect("experts");
    assert_eq!(experts.len(), 1);
    assert_eq!(experts[0].email, "doyun@gomun.kr");

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "GET");
    assert_eq!(req.url, "/api/experts");
    assert!(req.header("authorization").is_none());
}

#[tokio::test]
async fn fetch_notifications_sends_bearer_token() {
    let (base, rx) = serve_once(200, "[]");
    let client = ApiClient::new(&base).expect("client");

    let notes = client.fetch_notifications("tok-3").await.expect("list");
    assert!(notes.is_empty());

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "GET");
    assert_eq!(req.url, "/api/notifications");
    assert_eq!(req.header("authorization"), Some("Bearer tok-3"));
}

#[tokio::test]
async fn create_notification_posts_payload() {
    let (base, rx) = serve_once(
        200,
        r#"{"id":"n-1","title":"요청","message":"검토 부탁드립니다","tag":null,"actionRoute":"/requests/2","read":false,"from":"hr@risewave.kr","createdAt":"2025-11-16T09:00:00+00:00"}"#,
    );
    let client = ApiClient::new(&base).expect("client");

    let payload = NotificationPayload {
        recipient: "doyun@gomun.kr".into(),
        title: "요청".into(),
        message: "검토 부탁드립니다".into(),
        tag: None,
        action_route: Some("/requests/2".into()),
    };
    let note = client
        .create_notification("tok-4", &payload)
        .await
        .expect("create");
    assert_eq!(note.id, "n-1");
    assert!(!note.read);

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/api/notifications");
    assert_eq!(req.json_body()["actionRoute"], "/requests/2");
}

#[tokio::test]
async fn mark_notification_patches_encoded_id() {
    let (base, rx) = serve_once(
        200,
        r#"{"id":"a b","title":"t","message":"m","read":true,"from":"x@y.kr","createdAt":"2025-11-16T09:00:00+00:00"}"#,
    );
    let client = ApiClient::new(&base).expect("client");

    let note = client
        .mark_notification("tok-5", "a b", true)
        .await
        .expect("mark");
    assert!(note.read);

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.url, "/api/notifications/a%20b");
    assert_eq!(req.json_body(), serde_json::json!({"read": true}));
}

#[tokio::test]
async fn profile_update_sends_only_set_fields() {
    let (base, rx) = serve_once(
        200,
        r#"{"name":"김한울","title":"전략 컨설턴트","region":"서울","focus":"","availability":"","responseTime":"","phone":"","website":"","bio":"22년 경력"}"#,
    );
    let client = ApiClient::new(&base).expect("client");

    let payload = ProfilePayload {
        bio: Some("22년 경력".into()),
        ..ProfilePayload::default()
    };
    let profile = client
        .update_profile("tok-6", "hanul@gomun.kr", &payload)
        .await
        .expect("update");
    assert_eq!(profile.bio, "22년 경력");

    let req = rx.await.expect("captured");
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.url, "/api/profile/hanul%40gomun.kr");
    assert_eq!(req.header("authorization"), Some("Bearer tok-6"));
    assert_eq!(req.json_body(), serde_json::json!({"bio": "22년 경력"}));
}

#[tokio::test]
async fn fetch_profile_forbidden_is_api_error() {
    let (base, _rx) = serve_once(403, r#"{"detail":"본인 프로필만 조회할 수 있습니다."}"#);
    let client = ApiClient::new(&base).expect("client");

    let err = client
        .fetch_profile("tok-7", "someone@gomun.kr")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}")).expect("client");
    let err = client.fetch_experts().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
