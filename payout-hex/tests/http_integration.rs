//! Integration tests for the HTTP adapter.
//!
//! These tests verify routing, status mapping and body shapes at the
//! router level, with scripted gateway and lookup adapters behind the
//! service.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use payout_hex::{PayoutService, inbound::HttpServer};
use payout_types::{
    Credentials, DiagnosticSink, GatewayError, IpLookup, LookupError, PayoutGateway,
    PayoutLogRecord, PayoutOrder, UpstreamReply,
};

struct ScriptedGateway {
    outcome: Result<(u16, String), String>,
}

#[async_trait]
impl PayoutGateway for ScriptedGateway {
    async fn send_payout(
        &self,
        _url: &str,
        _api_key: &str,
        _order: &PayoutOrder,
    ) -> Result<UpstreamReply, GatewayError> {
        match &self.outcome {
            Ok((status, body)) => Ok(UpstreamReply {
                status: *status,
                body: body.clone(),
            }),
            Err(err) => Err(GatewayError::Transport(err.clone())),
        }
    }
}

struct NullSink;

#[async_trait]
impl DiagnosticSink for NullSink {
    async fn append(&self, _record: &PayoutLogRecord) {}
}

struct ScriptedLookup {
    outcome: Result<Option<String>, String>,
}

#[async_trait]
impl IpLookup for ScriptedLookup {
    async fn public_ip(&self) -> Result<Option<String>, LookupError> {
        match &self.outcome {
            Ok(ip) => Ok(ip.clone()),
            Err(err) => Err(LookupError::Transport(err.clone())),
        }
    }
}

fn credentials() -> Option<Credentials> {
    Some(Credentials {
        api_key: "k".into(),
        shop_id: "shop-1".into(),
    })
}

fn app_with(gateway_outcome: Result<(u16, String), String>) -> Router {
    let service = PayoutService::new(
        ScriptedGateway {
            outcome: gateway_outcome,
        },
        NullSink,
        credentials(),
    );
    HttpServer::new(
        service,
        ScriptedLookup {
            outcome: Ok(Some("203.0.113.7".into())),
        },
    )
    .router()
}

fn payout_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/payouts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const VALID_BODY: &str = r#"{
    "country": "SENEGAL",
    "network": "Free",
    "phoneNumber": "771234567",
    "amount": 10000
}"#;

#[tokio::test]
async fn test_health_check() {
    let app = app_with(Ok((200, "{}".into())));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_successful_payout_relays_upstream_body() {
    let app = app_with(Ok((200, r#"{"transactionId":"tx_77"}"#.into())));

    let response = app.oneshot(payout_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["transactionId"], "tx_77");
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let app = app_with(Ok((200, "{}".into())));

    let response = app.oneshot(payout_request("not json at all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Invalid JSON body.");
}

#[tokio::test]
async fn test_missing_fields_is_bad_request() {
    let app = app_with(Ok((200, "{}".into())));

    let response = app
        .oneshot(payout_request(r#"{"country":"SENEGAL","amount":10000}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("Missing required fields"));
}

#[tokio::test]
async fn test_below_minimum_is_bad_request() {
    let app = app_with(Ok((200, "{}".into())));
    let body = r#"{"country":"SENEGAL","network":"Free","phone":"771234567","amount":4999.99}"#;

    let response = app.oneshot(payout_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("5000"));
}

#[tokio::test]
async fn test_unconfigured_server_is_internal_error() {
    let service = PayoutService::new(
        ScriptedGateway {
            outcome: Ok((200, "{}".into())),
        },
        NullSink,
        None,
    );
    let app = HttpServer::new(service, ScriptedLookup { outcome: Ok(None) }).router();

    let response = app.oneshot(payout_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("Server not configured"));
}

#[tokio::test]
async fn test_upstream_rejection_propagates_status_and_details() {
    let app = app_with(Ok((402, r#"{"message":"insufficient float"}"#.into())));

    let response = app.oneshot(payout_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    let json = json_body(response).await;
    assert_eq!(json["error"], "insufficient float");
    assert_eq!(json["details"]["message"], "insufficient float");
}

#[tokio::test]
async fn test_upstream_transport_failure_is_bad_gateway() {
    let app = app_with(Err("connection timed out".into()));

    let response = app.oneshot(payout_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("connection timed out"));
}

#[tokio::test]
async fn test_upstream_non_json_body_is_bad_gateway_with_raw() {
    let app = app_with(Ok((200, "<html>oops</html>".into())));

    let response = app.oneshot(payout_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = json_body(response).await;
    assert_eq!(json["raw"], "<html>oops</html>");
}

#[tokio::test]
async fn test_cors_headers_on_preflight() {
    let app = app_with(Ok((200, "{}".into())));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/payouts")
                .header(header::ORIGIN, "https://app.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn test_whoami_returns_ip() {
    let app = app_with(Ok((200, "{}".into())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/whoami")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["ip"], "203.0.113.7");
}

#[tokio::test]
async fn test_whoami_transport_failure_keeps_ok_status() {
    let service = PayoutService::new(
        ScriptedGateway {
            outcome: Ok((200, "{}".into())),
        },
        NullSink,
        credentials(),
    );
    let app = HttpServer::new(
        service,
        ScriptedLookup {
            outcome: Err("name resolution failed".into()),
        },
    )
    .router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/whoami")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The original interface answers 200 with an error body on lookup
    // failure; clients key off the body shape.
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["curlErr"], "name resolution failed");
    assert!(json.get("ip").is_none());
}
