//! `HttpApi` against a throwaway axum backend on 127.0.0.1.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use bullion_core::api::{ApiConfig, BullionApi, HttpApi};
use bullion_core::error::{ApiError, FailureKind};
use bullion_core::model::{LeadForm, WeightUnit};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct Seen {
    content_type: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<serde_json::Value>>>,
}

async fn serve(router: Router) -> HttpApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    HttpApi::new(&ApiConfig {
        base_url: format!("http://{addr}/"),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

fn sample_lead() -> LeadForm {
    LeadForm {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        country: "United Kingdom".to_owned(),
        consultation_method: "video".to_owned(),
        message: "Interested in 1kg bars".to_owned(),
    }
}

#[tokio::test]
async fn lead_is_posted_as_json() {
    let seen = Seen::default();
    let router = Router::new()
        .route(
            "/api/leads",
            post(
                |State(seen): State<Seen>, headers: HeaderMap, body: Bytes| async move {
                    *seen.content_type.lock().await = headers
                        .get(header::CONTENT_TYPE)
                        .map(|v| v.to_str().unwrap().to_owned());
                    *seen.body.lock().await = Some(serde_json::from_slice(&body).unwrap());
                    axum::Json(serde_json::json!({
                        "id": "abc-123",
                        "message": "Thank you for your inquiry. Our team will contact you within 24 hours."
                    }))
                },
            ),
        )
        .with_state(seen.clone());
    let api = serve(router).await;

    let receipt = api.submit_lead(&sample_lead()).await.unwrap();
    assert_eq!(receipt.id.as_deref(), Some("abc-123"));
    assert!(receipt.message.starts_with("Thank you"));

    assert_eq!(
        seen.content_type.lock().await.as_deref(),
        Some("application/json")
    );
    let body = seen.body.lock().await.clone().unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "",
            "country": "United Kingdom",
            "consultation_method": "video",
            "message": "Interested in 1kg bars"
        })
    );
}

#[tokio::test]
async fn server_error_is_rejected() {
    let router = Router::new().route(
        "/api/leads",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "mongo down") }),
    );
    let api = serve(router).await;

    let err = api.submit_lead(&sample_lead()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::ServerRejected);
    match err {
        ApiError::Rejected { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "mongo down");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_with_truncated_body_is_still_rejected() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        // Promise 100 bytes, send 7, hang up.
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });
    let api = HttpApi::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    let err = api.submit_lead(&sample_lead()).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 500, .. }), "{err:?}");
    assert_eq!(err.kind(), FailureKind::ServerRejected);
}

#[tokio::test]
async fn success_with_html_body_is_a_transport_failure() {
    let router = Router::new().route(
        "/api/leads",
        post(|| async {
            (
                [(header::CONTENT_TYPE, "text/html")],
                "<html>proxy page</html>",
            )
                .into_response()
        }),
    );
    let api = serve(router).await;

    let err = api.submit_lead(&sample_lead()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.kind(), FailureKind::TransportFailed);
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    let err = api.submit_lead(&sample_lead()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::TransportFailed);
}

#[tokio::test]
async fn products_and_spot_price_parse() {
    let router = Router::new()
        .route(
            "/api/products",
            get(|| async {
                axum::Json(serde_json::json!({
                    "products": [
                        {
                            "id": "p1",
                            "name": "400 oz Good Delivery Bar",
                            "weight": "400",
                            "weight_unit": "troy oz",
                            "purity": "995.0+",
                            "certification": "LBMA Good Delivery",
                            "description": "Institutional bar",
                            "image_url": "https://img.example/400.jpg",
                            "category": "institutional"
                        },
                        {
                            "id": "p2",
                            "name": "1 Gram Gold Bar",
                            "weight": "1",
                            "weight_unit": "gram",
                            "purity": "999.9",
                            "certification": "LBMA Certified",
                            "description": "Entry bar",
                            "image_url": "https://img.example/1g.jpg"
                        }
                    ]
                }))
            }),
        )
        .route(
            "/api/spot-price",
            get(|| async {
                axum::Json(serde_json::json!({
                    "gold_price_usd": 2650.5,
                    "silver_price_usd": 31.25,
                    "last_updated": "2025-12-01T10:00:00",
                    "currency": "USD"
                }))
            }),
        );
    let api = serve(router).await;

    let products = api.list_products().await.unwrap();
    let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2"]);
    assert_eq!(products[0].weight.unit, WeightUnit::TroyOunce);
    assert_eq!(products[0].category.as_deref(), Some("institutional"));
    assert!(products[1].category.is_none());

    let spot = api.spot_price().await.unwrap();
    assert!((spot.gold_price_usd - 2650.5).abs() < f64::EPSILON);
    assert_eq!(spot.gold_display(), "$2,650.50");
}

#[tokio::test]
async fn health_reports_service() {
    let router = Router::new().route(
        "/api/health",
        get(|| async {
            axum::Json(serde_json::json!({
                "status": "healthy",
                "service": "Rock International Bullion API"
            }))
        }),
    );
    let api = serve(router).await;

    let health = api.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "Rock International Bullion API");
}
