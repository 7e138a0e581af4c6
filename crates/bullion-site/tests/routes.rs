#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use bullion_core::catalog::ProductSource;
use bullion_core::content::static_products;
use bullion_core::model::{LeadForm, Product, SpotPrice};
use bullion_core::stub::{ACCEPTED_MESSAGE, LeadReply, StubApi, StubFailure};
use bullion_site::routes::build_router;
use bullion_site::routes::contact::MISSING_FIELDS_MESSAGE;
use bullion_site::state::AppState;
use tower::ServiceExt;

fn app(api: &StubApi, source: ProductSource) -> Router {
    build_router(Arc::new(AppState::new(Arc::new(api.clone()), source)))
}

async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_contact(app: Router, form: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

const JANE: &str = "full_name=Jane+Doe&email=jane%40example.com&phone=&country=UK&consultation_method=email&message=Kilo+bars";

fn six_products() -> Vec<Product> {
    let mut products = static_products();
    products.extend(static_products().into_iter().take(2).map(|mut p| {
        p.id = format!("extra-{}", p.id);
        p.name = format!("Extra {}", p.name);
        p
    }));
    products
}

#[tokio::test]
async fn every_page_renders() {
    let api = StubApi::new();
    for (path, test_id) in [
        ("/", "home-page"),
        ("/products", "products-page"),
        ("/services", "services-page"),
        ("/clients", "clients-page"),
        ("/about", "about-page"),
        ("/contact", "contact-page"),
        ("/privacy-policy", "privacy-policy-page"),
        ("/terms-of-service", "terms-of-service-page"),
        ("/aml-policy", "aml-policy-page"),
    ] {
        let (status, body) = get(app(&api, ProductSource::Remote), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(&format!(r#"data-testid="{test_id}""#)), "{path}");
        assert!(body.contains("Rock International Bullion"), "{path}");
    }
}

#[tokio::test]
async fn current_page_is_highlighted_in_nav() {
    let api = StubApi::new();
    let (_, body) = get(app(&api, ProductSource::Remote), "/services").await;
    assert!(body.contains(r#"class="nav-link active" data-testid="nav-services""#));
    assert!(body.contains(r#"class="nav-link" data-testid="nav-products""#));
}

#[tokio::test]
async fn home_features_four_and_products_lists_all() {
    let api = StubApi::new();
    api.set_products(six_products()).await;

    let (_, home) = get(app(&api, ProductSource::Remote), "/").await;
    assert_eq!(home.matches(r#"data-testid="featured-product""#).count(), 4);
    assert!(!home.contains("Extra 1 Gram Gold Bar"));

    let (_, products) = get(app(&api, ProductSource::Remote), "/products").await;
    for i in 0..6 {
        assert!(products.contains(&format!(r#"data-testid="product-card-{i}""#)));
    }
    let first = products.find("Extra 1 Gram Gold Bar").unwrap();
    let second = products.find("Extra 100 Gram Gold Bar").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn spot_price_shown_when_available() {
    let api = StubApi::new();
    api.set_spot_price(SpotPrice {
        gold_price_usd: 2650.5,
        silver_price_usd: Some(31.2),
        last_updated: None,
        currency: Some("USD".to_owned()),
    })
    .await;

    let (_, body) = get(app(&api, ProductSource::Remote), "/").await;
    assert!(body.contains(r#"data-testid="spot-price""#));
    assert!(body.contains("$2,650.50"));
}

#[tokio::test]
async fn failed_fetches_render_without_error_text() {
    let api = StubApi::new();
    api.fail_products(StubFailure::Unreachable).await;
    api.fail_spot_price(StubFailure::Status(500)).await;

    let (status, body) = get(app(&api, ProductSource::Remote), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(r#"data-testid="spot-price""#));
    assert!(body.contains(r#"data-testid="catalog-empty""#));
    assert!(!body.contains("Something went wrong"));
    assert!(!body.contains("Network error"));
}

#[tokio::test]
async fn static_source_never_calls_backend() {
    let api = StubApi::new();
    let (_, body) = get(app(&api, ProductSource::Static), "/products").await;
    assert!(body.contains("400 oz Good Delivery Bar"));
    assert_eq!(api.product_calls().await, 0);
    assert_eq!(api.spot_calls().await, 0);
}

#[tokio::test]
async fn accepted_lead_shows_server_message_and_clears_form() {
    let api = StubApi::new();
    let (status, body) = post_contact(app(&api, ProductSource::Remote), JANE).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="status success""#));
    assert!(body.contains(ACCEPTED_MESSAGE));
    assert!(!body.contains("Jane Doe"));

    let leads = api.leads().await;
    assert_eq!(
        leads,
        vec![LeadForm {
            full_name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            phone: String::new(),
            country: "UK".to_owned(),
            consultation_method: "email".to_owned(),
            message: "Kilo bars".to_owned(),
        }]
    );
}

#[tokio::test]
async fn rejected_lead_keeps_draft() {
    let api = StubApi::new();
    api.push_lead_reply(LeadReply::Fail(StubFailure::Status(500)))
        .await;

    let (_, body) = post_contact(app(&api, ProductSource::Remote), JANE).await;
    assert!(body.contains(r#"class="status error""#));
    assert!(body.contains("Something went wrong. Please try again."));
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(body.contains(r#"<option value="email" selected>"#));
}

#[tokio::test]
async fn unreachable_backend_reports_network_error() {
    let api = StubApi::new();
    api.push_lead_reply(LeadReply::Fail(StubFailure::Unreachable))
        .await;

    let (_, body) = post_contact(app(&api, ProductSource::Remote), JANE).await;
    assert!(body.contains("Network error. Please try again."));
    assert!(body.contains(r#"value="jane@example.com""#));
}

#[tokio::test]
async fn missing_email_is_refused_without_request() {
    let api = StubApi::new();
    let (status, body) = post_contact(
        app(&api, ProductSource::Remote),
        "full_name=Jane+Doe&email=&country=UK",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(MISSING_FIELDS_MESSAGE));
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(api.leads().await.is_empty());
}

#[tokio::test]
async fn unknown_path_is_404_page() {
    let api = StubApi::new();
    let (status, body) = get(app(&api, ProductSource::Remote), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(r#"data-testid="not-found-page""#));
    assert!(body.contains("site-nav"));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let api = StubApi::new();
    let (status, body) = get(app(&api, ProductSource::Remote), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "bullion-site");
    assert_eq!(json["backend"], "ok");
}

#[tokio::test]
async fn healthz_stays_up_when_backend_is_down() {
    let api = StubApi::new();
    api.fail_health(StubFailure::Unreachable).await;
    let (status, body) = get(app(&api, ProductSource::Remote), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backend"], "unreachable");
}

#[tokio::test]
async fn hung_backend_does_not_block_catalog_pages() {
    let api = StubApi::new();
    api.set_products(six_products()).await;
    api.pause();
    let state = AppState::new(Arc::new(api.clone()), ProductSource::Remote)
        .with_render_deadline(Duration::from_millis(100));
    let app = build_router(Arc::new(state));

    for path in ["/", "/products"] {
        let (status, body) = tokio::time::timeout(Duration::from_secs(3), get(app.clone(), path))
            .await
            .expect("page rendered before the backend answered");
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(r#"data-testid="catalog-empty""#), "{path}");
        assert!(!body.contains(r#"data-testid="spot-price""#), "{path}");
    }
    api.resume();
}

#[tokio::test]
async fn security_headers_are_set() {
    let api = StubApi::new();
    let resp = app(&api, ProductSource::Remote)
        .oneshot(Request::get("/about").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(resp.headers()[header::X_FRAME_OPTIONS], "DENY");
}
