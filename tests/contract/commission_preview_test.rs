// Contract tests for POST /commissions/preview
//
// Validates the request/response shapes of the preview endpoint:
// - Breakdown responses carry every component field plus the final total
// - Amounts are serialized as decimal strings
// - Validation failures use the standard error envelope
//
// The service is driven in-process with actix_web::test.

use actix_web::{test, web, App};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use dealtrack::modules::commissions::{
    configure_commission_routes, CommissionEngine, CommissionPolicy,
};

fn engine_data() -> web::Data<CommissionEngine> {
    web::Data::new(CommissionEngine::new(CommissionPolicy::default()))
}

fn amount(body: &Value, field: &str) -> Decimal {
    body[field]
        .as_str()
        .unwrap_or_else(|| panic!("{} missing or not a decimal string", field))
        .parse()
        .unwrap_or_else(|_| panic!("{} is not a valid decimal", field))
}

#[actix_web::test]
async fn test_preview_returns_full_breakdown() {
    let app = test::init_service(
        App::new()
            .app_data(engine_data())
            .configure(configure_commission_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/commissions/preview")
        .set_json(json!({
            "sale_price": 25000,
            "type": "New",
            "accessory_price": 1898,
            "warranty_price": 2500,
            "warranty_cost": 500,
            "maintenance_price": 900,
            "trade_in": 500,
            "bonus": 250
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;

    // Every component field is present
    for field in [
        "price_tier_bonus",
        "accessory_bonus",
        "warranty_bonus",
        "maintenance_bonus",
        "pass_through",
        "total",
    ] {
        assert!(body.get(field).is_some(), "{} is required", field);
    }
    assert!(body["shared"].is_boolean(), "shared must be a boolean");

    assert_eq!(amount(&body, "price_tier_bonus"), dec!(400));
    assert_eq!(amount(&body, "accessory_bonus"), dec!(100));
    assert_eq!(amount(&body, "warranty_bonus"), dec!(200));
    assert_eq!(amount(&body, "maintenance_bonus"), dec!(100));
    assert_eq!(amount(&body, "pass_through"), dec!(750));
    assert_eq!(amount(&body, "total"), dec!(1550));
    assert_eq!(body["shared"], json!(false));
}

#[actix_web::test]
async fn test_preview_of_empty_draft_is_zero() {
    let app = test::init_service(
        App::new()
            .app_data(engine_data())
            .configure(configure_commission_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/commissions/preview")
        .set_json(json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(amount(&body, "total"), Decimal::ZERO);
}

#[actix_web::test]
async fn test_preview_halves_shared_sales() {
    let app = test::init_service(
        App::new()
            .app_data(engine_data())
            .configure(configure_commission_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/commissions/preview")
        .set_json(json!({
            "sale_price": 15000,
            "type": "New",
            "accessory_price": 998,
            "shared": "yes"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["shared"], json!(true));
    assert_eq!(amount(&body, "total"), dec!(150));
}

#[actix_web::test]
async fn test_preview_with_unknown_type_degrades_gracefully() {
    let app = test::init_service(
        App::new()
            .app_data(engine_data())
            .configure(configure_commission_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/commissions/preview")
        .set_json(json!({
            "sale_price": 15000,
            "type": "Certified",
            "accessory_price": 5000
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(amount(&body, "accessory_bonus"), Decimal::ZERO);
    assert_eq!(amount(&body, "total"), dec!(300));
}

#[actix_web::test]
async fn test_preview_rejects_negative_sale_price() {
    let app = test::init_service(
        App::new()
            .app_data(engine_data())
            .configure(configure_commission_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/commissions/preview")
        .set_json(json!({ "sale_price": -500 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], json!("INVALID_SALE_DRAFT"));
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("sale_price"),
        "error message should name the offending field"
    );
}
