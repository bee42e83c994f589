//! HTTP API Tests
//!
//! End-to-end tests of the Axum adapter: routing, JSON shapes, validation
//! mapping, and the demo history endpoint.

use axum::http::StatusCode;
use axum_test::TestServer;
use domain_rating::RatingEngine;
use interface_api::{config::ApiConfig, create_router};
use serde_json::{json, Value};
use test_utils::TariffFixtures;

fn server() -> TestServer {
    let engine = RatingEngine::new(TariffFixtures::standard());
    let app = create_router(engine, ApiConfig::default());
    TestServer::new(app).expect("router builds")
}

fn reference_request() -> Value {
    json!({
        "driver_id": "DRIVER-001",
        "distance_km": 10000.0,
        "speeding_incidents": 5,
        "hard_braking_events": 10,
        "rapid_acceleration_events": 8,
        "night_driving_percentage": 10.0
    })
}

mod quote_endpoint {
    use super::*;

    #[tokio::test]
    async fn test_reference_scenario_quote() {
        let server = server();

        let response = server.post("/api/v1/quotes").json(&reference_request()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["driver_id"], "DRIVER-001");
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["base_premium"], "2500.00");
        assert_eq!(body["behavioral_cost"], "1250.00");
        assert_eq!(body["night_driving_uplift"], "62.50");
        assert_eq!(body["calculated_premium"], "3812.50");
        assert_eq!(body["safety_score"], 66);
    }

    #[tokio::test]
    async fn test_quote_echoes_risk_summary() {
        let server = server();

        let body: Value = server
            .post("/api/v1/quotes")
            .json(&reference_request())
            .await
            .json();

        let summary = &body["risk_summary"];
        assert_eq!(summary["speeding_incidents"], 5);
        assert_eq!(summary["hard_braking_events"], 10);
        assert_eq!(summary["rapid_acceleration_events"], 8);
        assert_eq!(summary["night_driving_fraction"], "0.1");
    }

    #[tokio::test]
    async fn test_negative_distance_is_unprocessable() {
        let server = server();

        let mut request = reference_request();
        request["distance_km"] = json!(-1.0);

        let response = server.post("/api/v1/quotes").json(&request).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_night_percentage_above_100_is_unprocessable() {
        let server = server();

        let mut request = reference_request();
        request["night_driving_percentage"] = json!(150.0);

        let response = server.post("/api/v1/quotes").json(&request).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_empty_driver_id_is_unprocessable() {
        let server = server();

        let mut request = reference_request();
        request["driver_id"] = json!("");

        let response = server.post("/api/v1/quotes").json(&request).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

mod score_endpoint {
    use super::*;

    #[tokio::test]
    async fn test_reference_scenario_score() {
        let server = server();

        let response = server.post("/api/v1/scores").json(&reference_request()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["driver_id"], "DRIVER-001");
        assert_eq!(body["score"], 66);
        assert_eq!(body["deductions"]["speeding"], "10.0");
        assert_eq!(body["deductions"]["night_driving"], "1");
    }

    #[tokio::test]
    async fn test_extreme_record_scores_zero() {
        let server = server();

        let mut request = reference_request();
        request["speeding_incidents"] = json!(1000);

        let body: Value = server.post("/api/v1/scores").json(&request).await.json();
        assert_eq!(body["score"], 0);
    }
}

mod history_endpoint {
    use super::*;

    #[tokio::test]
    async fn test_sample_history_series() {
        let server = server();

        let response = server.get("/api/v1/history/sample").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let entries = body.as_array().expect("history is an array");
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["score"], 48);
        assert_eq!(entries[0]["premium"], "1200");
        assert_eq!(entries[3]["score"], 38);
        assert_eq!(entries[3]["premium"], "1050");
    }
}

mod cors {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    /// Cross-origin dashboard requests get the permissive CORS header
    #[tokio::test]
    async fn test_cross_origin_request_is_allowed() {
        let server = server();

        let response = server
            .get("/api/v1/history/sample")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://dashboard.example"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn test_cross_origin_quote_is_allowed() {
        let server = server();

        let response = server
            .post("/api/v1/quotes")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://dashboard.example"),
            )
            .json(&reference_request())
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}

mod health_endpoints {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let server = server();

        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_tariff() {
        let server = server();

        let body: Value = server.get("/health/ready").await.json();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["tariff_currency"], "USD");
    }
}
