//! HTTP request handlers for the time-clock engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_work_time, distance_meters, estimate_pay, is_within_geofence};
use crate::config::{BREAK_POLICY_VERSION, ConfigLoader};
use crate::models::{AuditStep, AuditTrace, GeofenceCheck, TimesheetResult};

use super::request::{GeofenceRequest, TimesheetRequest};
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", post(timesheet_handler))
        .route("/geofence/check", post(geofence_handler))
        .with_state(state)
}

/// Extracts the request body from a JSON payload, mapping rejections to
/// 400-level error bodies.
fn extract_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // Get the body text which contains the detailed error from serde
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::validation_error(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

/// Handler for POST /timesheet endpoint.
///
/// Accepts a punch pair and returns the calculated timesheet result.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match extract_json(payload, correlation_id) {
        Ok(req) => req,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Reject break policies this engine version does not understand.
    if let Some(policy) = &request.break_policy {
        if policy.version != BREAK_POLICY_VERSION {
            warn!(
                correlation_id = %correlation_id,
                version = policy.version,
                "Unsupported break policy version"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::unsupported_policy_version(
                    policy.version,
                    BREAK_POLICY_VERSION,
                )),
            )
                .into_response();
        }
    }

    let result = perform_calculation(&request, state.config());
    info!(
        correlation_id = %correlation_id,
        employee_id = %result.employee_id,
        worked_minutes = result.breakdown.worked_minutes,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Timesheet calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /geofence/check endpoint.
///
/// Evaluates a single location reading against a site fence.
async fn geofence_handler(
    payload: Result<Json<GeofenceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing geofence check");

    let request = match extract_json(payload, correlation_id) {
        Ok(req) => req,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let check = GeofenceCheck {
        distance_meters: distance_meters(&request.point, &request.fence.center),
        within: is_within_geofence(&request.point, &request.fence),
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(check),
    )
        .into_response()
}

/// Performs the full timesheet calculation for a punch pair.
fn perform_calculation(request: &TimesheetRequest, config: &ConfigLoader) -> TimesheetResult {
    let start_time = Instant::now();
    let interval = request.interval();
    let break_policy = request
        .break_policy
        .as_ref()
        .unwrap_or_else(|| config.break_policy());
    let work_policy = config.work_policy();

    let calculation = calculate_work_time(&interval, break_policy, work_policy);
    let mut all_audit_steps = calculation.audit_steps;
    let mut step_number = all_audit_steps.len() as u32 + 1;

    // Pay estimation, when an hourly wage was supplied.
    let pay = request.hourly_wage.map(|wage| {
        let pay_result = estimate_pay(
            &calculation.breakdown,
            wage,
            &work_policy.premiums,
            step_number,
        );
        all_audit_steps.push(pay_result.audit_step);
        step_number += 1;
        pay_result.estimate
    });

    // Geofence check, when both a reading and a site fence were supplied.
    let geofence = match (&request.location, &request.site) {
        (Some(point), Some(fence)) => {
            let check = GeofenceCheck {
                distance_meters: distance_meters(point, &fence.center),
                within: is_within_geofence(point, fence),
            };
            all_audit_steps.push(AuditStep {
                step_number,
                rule_id: "geofence_check".to_string(),
                rule_name: "Geofence Check".to_string(),
                input: serde_json::json!({
                    "latitude": point.latitude,
                    "longitude": point.longitude,
                    "radius_meters": fence.radius_meters,
                }),
                output: serde_json::json!({
                    "distance_meters": check.distance_meters,
                    "within": check.within,
                }),
                reasoning: format!(
                    "reading is {:.1}m from the site center against a {:.1}m radius",
                    check.distance_meters, fence.radius_meters
                ),
            });
            Some(check)
        }
        _ => None,
    };

    let duration_us = start_time.elapsed().as_micros() as u64;

    TimesheetResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id.clone(),
        breakdown: calculation.breakdown,
        pay,
        geofence,
        audit_trace: AuditTrace {
            steps: all_audit_steps,
            warnings: calculation.warnings,
            duration_us,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn valid_timesheet_body() -> String {
        r#"{
            "employee_id": "emp_001",
            "clock_in": "2024-06-03T08:00:00",
            "clock_out": "2024-06-03T17:00:00"
        }"#
        .to_string()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/timesheet", valid_timesheet_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.employee_id, "emp_001");
        // The default config carries a 12:00-13:00 lunch slot.
        assert_eq!(result.breakdown.break_minutes, 60);
        assert_eq!(result.breakdown.worked_minutes, 480);
        assert!(result.pay.is_none());
        assert!(result.geofence.is_none());
        assert!(!result.audit_trace.steps.is_empty());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/timesheet", "{invalid json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_employee_id_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "clock_in": "2024-06-03T08:00:00",
            "clock_out": "2024-06-03T17:00:00"
        }"#;

        let response = router
            .oneshot(post_json("/timesheet", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("employee_id"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_unsupported_policy_version_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "employee_id": "emp_001",
            "clock_in": "2024-06-03T08:00:00",
            "clock_out": "2024-06-03T17:00:00",
            "break_policy": {"version": 99, "slots": []}
        }"#;

        let response = router
            .oneshot(post_json("/timesheet", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "UNSUPPORTED_POLICY_VERSION");
    }

    #[tokio::test]
    async fn test_timesheet_with_wage_includes_pay_estimate() {
        let router = create_router(create_test_state());

        let body = r#"{
            "employee_id": "emp_001",
            "clock_in": "2024-06-03T08:00:00",
            "clock_out": "2024-06-03T20:00:00",
            "hourly_wage": "1500"
        }"#;

        let response = router
            .oneshot(post_json("/timesheet", body.to_string()))
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResult = serde_json::from_slice(&body).unwrap();

        // 11h worked with a lunch break: 8h base + 3h overtime at 1.25x.
        assert_eq!(result.breakdown.worked_minutes, 660);
        assert_eq!(result.breakdown.overtime_minutes, 180);
        let pay = result.pay.unwrap();
        assert_eq!(pay.base_pay, Decimal::from(12000));
        assert_eq!(pay.overtime_pay, Decimal::from(5625));
        assert_eq!(pay.gross_pay, Decimal::from(17625));
    }

    #[tokio::test]
    async fn test_timesheet_with_location_includes_geofence_check() {
        let router = create_router(create_test_state());

        let body = r#"{
            "employee_id": "emp_001",
            "clock_in": "2024-06-03T08:00:00",
            "clock_out": "2024-06-03T17:00:00",
            "location": {"latitude": 35.681236, "longitude": 139.767125},
            "site": {
                "center": {"latitude": 35.681236, "longitude": 139.767125},
                "radius_meters": 100.0
            }
        }"#;

        let response = router
            .oneshot(post_json("/timesheet", body.to_string()))
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResult = serde_json::from_slice(&body).unwrap();

        let check = result.geofence.unwrap();
        assert!(check.within);
        assert!(check.distance_meters < 1.0);
        assert!(result
            .audit_trace
            .steps
            .iter()
            .any(|s| s.rule_id == "geofence_check"));
    }

    #[tokio::test]
    async fn test_reversed_punches_return_200_with_warning() {
        let router = create_router(create_test_state());

        let body = r#"{
            "employee_id": "emp_001",
            "clock_in": "2024-06-03T17:00:00",
            "clock_out": "2024-06-03T08:00:00"
        }"#;

        let response = router
            .oneshot(post_json("/timesheet", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.breakdown.worked_minutes, 0);
        assert!(result
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "CLOCK_ANOMALY"));
    }

    #[tokio::test]
    async fn test_geofence_endpoint_inside_fence() {
        let router = create_router(create_test_state());

        let body = r#"{
            "point": {"latitude": 35.681685, "longitude": 139.767125},
            "fence": {
                "center": {"latitude": 35.681236, "longitude": 139.767125},
                "radius_meters": 100.0
            }
        }"#;

        let response = router
            .oneshot(post_json("/geofence/check", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let check: GeofenceCheck = serde_json::from_slice(&body).unwrap();

        // Roughly 50m north of the center.
        assert!(check.within);
        assert!(check.distance_meters > 40.0 && check.distance_meters < 60.0);
    }

    #[tokio::test]
    async fn test_geofence_endpoint_outside_fence() {
        let router = create_router(create_test_state());

        let body = r#"{
            "point": {"latitude": 35.681685, "longitude": 139.767125},
            "fence": {
                "center": {"latitude": 35.681236, "longitude": 139.767125},
                "radius_meters": 10.0
            }
        }"#;

        let response = router
            .oneshot(post_json("/geofence/check", body.to_string()))
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let check: GeofenceCheck = serde_json::from_slice(&body).unwrap();

        assert!(!check.within);
    }
}
