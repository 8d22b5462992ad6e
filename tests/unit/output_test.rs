//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use chrono::{TimeDelta, Utc};
use serde_json::json;
use tomctl::core::models::{Observation, Session, Target};
use tomctl::output::{
    AngleResult, ObservationInfo, ObservationListResult, OperationResult, OutputMode,
    SessionInfo, TargetInfo, TargetListResult,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn angle_result_serialization() {
    let result = AngleResult {
        input: "1:00:00".to_string(),
        degrees: 15.0,
        sexagesimal: "01:00:00.00".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"degrees\":15.0"));
    assert!(json.contains("01:00:00.00"));
}

#[test]
fn target_info_formats_coordinates() {
    let mut target = Target::new("M31", 10.684_708, 41.268_75);
    target.id = Some(7);

    let info = TargetInfo::from(&target);
    assert_eq!(info.ra_hms, "00:42:44.33");
    assert_eq!(info.dec_dms, "+41:16:07.50");
    assert!(info.summary_line().contains("M31"));

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["id"], 7);
    assert!(json.get("redshift").is_none());
}

#[test]
fn target_list_serialization() {
    let result = TargetListResult {
        targets: vec![TargetInfo::from(&Target::new("Vega", 279.234_7, 38.783_7))],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"targets\""));
    assert!(json.contains("Vega"));
}

#[test]
fn observation_info_uses_names_not_codes() {
    let observation: Observation = serde_json::from_value(json!({
        "id": 3, "name": "SN follow-up", "priority": 1, "status": 6
    }))
    .unwrap();

    let result = ObservationListResult {
        observations: vec![ObservationInfo::from(&observation)],
    };
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["observations"][0]["status"], "denied");
    assert_eq!(json["observations"][0]["priority"], "HIGH");
    assert_eq!(json["observations"][0]["closed"], true);
}

#[test]
fn observation_info_open_status_and_window() {
    let observation: Observation = serde_json::from_value(json!({
        "id": 5,
        "name": "Vega monitoring",
        "observatory": 2,
        "priority": 2,
        "status": 2,
        "targets": [4, 9],
        "start_date": "2025-05-01 20:00:00",
        "end_date": "2025-05-02 04:00:00"
    }))
    .unwrap();

    let info = ObservationInfo::from(&observation);
    assert!(!info.closed);
    assert_eq!(info.targets, vec![4, 9]);
    assert_eq!(info.start_date.as_deref(), Some("2025-05-01 20:00 UTC"));
    assert!(info.summary_line().contains("Vega monitoring"));
}

#[test]
fn target_info_repads_backend_coordinates() {
    let mut target = Target::new("Vega", 279.234_7, 38.783_7);
    target.coordinates = Some("18:36:56.3 38:47:1".to_string());

    let info = TargetInfo::from(&target);
    assert_eq!(info.coordinates.as_deref(), Some("18:36:56.30 38:47:01.00"));
}

#[test]
fn target_info_keeps_unexpected_coordinates_verbatim() {
    let mut target = Target::new("Vega", 279.234_7, 38.783_7);
    target.coordinates = Some("18h36m56s".to_string());

    let info = TargetInfo::from(&target);
    assert_eq!(info.coordinates.as_deref(), Some("18h36m56s"));
}

#[test]
fn session_info_signed_out() {
    let info = SessionInfo::from_session(None);
    assert!(!info.signed_in);
    assert!(!info.expired);
    assert_eq!(serde_json::to_value(&info).unwrap(), json!({"signed_in": false, "expired": false}));
}

#[test]
fn session_info_reports_expiry() {
    let session = Session::new("a")
        .with_username("ada")
        .with_expiry(Utc::now() - TimeDelta::minutes(1));

    let info = SessionInfo::from_session(Some(&session));
    assert!(info.signed_in);
    assert!(info.expired);
    assert_eq!(info.username.as_deref(), Some("ada"));
    assert!(info.expires_at.is_some());
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Signed out".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Signed out"));
}
