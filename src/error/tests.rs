//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let error = FootballError::from(json_error);

    match error {
        FootballError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error = FootballError::from(io_error);

    match error {
        FootballError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_invalid_header_error_conversion() {
    let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
    let error = FootballError::from(header_error);

    match error {
        FootballError::InvalidHeader(_) => (),
        _ => panic!("Expected InvalidHeader error variant"),
    }
}

#[test]
fn test_status_code_message_carries_code() {
    let error = FootballError::InvalidStatusCode { status: 404 };
    assert_eq!(error.to_string(), "404 is an invalid status code");
}

#[test]
fn test_schema_validation_message_counts_errors() {
    let error = FootballError::SchemaValidationFailed {
        errors: vec!["/api: missing".to_string(), "/api/status: wrong type".to_string()],
    };
    assert!(error.to_string().contains("2 error(s)"));
}

#[test]
fn test_no_data_in_range_message_names_earliest_date() {
    let earliest = NaiveDate::from_ymd_opt(2015, 8, 8).unwrap();
    let error = FootballError::NoDataInRange { earliest };
    assert!(error.to_string().contains("2015-08-08"));
}
