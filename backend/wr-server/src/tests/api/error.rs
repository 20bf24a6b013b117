use crate::ApiError;

use wr_core::CoreError;
use wr_llm::LlmError;
use wr_media::MediaError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_of(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    // Given
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_core_validation_error_when_converted_then_400_with_field() {
    // Given
    let error = ApiError::from(CoreError::field("name", "name cannot be empty"));

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
    assert_eq!(json["error"]["message"], "name cannot be empty");
}

#[tokio::test]
async fn given_invalid_section_when_converted_then_validation_on_section_field() {
    // Given
    let parsed = "hats".parse::<wr_core::Section>();
    let error = ApiError::from(parsed.unwrap_err());

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "section");
}

#[tokio::test]
async fn given_llm_status_error_when_converted_then_502_upstream() {
    // Given
    let error = ApiError::from(LlmError::Status {
        status: 500,
        body: "secret internal trace".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("secret internal trace")
    );
}

#[tokio::test]
async fn given_malformed_picks_when_converted_then_502_malformed_response() {
    // Given
    let error = ApiError::from(LlmError::from(CoreError::malformed("not an object")));

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "MALFORMED_RESPONSE");
}

#[tokio::test]
async fn given_blank_prompt_from_advisor_when_converted_then_400() {
    // Given
    let error = ApiError::from(LlmError::from(CoreError::field(
        "prompt",
        "Prompt cannot be empty",
    )));

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "prompt");
}

#[tokio::test]
async fn given_media_error_when_converted_then_422_with_generic_message() {
    // Given
    let error = ApiError::from(MediaError::segmentation("gpu out of memory"));

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "PROCESSING_FAILED");
    assert_eq!(
        json["error"]["message"],
        "Failed to process image. Please try again."
    );
}

#[tokio::test]
async fn given_auth_error_when_converted_then_401_with_public_message() {
    // Given
    let error = ApiError::from(wr_auth::AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn given_plan_required_when_rendered_then_403() {
    // Given
    let error = ApiError::PlanRequired {
        message: "premium only".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_of(error).await;

    // Then
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "PLAN_REQUIRED");
}
