use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Method, Request, Response};
use serde::de::DeserializeOwned;

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from_response(status, response).await)
    }
}

/// Parses a response where 404 means "does not exist" rather than an error
pub async fn parse_optional_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    if response.status() == 404 {
        return Ok(None);
    }
    parse_response::<Option<T>>(response).await
}

/// Helper function to parse empty success responses (204 No Content, 201 Created, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from_response(status, response).await)
    }
}

async fn error_from_response(status: u64, response: Response) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials
pub fn post(url: &str) -> Request {
    Request::post(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a PATCH request with credentials and the given content type
pub fn patch(url: &str, content_type: &str) -> Request {
    Request::new(url)
        .method(Method::PATCH)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", content_type)
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}
