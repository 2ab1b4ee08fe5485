//! API error responses.
//!
//! Every error leaves the server as JSON: a single `{"error": ...}`
//! message, or `{"errors": [...]}` when field validation fails.

use salvo::{
    http::StatusCode,
    oapi::{self, EndpointOutRegister, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Single-message error body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// What went wrong
    pub error: String,
}

/// Field-validation error body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorsBody {
    /// One message per failed field constraint
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
enum ApiBody {
    Message(ErrorBody),
    Fields(ErrorsBody),
}

/// An error response with a fixed status code and JSON body.
#[derive(Debug, Clone)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ApiBody,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiBody::Message(ErrorBody {
                error: message.into(),
            }),
        }
    }

    pub(crate) fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiBody::Fields(ErrorsBody { errors }),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiBody::Message(ErrorBody {
                error: message.into(),
            }),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ApiBody::Message(ErrorBody {
                error: message.into(),
            }),
        }
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status);

        match self.body {
            ApiBody::Message(body) => res.render(Json(body)),
            ApiBody::Fields(body) => res.render(Json(body)),
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        // A 400 carries either the validation array or a single message.
        let bad_request: oapi::RefOr<oapi::schema::Schema> = oapi::schema::OneOf::new()
            .item(ErrorsBody::to_schema(components))
            .item(ErrorBody::to_schema(components))
            .into();

        operation.responses.insert(
            "400",
            oapi::Response::new("Malformed query parameters or invalid fields")
                .add_content("application/json", bad_request),
        );
        operation.responses.insert(
            "404",
            oapi::Response::new("Not found")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
        operation.responses.insert(
            "500",
            oapi::Response::new("Internal server error")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn missing() -> Result<(), ApiError> {
        Err(ApiError::not_found("Product not found"))
    }

    #[handler]
    async fn invalid() -> Result<(), ApiError> {
        Err(ApiError::validation(vec![
            "Product name is required".to_string(),
        ]))
    }

    #[tokio::test]
    async fn not_found_renders_single_error_body() -> TestResult {
        let service = Service::new(Router::with_path("missing").get(missing));

        let mut res = TestClient::get("http://example.com/missing")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorBody = res.take_json().await?;
        assert_eq!(body.error, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn validation_renders_errors_array() -> TestResult {
        let service = Service::new(Router::with_path("invalid").get(invalid));

        let mut res = TestClient::get("http://example.com/invalid")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorsBody = res.take_json().await?;
        assert_eq!(body.errors, vec!["Product name is required".to_string()]);

        Ok(())
    }

    #[test]
    fn bad_request_documents_both_error_bodies() -> TestResult {
        let mut components = oapi::Components::new();
        let mut operation = oapi::Operation::new();

        ApiError::register(&mut components, &mut operation);

        let doc = serde_json::to_value(&operation)?;

        let shapes = doc
            .get("responses")
            .and_then(|v| v.get("400"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.get("application/json"))
            .and_then(|v| v.get("schema"))
            .and_then(|v| v.get("oneOf"))
            .and_then(serde_json::Value::as_array)
            .map(Vec::len);

        assert_eq!(shapes, Some(2), "the 400 schema lists both body shapes");

        Ok(())
    }
}
