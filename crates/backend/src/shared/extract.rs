use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::shared::error::ApiError;

/// `Json<T>` whose rejections render as the usual 400 envelope
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use contracts::domain::a005_product::aggregate::ProductCreateDto;

    fn request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn non_numeric_price_is_bad_request() {
        let result = ApiJson::<ProductCreateDto>::from_request(
            request(r#"{"name":"Kopi","price":"mahal"}"#),
            &(),
        )
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn string_price_is_coerced() {
        let ApiJson(dto) = ApiJson::<ProductCreateDto>::from_request(
            request(r#"{"name":"Kopi","price":"12500"}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(dto.price, Some(12500.0));
    }
}
