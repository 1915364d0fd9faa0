//! Lenient JSON request bodies.
//!
//! Only `application/json` requests are parsed. Any other content type, or
//! an empty body, yields the default value so every field reads as absent.
//! JSON bodies must be an object or an array; an array carries no fields.

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::AppError;

/// Request body extractor for post payloads.
#[derive(Debug)]
pub struct PostBody<T>(pub T);

impl<T> PostBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for PostBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = req.content_type().eq_ignore_ascii_case("application/json");
        let bytes = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            let body = parse_body(is_json, &bytes).inspect_err(|err| {
                tracing::debug!(error = %err, "Rejected request body");
            })?;
            Ok(PostBody(body))
        })
    }
}

fn parse_body<T>(is_json: bool, bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))?;

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}"))),
        Value::Array(_) => Ok(T::default()),
        _ => Err(AppError::BadRequest(
            "Invalid JSON body: expected an object or an array".to_string(),
        )),
    }
}
