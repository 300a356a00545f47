use crate::request_client::payload::ApiErrorPayload;

use common::HttpStatusCode;

use serde_json::Value;

const JSON_CONTENT_TYPE: &str = "application/json";
const ERROR_CODE_FIELD: &str = "ErrorCode";

/// Which success sentinels apply to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    /// GET succeeds only on `1`. POST endpoints also answer `0` on success.
    pub fn success_codes(&self) -> &'static [i64] {
        match self {
            RequestMethod::Get => &[1],
            RequestMethod::Post => &[0, 1],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedResponse {
    Success(Value),
    RemoteError {
        payload: ApiErrorPayload,
        status: HttpStatusCode,
    },
    TransportError {
        status: Option<HttpStatusCode>,
        body: String,
        reason: String,
    },
}

/// Sort a completed response into success, platform error or transport error.
///
/// The declared content type decides first: the platform serves HTML error
/// pages with a 200, so anything that is not JSON is a transport failure.
/// JSON without an `ErrorCode` (the OAuth token endpoint) is passed through
/// for the caller to interpret. An `ErrorCode` that is not an integer is a
/// transport failure.
pub fn classify(
    method: RequestMethod,
    status: HttpStatusCode,
    content_type: Option<&str>,
    body: &str,
) -> ClassifiedResponse {
    let is_json = content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with(JSON_CONTENT_TYPE))
        .unwrap_or(false);

    if !is_json {
        return ClassifiedResponse::TransportError {
            status: Some(status),
            body: body.to_string(),
            reason: format!(
                "expected {JSON_CONTENT_TYPE} but got '{}' (HTTP {status})",
                content_type.unwrap_or("no content type")
            ),
        };
    }

    let document: Value = match serde_json::from_str(body) {
        Ok(document) => document,
        Err(e) => {
            return ClassifiedResponse::TransportError {
                status: Some(status),
                body: body.to_string(),
                reason: format!("malformed JSON body (HTTP {status}): {e}"),
            };
        }
    };

    let error_code = document
        .get(ERROR_CODE_FIELD)
        .filter(|field| !field.is_null())
        .map(|field| field.as_i64().ok_or_else(|| field.to_string()));

    match error_code {
        None => ClassifiedResponse::Success(document),
        Some(Ok(code)) if method.success_codes().contains(&code) => {
            ClassifiedResponse::Success(document)
        }
        Some(Ok(code)) => ClassifiedResponse::RemoteError {
            payload: ApiErrorPayload::from_document(&document, code),
            status,
        },
        Some(Err(field)) => ClassifiedResponse::TransportError {
            status: Some(status),
            body: body.to_string(),
            reason: format!("{ERROR_CODE_FIELD} is not an integer: {field} (HTTP {status})"),
        },
    }
}
