//! The single request path every resource module goes through.
//!
//! [`RequestClient`] adds the application headers, picks Bearer or Basic
//! authorization, sends the request and hands the response to [`classify`].

pub mod auth;
pub mod classify;
pub mod payload;

pub use auth::Authorization;
pub use classify::{ClassifiedResponse, RequestMethod, classify};
pub use payload::ApiErrorPayload;

use crate::config::PlatformConfig;
use crate::endpoint::ParamMap;
use crate::error::RequestError;

use common::HttpStatusCode;
use models::{Credentials, OAuthToken};

use std::sync::Arc;

use log::{debug, trace, warn};
use reqwest::Client;
use reqwest::header::{
    AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use serde_json::Value;
use url::{Url, form_urlencoded};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");
const JSON_MIME: &str = "application/json";
const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// Body of a POST request.
#[derive(Debug, Clone, PartialEq)]
pub enum PostBody {
    Json(Value),
    Form(ParamMap),
}

impl PostBody {
    fn encode(&self) -> Result<(Vec<u8>, &'static str), RequestError> {
        match self {
            PostBody::Json(value) => Ok((serde_json::to_vec(value)?, JSON_MIME)),
            PostBody::Form(params) => {
                let mut serializer = form_urlencoded::Serializer::new(String::new());
                for (name, value) in params.present() {
                    serializer.append_pair(name, value);
                }
                Ok((serializer.finish().into_bytes(), FORM_MIME))
            }
        }
    }
}

/// Executes platform requests with the application's credentials.
///
/// Cheap to clone. No timeout is configured here: inject a prepared
/// [`reqwest::Client`] with [`RequestClient::with_http_client`] to bound
/// request time.
#[derive(Clone)]
pub struct RequestClient {
    http: Client,
    credentials: Arc<Credentials>,
    config: Arc<PlatformConfig>,
}

impl RequestClient {
    pub fn new(credentials: Arc<Credentials>, config: PlatformConfig) -> Result<Self, RequestError> {
        let http = Client::builder().build()?;
        Ok(Self::with_http_client(http, credentials, config))
    }

    pub fn with_http_client(
        http: Client,
        credentials: Arc<Credentials>,
        config: PlatformConfig,
    ) -> Self {
        Self {
            http,
            credentials,
            config: Arc::new(config),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Root every endpoint template is rendered against.
    pub fn root_path(&self) -> &str {
        self.config.root_path()
    }

    pub async fn get(&self, uri: &str, token: Option<&OAuthToken>) -> Result<Value, RequestError> {
        let classified = self.execute(RequestMethod::Get, uri, None, token).await?;
        into_result(classified)
    }

    pub async fn post(
        &self,
        uri: &str,
        body: PostBody,
        token: Option<&OAuthToken>,
    ) -> Result<Value, RequestError> {
        let classified = self
            .execute(RequestMethod::Post, uri, Some(body), token)
            .await?;
        into_result(classified)
    }

    /// Send a request and return its classification without converting it.
    ///
    /// Only network failures and local header/body problems are errors here.
    pub async fn execute(
        &self,
        method: RequestMethod,
        uri: &str,
        body: Option<PostBody>,
        token: Option<&OAuthToken>,
    ) -> Result<ClassifiedResponse, RequestError> {
        let url = Url::parse(uri)?;
        let authorization = Authorization::select(&self.credentials, token);
        let mut headers = self.base_headers(&authorization)?;

        debug!("{} {} ({} auth)", method.as_str(), url.path(), authorization.mode());

        let request = match (method, body) {
            (RequestMethod::Get, _) => self.http.get(url),
            (RequestMethod::Post, body) => {
                let (bytes, mime) = match body {
                    Some(body) => body.encode()?,
                    None => (Vec::new(), JSON_MIME),
                };
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(mime));
                headers.insert(CONTENT_LENGTH, HeaderValue::from(bytes.len()));
                self.http.post(url).body(bytes)
            }
        };

        let response = request.headers(headers).send().await?;

        let status = HttpStatusCode(response.status().as_u16());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        let classified = classify(method, status, content_type.as_deref(), &body);
        match &classified {
            ClassifiedResponse::Success(_) => trace!("{} {uri} -> success", method.as_str()),
            ClassifiedResponse::RemoteError { payload, .. } => warn!(
                "{} {} -> platform error {} ({})",
                method.as_str(),
                uri,
                payload.error_code,
                payload.error_status
            ),
            ClassifiedResponse::TransportError { reason, .. } => {
                warn!("{} {uri} -> transport error: {reason}", method.as_str())
            }
        }

        Ok(classified)
    }

    fn base_headers(&self, authorization: &Authorization) -> Result<HeaderMap, RequestError> {
        let mut headers = HeaderMap::new();

        let mut api_key = HeaderValue::from_str(self.credentials.api_key().expose())
            .map_err(|e| RequestError::invalid_header(format!("X-API-KEY: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        let user_agent = HeaderValue::from_str(self.credentials.user_agent())
            .map_err(|e| RequestError::invalid_header(format!("User-Agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);

        let mut auth = HeaderValue::from_str(&authorization.header_value())
            .map_err(|e| RequestError::invalid_header(format!("Authorization: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }
}

fn into_result(classified: ClassifiedResponse) -> Result<Value, RequestError> {
    match classified {
        ClassifiedResponse::Success(document) => Ok(document),
        ClassifiedResponse::RemoteError { payload, status } => {
            Err(RequestError::remote(payload, status))
        }
        ClassifiedResponse::TransportError {
            status,
            body,
            reason,
        } => Err(RequestError::transport(reason, status, Some(body))),
    }
}
