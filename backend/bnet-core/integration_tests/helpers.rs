use bnet_core::{Credentials, PlatformConfig, RequestClient};

use std::sync::Arc;

use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const CLIENT_ID: &str = "12345";
pub const CLIENT_SECRET: &str = "s3cret";

pub fn credentials(secret: Option<&str>) -> Credentials {
    let mut builder = Credentials::builder()
        .with_api_key(API_KEY)
        .with_client_id(CLIENT_ID)
        .with_user_agent("bnet-tests/0.0 AppId/12345 (+N/A;N/A)");
    if let Some(secret) = secret {
        builder = builder.with_client_secret(secret);
    }
    builder.build().expect("test credentials are valid")
}

pub fn config_for(server: &MockServer) -> PlatformConfig {
    PlatformConfig::for_host(&server.uri()).expect("mock server uri is a valid host")
}

pub fn client_for(server: &MockServer, secret: Option<&str>) -> Arc<RequestClient> {
    let client = RequestClient::new(Arc::new(credentials(secret)), config_for(server))
        .expect("http client builds");
    Arc::new(client)
}

/// `Basic base64(12345:s3cret)`.
pub fn basic_header() -> String {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    format!("Basic {}", STANDARD.encode(format!("{CLIENT_ID}:{CLIENT_SECRET}")))
}

pub fn platform_uri(server: &MockServer, path: &str) -> String {
    format!("{}/Platform{path}", server.uri())
}
