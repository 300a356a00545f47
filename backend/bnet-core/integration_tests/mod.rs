// Public API tests for bnet-core.
// Every HTTP test runs against a local wiremock server laid out like the platform.

mod helpers;
mod oauth;
mod request_client;
mod resources;
