use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::http::{ApiError, HttpResult};

/// Builds a client that sends the bearer token and a JSON content type on
/// every request. The authorization header is marked sensitive so it is
/// redacted from logs.
pub fn authenticated_client(token: &str) -> HttpResult<Client> {
    let mut header_map = HeaderMap::new();

    let authorization_header = &*format!("Bearer {}", token);
    let mut auth_value =
        HeaderValue::from_str(authorization_header).map_err(|e| ApiError::Credential {
            message: format!("token is not a valid header value: {e}"),
        })?;
    auth_value.set_sensitive(true);
    header_map.append(AUTHORIZATION, auth_value);

    header_map.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(header_map)
        .connection_verbose(true)
        .build()
        .map_err(|e| ApiError::Network { error: e })
}
