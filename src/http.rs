use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub type HttpResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Credential { message: String },
    JsonParsing { error: reqwest::Error },
    Network { error: reqwest::Error },
    Http { code: u16, message: String },
    Unknown { message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Credential { message } => write!(f, "credential error: {}", message),
            ApiError::JsonParsing { error } => write!(f, "could not decode response: {}", error),
            ApiError::Network { error } => write!(f, "network error: {}", error),
            ApiError::Http { code, message } => write!(f, "http {}: {}", code, message),
            ApiError::Unknown { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait HttpClient {
    type Request;
    type Client;

    async fn make_json_request<T: DeserializeOwned, O: FnOnce(&Self::Client) -> Self::Request>(
        &self,
        to_request: O,
    ) -> HttpResult<T>
    where
        O: Send;
}

#[async_trait]
impl HttpClient for Client {
    type Request = reqwest::RequestBuilder;
    type Client = reqwest::Client;

    async fn make_json_request<T: DeserializeOwned, O: FnOnce(&Client) -> Self::Request>(
        &self,
        to_request: O,
    ) -> HttpResult<T>
    where
        O: Send,
    {
        let response = to_request(self)
            .send()
            .await
            .map_err(|e| ApiError::Network { error: e })?;

        match response.error_for_status_ref() {
            Ok(_) => response
                .json()
                .await
                .map_err(|e| ApiError::JsonParsing { error: e }),
            Err(e) => {
                let message = response.text().await.map_err(|e| ApiError::Unknown {
                    message: format!("Could not decode response, got {:?}", e),
                })?;
                let status = e.status().ok_or(ApiError::Unknown {
                    message: format!("Could not decode status, got {:?}", e),
                })?;
                Err(ApiError::Http {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_describes_http_failures_with_the_remote_body() {
        let error = ApiError::Http {
            code: 400,
            message: "USER_NOT_FOUND".to_string(),
        };
        assert_eq!(format!("{}", error), "http 400: USER_NOT_FOUND");
    }

    #[test]
    fn it_describes_credential_failures() {
        let error = ApiError::Credential {
            message: "no such file".to_string(),
        };
        assert_eq!(format!("{}", error), "credential error: no such file");
    }
}
