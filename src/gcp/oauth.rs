use crate::http::{ApiError, HttpResult};

pub struct OAuth {
    pub(crate) token: String,
    pub(crate) project_id: String,
}

const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/identitytoolkit",
    "https://www.googleapis.com/auth/userinfo.email",
];

/// Loads the service account key from `key_path`, falling back to the
/// `GOOGLE_CREDENTIALS` environment variable holding the key JSON inline,
/// and exchanges it for a bearer token scoped to the Identity Toolkit.
pub async fn get_oauth_token(key_path: &str) -> HttpResult<OAuth> {
    let secret = match yup_oauth2::read_service_account_key(key_path).await {
        Ok(secret) => secret,
        Err(read_error) => {
            let json = std::env::var("GOOGLE_CREDENTIALS").map_err(|_| ApiError::Credential {
                message: format!("could not read service account key at {key_path}: {read_error}"),
            })?;
            yup_oauth2::parse_service_account_key(json).map_err(|e| ApiError::Credential {
                message: format!("could not parse GOOGLE_CREDENTIALS: {e}"),
            })?
        }
    };

    let project_id = secret
        .project_id
        .clone()
        .ok_or_else(|| ApiError::Credential {
            message: "service account key has no project_id".to_string(),
        })?;

    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(secret)
        .build()
        .await
        .map_err(|e| ApiError::Credential {
            message: format!("could not build authenticator: {e}"),
        })?;

    // token(<scopes>) is the one important function of this crate; it does everything to
    // obtain a token that can be sent e.g. as Bearer token.
    let token = auth.token(SCOPES).await.map_err(|e| ApiError::Credential {
        message: format!("token exchange failed: {e}"),
    })?;
    Ok(OAuth {
        token: token.as_str().to_string(),
        project_id,
    })
}
