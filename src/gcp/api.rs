use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::gcp::claims::Claims;
use crate::gcp::{client, oauth};
use crate::http::{HttpClient, HttpResult};

const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// The one privileged operation this crate performs. Kept behind a trait so
/// tests can substitute the remote service.
#[async_trait]
pub trait IdentityApi {
    /// Replaces the custom claims of the account identified by `uid` and
    /// returns the uid echoed by the backend.
    async fn set_custom_user_claims(&self, uid: &str, claims: &Claims) -> HttpResult<String>;
}

pub struct IdentityToolkitApi {
    client: reqwest::Client,
    project_id: String,
}

impl IdentityToolkitApi {
    pub async fn default(key_path: &str) -> HttpResult<Self> {
        let oauth = oauth::get_oauth_token(key_path).await?;
        let client = client::authenticated_client(&oauth.token)?;
        Ok(Self::new(client, oauth.project_id))
    }

    pub fn new(client: reqwest::Client, project_id: impl Into<String>) -> Self {
        IdentityToolkitApi {
            client,
            project_id: project_id.into(),
        }
    }

    fn accounts_url(&self, action: &str) -> String {
        format!(
            "{IDENTITY_TOOLKIT_BASE_URL}/projects/{}/accounts:{action}",
            self.project_id
        )
    }
}

// The REST shape of the Admin SDK's setCustomUserClaims: accounts:update
// with the claim map serialized into the customAttributes string field.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAccountRequest<'a> {
    local_id: &'a str,
    custom_attributes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAccountResponse {
    local_id: String,
}

#[async_trait]
impl IdentityApi for IdentityToolkitApi {
    async fn set_custom_user_claims(&self, uid: &str, claims: &Claims) -> HttpResult<String> {
        let payload = UpdateAccountRequest {
            local_id: uid,
            custom_attributes: claims.to_attribute_string(),
        };
        let response: UpdateAccountResponse = self
            .client
            .make_json_request(|client| client.post(self.accounts_url("update")).json(&payload))
            .await?;
        Ok(response.local_id)
    }
}

/// Issues exactly one claim mutation, no retry on failure.
pub async fn set_user_claims<A: IdentityApi + Sync>(
    api: &A,
    uid: &str,
    claims: &Claims,
) -> HttpResult<String> {
    let local_id = api.set_custom_user_claims(uid, claims).await?;
    log::debug!("claims {} set for {}", claims.to_attribute_string(), local_id);
    Ok(local_id)
}
