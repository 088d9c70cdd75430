//! Shared outbound HTTP plumbing for providers.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::GatewayError;

/// Issue a GET with query parameters and decode a JSON body.
///
/// Non-2xx statuses, transport failures and undecodable bodies all map to
/// a [`GatewayError`] attributed to `provider`.
pub(crate) async fn get_json<T, Q>(
    client: &Client,
    url: &str,
    query: &Q,
    provider: &'static str,
) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| GatewayError::transport(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::HttpStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| GatewayError::transport(provider, e))?;
    debug!("{} responded with {} bytes", provider, body.len());

    serde_json::from_slice(&body).map_err(|e| GatewayError::MalformedResponse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}
