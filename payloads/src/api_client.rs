use crate::{ItemId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        self.inner_client
            .get(self.format_url(path))
            .query(query)
            .send()
            .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch one page of items.
    pub async fn list_items(
        &self,
        query: &requests::ListItems,
    ) -> Result<responses::ItemPage, ClientError> {
        let response = self.get_with_query("items", query).await?;
        ok_body(response).await
    }

    /// Create an item. The response body is ignored.
    pub async fn create_item(
        &self,
        details: &requests::ItemDetails,
    ) -> Result<(), ClientError> {
        let response = self.post("items", details).await?;
        ok_empty(response).await
    }

    /// Replace the fields of an existing item.
    pub async fn update_item(
        &self,
        item_id: &ItemId,
        details: &requests::ItemDetails,
    ) -> Result<(), ClientError> {
        let response = self.put(&format!("items/{item_id}"), details).await?;
        ok_empty(response).await
    }

    pub async fn delete_item(&self, item_id: &ItemId) -> Result<(), ClientError> {
        let response = self.empty_delete(&format!("items/{item_id}")).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success response, containing the status and response text.
    #[error("{}", describe_api_error(.0, .1))]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Status code of a non-success response, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(_) => None,
        }
    }

    /// The `message` a backend put in its JSON error body, if it is present
    /// and non-empty.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::APIError(_, body) => message_from_body(body),
            Self::Network(_) => None,
        }
    }
}

fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<responses::ErrorMessage>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

fn describe_api_error(status: &StatusCode, body: &str) -> String {
    message_from_body(body)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    // A body that can't be read is treated as absent.
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(%status, %body, "request failed");
    ClientError::APIError(status, body)
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}
