//! HTTP client for the relayer API.
//!
//! `RelayersApi` mirrors the operations of the generated relayer SDK. Every
//! call goes through a single helper that attaches the bearer token, keeps
//! the HTTP status next to the decoded body, and maps failures onto
//! [`SdkError`] without losing the original error.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::RelayerClientConfig,
    constants::{API_PREFIX, DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS},
    models::{
        ApiResponse, BalanceResponse, EvmTransactionRequest, HealthResponse, JsonRpcRequest,
        JsonRpcResponse, PaginationQuery, RelayerResponse, RelayerStatus, RelayerUpdateRequest,
        SdkError, TransactionResponse,
    },
};


/// Successful API call: the HTTP status and the decoded envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkResponse<T> {
    pub status: StatusCode,
    pub body: ApiResponse<T>,
}

impl<T> SdkResponse<T> {
    pub fn ok(body: ApiResponse<T>) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.body.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.body.data
    }
}

/// Operations the checks need from the relayer API.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait RelayerApiTrait: Send + Sync {
    /// GET /api/v1/relayers
    async fn list_relayers(
        &self,
        query: PaginationQuery,
    ) -> Result<SdkResponse<Vec<RelayerResponse>>, SdkError>;

    /// GET /api/v1/relayers/{id}
    async fn get_relayer(&self, relayer_id: &str) -> Result<SdkResponse<RelayerResponse>, SdkError>;

    /// PATCH /api/v1/relayers/{id}
    async fn update_relayer(
        &self,
        relayer_id: &str,
        request: RelayerUpdateRequest,
    ) -> Result<SdkResponse<RelayerResponse>, SdkError>;

    /// GET /api/v1/relayers/{id}/status
    async fn get_relayer_status(
        &self,
        relayer_id: &str,
    ) -> Result<SdkResponse<RelayerStatus>, SdkError>;

    /// GET /api/v1/relayers/{id}/balance
    async fn get_relayer_balance(
        &self,
        relayer_id: &str,
    ) -> Result<SdkResponse<BalanceResponse>, SdkError>;

    /// GET /api/v1/relayers/{id}/transactions
    async fn list_transactions(
        &self,
        relayer_id: &str,
        query: PaginationQuery,
    ) -> Result<SdkResponse<Vec<TransactionResponse>>, SdkError>;

    /// POST /api/v1/relayers/{id}/transactions
    async fn send_transaction(
        &self,
        relayer_id: &str,
        request: EvmTransactionRequest,
    ) -> Result<SdkResponse<TransactionResponse>, SdkError>;

    /// GET /api/v1/relayers/{id}/transactions/{tx_id}
    async fn get_transaction(
        &self,
        relayer_id: &str,
        transaction_id: &str,
    ) -> Result<SdkResponse<TransactionResponse>, SdkError>;

    /// POST /api/v1/relayers/{id}/rpc
    async fn rpc(
        &self,
        relayer_id: &str,
        request: JsonRpcRequest,
    ) -> Result<SdkResponse<JsonRpcResponse>, SdkError>;

    /// GET /api/v1/health
    async fn health(&self) -> Result<HealthResponse, SdkError>;
}

/// HTTP client for the relayer API
#[derive(Debug, Clone)]
pub struct RelayersApi {
    base_url: String,
    api_key: String,
    client: HttpClient,
}

impl RelayersApi {
    /// Creates a client bound to the configured endpoint and API key.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Client`] if the underlying HTTP client cannot be built.
    pub fn new(config: &RelayerClientConfig) -> Result<Self, SdkError> {
        Self::with_timeout(&config.base_url, &config.api_key, config.request_timeout)
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, SdkError> {
        let client = HttpClient::builder()
            .connect_timeout(Duration::from_secs(
                DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS,
            ))
            .timeout(timeout)
            .build()
            .map_err(|e| SdkError::Client(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Sends the request and reads the whole body.
    async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<(StatusCode, String), SdkError> {
        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| SdkError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SdkError::Transport {
                url: url.to_string(),
                source,
            })?;

        debug!("{} responded with status {}", url, status);

        if !status.is_success() {
            return Err(SdkError::Status { status, body });
        }

        Ok((status, body))
    }

    async fn execute<T>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<SdkResponse<T>, SdkError>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.send(request, url).await?;

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(body) => Ok(SdkResponse { status, body }),
            Err(source) => Err(SdkError::Decode { body, source }),
        }
    }
}

#[async_trait]
impl RelayerApiTrait for RelayersApi {
    async fn list_relayers(
        &self,
        query: PaginationQuery,
    ) -> Result<SdkResponse<Vec<RelayerResponse>>, SdkError> {
        let url = self.url("/relayers");
        self.execute(self.client.get(&url).query(&query), &url).await
    }

    async fn get_relayer(&self, relayer_id: &str) -> Result<SdkResponse<RelayerResponse>, SdkError> {
        let url = self.url(&format!("/relayers/{}", relayer_id));
        self.execute(self.client.get(&url), &url).await
    }

    async fn update_relayer(
        &self,
        relayer_id: &str,
        request: RelayerUpdateRequest,
    ) -> Result<SdkResponse<RelayerResponse>, SdkError> {
        let url = self.url(&format!("/relayers/{}", relayer_id));
        self.execute(self.client.patch(&url).json(&request), &url).await
    }

    async fn get_relayer_status(
        &self,
        relayer_id: &str,
    ) -> Result<SdkResponse<RelayerStatus>, SdkError> {
        let url = self.url(&format!("/relayers/{}/status", relayer_id));
        self.execute(self.client.get(&url), &url).await
    }

    async fn get_relayer_balance(
        &self,
        relayer_id: &str,
    ) -> Result<SdkResponse<BalanceResponse>, SdkError> {
        let url = self.url(&format!("/relayers/{}/balance", relayer_id));
        self.execute(self.client.get(&url), &url).await
    }

    async fn list_transactions(
        &self,
        relayer_id: &str,
        query: PaginationQuery,
    ) -> Result<SdkResponse<Vec<TransactionResponse>>, SdkError> {
        let url = self.url(&format!("/relayers/{}/transactions", relayer_id));
        self.execute(self.client.get(&url).query(&query), &url).await
    }

    async fn send_transaction(
        &self,
        relayer_id: &str,
        request: EvmTransactionRequest,
    ) -> Result<SdkResponse<TransactionResponse>, SdkError> {
        let url = self.url(&format!("/relayers/{}/transactions", relayer_id));
        self.execute(self.client.post(&url).json(&request), &url).await
    }

    async fn get_transaction(
        &self,
        relayer_id: &str,
        transaction_id: &str,
    ) -> Result<SdkResponse<TransactionResponse>, SdkError> {
        let url = self.url(&format!(
            "/relayers/{}/transactions/{}",
            relayer_id, transaction_id
        ));
        self.execute(self.client.get(&url), &url).await
    }

    async fn rpc(
        &self,
        relayer_id: &str,
        request: JsonRpcRequest,
    ) -> Result<SdkResponse<JsonRpcResponse>, SdkError> {
        let url = self.url(&format!("/relayers/{}/rpc", relayer_id));
        self.execute(self.client.post(&url).json(&request), &url).await
    }

    async fn health(&self) -> Result<HealthResponse, SdkError> {
        let url = self.url("/health");
        let (_, body) = self.send(self.client.get(&url), &url).await?;

        // Health endpoint returns plain text "OK"
        Ok(HealthResponse::from_body(&body))
    }
}
