use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Public FlyBase GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.flybase.org/graphql";

const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("GraphQL response carried no data")]
    EmptyResponse,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlMessage>>,
}

#[derive(Deserialize)]
struct GraphQlMessage {
    message: String,
}

/// Blocking client for the FlyBase GraphQL API.
///
/// Transport failures are retried up to three times before reporting;
/// GraphQL-level errors in an otherwise successful response are not.
pub struct FlyBaseClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl FlyBaseClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Execute `query` with `variables` and deserialize the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if every transport attempt fails, the server reports
    /// GraphQL errors, or the response carries no data.
    pub fn execute<V, T>(&self, query: &str, variables: &V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };

        let mut attempt = 1;
        let response: GraphQlResponse<T> = loop {
            match self.post(&request) {
                Ok(response) => break response,
                Err(error) if attempt < MAX_ATTEMPTS => {
                    warn!(attempt, %error, "GraphQL request failed, retrying");
                    attempt += 1;
                }
                Err(error) => return Err(error.into()),
            }
        };

        if let Some(errors) = response.errors {
            let combined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::GraphQl(combined));
        }
        response.data.ok_or(ApiError::EmptyResponse)
    }

    fn post<V, T>(&self, request: &GraphQlRequest<'_, V>) -> Result<GraphQlResponse<T>, reqwest::Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        self.http
            .post(&self.endpoint)
            .json(request)
            .send()?
            .error_for_status()?
            .json()
    }
}
