//! Freight estimation endpoints

use reqwest::Method;

use crate::client::ApiClient;
use crate::models::{FreightQuote, FreightRequest};
use crate::Result;

#[derive(Clone)]
pub struct FreightApi {
    client: ApiClient,
}

impl FreightApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Request a quote. The estimate is computed server-side.
    pub async fn estimate(&self, request: &FreightRequest) -> Result<FreightQuote> {
        self.client
            .request(Method::POST, "/freight/estimate", Some(request))
            .await
    }
}
