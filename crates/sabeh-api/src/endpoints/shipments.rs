//! Shipment tracking endpoints

use reqwest::Method;
use serde::Serialize;

use crate::client::ApiClient;
use crate::models::{Shipment, ShipmentSummary};
use crate::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackRequest<'a> {
    tracking_number: &'a str,
}

#[derive(Clone)]
pub struct ShipmentsApi {
    client: ApiClient,
}

impl ShipmentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn track(&self, tracking_number: &str) -> Result<Shipment> {
        let body = TrackRequest { tracking_number };
        self.client
            .request(Method::POST, "/shipments/track", Some(&body))
            .await
    }

    pub async fn recent(&self) -> Result<Vec<ShipmentSummary>> {
        self.client
            .request(Method::POST, "/shipments/recent", None::<&()>)
            .await
    }
}
