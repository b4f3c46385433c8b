//! Company news endpoints

use reqwest::Method;

use crate::client::ApiClient;
use crate::models::NewsItem;
use crate::Result;

#[derive(Clone)]
pub struct NewsApi {
    client: ApiClient,
}

impl NewsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn latest(&self) -> Result<Vec<NewsItem>> {
        self.client
            .request(Method::GET, "/news/latest", None::<&()>)
            .await
    }
}
