use std::future::Future;

use anyhow::anyhow;
use reqwest::Url;

use crate::model::RouteRequest;

use super::types::DirectionsResponse;
use super::{Router, RouterOutcome};

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
    access_token: String,
}

impl Client {
    pub fn new(base: &str, access_token: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::new();
        let base = base
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", base, e))?;

        Ok(Self {
            inner: client,
            base,
            access_token: access_token.to_string(),
        })
    }

    async fn fetch(&self, request: &RouteRequest) -> Result<DirectionsResponse, anyhow::Error> {
        let coordinates = request
            .coordinates
            .iter()
            .map(|coord| format!("{},{}", coord.lon, coord.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = self
            .base
            .join(&format!(
                "/directions/v5/mapbox/{}/{}",
                request.profile.as_str(),
                coordinates
            ))
            .map_err(|e| anyhow!("error joining url: {e}"))?;

        let waypoint_names = request.waypoint_names.join(";");
        let response = self
            .inner
            .get(url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("alternatives", if request.alternatives { "true" } else { "false" }),
                ("steps", if request.steps { "true" } else { "false" }),
                ("waypoint_names", waypoint_names.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }
}

impl Router for Client {
    fn request_routes(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = RouterOutcome> + Send {
        async move {
            if request.coordinates.is_empty() {
                return RouterOutcome::Failure(vec!["no coordinates to route".to_string()]);
            }

            match self.fetch(request).await {
                Ok(response) if response.code == "Ok" => RouterOutcome::Ready(response.routes),
                Ok(response) => {
                    let reason = response
                        .message
                        .unwrap_or_else(|| format!("directions returned code {}", response.code));
                    RouterOutcome::Failure(vec![reason])
                }
                Err(e) => RouterOutcome::Failure(vec![e.to_string()]),
            }
        }
    }
}
