//! `/api/targets/`

use serde::Deserialize;
use serde_json::json;

use crate::client::{ApiClient, ApiRequest, ClientError};
use crate::core::models::{CoordinateUpdate, Target};

/// Target collection endpoint
pub const TARGETS_PATH: &str = "/api/targets/";

/// Lookup by `target_id` answers with either the object or a one-element list
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<Target>),
    Many(Vec<Target>),
}

/// Target endpoints
#[derive(Debug, Clone, Copy)]
pub struct TargetsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TargetsApi<'a> {
    /// Wrap a client
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All targets visible to the current user
    pub async fn list(&self) -> Result<Vec<Target>, ClientError> {
        self.client.get_json(TARGETS_PATH).await
    }

    /// One target, or `None` if the backend knows no such ID
    pub async fn get(&self, id: u64) -> Result<Option<Target>, ClientError> {
        let request = ApiRequest::get(TARGETS_PATH).with_query("target_id", id.to_string());
        match self.client.send(request).await {
            Ok(response) => Ok(match response.json::<Option<OneOrMany>>()? {
                Some(OneOrMany::One(target)) => Some(*target),
                Some(OneOrMany::Many(targets)) => targets.into_iter().next(),
                None => None,
            }),
            Err(ClientError::Client { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Register a new target; returns it as stored by the backend
    pub async fn create(&self, target: &Target) -> Result<Target, ClientError> {
        self.client.post_json(TARGETS_PATH, target).await
    }

    /// Move a target to new coordinates
    pub async fn update_coordinates(
        &self,
        id: u64,
        coordinates: CoordinateUpdate,
    ) -> Result<Target, ClientError> {
        self.client.put_json(&target_path(id), &coordinates).await
    }

    /// Delete a target
    pub async fn remove(&self, id: u64) -> Result<(), ClientError> {
        let request = ApiRequest::post(format!("{}delete/", target_path(id)), json!({}));
        self.client.send(request).await.map(|_| ())
    }
}

fn target_path(id: u64) -> String {
    format!("{TARGETS_PATH}{id}/")
}
