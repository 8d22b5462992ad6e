//! `/api/observations/`

use serde_json::json;

use crate::client::{ApiClient, ClientError};
use crate::core::models::{NewObservation, Observation, ObservationStatus};

/// Observation collection endpoint
pub const OBSERVATIONS_PATH: &str = "/api/observations/";

/// Observation endpoints
#[derive(Debug, Clone, Copy)]
pub struct ObservationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ObservationsApi<'a> {
    /// Wrap a client
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Observations visible to the current user, optionally only those in
    /// `status`
    pub async fn list(
        &self,
        status: Option<ObservationStatus>,
    ) -> Result<Vec<Observation>, ClientError> {
        let observations: Vec<Observation> = self.client.get_json(OBSERVATIONS_PATH).await?;
        Ok(filter_by_status(observations, status))
    }

    /// One observation, or `None` if the backend knows no such ID
    pub async fn get(&self, id: u64) -> Result<Option<Observation>, ClientError> {
        match self.client.get_json(&observation_path(id)).await {
            Ok(observation) => Ok(Some(observation)),
            Err(ClientError::Client { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // =========================================================================
    // WORKFLOW
    // =========================================================================

    /// Submit a new observation request; returns it as stored by the backend
    pub async fn create(&self, request: &NewObservation) -> Result<Observation, ClientError> {
        self.client.post_json(OBSERVATIONS_PATH, request).await
    }

    /// Move an observation to `status`
    pub async fn update_status(
        &self,
        id: u64,
        status: ObservationStatus,
    ) -> Result<Observation, ClientError> {
        self.client.put_json(&observation_path(id), &status_body(status)).await
    }

    /// Delete an observation
    pub async fn remove(&self, id: u64) -> Result<(), ClientError> {
        self.client.delete(&observation_path(id)).await
    }
}

fn observation_path(id: u64) -> String {
    format!("{OBSERVATIONS_PATH}{id}/")
}

/// Partial update touching only the status
fn status_body(status: ObservationStatus) -> serde_json::Value {
    json!({ "status": status })
}

fn filter_by_status(
    observations: Vec<Observation>,
    status: Option<ObservationStatus>,
) -> Vec<Observation> {
    match status {
        Some(wanted) => observations.into_iter().filter(|o| o.status == wanted).collect(),
        None => observations,
    }
}
