//! Observation command - request and track observations

use anyhow::Context;
use log::info;
use tomctl::api::ObservationsApi;
use tomctl::core::models::{NewObservation, ObservationStatus, Priority, parse_timestamp};
use tomctl::output::{ObservationInfo, ObservationListResult, OperationResult, OutputMode};

use crate::cli::ObservationAction;

/// Handle observation subcommands
pub async fn observation_cmd(action: ObservationAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ObservationAction::List { status, open } => list(status.as_deref(), open, mode).await,
        ObservationAction::Show { id } => show(id, mode).await,
        ObservationAction::Create {
            observatory,
            targets,
            start,
            end,
            priority,
            name,
            status,
        } => {
            let mut request = NewObservation::new(
                observatory,
                parse_priority(&priority)?,
                parse_time(&start).context("invalid --start")?,
                parse_time(&end).context("invalid --end")?,
                targets,
            );
            if let Some(name) = name {
                request = request.with_name(name);
            }
            if let Some(status) = status {
                request = request.with_status(parse_status(&status)?);
            }
            create(&request, mode).await
        },
        ObservationAction::Status { id, status } => {
            set_status(id, parse_status(&status)?, mode).await
        },
        ObservationAction::Remove { id } => remove(id, mode).await,
    }
}

fn parse_status(text: &str) -> anyhow::Result<ObservationStatus> {
    text.parse().map_err(|e: String| anyhow::anyhow!(e))
}

fn parse_priority(text: &str) -> anyhow::Result<Priority> {
    text.parse().map_err(|e: String| anyhow::anyhow!(e))
}

fn parse_time(text: &str) -> anyhow::Result<chrono::DateTime<chrono::Utc>> {
    parse_timestamp(text).ok_or_else(|| {
        anyhow::anyhow!(
            "'{text}' is not a date (use YYYY-MM-DD, \"YYYY-MM-DD HH:MM:SS\" or RFC 3339)"
        )
    })
}

async fn list(status: Option<&str>, open: bool, mode: OutputMode) -> anyhow::Result<()> {
    let status = status.map(parse_status).transpose()?;

    let client = super::connect()?;
    let mut observations = ObservationsApi::new(&client).list(status).await?;
    if open {
        observations.retain(|o| !o.status.is_final());
    }

    ObservationListResult {
        observations: observations.iter().map(ObservationInfo::from).collect(),
    }
    .render(mode);
    Ok(())
}

async fn show(id: u64, mode: OutputMode) -> anyhow::Result<()> {
    let client = super::connect()?;
    let observation = ObservationsApi::new(&client)
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Observation not found: {id}"))?;

    ObservationInfo::from(&observation).render(mode);
    Ok(())
}

async fn create(request: &NewObservation, mode: OutputMode) -> anyhow::Result<()> {
    request.validate()?;

    let client = super::connect()?;
    let created = ObservationsApi::new(&client).create(request).await?;
    info!("requested observation {} ({})", created.id, created.name);

    ObservationInfo::from(&created).render(mode);
    Ok(())
}

async fn set_status(id: u64, status: ObservationStatus, mode: OutputMode) -> anyhow::Result<()> {
    let client = super::connect()?;
    let updated = ObservationsApi::new(&client).update_status(id, status).await?;
    info!("observation {id} is now {}", updated.status);

    ObservationInfo::from(&updated).render(mode);
    Ok(())
}

async fn remove(id: u64, mode: OutputMode) -> anyhow::Result<()> {
    let client = super::connect()?;
    ObservationsApi::new(&client).remove(id).await?;

    OperationResult {
        success: true,
        message: format!("Removed observation {id}"),
    }
    .render(mode);
    Ok(())
}
