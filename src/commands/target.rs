//! Target command - manage targets

use anyhow::Context;
use log::info;
use tomctl::api::TargetsApi;
use tomctl::coords::{
    parse_declination, parse_right_ascension, validate_declination, validate_right_ascension,
};
use tomctl::core::models::{CoordinateUpdate, Target};
use tomctl::output::{OperationResult, OutputMode, TargetInfo, TargetListResult};

use crate::cli::TargetAction;

/// Handle target subcommands
pub async fn target_cmd(action: TargetAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        TargetAction::List => list(mode).await,
        TargetAction::Show { id } => show(id, mode).await,
        TargetAction::Create {
            name,
            ra,
            dec,
            redshift,
            notes,
        } => create(&name, &ra, &dec, redshift, notes, mode).await,
        TargetAction::Move { id, ra, dec } => move_to(id, &ra, &dec, mode).await,
        TargetAction::Remove { id } => remove(id, mode).await,
    }
}

/// Parse and range check user-entered coordinates
fn normalize(ra: &str, dec: &str) -> anyhow::Result<CoordinateUpdate> {
    let ra = parse_right_ascension(ra).with_context(|| format!("invalid right ascension '{ra}'"))?;
    let dec = parse_declination(dec).with_context(|| format!("invalid declination '{dec}'"))?;
    Ok(CoordinateUpdate {
        ra: validate_right_ascension(ra)?,
        dec: validate_declination(dec)?,
    })
}

async fn list(mode: OutputMode) -> anyhow::Result<()> {
    let client = super::connect()?;
    let targets = TargetsApi::new(&client).list().await?;

    TargetListResult {
        targets: targets.iter().map(TargetInfo::from).collect(),
    }
    .render(mode);
    Ok(())
}

async fn show(id: u64, mode: OutputMode) -> anyhow::Result<()> {
    let client = super::connect()?;
    let target = TargetsApi::new(&client)
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Target not found: {id}"))?;

    TargetInfo::from(&target).render(mode);
    Ok(())
}

async fn create(
    name: &str,
    ra: &str,
    dec: &str,
    redshift: Option<f64>,
    notes: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let coordinates = normalize(ra, dec)?;

    let mut target = Target::new(name, coordinates.ra, coordinates.dec);
    if let Some(z) = redshift {
        target = target.with_redshift(z);
    }
    if let Some(notes) = notes {
        target = target.with_notes(notes);
    }

    let client = super::connect()?;
    let created = TargetsApi::new(&client).create(&target).await?;
    info!("created target {name}");

    TargetInfo::from(&created).render(mode);
    Ok(())
}

async fn move_to(id: u64, ra: &str, dec: &str, mode: OutputMode) -> anyhow::Result<()> {
    let coordinates = normalize(ra, dec)?;

    let client = super::connect()?;
    let updated = TargetsApi::new(&client).update_coordinates(id, coordinates).await?;

    TargetInfo::from(&updated).render(mode);
    Ok(())
}

async fn remove(id: u64, mode: OutputMode) -> anyhow::Result<()> {
    let client = super::connect()?;
    TargetsApi::new(&client).remove(id).await?;

    OperationResult {
        success: true,
        message: format!("Removed target {id}"),
    }
    .render(mode);
    Ok(())
}
