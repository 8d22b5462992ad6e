//! Coords command - offline coordinate conversion

use anyhow::Context;
use tomctl::coords::{
    format_declination, format_right_ascension, format_sexagesimal, parse_coordinate_pair,
    parse_declination, parse_right_ascension,
};
use tomctl::output::{AngleResult, DISPLAY_PLACES, OutputMode, PairResult};

use crate::cli::CoordsAction;

/// Handle coords subcommands
pub fn coords_cmd(action: CoordsAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        CoordsAction::Ra { input } => {
            let degrees = parse_right_ascension(&input)
                .with_context(|| format!("invalid right ascension '{input}'"))?;
            AngleResult {
                sexagesimal: format_right_ascension(degrees, DISPLAY_PLACES),
                input,
                degrees,
            }
            .render(mode);
        },
        CoordsAction::Dec { input } => {
            let degrees = parse_declination(&input)
                .with_context(|| format!("invalid declination '{input}'"))?;
            AngleResult {
                sexagesimal: format_declination(degrees, DISPLAY_PLACES),
                input,
                degrees,
            }
            .render(mode);
        },
        CoordsAction::Pair { input } => {
            let (ra, dec) = parse_coordinate_pair(&input)
                .with_context(|| format!("invalid coordinate pair '{input}'"))?;
            PairResult {
                ra_hms: format_right_ascension(ra, DISPLAY_PLACES),
                dec_dms: format_declination(dec, DISPLAY_PLACES),
                input,
                ra,
                dec,
            }
            .render(mode);
        },
        CoordsAction::Format {
            degrees,
            places,
            ra,
            dec,
        } => {
            let places = usize::from(places);
            let sexagesimal = if ra {
                format_right_ascension(degrees, places)
            } else if dec {
                format_declination(degrees, places)
            } else {
                format_sexagesimal(degrees, places)
            };
            AngleResult {
                input: degrees.to_string(),
                degrees,
                sexagesimal,
            }
            .render(mode);
        },
    }
    Ok(())
}
