//! Arrive command: check a visitor's position against a spot.

use std::io::Write;

use clap::Parser;
use geo::Coord;
use happyspot_core::{ARRIVAL_RADIUS_METRES, haversine_metres};
use serde::Serialize;

use crate::{CliError, write_json};

/// CLI arguments for the `arrive` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Report the distance between the visitor and a target spot \
                 and whether the visitor is within the arrival radius.",
    about = "Check whether a visitor has reached a spot"
)]
pub(crate) struct ArriveArgs {
    /// Visitor latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) lat: f64,
    /// Visitor longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) lon: f64,
    /// Target latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) target_lat: f64,
    /// Target longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) target_lon: f64,
}

/// Outcome of an arrival check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ArrivalReport {
    /// Distance to the target, rounded to whole metres.
    pub(crate) distance_metres: f64,
    /// Whether the raw distance is within the arrival radius.
    pub(crate) arrived: bool,
}

impl ArriveArgs {
    pub(crate) fn report(&self) -> ArrivalReport {
        let user = Coord {
            x: self.lon,
            y: self.lat,
        };
        let target = Coord {
            x: self.target_lon,
            y: self.target_lat,
        };
        let metres = haversine_metres(user, target);
        ArrivalReport {
            distance_metres: metres.round(),
            arrived: metres <= ARRIVAL_RADIUS_METRES,
        }
    }
}

pub(crate) fn run_arrive_with(args: &ArriveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &args.report())
}
