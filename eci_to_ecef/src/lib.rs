use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use nalgebra::Vector3;
use thiserror::Error;
use time::prelude::*;
use tracing_subscriber::EnvFilter;
use transforms::eci_to_ecef;

/// Number of positional arguments, not counting the program name
pub const NUM_ARGS: usize = 9;

#[derive(Debug, Error)]
pub enum CliErrors {
    #[error("expected 9 arguments, found {found}")]
    Usage { found: usize },
    #[error("{0}")]
    Parse(#[from] clap::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "eci_to_ecef",
    about = "Converts an ECI position in km to ECEF at a UTC epoch",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(value_name = "year", allow_hyphen_values = true)]
    pub year: i32,
    #[arg(value_name = "month", allow_hyphen_values = true)]
    pub month: i32,
    #[arg(value_name = "day", allow_hyphen_values = true)]
    pub day: i32,
    #[arg(value_name = "hour", allow_hyphen_values = true)]
    pub hour: i32,
    #[arg(value_name = "minute", allow_hyphen_values = true)]
    pub minute: i32,
    #[arg(value_name = "second", allow_hyphen_values = true)]
    pub second: f64,
    #[arg(value_name = "eci_x_km", allow_hyphen_values = true)]
    pub eci_x_km: f64,
    #[arg(value_name = "eci_y_km", allow_hyphen_values = true)]
    pub eci_y_km: f64,
    #[arg(value_name = "eci_z_km", allow_hyphen_values = true)]
    pub eci_z_km: f64,
}

impl Cli {
    pub fn timestamp(&self) -> CivilTimestamp {
        CivilTimestamp::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    pub fn eci(&self) -> Vector3<f64> {
        Vector3::new(self.eci_x_km, self.eci_y_km, self.eci_z_km)
    }
}

/// Parses the full argument list, program name first.
///
/// The count is checked before anything is parsed so a wrong count is always
/// a usage error, regardless of what the arguments contain.
pub fn parse_args<I, T>(args: I) -> Result<Cli, CliErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let found = args.len().saturating_sub(1);
    if found != NUM_ARGS {
        return Err(CliErrors::Usage { found });
    }
    Ok(Cli::try_parse_from(args)?)
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Runs the full pipeline: calendar -> julian date -> sidereal time -> rotation.
pub fn convert(timestamp: &CivilTimestamp, eci: &Vector3<f64>) -> Vector3<f64> {
    let jd = timestamp.to_jd();
    let gst = gst_from_jd(jd);
    tracing::debug!(
        jd = jd.value(),
        gst_hours = gst.hours(),
        gst_rad = gst.radians(),
        "sidereal time"
    );
    let ecef = eci_to_ecef(eci, gst);
    tracing::debug!(x = ecef[0], y = ecef[1], z = ecef[2], "ecef position [km]");
    ecef
}

/// Logs go to stderr so stdout only carries the result. Defaults to warn, override with RUST_LOG.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // a subscriber may already be set, e.g. when called more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
