use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trapped_rain_water::*;

#[derive(Parser, Debug)]
#[command(
    name = "trapped_rain_water",
    about = "Count the units of rain water an elevation map traps"
)]
struct Args {
    /// Elevation map as space separated integers, e.g. 1 0 2 3 1 2
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    elevation_map: Vec<i64>,

    /// Counting axis: 1 scans left to right, 0 scans row by row
    #[arg(short, long, default_value = "1")]
    axis: Axis,

    /// Draw the profile and its water instead of printing the total (forces axis 1)
    #[arg(short, long)]
    plot: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Text the binary prints: the chart when plotting, the separated total otherwise.
///
/// Plotting always counts along the primary axis, whatever `axis` says.
fn report(profile: &ElevationProfile, axis: Axis, plot: bool) -> trapped_rain_water::Result<String> {
    let axis = if plot { Axis::Primary } else { axis };
    let counts = WaterCounter::new(profile).count(axis)?;

    if plot {
        Ok(Chart::new(profile, &counts)?.render())
    } else {
        Ok(counts.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let profile = ElevationProfile::new(args.elevation_map).context("invalid elevation map")?;
    println!("{}", report(&profile, args.axis, args.plot)?);

    Ok(())
}
