use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kkj::prelude::*;
use kkj::sample::residuals;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(name = "kkj")]
#[command(about = "Convert coordinates between the Finnish KKJ grid and WGS84")]
struct Cmd {
    /// Log at DEBUG level (logs go to stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Action {
    /// KKJ grid northing/easting → WGS84 latitude/longitude
    GridToWgs84 { northing: f64, easting: f64 },
    /// WGS84 latitude/longitude → KKJ grid (whole meters)
    Wgs84ToGrid { latitude: f64, longitude: f64 },
    /// KKJ grid → KKJ latitude/longitude
    GridToKkj {
        northing: f64,
        easting: f64,
        /// Invert against this zone instead of the easting's millions digit
        #[arg(long)]
        zone: Option<i64>,
    },
    /// KKJ latitude/longitude → KKJ grid (unrounded)
    KkjToGrid {
        latitude: f64,
        longitude: f64,
        /// Project into this zone instead of the nearest one (3 = YKJ)
        #[arg(long)]
        zone: Option<i64>,
    },
    /// KKJ latitude/longitude → WGS84 latitude/longitude
    KkjToWgs84 {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// WGS84 latitude/longitude → KKJ latitude/longitude
    Wgs84ToKkj {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Print a few reference conversions
    Demo,
    /// Report worst round-trip errors over seeded random points in Finland
    Residual {
        #[arg(long, default_value_t = 1000)]
        samples: u64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Serialize)]
struct LatLon {
    latitude: f64,
    longitude: f64,
}

impl From<GeodeticCoordinate> for LatLon {
    fn from(g: GeodeticCoordinate) -> Self {
        Self {
            latitude: g.latitude,
            longitude: g.longitude,
        }
    }
}

#[derive(Serialize)]
struct NorthEast {
    northing: f64,
    easting: f64,
}

impl From<GridCoordinate> for NorthEast {
    fn from(p: GridCoordinate) -> Self {
        Self {
            northing: p.northing,
            easting: p.easting,
        }
    }
}

#[derive(Serialize)]
struct Report {
    code_rev: &'static str,
    op: &'static str,
    input: Value,
    output: Value,
}

impl Report {
    fn new(op: &'static str, input: impl Serialize, output: impl Serialize) -> Result<Self> {
        Ok(Self {
            code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown"),
            op,
            input: serde_json::to_value(input)?,
            output: serde_json::to_value(output)?,
        })
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = execute(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn execute(action: Action) -> Result<Value> {
    tracing::debug!(?action, "execute");
    let report = match action {
        Action::GridToWgs84 { northing, easting } => {
            let grid = GridCoordinate::new(northing, easting);
            let geo = grid_to_global_geodetic(grid)
                .with_context(|| format!("converting grid {} {}", northing, easting))?;
            Report::new("grid-to-wgs84", NorthEast::from(grid), LatLon::from(geo))?
        }
        Action::Wgs84ToGrid {
            latitude,
            longitude,
        } => {
            let geo = GeodeticCoordinate::new(latitude, longitude);
            let grid = global_geodetic_to_grid(geo)
                .with_context(|| format!("converting WGS84 {} {}", latitude, longitude))?;
            Report::new("wgs84-to-grid", LatLon::from(geo), NorthEast::from(grid))?
        }
        Action::GridToKkj {
            northing,
            easting,
            zone,
        } => {
            let grid = GridCoordinate::new(northing, easting);
            let geo = match zone {
                Some(z) => grid_to_local_geodetic_in_zone(grid, Zone::new(z)?),
                None => grid_to_local_geodetic(grid)
                    .with_context(|| format!("converting grid {} {}", northing, easting))?,
            };
            Report::new("grid-to-kkj", NorthEast::from(grid), LatLon::from(geo))?
        }
        Action::KkjToGrid {
            latitude,
            longitude,
            zone,
        } => {
            let geo = GeodeticCoordinate::new(latitude, longitude);
            let grid = match zone {
                Some(z) => local_geodetic_to_grid_in_zone(geo, Zone::new(z)?),
                None => local_geodetic_to_grid(geo)
                    .with_context(|| format!("converting KKJ {} {}", latitude, longitude))?,
            };
            Report::new("kkj-to-grid", LatLon::from(geo), NorthEast::from(grid))?
        }
        Action::KkjToWgs84 {
            latitude,
            longitude,
        } => {
            let geo = GeodeticCoordinate::new(latitude, longitude);
            let out = local_geodetic_to_global_geodetic(geo);
            Report::new("kkj-to-wgs84", LatLon::from(geo), LatLon::from(out))?
        }
        Action::Wgs84ToKkj {
            latitude,
            longitude,
        } => {
            let geo = GeodeticCoordinate::new(latitude, longitude);
            let out = global_geodetic_to_local_geodetic(geo);
            Report::new("wgs84-to-kkj", LatLon::from(geo), LatLon::from(out))?
        }
        Action::Demo => return demo(),
        Action::Residual { samples, seed } => {
            tracing::info!(samples, seed, "residual");
            let r = residuals(seed, samples).context("sampling residuals")?;
            Report::new(
                "residual",
                json!({ "samples": samples, "seed": seed }),
                json!({
                    "grid_roundtrip_deg": r.grid_roundtrip,
                    "datum_roundtrip_deg": r.datum_roundtrip,
                }),
            )?
        }
    };
    Ok(serde_json::to_value(report)?)
}

fn demo() -> Result<Value> {
    tracing::info!("demo");
    let actions = [
        Action::Wgs84ToGrid {
            latitude: 60.0,
            longitude: 25.0,
        },
        Action::GridToWgs84 {
            northing: 6_654_634.0,
            easting: 2_555_976.0,
        },
        Action::Wgs84ToGrid {
            latitude: 60.167777,
            longitude: 24.941658,
        },
        Action::GridToKkj {
            northing: 6_673_278.0,
            easting: 2_552_455.0,
            zone: None,
        },
        Action::KkjToGrid {
            latitude: 60.167606,
            longitude: 24.944811,
            zone: Some(Zone::UNIFORM.number().into()),
        },
    ];
    let reports = actions
        .into_iter()
        .map(execute)
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(reports))
}
