//! Sphere probe
//!
//! Loads a scenario (or uses the built-in one), classifies every sphere
//! against the plane and prints the diagnostic renderings.
//!
//! Usage: `sphere_probe [SCENARIO.toml|SCENARIO.ron] [--normalize]`

mod scenario;

use geom_core::prelude::*;
use scenario::ScenarioConfig;
use std::path::PathBuf;
use thiserror::Error;

const USAGE: &str = "usage: sphere_probe [SCENARIO.toml|SCENARIO.ron] [--normalize]";

/// Application errors
#[derive(Error, Debug)]
enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Degenerate geometry: {0}")]
    Domain(#[from] DomainError),
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    scenario: Option<PathBuf>,
    normalize: bool,
    help: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--normalize" | "-n" => parsed.normalize = true,
                "--help" | "-h" => parsed.help = true,
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("unknown option {flag}\n{USAGE}")));
                }
                path if parsed.scenario.is_none() => parsed.scenario = Some(PathBuf::from(path)),
                extra => {
                    return Err(AppError::Usage(format!("unexpected argument {extra}\n{USAGE}")));
                }
            }
        }
        Ok(parsed)
    }
}

/// Render the report lines for a scenario
fn report(scenario: &ScenarioConfig, normalize: bool) -> Result<Vec<String>, DomainError> {
    let mut plane = scenario.plane.to_plane();
    if normalize {
        plane = plane.normalize()?;
    }

    let aabb = scenario.aabb.to_aabb();
    let mut lines = vec![
        format!("plane {plane}"),
        format!("aabb {aabb} min {} max {}", aabb.min(), aabb.max()),
    ];

    for entry in &scenario.spheres {
        let sphere = entry.to_sphere();
        let side = classify(&plane, &sphere);
        log::debug!("classified sphere {sphere} as {side}");

        if normalize {
            let closest = plane.closest_point(sphere.center)?;
            lines.push(format!("sphere {sphere}: {side} closest {closest}"));
        } else {
            lines.push(format!("sphere {sphere}: {side}"));
        }
    }

    Ok(lines)
}

fn run() -> Result<(), AppError> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let scenario = match &args.scenario {
        Some(path) => {
            log::info!("Loading scenario from {}", path.display());
            ScenarioConfig::load_from_file(path)?
        }
        None => {
            log::info!("No scenario given, using the built-in one");
            ScenarioConfig::default()
        }
    };

    for line in report(&scenario, args.normalize)? {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
