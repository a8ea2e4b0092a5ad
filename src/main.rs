/*
This code is part of the point3d geometry library.
Authors: Dr. John Lindsay
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/

//! point3d command-line tool
//!
//! Evaluates one geometric operation per invocation and prints the result.
//!
//! Usage:
//!     point3d distance 1,2,3 4,6,3
//!     point3d rotate 1,0,0 --axis z --angle 90 --degrees
//!     point3d normalize "(3, 0, 4)"

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use point3d::configs::{self, AngleUnit, Configs};
use point3d::{Axis, GeometryError, Point3D};
use std::env;
use std::path::PathBuf;

/// Evaluate 3-D point and vector operations
#[derive(Parser, Debug)]
#[command(name = "point3d")]
#[command(version)]
#[command(about = "Points accept x,y,z or (x, y, z)", long_about = None)]
struct Cli {
    /// Log each operation (overrides verbose_mode in settings.json)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings.json; defaults to the current directory
    #[arg(long, global = true)]
    wd: Option<PathBuf>,

    /// Read rotation angles as degrees rather than radians
    #[arg(long, global = true)]
    degrees: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(a: AxisArg) -> Self {
        match a {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Euclidean distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },

    /// Distance of a point from the origin
    Magnitude {
        #[arg(allow_hyphen_values = true)]
        p: Point3D,
    },

    /// Rotate a point about a coordinate axis
    Rotate {
        #[arg(allow_hyphen_values = true)]
        p: Point3D,

        #[arg(long, value_enum)]
        axis: AxisArg,

        /// Rotation angle, right-handed
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },

    /// Midpoint of two points
    Midpoint {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },

    /// Move a point by an offset
    Translate {
        #[arg(allow_hyphen_values = true)]
        p: Point3D,
        #[arg(allow_hyphen_values = true)]
        offset: Point3D,
    },

    /// Scale a point about the origin
    Scale {
        #[arg(allow_hyphen_values = true)]
        p: Point3D,
        #[arg(allow_hyphen_values = true)]
        factor: f64,
    },

    /// Dot product of two vectors
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },

    /// Cross product of two vectors
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },

    /// Unit vector in the direction of a point
    Normalize {
        #[arg(allow_hyphen_values = true)]
        p: Point3D,
    },

    /// Compare two points within tolerance
    Equals {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },

    /// Hash grid cell of a point
    Key {
        #[arg(allow_hyphen_values = true)]
        p: Point3D,
    },
}

fn evaluate(command: &Commands, angle_unit: AngleUnit) -> Result<String, GeometryError> {
    let out = match command {
        Commands::Distance { a, b } => a.distance_to(b).to_string(),
        Commands::Magnitude { p } => p.distance_from_origin().to_string(),
        Commands::Rotate { p, axis, angle } => p
            .rotate((*axis).into(), angle_unit.to_radians(*angle))
            .to_string(),
        Commands::Midpoint { a, b } => a.midpoint(b).to_string(),
        Commands::Translate { p, offset } => p
            .translate(offset.x(), offset.y(), offset.z())
            .to_string(),
        Commands::Scale { p, factor } => p.scale(*factor).to_string(),
        Commands::Dot { a, b } => a.dot_product(b).to_string(),
        Commands::Cross { a, b } => a.cross_product(b).to_string(),
        Commands::Normalize { p } => p.normalize()?.to_string(),
        Commands::Equals { a, b } => (a == b).to_string(),
        Commands::Key { p } => format!("{:?}", p.key().cell()),
    };
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let wd = match &cli.wd {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("could not determine the working directory")?,
    };
    let settings: Configs = configs::get_configs(&wd)?;

    let level = if cli.verbose || settings.verbose_mode {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let angle_unit = if cli.degrees {
        AngleUnit::Degrees
    } else {
        settings.angle_unit
    };

    let out = evaluate(&cli.command, angle_unit)?;
    println!("{}", out);
    Ok(())
}
