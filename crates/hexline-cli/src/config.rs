//! Command line and environment configuration.
//!
//! Flags override environment variables, which override defaults:
//!
//! | flag       | env              | default |
//! |------------|------------------|---------|
//! | `--method` | `HEXLINE_METHOD` | `axial` |
//! | `--format` | `HEXLINE_FORMAT` | `text`  |

use std::fmt;
use std::str::FromStr;

use hexline_topology::{cube_line, interpolate, Coordinate};
use serde::Serialize;

use crate::error::{Error, Result};

/// How intermediate samples are snapped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Per-axis rounding, ties to even
    #[default]
    Axial,
    /// Three-axis cube rounding
    Cube,
}

impl Method {
    /// Generate the line between two cells with this method.
    pub fn line(self, start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        match self {
            Self::Axial => interpolate(start, end),
            Self::Cube => cube_line(start, end),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axial" => Ok(Self::Axial),
            "cube" => Ok(Self::Cube),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axial => f.write_str("axial"),
            Self::Cube => f.write_str("cube"),
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Settings that apply to every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Line snapping method
    pub method: Method,
    /// Output encoding
    pub format: Format,
}

impl CliConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(method) = lookup("HEXLINE_METHOD") {
            config.method = method.parse()?;
        }
        if let Some(format) = lookup("HEXLINE_FORMAT") {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit successfully
    Help,
    /// Draw a line between two cells
    Line {
        config: CliConfig,
        start: Coordinate,
        end: Coordinate,
    },
}

/// Parse arguments (without the program name) on top of `base`.
///
/// Anything starting with `--` is a flag; everything else, including
/// negative coordinates such as `-3,4`, is positional.
pub fn parse_args<I>(args: I, base: CliConfig) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = base;
    let mut positional = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--method" => config.method = flag_value(&mut args, "--method")?.parse()?,
            "--format" => config.format = flag_value(&mut args, "--format")?.parse()?,
            "--json" => config.format = Format::Json,
            "--cube" => config.method = Method::Cube,
            flag if flag.starts_with("--") => {
                return Err(Error::Usage(format!("unknown flag {}", flag)));
            }
            other => positional.push(other.to_string()),
        }
    }

    match positional.as_slice() {
        [start, end] => Ok(Command::Line {
            config,
            start: start.parse()?,
            end: end.parse()?,
        }),
        _ => Err(Error::Usage(format!(
            "expected <start> and <end>, got {} positional argument(s)",
            positional.len()
        ))),
    }
}

fn flag_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| Error::Usage(format!("{} requires a value", flag)))
}
