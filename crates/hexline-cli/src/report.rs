//! Rendering a computed line for the terminal or for other programs.

use std::io::Write;

use hexline_topology::Coordinate;
use serde::Serialize;

use crate::config::Method;
use crate::error::Result;

/// A line between two cells together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub start: Coordinate,
    pub end: Coordinate,
    pub distance: u64,
    pub method: Method,
    pub path: Vec<Coordinate>,
}

impl PathReport {
    /// Compute the line from `start` to `end`.
    pub fn new(method: Method, start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            end,
            distance: start.hex_distance(&end),
            method,
            path: method.line(start, end),
        }
    }

    /// Human readable listing, one step per line.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "Distance: {}", self.distance)?;
        writeln!(out, "Generated Path ({}):", self.method)?;
        for (step, cell) in self.path.iter().enumerate() {
            writeln!(out, "Step {}: {}", step, cell)?;
        }
        Ok(())
    }

    /// Single JSON document followed by a newline.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
