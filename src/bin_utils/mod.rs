//! Bootstraps the core behind line-oriented I/O: read a command line,
//! parse, dispatch, render the outcome. Kept in the library so the
//! integration tests can run whole sessions through it.

use std::io::{BufRead, BufReader, Read, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::bin_utils::line_parser::parse_line;
use crate::bin_utils::renderer::{format_timestamp, render_outcome};
use crate::processor::Atm;
use crate::router::dispatch;

pub mod line_parser;
pub mod renderer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(self) -> Result<()> {
        let mut atm = Atm::new();
        for (index, line) in BufReader::new(self.input).lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read input line {}", index + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = parse_line(&line) else {
                warn!(line = index + 1, text = %line, "skipping malformed command line");
                continue;
            };
            // stamp with the clock as the command observed it
            let stamp = format_timestamp(atm.clock().minute());
            if let Some(outcome) = dispatch(&mut atm, command) {
                writeln!(self.output, "{}", render_outcome(&stamp, &outcome))
                    .context("Failed to write output")?;
            }
        }
        Ok(())
    }
}
