//! Query commands and the run loop.
//!
//! Parsing command text is left to the caller; this module starts from
//! already-typed [`Command`] values.

use std::fmt;

use cg_core::{BoundingBox, Point, Street};
use cg_route::Router;

use crate::block::Face;
use crate::processor::QueryProcessor;
use crate::QueryResult;

/// One query-file instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `o?`: resolve an address into a register.
    ResolveAddress { register: String, block: String, face: Face, number: f64 },
    /// `p?`: shortest and fastest path between two registers.
    BuildPath { name: String, origin: String, destination: String },
    /// `shw`: emit a path pair with colours.
    ShowPath { name: String, shortest_color: String, fastest_color: String },
    /// `alag`: close the streets around an area.
    CloseRegion { region: i64, area: BoundingBox },
    /// `dren`: reopen a closed area.
    ReopenRegion { region: i64 },
    /// `join`: connect the end of one path to the start of another.
    JoinPaths { name: String, first: String, second: String },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ResolveAddress { register, block, face, number } => {
                write!(f, "o? {register} {block} {face} {number}")
            }
            Command::BuildPath { name, origin, destination } => write!(f, "p? {name} {origin} {destination}"),
            Command::ShowPath { name, shortest_color, fastest_color } => {
                write!(f, "shw {name} {shortest_color} {fastest_color}")
            }
            Command::CloseRegion { region, area } => {
                write!(f, "alag {region} {} {} {} {}", area.x, area.y, area.w, area.h)
            }
            Command::ReopenRegion { region } => write!(f, "dren {region}"),
            Command::JoinPaths { name, first, second } => write!(f, "join {name} {first} {second}"),
        }
    }
}

/// Outcome counts of [`QueryProcessor::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed:    usize,
}

impl<R: Router<Point, Street>> QueryProcessor<R> {
    /// Execute a single command.
    pub fn execute(&mut self, command: &Command) -> QueryResult<()> {
        match command {
            Command::ResolveAddress { register, block, face, number } => {
                self.resolve_address(register, block, *face, *number).map(|_| ())
            }
            Command::BuildPath { name, origin, destination } => {
                self.build_named_path(name, origin, destination)
            }
            Command::ShowPath { name, shortest_color, fastest_color } => {
                self.show_path(name, shortest_color, fastest_color)
            }
            Command::CloseRegion { region, area } => self.close_region(*region, *area).map(|_| ()),
            Command::ReopenRegion { region } => self.reopen_region(*region).map(|_| ()),
            Command::JoinPaths { name, first, second } => self.join_paths(name, first, second),
        }
    }

    /// Execute every command in order.  A failing command is logged and
    /// skipped; the loop never stops early.
    pub fn run<I>(&mut self, commands: I) -> RunSummary
    where
        I: IntoIterator<Item = Command>,
    {
        let mut summary = RunSummary::default();
        for command in commands {
            match self.execute(&command) {
                Ok(()) => summary.succeeded += 1,
                Err(err) => {
                    tracing::error!(%command, %err, "command skipped");
                    summary.failed += 1;
                }
            }
        }
        tracing::info!(succeeded = summary.succeeded, failed = summary.failed, "query run finished");
        summary
    }
}
