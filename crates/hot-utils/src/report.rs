//! Summary of everything counted so far.
//!
//! A [`Report`] snapshots the counters of every [`ValueLog`](crate::ValueLog)
//! specialization used in the process together with the memory counters. It
//! prints as a table or serializes to JSON.

use std::fmt;

use colored::*;
use prettytable::{color, Attr, Cell, Row, Table};
use serde::Serialize;

use crate::memory::{self, Counters};
use crate::value_log::{CounterRegistry, LogCounts};
use crate::Result;

const HEADERS: [&str; 5] = ["Wrapper", "copy_ctor", "copy_assign", "move_ctor", "move_assign"];

/// Counts of one wrapper specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperCounts {
    pub name: String,
    #[serde(flatten)]
    pub counts: LogCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sorted by name.
    pub wrappers: Vec<WrapperCounts>,
    pub memory: Counters,
}

impl Report {
    pub fn capture() -> Self {
        Self::from_registry(CounterRegistry::global())
    }

    pub fn from_registry(registry: &CounterRegistry) -> Self {
        let wrappers = registry
            .snapshot()
            .into_iter()
            .map(|(name, counts)| WrapperCounts { name, counts })
            .collect();

        Self {
            wrappers,
            memory: memory::counters(),
        }
    }

    pub fn wrapper(&self, name: &str) -> Option<&LogCounts> {
        self.wrappers
            .iter()
            .find(|wrapper| wrapper.name == name)
            .map(|wrapper| &wrapper.counts)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn table(&self, use_colors: bool) -> Table {
        let mut table = Table::new();

        let header_cells: Vec<Cell> = HEADERS
            .iter()
            .map(|header| {
                if use_colors {
                    Cell::new(header)
                        .with_style(Attr::Bold)
                        .with_style(Attr::ForegroundColor(color::CYAN))
                } else {
                    Cell::new(header).with_style(Attr::Bold)
                }
            })
            .collect();
        table.add_row(Row::new(header_cells));

        for wrapper in &self.wrappers {
            let counts = &wrapper.counts;
            table.add_row(Row::new(vec![
                Cell::new(&shorten_type_name(&wrapper.name)),
                Cell::new(&counts.copy_ctor.to_string()),
                Cell::new(&counts.copy_assign.to_string()),
                Cell::new(&counts.move_ctor.to_string()),
                Cell::new(&counts.move_assign.to_string()),
            ]));
        }

        table
    }

    /// Prints the header line and the table to stdout.
    pub fn print(&self) {
        let use_colors = std::env::var("NO_COLOR").is_err();
        colored::control::set_override(use_colors);

        println!(
            "{} {} wrappers, memory: {}",
            "[hot_utils]".blue().bold(),
            self.wrappers.len(),
            format_memory(&self.memory).yellow().bold()
        );
        self.table(use_colors).printstd();

        colored::control::unset_override();
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[hot_utils] memory: {}", format_memory(&self.memory))?;
        write!(f, "{}", self.table(false))
    }
}

fn format_memory(counters: &Counters) -> String {
    format!(
        "{} allocs, {} frees, {} bytes",
        counters.allocs, counters.frees, counters.bytes
    )
}

/// Drops module paths from every type in `name`:
/// `CopyLog<alloc::string::String>` becomes `CopyLog<String>`.
pub fn shorten_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;

    for (i, c) in name.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&') {
            out.push_str(last_path_segment(&name[segment_start..i]));
            out.push(c);
            segment_start = i + c.len_utf8();
        }
    }
    out.push_str(last_path_segment(&name[segment_start..]));

    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
