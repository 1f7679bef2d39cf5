//! Output rendering
//!
//! Collections are printed either as a borderless text table or as pretty
//! JSON. Every printable resource implements [`Tabular`], declaring its
//! columns once and producing one key-to-value row per item.

mod displayers;

use crate::error::{Error, Result};
use crate::types::OutputFormat;
use comfy_table::{presets, Table};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// Cell values of one item, keyed by column key
pub type Row = HashMap<&'static str, String>;

/// A table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Name used with `--format`
    pub key: &'static str,
    /// Header printed above the column
    pub header: &'static str,
}

impl Column {
    /// Create a column
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self { key, header }
    }
}

/// A resource that can be printed as a table row
pub trait Tabular: Serialize {
    /// All columns, in default order
    fn columns() -> &'static [Column];

    /// Cell values of this item
    fn row(&self) -> Row;
}

/// How to render a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Text table or JSON
    pub format: OutputFormat,
    /// Column keys to print, in order; all columns when unset
    pub columns: Option<Vec<String>>,
    /// Omit the header line
    pub no_header: bool,
}

impl DisplayOptions {
    /// Create options for the given output format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Select columns from a comma-separated list such as `ID,Name`
    #[must_use]
    pub fn with_format(mut self, format: Option<&str>) -> Self {
        self.columns = format.map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect()
        });
        self
    }

    /// Hide or show the header line
    #[must_use]
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }
}

/// Render `items` to a string
pub fn render<T: Tabular>(items: &[T], options: &DisplayOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Text => render_table(items, options),
    }
}

/// Render `items` and write them to `out` followed by a newline
pub fn write<T: Tabular, W: Write>(out: &mut W, items: &[T], options: &DisplayOptions) -> Result<()> {
    let rendered = render(items, options)?;
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Resolve the selected columns against the resource's column set
fn select_columns<T: Tabular>(options: &DisplayOptions) -> Result<Vec<Column>> {
    let all = T::columns();
    let Some(keys) = &options.columns else {
        return Ok(all.to_vec());
    };

    keys.iter()
        .map(|key| {
            all.iter()
                .find(|c| c.key == key)
                .copied()
                .ok_or_else(|| Error::invalid_argument(format!("unknown column `{key}`")))
        })
        .collect()
}

fn render_table<T: Tabular>(items: &[T], options: &DisplayOptions) -> Result<String> {
    let columns = select_columns::<T>(options)?;

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    if !options.no_header {
        table.set_header(columns.iter().map(|c| c.header));
    }

    for item in items {
        let mut row = item.row();
        table.add_row(
            columns
                .iter()
                .map(|c| row.remove(c.key).unwrap_or_default()),
        );
    }

    let rendered = table
        .lines()
        .map(|line| {
            let line = line.strip_prefix(' ').unwrap_or(&line);
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(rendered)
}
