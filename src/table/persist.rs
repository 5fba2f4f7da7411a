//! JSON persisted form of a [`Table`]: `{ "options": {...}, "cells": [[...]] }`.
//!
//! Size policies are written as numbers or the string `"auto"`. Loading enforces the same
//! invariants as [`TableBuilder::build`]: a rectangular cell grid and resolvable axes.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{TableError, TableResult},
    table::builder::TableBuilder,
    table::model::Table,
};

impl Table {
    /// Parse and validate a table from a JSON string.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let table: Table = serde_json::from_str(json)
            .map_err(|e| TableError::serde(format!("parse table JSON: {e}")))?;
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a table from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> TableResult<Self> {
        let table: Table = serde_json::from_reader(r)
            .map_err(|e| TableError::serde(format!("parse table JSON: {e}")))?;
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open table JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> TableResult<String> {
        serde_json::to_string(self).map_err(|e| TableError::serde(format!("encode table: {e}")))
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> TableResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TableError::serde(format!("encode table: {e}")))
    }

    /// Write indented JSON to `w`.
    pub fn to_writer<W: Write>(&self, w: W) -> TableResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| TableError::serde(format!("encode table: {e}")))
    }

    /// Write the table as pretty JSON to `path`, replacing any existing file.
    pub fn to_path(&self, path: impl AsRef<Path>) -> TableResult<()> {
        let path = path.as_ref();
        let f = File::create(path)
            .with_context(|| format!("create table JSON '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        self.to_writer(&mut w)?;
        w.flush()
            .with_context(|| format!("flush table JSON '{}'", path.display()))?;
        Ok(())
    }
}

impl TableBuilder {
    /// Load a persisted table straight into a builder.
    pub fn from_json(json: &str) -> TableResult<Self> {
        Table::from_json(json).map(Table::into_builder)
    }

    /// Build, validate and encode in one step.
    pub fn build_json(&self) -> TableResult<String> {
        self.build()?.to_json()
    }
}
