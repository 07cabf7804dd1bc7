/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Meta command implementation
 */

//! Meta command implementation.
//!
//! `svmd meta` processes a document and prints only the collected page
//! metadata, for site builders that index pages without rendering them.

use anyhow::{Context, Result};

use super::{load_config, render_file, write_output};

/// Arguments for the meta command
#[derive(Debug)]
pub struct MetaArgs {
    /// Input document
    pub input: String,
    /// Configuration file path
    pub config: Option<String>,
}

/// Execute the meta command
pub fn execute(args: MetaArgs) -> Result<()> {
    let json = meta_json(&args)?;
    write_output(None, &json)
}

fn meta_json(args: &MetaArgs) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let output = render_file(&args.input, config)?;
    let mut json =
        serde_json::to_string_pretty(&output.meta).context("Failed to serialize metadata")?;
    json.push('\n');
    Ok(json)
}
