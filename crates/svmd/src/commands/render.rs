/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! This module implements the `svmd render` command, which runs one
//! document through both pipelines and writes either the component markup
//! (`--to html`) or the render tree and metadata as JSON (`--to json`).

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{load_config, render_file, write_output};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Input document
    pub input: String,
    /// Output format
    pub to: String,
    /// Output file path
    pub output: Option<String>,
    /// Configuration file path
    pub config: Option<String>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    if !matches!(args.to.as_str(), "html" | "json") {
        anyhow::bail!("Unsupported output format: {} (expected html or json)", args.to);
    }

    let config = load_config(args.config.as_deref())?;
    debug!(input = %args.input, to = %args.to, "Rendering document");

    let output = render_file(&args.input, config)?;
    let content = match args.to.as_str() {
        "json" => {
            let value = serde_json::json!({
                "tree": output.tree,
                "meta": output.meta,
            });
            let mut json =
                serde_json::to_string_pretty(&value).context("Failed to serialize output")?;
            json.push('\n');
            json
        }
        _ => output.to_html()?,
    };

    write_output(args.output.as_deref(), &content)?;
    if let Some(path) = args.output.as_deref().filter(|path| *path != "-") {
        info!(output = %path, "Output created");
    }
    Ok(())
}
