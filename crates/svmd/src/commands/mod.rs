//! Command implementations for the svmd CLI
//!
//! Each command module handles the CLI interface and delegates to
//! svmd-core for the document pipeline.

pub mod meta;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use svmd_core::{DocumentInfo, DocumentProcessor, PipelineConfig, RenderOutput};

/// Load the pipeline configuration, falling back to the defaults.
pub fn load_config(path: Option<&str>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load configuration from {}", path)),
        None => Ok(PipelineConfig::default()),
    }
}

/// Parse and process one Markdown source.
pub fn render_markdown(
    source: &str,
    document: &DocumentInfo,
    config: PipelineConfig,
) -> Result<RenderOutput> {
    let tree = comrak_to_svmd::parse_markdown(source);
    let processor = DocumentProcessor::new(config);
    processor
        .process(tree, document)
        .context("Failed to process document")
}

/// Read an input file and run it through the pipeline.
pub fn render_file(input: &str, config: PipelineConfig) -> Result<RenderOutput> {
    let input_path = Path::new(input);
    if !input_path.exists() {
        anyhow::bail!("Input path does not exist: {}", input_path.display());
    }

    let source = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    render_markdown(&source, &DocumentInfo::from_path(input_path), config)
}

/// Write command output to a file, or stdout when no file (or `-`) is given.
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) if path != "-" => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output to {}", path)),
        _ => {
            print!("{}", content);
            Ok(())
        }
    }
}
