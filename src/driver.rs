//! File driver: read the source program, translate it, write the result.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::translate::{translate_document, TranslationResult};

/// Run one translation as described by `config`
pub fn run(config: &Config) -> Result<TranslationResult> {
    let input_path = config.input_path();
    let output_path = config.output_path();

    let content = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    log::info!("Reading lines from {}", input_path.display());
    let result = translate_document(&content, &config.options);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(&output_path, &result.text)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    log::info!(
        "Translation completed: {} lines read, {} emitted, {} diagnostics, written to {}",
        result.lines_read,
        result.lines_emitted,
        result.diagnostics.len(),
        output_path.display()
    );
    log::debug!("{}", result.state);

    Ok(result)
}
