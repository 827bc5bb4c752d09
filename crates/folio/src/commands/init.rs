//! Initialize a folio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    write_starter(config_path)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio build' to generate the overview page.");

    Ok(())
}

/// Write the starter project file and an overview next to it.
fn write_starter(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create project directory")?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let overview_path = config_path.with_file_name("overview.md");
    fs::write(&overview_path, DEFAULT_OVERVIEW).context("Failed to write overview.md")?;
    tracing::info!("Created {}", overview_path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# folio project

[docs]
# Output directory for the generated page
output = "dist"

# Title shown at the top of the overview page (may contain markup)
doc_title = "My Project API"

# Overview comment, relative to this file
overview = "overview.md"

# Emit <meta name="keywords"> elements
keywords = true

[navigation]
no_tree = false
no_help = false

[[packages]]
name = "com.example"
summary = "Entry points of the example library."
"#;

const DEFAULT_OVERVIEW: &str = r#"---
description: API reference for My Project
---

This is the overview of **My Project**. Replace it with an introduction to
your API.
"#;
