//! Command implementations behind the `glazekit` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glazekit_core::{ProjectFile, TypeCatalog, WindowCategory, WindowSpec};
use glazekit_designer::{to_svg, Drawing, DrawingEngine};
use glazekit_settings::{Config, OutputFormat};
use tracing::info;

/// Read a single window record or a whole project file
pub fn load_records(path: &Path) -> Result<Vec<WindowSpec>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    if value.get("windows").is_some() {
        let project = ProjectFile::from_json(&text)
            .with_context(|| format!("Invalid project file {}", path.display()))?;
        info!(
            "Loaded project '{}' with {} windows",
            project.project.name,
            project.windows.len()
        );
        Ok(project.windows)
    } else {
        let spec: WindowSpec = serde_json::from_value(value)
            .with_context(|| format!("Invalid window record {}", path.display()))?;
        Ok(vec![spec])
    }
}

/// File name for the `index`th record: `01-kitchen.svg`
pub fn output_file_name(spec: &WindowSpec, index: usize, format: OutputFormat) -> String {
    let source = if spec.name.trim().is_empty() {
        spec.window_type.as_str()
    } else {
        spec.name.as_str()
    };

    let mut slug = String::new();
    for c in source.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "window" } else { slug };

    format!("{:02}-{}.{}", index + 1, slug, format.extension())
}

/// Serialize one drawing in the chosen format
pub fn encode_drawing(drawing: &Drawing, format: OutputFormat, config: &Config) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(to_svg(drawing, &config.output.svg)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(drawing).context("Failed to serialize drawing")
        }
    }
}

/// Render every record into `dir`, returning the written paths
pub fn render_to_dir(
    records: &[WindowSpec],
    config: &Config,
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let engine =
        DrawingEngine::new(config.drawing.clone()).context("Invalid drawing settings")?;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(records.len());
    for (index, spec) in records.iter().enumerate() {
        let drawing = engine
            .render(spec)
            .with_context(|| format!("Failed to draw '{}' (id {})", spec.name, spec.id))?;
        if drawing.used_fallback {
            info!("'{}' drawn as '{}'", spec.name, drawing.type_id);
        }

        let path = dir.join(output_file_name(spec, index, format));
        let content = encode_drawing(&drawing, format, config)?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Plain-text listing of catalog entries
pub fn catalog_table(catalog: &TypeCatalog, category: Option<WindowCategory>) -> String {
    let mut out = format!(
        "{:<18} {:<30} {:<7} {:>11} {:>11}\n",
        "ID", "NAME", "KIND", "WIDTH", "HEIGHT"
    );
    let entries = catalog
        .entries()
        .filter(|e| category.is_none_or(|c| e.category == c));
    for entry in entries {
        out.push_str(&format!(
            "{:<18} {:<30} {:<7} {:>11} {:>11}\n",
            entry.id,
            entry.name,
            entry.category.as_str(),
            format!("{}-{}", entry.min_width, entry.max_width),
            format!("{}-{}", entry.min_height, entry.max_height),
        ));
    }
    out
}

/// Write the default configuration to `path`, refusing to overwrite
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
