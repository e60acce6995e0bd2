//! Read and inspect inventory save files
//!
//! Decodes a save written by the runtime and displays its slots.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use inventory_content::ContentFactory;
use inventory_core::{InventoryContainer, ItemRegistry};
use inventory_runtime::repository::codec;

use crate::dirs;

/// Read and inspect an inventory save file
#[derive(Parser)]
pub struct ReadSave {
    /// Save file to read (defaults to the configured save location)
    #[arg(short, long, value_name = "FILE")]
    path: Option<PathBuf>,

    /// Item catalog used to show item types (RON)
    #[arg(short, long, value_name = "FILE", env = "INVENTORY_ITEM_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print buff details for each slot
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per slot plus totals
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadSave {
    pub fn execute(self) -> Result<()> {
        let save_file = self.path.unwrap_or_else(dirs::save_file);

        if !save_file.exists() {
            anyhow::bail!(
                "Save file not found: {}\n\nHint: set INVENTORY_SAVE_DIR or pass --path",
                save_file.display()
            );
        }

        let bytes = std::fs::read(&save_file)
            .with_context(|| format!("Failed to read save file: {}", save_file.display()))?;

        let container = codec::decode(&bytes)
            .with_context(|| format!("Failed to decode save file: {}", save_file.display()))?;

        let registry = self
            .catalog
            .as_deref()
            .map(ContentFactory::registry_from)
            .transpose()?;

        println!("{} {}", style("Save File:").bold().cyan(), save_file.display());
        println!(
            "{} {}",
            style("File Size:").bold().cyan(),
            format_bytes(bytes.len())
        );
        println!(
            "{} {}",
            style("Format Version:").bold().cyan(),
            codec::FORMAT_VERSION
        );
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&container, registry.as_ref(), self.verbose),
            OutputFormat::Json => print_json(&container)?,
            OutputFormat::Debug => print_debug(&container),
        }

        Ok(())
    }
}

fn print_summary(container: &InventoryContainer, registry: Option<&ItemRegistry>, verbose: bool) {
    println!("{}", style("=== Inventory Summary ===").bold().green());
    println!();
    println!(
        "  Slots: {} ({} used)",
        container.capacity(),
        container.used_slots()
    );
    println!();

    println!("{}", style("Slots:").bold().yellow());
    for (index, slot) in container.slots().iter().enumerate() {
        if slot.is_empty() {
            println!("  {:>3}  {}", index, style(slot.signature(false)).dim());
            continue;
        }

        let item_type = slot
            .item
            .id
            .and_then(|id| registry.and_then(|registry| registry.resolve(id)))
            .map(|definition| definition.item_type.to_string());
        match item_type {
            Some(item_type) => println!(
                "  {:>3}  {}  {}",
                index,
                slot.signature(verbose),
                style(item_type).dim()
            ),
            None => println!("  {:>3}  {}", index, slot.signature(verbose)),
        }
    }
    println!();
}

fn print_json(container: &InventoryContainer) -> Result<()> {
    let json =
        serde_json::to_string_pretty(container).context("Failed to serialize save to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(container: &InventoryContainer) {
    println!("{:#?}", container);
}

fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
