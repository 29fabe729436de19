use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use recal_core::event::EventList;
use recal_core::series;

use crate::render;

pub fn run(id: &str, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let list: EventList = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events in {}", file.display()))?;

    let base = series::base_id(id);
    let mut instances = series::series_instances(&list.events, base);
    instances.sort_by_key(|e| e.date);

    if instances.is_empty() {
        println!("{}", format!("No events found for series '{}'", base).dimmed());
        return Ok(());
    }

    let label = if instances.len() == 1 {
        "event"
    } else {
        "events"
    };
    println!(
        "{} {}",
        base.bold(),
        format!("({} {})", instances.len(), label).dimmed()
    );
    for event in &instances {
        println!("{}", render::event_line(event));
    }

    Ok(())
}
