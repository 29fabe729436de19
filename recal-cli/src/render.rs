//! Terminal rendering for recal output.

use owo_colors::OwoColorize;
use recal_core::Event;

/// Render one event as an indented listing line
/// (e.g. `  2025-01-06 Mon 09:00-10:00 [event-1_2025-01-06]`).
pub fn event_line(event: &Event) -> String {
    let time = format!(
        "{}-{}",
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M")
    );
    format!(
        "  {} {} {} {}",
        event.date,
        event.date.format("%a"),
        time.dimmed(),
        format!("[{}]", event.id).dimmed()
    )
}

/// Print an expanded instance listing under a title summary line.
pub fn print_instances(instances: &[Event]) {
    if instances.is_empty() {
        println!("{}", "No instances generated".dimmed());
        return;
    }

    let first = &instances[0];
    let label = if instances.len() == 1 {
        "instance"
    } else {
        "instances"
    };
    println!(
        "{} {}",
        first.title.bold(),
        format!("({} {})", instances.len(), label).dimmed()
    );

    for event in instances {
        println!("{}", event_line(event));
    }
}
