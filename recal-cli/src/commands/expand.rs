use anyhow::Result;
use clap::Args;
use recal_core::event::{Event, EventList, parse_date, parse_time};
use recal_core::recurrence::{DEFAULT_HORIZON, Repeat, RepeatKind, expand_repeating_event};
use uuid::Uuid;

use crate::render;

#[derive(Args)]
pub struct ExpandArgs {
    pub title: String,

    /// Anchor date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Start time (HH:MM)
    #[arg(long, default_value = "09:00")]
    pub start: String,

    /// End time (HH:MM)
    #[arg(long, default_value = "10:00")]
    pub end: String,

    /// How the event repeats: daily, weekly, monthly or yearly
    #[arg(short, long, default_value = "none")]
    pub repeat: String,

    /// Repeat every N days/weeks/months/years
    #[arg(short, long, default_value_t = 1)]
    pub interval: u32,

    /// Last date to repeat until (YYYY-MM-DD)
    #[arg(short, long)]
    pub until: Option<String>,

    /// Latest date instances may be generated for (defaults to 2025-12-31)
    #[arg(long)]
    pub horizon: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Minutes before each instance to notify
    #[arg(long, default_value_t = 10)]
    pub notify: i64,

    /// Print the batch-create JSON payload instead of a listing
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExpandArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let start_time = parse_time(&args.start)?;
    let end_time = parse_time(&args.end)?;
    let until = args.until.as_deref().map(parse_date).transpose()?;
    let horizon = args
        .horizon
        .as_deref()
        .map(parse_date)
        .transpose()?
        .unwrap_or(DEFAULT_HORIZON);

    // Unknown repeat kinds degrade to "none", same as records from the store.
    let kind = RepeatKind::from(args.repeat);
    let repeat = Repeat::new(kind, args.interval, until);

    let base = Event {
        id: Uuid::new_v4().to_string(),
        title: args.title,
        date,
        start_time,
        end_time,
        description: args.description.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        repeat: repeat.clone(),
        notification_time: args.notify,
    };

    let instances = expand_repeating_event(&base, &repeat, horizon)?;

    if args.json {
        // The store's batch-create payload shape.
        let payload = EventList { events: instances };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render::print_instances(&instances);

    Ok(())
}
