use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use sprout::api::{CmdMessage, ConfigAction, MessageLevel, SproutApi, SproutPaths};
use sprout::error::{Result, SproutError};
use sprout::index::DisplayPlant;
use sprout::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SproutApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            every,
            watered,
        }) => handle_add(&mut ctx, name, every, watered),
        Some(Commands::Water { indexes }) => handle_water(&mut ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Names) => handle_names(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::List) | None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    let store = FileStore::new(data_dir.clone());
    let paths = SproutPaths { data: data_dir };
    let api = SproutApi::new(store, paths);

    Ok(AppContext { api })
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "sprout", "sprout")
        .ok_or_else(|| SproutError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    every: String,
    watered: Option<String>,
) -> Result<()> {
    let last_watered = match watered {
        Some(s) => Some(parse_watered_date(&s)?),
        None => None,
    };

    let result = ctx.api.add_plant(&name, &every, last_watered)?;
    print_messages(&result.messages);
    Ok(())
}

/// A date-only input becomes midnight UTC, matching the stored instants.
fn parse_watered_date(s: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SproutError::Api(format!("Invalid date: {} (expected YYYY-MM-DD)", s)))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_plants()?;
    print_plants(&result.listed_plants);
    print_messages(&result.messages);
    Ok(())
}

fn handle_water(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.water_plants(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_plants(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_names(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config(ConfigAction::ShowAll)?;
    if let Some(config) = &result.config {
        for name in &config.names {
            println!("{}", name);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("names = {}", config.get("names").unwrap_or_default());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const TIME_WIDTH: usize = 14;

fn print_plants(plants: &[DisplayPlant]) {
    if plants.is_empty() {
        println!("No plants yet. Add one with: sprout add <name> --every <days>");
        return;
    }

    let name_width = plants
        .iter()
        .map(|dp| dp.plant.name.width())
        .max()
        .unwrap_or(0);

    for dp in plants {
        let name_padding = " ".repeat(name_width - dp.plant.name.width());
        let every = format!("every {:>3}d", dp.plant.water_every);
        let ago = format_time_ago(dp.plant.last_watered);
        let next = dp.schedule.next_watering.format("%Y-%m-%d");

        let status = if dp.schedule.needs_water {
            "water now".red().bold()
        } else {
            "ok".green()
        };

        println!(
            "{:>3}. {}{}  {}  watered {}  next {}  {}",
            dp.index,
            dp.plant.name,
            name_padding,
            every.dimmed(),
            ago.dimmed(),
            next,
            status
        );
    }
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
