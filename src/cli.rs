//! Command-line interface: argument parsing and output rendering
//!
//! Presentation layer only - it calls [`SlotExtractor::process`] and renders
//! whatever comes back. An empty result prints as "no slots"; whether the
//! origin had none or blocked us is only visible in the logs.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::core::{region_name, LocationEntry, REGIONS};
use crate::pintar::SlotExtractor;
use crate::settings::Settings;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
}

#[derive(Parser)]
#[command(
    name = "kaskel-monitor",
    version,
    about = "Monitor Bank Indonesia Kas Keliling cash-exchange slots"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit machine-readable JSON on stdout (and JSON logs on stderr)
    #[arg(long = "json", global = true)]
    pub json_output: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every location with its slot times, quota and slot ids
    Slots(RegionArgs),

    /// Per-location remaining-quota totals
    Summary(RegionArgs),

    /// Print the region reference table
    Regions,

    /// Persist the region to watch by default
    SetRegion {
        /// Numeric province code (see `regions`)
        region_id: u32,
    },
}

#[derive(Args)]
pub struct RegionArgs {
    /// Region to query instead of the persisted one
    #[arg(short, long)]
    pub region: Option<u32>,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Slots(args) => slots(args, cli.json_output).await,
        Commands::Summary(args) => summary(args, cli.json_output).await,
        Commands::Regions => regions(cli.json_output),
        Commands::SetRegion { region_id } => set_region(region_id),
    }
}

async fn slots(args: RegionArgs, json: bool) -> Result<()> {
    let settings = Settings::load();
    let region_id = args.region.unwrap_or(settings.region_id);

    let mut extractor = SlotExtractor::new()?;
    let entries = extractor.process(region_id).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let name = region_name(region_id);
    if entries.is_empty() {
        println!("No slots available for {}.", name);
        return Ok(());
    }

    println!("Slots for {} ({} locations)", name, entries.len());
    render_slot_pages(&entries, settings.page_size.max(1));
    Ok(())
}

fn render_slot_pages(entries: &[LocationEntry], page_size: usize) {
    let total_pages = entries.len().div_ceil(page_size);

    for (page, chunk) in entries.chunks(page_size).enumerate() {
        if total_pages > 1 {
            println!("\n-- page {}/{} --", page + 1, total_pages);
        }
        for entry in chunk {
            println!();
            println!(
                "{} | {} | {}",
                entry.location_name, entry.open_date, entry.kaskel_id
            );
            for slot in &entry.slots {
                println!(
                    "  {}  remaining {}  id {}",
                    slot.display_time, slot.remaining_quota, slot.slot_id
                );
            }
        }
    }
}

async fn summary(args: RegionArgs, json: bool) -> Result<()> {
    let settings = Settings::load();
    let region_id = args.region.unwrap_or(settings.region_id);

    let mut extractor = SlotExtractor::new()?;
    let entries = extractor.process(region_id).await;

    if json {
        let totals: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "location_name": e.location_name,
                    "total_remaining_quota": e.total_remaining_quota,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    let name = region_name(region_id);
    if entries.is_empty() {
        println!("No slots available for {}.", name);
        return Ok(());
    }

    println!("Summary for {}", name);
    for entry in &entries {
        println!("  {}: {}", entry.location_name, entry.total_remaining_quota);
    }
    let grand_total: i64 = entries.iter().map(|e| e.total_remaining_quota).sum();
    println!("  Total: {}", grand_total);
    Ok(())
}

fn regions(json: bool) -> Result<()> {
    if json {
        let table: Vec<_> = REGIONS
            .iter()
            .map(|(code, name)| serde_json::json!({ "code": code, "name": name }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for (code, name) in REGIONS {
        println!("{:>3}  {}", code, name);
    }
    Ok(())
}

fn set_region(region_id: u32) -> Result<()> {
    let mut settings = Settings::load();
    settings.region_id = region_id;
    settings.save()?;

    println!("Region set to {} ({})", region_id, region_name(region_id));
    Ok(())
}
