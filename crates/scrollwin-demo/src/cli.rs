use std::io::Write;

use clap::{Args, Parser, Subcommand};
use scrollwin_core::{InfiniteScrollList, PageCursor, PageDescriptor};
use serde::Serialize;

use crate::config::{DemoConfig, ListArgs};
use crate::error::Result;
use crate::input::parse_items_total;
use crate::script::{ScriptEvent, parse_script};
use crate::surface::{SlotSurface, SurfaceSnapshot};

#[derive(Debug, Parser)]
#[command(
    name = "scrollwin-demo",
    about = "Drive a windowed infinite-scroll list from scripted edge events",
    version
)]
pub struct Cli {
    /// Emit JSON lines instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log cursor and window decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set a total, replay an edge-event script, print every paint.
    Run(RunArgs),

    /// Print the page plan for a total.
    Plan(PlanArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Total item count (non-negative integer).
    #[arg(long)]
    pub total: String,

    /// Edge events, e.g. "b*3,t,total=500,b".
    #[arg(long, default_value = "")]
    pub script: String,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Total item count (non-negative integer).
    #[arg(long)]
    pub total: String,

    #[command(flatten)]
    pub list: ListArgs,
}

/// One line of `run` output.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    /// `None` for the initial total.
    pub event: Option<ScriptEvent>,
    pub painted: bool,
    pub page: usize,
    pub total_pages: usize,
    pub generation: u64,
    pub surface: SurfaceSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub events: usize,
    pub paints: usize,
    pub resets: usize,
    pub final_offset: u32,
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Run(args) => {
            let summary = run_script(&args, cli.json, out)?;
            if cli.json {
                writeln!(out, "{}", serde_json::to_string(&summary)?)?;
            } else {
                writeln!(
                    out,
                    "done: {} events, {} paints, {} resets, offset {}",
                    summary.events, summary.paints, summary.resets, summary.final_offset
                )?;
            }
            Ok(())
        }
        Commands::Plan(args) => {
            let config = DemoConfig::resolve(&args.list)?;
            let total = parse_items_total(&args.total)?;
            let (page_size, _) = config.list.validate()?;
            let plan = page_plan(total, page_size);
            if cli.json {
                writeln!(out, "{}", serde_json::to_string(&plan)?)?;
            } else {
                for page in &plan {
                    writeln!(out, "page {}: {} items", page.index, page.size)?;
                }
                writeln!(out, "{} pages", plan.len())?;
            }
            Ok(())
        }
    }
}

/// Every page a forward traversal requests, in order.
#[must_use]
pub fn page_plan(total: usize, page_size: std::num::NonZeroUsize) -> Vec<PageDescriptor> {
    let mut cursor = PageCursor::new(page_size);
    cursor.set_total(total);
    std::iter::from_fn(|| cursor.advance_forward()).collect()
}

/// Execute a `run` command, writing one report per event.
pub fn run_script(args: &RunArgs, json: bool, out: &mut impl Write) -> Result<RunSummary> {
    let config = DemoConfig::resolve(&args.list)?;
    let total = parse_items_total(&args.total)?;
    let events = parse_script(&args.script)?;

    let surface = SlotSurface::new(config.list.page_size);
    let mut list = InfiniteScrollList::new(config.list.clone(), surface)?;
    list.set_items_total(total)?;
    emit(out, json, &report(0, None, total > 0, &list, config.preview))?;

    for (idx, &event) in events.iter().enumerate() {
        let painted = match event {
            ScriptEvent::Bottom => list.on_bottom_reached(),
            ScriptEvent::Top => list.on_top_reached(),
            ScriptEvent::Total(total) => {
                list.set_items_total(total)?;
                total > 0
            }
        };
        emit(
            out,
            json,
            &report(idx + 1, Some(event), painted, &list, config.preview),
        )?;
    }

    let surface = list.surface();
    Ok(RunSummary {
        events: events.len(),
        paints: surface.paints(),
        resets: surface.resets(),
        final_offset: surface.offset(),
    })
}

fn report(
    step: usize,
    event: Option<ScriptEvent>,
    painted: bool,
    list: &InfiniteScrollList<SlotSurface>,
    preview: usize,
) -> StepReport {
    StepReport {
        step,
        event,
        painted,
        page: list.cursor().current_page(),
        total_pages: list.cursor().total_pages(),
        generation: list.generation(),
        surface: list.surface().snapshot(preview),
    }
}

fn emit(out: &mut impl Write, json: bool, report: &StepReport) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
        return Ok(());
    }
    let event = report
        .event
        .map_or_else(|| "init".to_string(), |event| event.to_string());
    let page_label = |page: Option<usize>| page.map_or_else(|| "--".to_string(), |p| format!("p{p}"));
    let surface = &report.surface;
    writeln!(
        out,
        "#{:<3} {:<12} {:<7} page {}/{} offset {:<6} above {:<5} [{}] below {:<5} [{}]",
        report.step,
        event,
        if report.painted { "painted" } else { "-" },
        report.page,
        report.total_pages,
        surface.offset,
        page_label(surface.above_page),
        surface.above_preview,
        page_label(surface.below_page),
        surface.below_preview,
    )?;
    Ok(())
}
