mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use liuren_base::{Branch, Pillar, SpiritDirection, Stem, place_spirits};
use liuren_chart::{ChartInput, QuestionCategory, TimeOfDay, compute_chart};
use liuren_config::LiurenConfig;

#[derive(Parser)]
#[command(name = "liuren", about = "Da Liu Ren chart CLI")]
struct Cli {
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Extra TOML config file, merged above the project config
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a full chart
    Chart {
        /// Day pillar, e.g. 甲子 or jia-zi
        #[arg(long)]
        day: Pillar,
        /// Hour pillar
        #[arg(long)]
        hour: Pillar,
        /// Cast as a night chart
        #[arg(long, conflicts_with = "at")]
        night: bool,
        /// Hour of day (0-23), resolved against the configured daylight window
        #[arg(long)]
        at: Option<u8>,
        /// Seed the Noble Deity from this month-general branch
        #[arg(long)]
        month_general: Option<Branch>,
        /// Lay spirits counter-clockwise
        #[arg(long)]
        counter_clockwise: bool,
        /// Question category (事业 财运 感情 健康 学业 其他, or English)
        #[arg(long)]
        category: Option<QuestionCategory>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the spirit placement for a day stem
    Placement {
        /// Day stem, e.g. 甲 or jia
        #[arg(long)]
        stem: Stem,
        /// Use the nighttime Noble Deity
        #[arg(long)]
        night: bool,
        /// Lay spirits counter-clockwise
        #[arg(long)]
        counter_clockwise: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a pillar of the 60-term cycle
    Pillar {
        /// Pillar text, e.g. 甲子
        #[arg(required_unless_present = "index")]
        pillar: Option<Pillar>,
        /// 1-based cycle index (1-60)
        #[arg(long, conflicts_with = "pillar")]
        index: Option<u8>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LIUREN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<LiurenConfig> {
    let config = match path {
        Some(p) => LiurenConfig::load_with_file(p),
        None => LiurenConfig::load(),
    };
    config.context("failed to load configuration")
}

fn direction(counter_clockwise: bool, configured: SpiritDirection) -> SpiritDirection {
    if counter_clockwise {
        SpiritDirection::CounterClockwise
    } else {
        configured
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Chart {
            day,
            hour,
            night,
            at,
            month_general,
            counter_clockwise,
            category,
            json,
        } => {
            let mut options = config.chart_options()?;
            options.direction = direction(counter_clockwise, options.direction);
            let time = match (at, night) {
                (Some(h), _) => TimeOfDay::Hour(h),
                (None, true) => TimeOfDay::Night,
                (None, false) => TimeOfDay::Day,
            };
            let input = ChartInput {
                day,
                hour,
                time,
                month_general,
                category: category.unwrap_or(config.report.category),
            };
            let chart = compute_chart(&input, &options)
                .with_context(|| format!("failed to compute chart for {day}/{hour}"))?;
            if json || config.report.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", render::chart_text(&chart));
            }
        }
        Commands::Placement {
            stem,
            night,
            counter_clockwise,
            json,
        } => {
            let dir = direction(counter_clockwise, config.engine.direction);
            let placement = place_spirits(stem, !night, dir);
            if json || config.report.json {
                println!("{}", serde_json::to_string_pretty(&placement)?);
            } else {
                print!("{}", render::placement_text(&placement));
            }
        }
        Commands::Pillar {
            pillar,
            index,
            json,
        } => {
            let p = match (pillar, index) {
                (Some(p), _) => p,
                (None, Some(i)) => Pillar::from_cycle_index(i)?,
                (None, None) => anyhow::bail!("a pillar or --index is required"),
            };
            if json || config.report.json {
                let (nayin, element) = p.nayin();
                let value = serde_json::json!({
                    "pillar": p,
                    "cycle_index": p.cycle_index(),
                    "stem": p.stem(),
                    "branch": p.branch(),
                    "stem_element": p.stem().element(),
                    "branch_element": p.branch().element(),
                    "nayin": nayin,
                    "nayin_element": element,
                    "specialization": p.is_specialization(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", render::pillar_text(p));
            }
        }
    }

    Ok(())
}
