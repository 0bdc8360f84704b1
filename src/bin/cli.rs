//! CLI for inspecting workload snapshots

use clap::{Parser, Subcommand};
use roleset::common::{Config, OutputFormat};
use roleset::ops::{restart_order, scale_in_candidates};
use roleset::workload::{ranked, Member, Snapshot};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roleset")]
#[command(about = "Role-aware ordering and readiness for replicated workloads")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./roleset.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the role priority table
    Priorities {
        /// Snapshot file (JSON)
        #[arg(long)]
        file: PathBuf,
    },

    /// List members in rank order, least senior first
    Rank {
        /// Snapshot file (JSON)
        #[arg(long)]
        file: PathBuf,

        /// Most senior first
        #[arg(long, conflicts_with = "forward")]
        reverse: bool,

        /// Least senior first, even if the config sets `reverse = true`
        #[arg(long)]
        forward: bool,
    },

    /// Evaluate workload readiness (exit code 1 when not ready)
    Ready {
        /// Snapshot file (JSON)
        #[arg(long)]
        file: PathBuf,
    },

    /// Plan member operations
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Members to remove when scaling in
    ScaleIn {
        /// Snapshot file (JSON)
        #[arg(long)]
        file: PathBuf,

        /// Number of members to remove
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Rolling restart order, leader last
    Restart {
        /// Snapshot file (JSON)
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(cli.config.as_deref())?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Commands::Priorities { file } => {
            let snapshot = Snapshot::from_file(&file)?;
            let table = snapshot.priority_table();
            match output {
                OutputFormat::Json => {
                    let entries: Vec<_> = table
                        .entries()
                        .into_iter()
                        .map(|(role, priority)| json!({ "role": role, "priority": priority }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Text => {
                    for (role, priority) in table.entries() {
                        let role = if role.is_empty() { "<none>" } else { role };
                        println!("{:<24} {}", role, priority);
                    }
                }
            }
        }
        Commands::Rank {
            file,
            reverse,
            forward,
        } => {
            let snapshot = Snapshot::from_file(&file)?;
            let table = snapshot.priority_table();
            let reverse = rank_reversed(reverse, forward, config.reverse);
            let order = ranked(&snapshot.members, &table, reverse);
            print_members(output, &order, |m| table.lookup(m.role()).to_string())?;
        }
        Commands::Ready { file } => {
            let snapshot = Snapshot::from_file(&file)?;
            let verdict = snapshot.workload.readiness();
            match output {
                OutputFormat::Json => {
                    let reason = verdict.as_ref().err().map(|r| r.to_string());
                    let report = json!({
                        "workload": snapshot.workload.name,
                        "ready": verdict.is_ok(),
                        "reason": reason,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => match &verdict {
                    Ok(()) => println!("{}: ready", snapshot.workload.name),
                    Err(reason) => println!("{}: not ready ({})", snapshot.workload.name, reason),
                },
            }
            if verdict.is_err() {
                std::process::exit(1);
            }
        }
        Commands::Plan { action } => match action {
            PlanCommands::ScaleIn { file, count } => {
                let snapshot = Snapshot::from_file(&file)?;
                let order = scale_in_candidates(&snapshot.members, &snapshot.workload.spec.roles, count);
                print_members(output, &order, |m| m.role().unwrap_or("<none>").to_string())?;
            }
            PlanCommands::Restart { file } => {
                let snapshot = Snapshot::from_file(&file)?;
                let order = restart_order(&snapshot.members, &snapshot.workload.spec.roles);
                print_members(output, &order, |m| m.role().unwrap_or("<none>").to_string())?;
            }
        },
    }

    Ok(())
}

/// Command-line direction flags win over the configured default
fn rank_reversed(reverse: bool, forward: bool, configured: bool) -> bool {
    if reverse || forward {
        reverse
    } else {
        configured
    }
}

fn print_members(
    output: OutputFormat,
    members: &[&Member],
    detail: impl Fn(&Member) -> String,
) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => {
            let rows: Vec<_> = members
                .iter()
                .map(|m| json!({ "name": m.name, "role": m.role(), "detail": detail(*m) }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for (position, member) in members.iter().enumerate() {
                println!("{:>3}  {:<32} {}", position + 1, member.name, detail(*member));
            }
        }
    }
    Ok(())
}
