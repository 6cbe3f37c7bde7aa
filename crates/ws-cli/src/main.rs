use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use ws_config::{GatewayConfig, SimConfig};
use ws_core::model::{
    ActivityFilter, AlertFilter, EmployeeFilter, ReportFormat, SeriesDomain, SpaceFilter,
    TimeRange,
};
use ws_runtime::lifecycle::wait_for_signal;
use ws_runtime::tracing_init::init_tracing;
use ws_runtime::{Gateway, PollUpdate};

#[derive(Parser)]
#[command(name = "wsim", about = "Workspace telemetry simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway and poller, logging every published update
    Run {
        /// Path to wsim.toml config file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print one dataset as pretty JSON
    Snapshot {
        kind: SnapshotKind,
        /// Path to wsim.toml config file (defaults apply without one)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the generator seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print an export envelope as pretty JSON
    Export {
        /// Report kind, e.g. "occupancy" or "energy"
        kind: String,
        #[arg(long, default_value = "week")]
        range: String,
        #[arg(long, default_value = "csv")]
        format: FormatArg,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SnapshotKind {
    Summary,
    Occupancy,
    Spaces,
    Environmental,
    Energy,
    Weekly,
    Zones,
    Ai,
    Employees,
    DetailedSpaces,
    Alerts,
    Conflicts,
    Activity,
    Health,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Pdf,
    Excel,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Pdf => ReportFormat::Pdf,
            FormatArg::Excel => ReportFormat::Excel,
        }
    }
}

/// Load the config and the directory relative paths resolve against.
fn load_config(path: Option<&Path>) -> Result<(SimConfig, PathBuf)> {
    match path {
        Some(path) => {
            let config_path = path
                .canonicalize()
                .map_err(|e| anyhow::anyhow!("config path '{}': {e}", path.display()))?;
            let config = SimConfig::load(&config_path)?;
            let base_dir = config_path
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| anyhow::anyhow!("config path has no parent directory"))?;
            Ok((config, base_dir))
        }
        None => Ok((SimConfig::default(), std::env::current_dir()?)),
    }
}

/// One-shot commands skip the simulated latency but keep the session file.
fn one_shot_gateway(mut config: SimConfig, base_dir: &Path, seed: Option<u64>) -> Result<Gateway> {
    config.gateway = GatewayConfig {
        session_file: config.gateway.session_file.take(),
        ..GatewayConfig::instant()
    };
    if seed.is_some() {
        config.generator.seed = seed;
    }
    Gateway::from_config(&config, base_dir).map_err(|e| anyhow::anyhow!("{e}"))
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn snapshot(gateway: &Gateway, kind: SnapshotKind) -> Result<()> {
    let fail = |e: ws_runtime::RuntimeError| anyhow::anyhow!("{e}");
    match kind {
        SnapshotKind::Summary => print_json(&gateway.get_dashboard_summary().await.map_err(fail)?),
        SnapshotKind::Occupancy => print_json(
            &gateway
                .get_occupancy_data(TimeRange::Today)
                .await
                .map_err(fail)?,
        ),
        SnapshotKind::Spaces => print_json(&gateway.get_space_data().await.map_err(fail)?),
        SnapshotKind::Environmental => {
            print_json(&gateway.get_environmental_data().await.map_err(fail)?)
        }
        SnapshotKind::Energy => print_json(&gateway.get_energy_dashboard().await.map_err(fail)?),
        SnapshotKind::Weekly => print_json(&gateway.get_weekly_trend().await.map_err(fail)?),
        SnapshotKind::Zones => print_json(&gateway.get_zone_heatmap().await.map_err(fail)?),
        SnapshotKind::Ai => print_json(&gateway.get_ai_predictions().await.map_err(fail)?),
        SnapshotKind::Employees => print_json(
            &gateway
                .get_employees(EmployeeFilter::default())
                .await
                .map_err(fail)?,
        ),
        SnapshotKind::DetailedSpaces => print_json(
            &gateway
                .get_detailed_spaces(SpaceFilter::default())
                .await
                .map_err(fail)?,
        ),
        SnapshotKind::Alerts => print_json(
            &gateway
                .get_alerts(AlertFilter::default())
                .await
                .map_err(fail)?,
        ),
        SnapshotKind::Conflicts => print_json(&gateway.get_conflicts().await.map_err(fail)?),
        SnapshotKind::Activity => print_json(
            &gateway
                .get_user_activity(TimeRange::Today, ActivityFilter::default())
                .await
                .map_err(fail)?,
        ),
        SnapshotKind::Health => print_json(&gateway.health()),
    }
}

fn log_update(update: &PollUpdate) {
    match update {
        PollUpdate::Occupancy(env) => {
            let latest = env.data.last().map(|p| p.occupancy).unwrap_or_default();
            tracing::info!(domain = "poll", topic = "occupancy", latest, "update received");
        }
        PollUpdate::Environmental(env) => {
            let latest = env.data.last().map(|p| p.comfort).unwrap_or_default();
            tracing::info!(domain = "poll", topic = "environmental", comfort = latest, "update received");
        }
        PollUpdate::Energy(env) => {
            let total: f64 = env.data.iter().map(|p| p.consumption).sum();
            tracing::info!(domain = "poll", topic = "energy", total_kwh = total, "update received");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let (sim_config, base_dir) = load_config(Some(&config))?;
            let _guard = init_tracing(&sim_config.logging, &base_dir)?;
            tracing::info!(domain = "conf", path = %config.display(), "config loaded");

            let gateway =
                Gateway::from_config(&sim_config, &base_dir).map_err(|e| anyhow::anyhow!("{e}"))?;
            let _subs: Vec<_> = SeriesDomain::ALL
                .into_iter()
                .map(|domain| gateway.subscribe(domain, log_update))
                .collect();
            gateway.start().map_err(|e| anyhow::anyhow!("{e}"))?;
            tracing::info!(domain = "sys", "simulator running, press Ctrl-C to stop");

            wait_for_signal(CancellationToken::new()).await;
            gateway.stop().await.map_err(|e| anyhow::anyhow!("{e}"))?;
        }
        Commands::Snapshot { kind, config, seed } => {
            let (sim_config, base_dir) = load_config(config.as_deref())?;
            let _guard = init_tracing(&sim_config.logging, &base_dir)?;
            let gateway = one_shot_gateway(sim_config, &base_dir, seed)?;
            snapshot(&gateway, kind).await?;
        }
        Commands::Export {
            kind,
            range,
            format,
            config,
            seed,
        } => {
            let range: TimeRange = range.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let (sim_config, base_dir) = load_config(config.as_deref())?;
            let _guard = init_tracing(&sim_config.logging, &base_dir)?;
            let gateway = one_shot_gateway(sim_config, &base_dir, seed)?;
            let report = gateway
                .export_report(&kind, range, format.into())
                .await
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            print_json(&report)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_export_arguments() {
        let cli = Cli::try_parse_from([
            "wsim", "export", "energy", "--range", "month", "--format", "pdf", "--seed", "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                kind, range, seed, ..
            } => {
                assert_eq!(kind, "energy");
                assert_eq!(range, "month");
                assert_eq!(seed, Some(7));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn parses_kebab_case_snapshot_kind() {
        let cli = Cli::try_parse_from(["wsim", "snapshot", "detailed-spaces"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Snapshot {
                kind: SnapshotKind::DetailedSpaces,
                ..
            }
        ));
    }

    #[test]
    fn parses_health_snapshot_kind() {
        let cli = Cli::try_parse_from(["wsim", "snapshot", "health", "--seed", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Snapshot {
                kind: SnapshotKind::Health,
                seed: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn missing_config_file_is_reported() {
        assert!(load_config(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }
}
