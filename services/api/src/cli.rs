use crate::demo::{run_dashboard_report, run_snapshot, DashboardReportArgs, SnapshotArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use earth_twin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Earth 3.0 Twin Dashboard",
    about = "Serve and demonstrate the Earth 3.0 readiness dashboard from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render dashboard views for boardroom demos
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DashboardCommand {
    /// Print the KPI row, per-entity table, and executive alerts
    Report(DashboardReportArgs),
    /// Print the board snapshot for one entity
    Snapshot(SnapshotArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard {
            command: DashboardCommand::Report(args),
        } => run_dashboard_report(args),
        Command::Dashboard {
            command: DashboardCommand::Snapshot(args),
        } => run_snapshot(args),
    }
}
