use crate::demo::{run_demo, run_worker_report, DemoArgs, WorkerReportArgs};
use crate::server;
use carecred::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Worker Credential Compliance Tracker",
    about = "Track aged-care worker credentials and evaluate compliance from the command line",
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
    /// Print a compliance report for a seeded demo worker
    Report(WorkerReportArgs),
    /// Run an end-to-end CLI demo covering registration, credential uploads,
    /// and compliance reporting
    Demo(DemoArgs),
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
        Command::Report(args) => run_worker_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
