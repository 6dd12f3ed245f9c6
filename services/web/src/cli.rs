use crate::commands::{run_enquire, run_export, EnquireArgs, ExportArgs};
use crate::server;
use arc_site::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Sree Dhanya ARC",
    about = "Serve the Sree Dhanya ARC landing site and relay visitor enquiries",
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
    /// Submit one enquiry through the configured relay
    Enquire(EnquireArgs),
    /// Write the rendered landing page to a file or stdout
    Export(ExportArgs),
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
        Command::Enquire(args) => run_enquire(args).await,
        Command::Export(args) => run_export(args).await,
    }
}
