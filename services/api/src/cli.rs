use crate::demo::{
    run_dashboard, run_demo, run_outreach_draft, DashboardArgs, DemoArgs, OutreachDraftArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use upsell_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Upsell Engine",
    about = "Score customer engagement, review upsell targets, and draft upgrade outreach",
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
    /// Print the upsell dashboard for a roster
    Dashboard(DashboardArgs),
    /// Compose upgrade outreach for a single user
    Outreach {
        #[command(subcommand)]
        command: OutreachCommand,
    },
    /// Walk the sample roster from dashboard to a simulated send
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum OutreachCommand {
    /// Print the prefilled outreach draft for a user
    Draft(OutreachDraftArgs),
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
        Command::Dashboard(args) => run_dashboard(args),
        Command::Outreach {
            command: OutreachCommand::Draft(args),
        } => run_outreach_draft(args),
        Command::Demo(args) => run_demo(args),
    }
}
