use crate::report::{run_course_listing, run_match_report, CoursesArgs, MatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use course_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Course Match",
    about = "Run the course matching service or query the catalog from the command line",
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
    /// List the configured course catalog
    Courses(CoursesArgs),
    /// Rank the catalog against a questionnaire stored as JSON
    Match(MatchArgs),
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
        Command::Courses(args) => run_course_listing(args),
        Command::Match(args) => run_match_report(args),
    }
}
