use std::error::Error;

use clap::{Args as ClapArgs, Parser, Subcommand};
use ptera_serve::{describe, http, tool};
use ptera_solver::Simulator;

#[derive(Parser, Debug)]
#[command(name = "pterasim-mcp", about = "Flapping-wing aerodynamic estimation service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the service description and exit.
    Describe,
    /// Serve the HTTP transport.
    Http(HttpArgs),
    /// Serve the tool over stdio (default).
    Stdio,
}

#[derive(ClapArgs, Debug)]
struct HttpArgs {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Stdio) {
        Command::Describe => describe::run()?,
        Command::Http(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(http::serve(args.port))?;
        }
        Command::Stdio => tool::run(&Simulator::new())?,
    }
    Ok(())
}
