use clap::{Parser, Subcommand};

use server::{ServerOpts, serve};

#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the status server.
    Server {
        /// The port number on which the server will listen for incoming connections.
        /// Overridable via the `PORT` environment variable.
        /// Example: `8080`
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    match Args::parse().cmd {
        Command::Server { port } => serve(ServerOpts { port }).await?,
    }

    Ok(())
}
