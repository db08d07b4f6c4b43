use clap::{Parser, Subcommand};
use orbit_core::command::{GalleryCommand, Request, SOCKET_PATH};
use orbit_core::registry::GalleryId;
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "orbitctl", version, about = "Control a running orbit gallery", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gallery instance to address (defaults to the primary one)
    #[arg(short, long, global = true)]
    id: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Stop auto-rotation
    Pause,
    /// Restart auto-rotation
    Resume,
    /// Rotate to the next item
    Next,
    /// Rotate to the previous item
    Previous,
    /// Rotate to the item at INDEX (out-of-range indices are ignored)
    Goto {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

impl From<Commands> for GalleryCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Pause => GalleryCommand::Pause,
            Commands::Resume => GalleryCommand::Resume,
            Commands::Next => GalleryCommand::Next,
            Commands::Previous => GalleryCommand::Previous,
            Commands::Goto { index } => GalleryCommand::GoTo(index),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let request = Request::new(cli.id.map(GalleryId::from), cli.command.into());
    send_request(&request)
}

fn send_request(request: &Request) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to orbit at {}: {}. Is orbit running?",
            SOCKET_PATH,
            e
        )
    })?;

    log::debug!("Sending '{}'", request);
    writeln!(stream, "{}", request)?;
    Ok(())
}
