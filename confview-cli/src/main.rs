mod snapshot;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use confview_core::client::ConfClient;
use confview_core::types::ConfError;

#[derive(Parser)]
#[command(
    name = "confview",
    about = "Confview — resolve configuration keys against a local cache snapshot",
    version
)]
struct Cli {
    /// JSON snapshot of the agent-maintained cache
    #[arg(long, env = "CONFVIEW_SNAPSHOT", global = true)]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a single configure value
    GetConf {
        key: String,
        /// Query the current idc if omitted
        #[arg(long)]
        idc: Option<String>,
    },

    /// Get one service endpoint, picked at random
    GetHost {
        key: String,
        #[arg(long)]
        idc: Option<String>,
    },

    /// Get all service endpoints available
    GetAllHost {
        key: String,
        #[arg(long)]
        idc: Option<String>,
    },

    /// Get the child key/value mapping under a key
    GetBatchConf {
        key: String,
        #[arg(long)]
        idc: Option<String>,
    },

    /// Get all children keys under a key
    GetBatchKeys {
        key: String,
        #[arg(long)]
        idc: Option<String>,
    },

    /// Print version information
    Version,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        println!("confview {}", ConfClient::version());
        return;
    }

    let snapshot_path = cli.snapshot.unwrap_or_else(|| {
        eprintln!("[ERROR] no cache snapshot given (--snapshot or CONFVIEW_SNAPSHOT)");
        std::process::exit(2);
    });
    let store = snapshot::load(&snapshot_path).unwrap_or_else(|e| {
        eprintln!("[ERROR] {e}");
        std::process::exit(2);
    });
    tracing::debug!(snapshot = %snapshot_path, "cache snapshot loaded");

    let client = ConfClient::attach(Arc::new(store)).unwrap_or_else(|e| {
        eprintln!("[ERROR] {e}");
        std::process::exit(2);
    });

    let result = match cli.command {
        Commands::GetConf { key, idc } => client
            .try_get_conf(&key, idc.as_deref())
            .map(|value| println!("{value}")),
        Commands::GetHost { key, idc } => client
            .try_get_host(&key, idc.as_deref())
            .map(|host| println!("{host}")),
        Commands::GetAllHost { key, idc } => {
            client.try_get_all_host(&key, idc.as_deref()).map(|hosts| {
                for host in hosts {
                    println!("{host}");
                }
            })
        }
        Commands::GetBatchConf { key, idc } => {
            client.try_get_batch_conf(&key, idc.as_deref()).map(|conf| {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&conf).expect("serializable map")
                );
            })
        }
        Commands::GetBatchKeys { key, idc } => {
            client.try_get_batch_keys(&key, idc.as_deref()).map(|keys| {
                for key in keys {
                    println!("{key}");
                }
            })
        }
        Commands::Version => unreachable!("handled above"),
    };

    if let Err(err) = result {
        eprintln!("[ERROR] {err}");
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &ConfError) -> i32 {
    match err {
        ConfError::InvalidKey { .. } => 2,
        ConfError::KeyNotFound { .. } => 3,
        ConfError::DataFormat { .. } => 4,
        ConfError::AttachFailed { .. } | ConfError::NotAttached => 5,
    }
}
