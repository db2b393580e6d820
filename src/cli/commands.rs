//! CLI command implementations
//!
//! `serve` owns the whole boot sequence: resolve configuration, build
//! the store and server, then hand the thread to the runtime.

use std::sync::Arc;

use crate::api::{ApiServer, ServerConfig};
use crate::observability::{Event, Logger};
use crate::store::{MemberStore, MongoStore, StoreConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the HTTP service and serve until the process is stopped
///
/// The connection string is only read here, never dialed; the store
/// connects on its first use.
pub fn serve(host: String, port: u16) -> CliResult<()> {
    Logger::event(Event::BootStart, &[]);

    let store_config = StoreConfig::from_env();
    let conn_string_set = if store_config.conn_string.is_some() {
        "true"
    } else {
        "false"
    };
    Logger::event(
        Event::ConfigLoaded,
        &[
            ("collection", store_config.collection.as_str()),
            ("conn_string_set", conn_string_set),
            ("database", store_config.database.as_str()),
        ],
    );

    let store: Arc<dyn MemberStore> = Arc::new(MongoStore::new(store_config));
    let server = ApiServer::with_config(ServerConfig::new(host, port), store);

    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    runtime.block_on(server.start()).map_err(CliError::Server)
}
