//! CLI argument definitions using clap
//!
//! Commands:
//! - memberd serve --host <addr> --port <port>

use clap::{Parser, Subcommand};

/// memberd - member records over HTTP, backed by a document store
#[derive(Parser, Debug)]
#[command(name = "memberd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the member records HTTP service
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["memberd", "serve"]).unwrap();

        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 5000);
            }
        }
    }

    #[test]
    fn test_serve_with_flags() {
        let cli =
            Cli::try_parse_from(["memberd", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();

        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8080);
            }
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["memberd"]).is_err());
    }
}
