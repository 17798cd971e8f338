//! CLI tool for minting and inspecting bearer tokens.
//!
//! Uses the same `JWT_*` environment variables as the server, so tokens it
//! issues are accepted by a server started with the same configuration.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for "alice" (default two-hour lifetime)
//! cargo run --bin token -- issue --username alice
//!
//! # Print only the token, for scripting
//! TOKEN=$(cargo run --bin token -- issue -u alice --raw)
//!
//! # Decode and verify a token
//! cargo run --bin token -- inspect "$TOKEN"
//! ```

use user_management::application::services::{ACCESS_TOKEN_TTL_MINUTES, AuthService};
use user_management::config;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration};
use clap::{Parser, Subcommand};
use colored::*;

/// Bearer token utility for user-management.
#[derive(Parser)]
#[command(name = "token")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a new access token
    Issue {
        /// Token subject
        #[arg(short, long)]
        username: String,

        /// Lifetime in minutes
        #[arg(short, long, default_value_t = ACCESS_TOKEN_TTL_MINUTES)]
        ttl_minutes: i64,

        /// Print only the token
        #[arg(long)]
        raw: bool,
    },

    /// Verify a token and show its claims
    Inspect {
        token: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;
    let auth = AuthService::new(&config.jwt);

    match cli.command {
        Commands::Issue {
            username,
            ttl_minutes,
            raw,
        } => {
            if ttl_minutes <= 0 {
                anyhow::bail!("--ttl-minutes must be positive");
            }

            let token = auth.issue_token_with_ttl(&username, Duration::minutes(ttl_minutes))?;

            if raw {
                println!("{token}");
            } else {
                println!("{}", "✓ Token issued".green().bold());
                println!("  {} {}", "Subject:".bold(), username);
                println!("  {} {} min", "Expires in:".bold(), ttl_minutes);
                println!();
                println!("{}", token.yellow());
                println!();
                println!("{}", "Send as: Authorization: Bearer <token>".dimmed());
            }
        }
        Commands::Inspect { token } => match auth.verify(&token) {
            Ok(claims) => {
                println!("{}", "✓ Token is valid".green().bold());
                println!("  {} {}", "Subject:".bold(), claims.sub);
                println!("  {} {}", "Token id:".bold(), claims.jti);
                println!("  {} {}", "Issuer:".bold(), claims.iss);
                println!("  {} {}", "Audience:".bold(), claims.aud);
                println!("  {} {}", "Issued at:".bold(), format_ts(claims.iat));
                println!("  {} {}", "Expires at:".bold(), format_ts(claims.exp));
            }
            Err(e) => {
                println!("{} {}", "✗ Token rejected:".red().bold(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn format_ts(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}
