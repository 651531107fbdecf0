use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::{Parser, Subcommand};
use logscope_core::Seed;
use std::path::PathBuf;

/// Inspect Solana transaction logs and derive program addresses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration TOML file.
    /// If not provided, default values will be used.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group a log file into program invocation scopes.
    Scopes(ScopesCmd),
    /// Print the lines emitted while a program is on the invocation stack.
    Filter(FilterCmd),
    /// Extract `Program data:` events from a log file.
    Events(EventsCmd),
    /// Fetch a transaction's logs over RPC, then print its scopes and events.
    Fetch(FetchCmd),
    /// Derive a program address from a list of seeds.
    Derive(DeriveCmd),
}

#[derive(Parser, Debug)]
pub struct ScopesCmd {
    /// File with one log line per line.
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct FilterCmd {
    pub file: PathBuf,
    #[arg(short, long)]
    pub program: String,
}

#[derive(Parser, Debug)]
pub struct EventsCmd {
    pub file: PathBuf,
    /// Event name to look for. Repeat for several events.
    #[arg(short, long = "event", required = true)]
    pub events: Vec<String>,
    /// Only consider lines inside invocations of this program.
    #[arg(short, long)]
    pub program: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FetchCmd {
    /// Transaction signature (base58).
    pub signature: String,
    #[arg(short, long)]
    pub program: Option<String>,
    #[arg(short, long = "event")]
    pub events: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DeriveCmd {
    #[arg(short, long)]
    pub program: String,
    /// Seeds as `kind:value` with kind one of bytes (base64), text, address, u32, u64.
    /// A value without a known kind is treated as text.
    #[arg(value_parser = parse_seed)]
    pub seeds: Vec<Seed>,
}

/// Parses a `kind:value` seed argument.
pub fn parse_seed(arg: &str) -> Result<Seed, String> {
    let Some((kind, value)) = arg.split_once(':') else {
        return Ok(Seed::from(arg));
    };

    match kind {
        "bytes" => BASE64
            .decode(value)
            .map(Seed::Bytes)
            .map_err(|e| format!("invalid base64 seed '{}': {}", value, e)),
        "text" => Ok(Seed::from(value)),
        "address" => Seed::address_str(value).map_err(|e| e.to_string()),
        "u32" => value
            .parse::<i64>()
            .map(Seed::U32)
            .map_err(|e| format!("invalid u32 seed '{}': {}", value, e)),
        "u64" => value
            .parse::<i128>()
            .map(Seed::U64)
            .map_err(|e| format!("invalid u64 seed '{}': {}", value, e)),
        _ => Ok(Seed::from(arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_kinds() {
        assert_eq!(parse_seed("vault").unwrap(), Seed::from("vault"));
        assert_eq!(parse_seed("text:u32:1").unwrap(), Seed::from("u32:1"));
        assert_eq!(parse_seed("bytes:AQID").unwrap(), Seed::Bytes(vec![1, 2, 3]));
        assert_eq!(parse_seed("u32:-1").unwrap(), Seed::U32(-1));
        assert_eq!(parse_seed("u64:18446744073709551616").unwrap(), Seed::U64(1 << 64));
        assert_eq!(parse_seed("memo:hi").unwrap(), Seed::from("memo:hi"));
    }

    #[test]
    fn test_parse_seed_errors() {
        assert!(parse_seed("u32:abc").is_err());
        assert!(parse_seed("bytes:%%%").is_err());
        assert!(parse_seed("address:nope").is_err());
    }

    #[test]
    fn test_cli_parses_derive_command() {
        let cli = Cli::parse_from([
            "logscope",
            "derive",
            "--program",
            "11111111111111111111111111111111",
            "text:admin",
            "u64:7",
        ]);
        let Commands::Derive(cmd) = cli.command else {
            panic!("expected derive command");
        };
        assert_eq!(cmd.seeds, vec![Seed::from("admin"), Seed::U64(7)]);
    }
}
