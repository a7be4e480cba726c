use crate::domain::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about = "Browse Pokemon location areas from the PokeAPI")]
pub struct Cli {
    #[arg(
        long,
        default_value = DEFAULT_BASE_URL,
        help = "Catalog API root; location areas are read from <base-url>/location-area/<n>"
    )]
    pub base_url: String,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS, help = "Per-request timeout in milliseconds")]
    pub timeout_ms: u64,
    #[arg(short, long, help = "Log requests and dispatch to stderr")]
    pub verbose: bool,
}
