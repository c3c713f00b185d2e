use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "CLI for querying the countrydb-core ISO 3166 reference data"
)]
pub struct CliArgs {
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all countries
    Countries {
        /// Only countries on this continent (e.g. Europe, "North America")
        #[arg(long)]
        continent: Option<String>,
    },

    /// Lookup a country by numeric code, ISO2/ISO3 code or name
    Country {
        /// e.g. 840, DE, USA, "united kingdom"
        query: String,
    },

    /// List the administrative areas of a country
    Areas {
        /// Any query accepted by `country`
        country: String,
    },

    /// Lookup one administrative area by name (or code) within a country
    Area {
        /// Any query accepted by `country`
        country: String,
        /// Area name or code (e.g. California, QC)
        name: String,
    },

    /// List countries sharing a long distance dialing prefix
    Phone {
        /// Prefix with or without a leading '+' (e.g. 44, +1)
        prefix: String,
    },

    /// Search countries whose name contains a substring
    Search {
        /// Substring to search (case- and accent-insensitive)
        fragment: String,
    },
}
