//! countrydb: command-line interface for countrydb-core
//!
//! Inspect the compiled ISO 3166 reference data from your terminal: print
//! counts, list countries, look up a single country or subdivision, find the
//! countries behind a dialing prefix, and search names by substring.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ countrydb stats
//!
//! - List all countries, or those of one continent
//!   $ countrydb countries
//!   $ countrydb countries --continent "South America"
//!
//! - Show details for a country by numeric code, ISO2/ISO3 code or name
//!   $ countrydb country 840
//!   $ countrydb country deu
//!   $ countrydb country "aland islands"
//!
//! - List subdivisions, or look one up by name or code
//!   $ countrydb areas US
//!   $ countrydb area CA Quebec
//!
//! - Dialing prefix and name search
//!   $ countrydb phone +44
//!   $ countrydb search guinea
//!
//! Add `--json` to any command for machine-readable output, and `-v`/`-vv`
//! (or `RUST_LOG`) for diagnostics on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use countrydb_cli::resolve::{resolve_area, resolve_country};
use countrydb_core::api::{AdministrativeAreaView, CountryView};
use countrydb_core::{AdministrativeAreaRepository, Country, CountryRepository, PhoneCodeSearch};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[cfg(feature = "json")]
macro_rules! print_json {
    ($value:expr) => {{
        println!("{}", countrydb_core::api::to_json(&$value)?);
    }};
}

#[cfg(not(feature = "json"))]
macro_rules! print_json {
    ($value:expr) => {{
        let _ = &$value;
        anyhow::bail!("countrydb was built without the `json` feature");
    }};
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let countries = CountryRepository::shared();
    let areas = AdministrativeAreaRepository::shared()?;

    match args.command {
        Commands::Stats => {
            let stats = countries.stats().merge(areas.stats());
            if args.json {
                print_json!(stats);
            } else {
                println!("Database statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Administrative areas: {}", stats.administrative_areas);
                println!("  Name aliases: {}", stats.aliases);
            }
        }

        Commands::Countries { continent } => {
            let list: Vec<&Arc<Country>> = match continent.as_deref() {
                Some(continent) => countries.find_all_by_continent(continent),
                None => countries.countries().iter().collect(),
            };
            print_countries(&list, args.json)?;
        }

        Commands::Country { query } => {
            let c = resolve_country(countries, &query)?;
            if args.json {
                print_json!(CountryView::from(&**c));
            } else {
                println!("Country: {}", c.common_name());
                println!("Official name: {}", c.official_name());
                println!("ISO2: {}", c.iso_alpha2());
                println!("ISO3: {}", c.iso_alpha3());
                println!("ISO numeric: {:03}", c.iso_numeric());
                println!("Continent: {}", c.continent());
                println!("Phone prefix: +{}", c.long_distance_prefix());
                println!("Top level domain: .{}", c.top_level_domain());
                println!("Currency: {}", c.currency_iso_alpha_code());
                println!("Administrative areas: {}", areas.find_by_country(c).len());
            }
        }

        Commands::Areas { country } => {
            let c = resolve_country(countries, &country)?;
            let list = areas.find_by_country(c);
            if args.json {
                let views: Vec<AdministrativeAreaView> = list.iter().map(Into::into).collect();
                print_json!(views);
            } else if list.is_empty() {
                println!("No administrative areas recorded for {}", c.common_name());
            } else {
                println!("Administrative areas in {}:", c.common_name());
                for a in list {
                    println!("- {} ({})", a.name(), a.code());
                }
            }
        }

        Commands::Area { country, name } => {
            let c = resolve_country(countries, &country)?;
            let area = resolve_area(areas, &name, c)?;
            if args.json {
                print_json!(AdministrativeAreaView::from(area));
            } else {
                println!("Area: {}", area.name());
                println!("Code: {}", area.full_code());
                println!("Country: {}", c.common_name());
            }
        }

        Commands::Phone { prefix } => {
            let list = countries.find_countries_by_long_distance_prefix(&prefix);
            if list.is_empty() && !args.json {
                println!("No countries found with dialing prefix: {prefix}");
            } else {
                print_countries(&list, args.json)?;
            }
        }

        Commands::Search { fragment } => {
            let list = countries.find_all_by_name_fragment(&fragment);
            if list.is_empty() && !args.json {
                println!("No countries found matching: {fragment}");
            } else {
                print_countries(&list, args.json)?;
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_countries(list: &[&Arc<Country>], json: bool) -> anyhow::Result<()> {
    if json {
        let views: Vec<CountryView> = list.iter().map(|&c| CountryView::from(&**c)).collect();
        print_json!(views);
    } else {
        for c in list {
            println!("{} ({})", c.common_name(), c.iso_alpha2());
        }
    }
    Ok(())
}
