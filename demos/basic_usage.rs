//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Look up countries by ISO code, numeric code and name
//! - Resolve administrative areas within a country
//! - Search by dialing prefix and name fragment

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage Example ===\n");

    let countries = CountryRepository::shared();
    let areas = AdministrativeAreaRepository::shared()?;
    let stats = countries.stats().merge(areas.stats());
    println!(
        "✓ {} countries, {} administrative areas, {} aliases\n",
        stats.countries, stats.administrative_areas, stats.aliases
    );

    println!("--- Lookup by code ---");
    let us = countries.find_by_iso_alpha2("US")?;
    println!("US  -> {} ({})", us.common_name(), us.official_name());
    let de = countries.find_by_iso_alpha3("DEU")?;
    println!("DEU -> {}", de.common_name());
    let gb = countries.find_by_iso_numeric(826)?;
    println!("826 -> {}\n", gb.common_name());

    println!("--- Lookup by name ---");
    for name in ["united kingdom", "Åland islands", "Macedonia", "Turkey"] {
        match countries.find_by_name(name) {
            Ok(c) => println!("{name:<16} -> {} ({})", c.common_name(), c.iso_alpha2()),
            Err(e) => println!("{name:<16} -> {e}"),
        }
    }
    println!();

    println!("--- Administrative areas ---");
    let california = areas.find_by_name_and_country("California", us)?;
    println!("California -> {}", california.full_code());
    let canada = countries.find_by_code("can")?;
    let quebec = areas.find_by_name_and_country("Quebec", canada)?;
    println!("Quebec     -> {} ({})", quebec.name(), quebec.full_code());
    println!("Germany has {} recorded areas\n", areas.find_by_country(de).len());

    println!("--- Dialing prefix +44 ---");
    for c in countries.find_countries_by_long_distance_prefix("+44") {
        println!("- {} ({})", c.common_name(), c.iso_alpha2());
    }
    println!();

    println!("--- Names containing 'island' ---");
    for c in countries.find_all_by_name_fragment("island").iter().take(5) {
        println!("- {}", c.common_name());
    }

    Ok(())
}
