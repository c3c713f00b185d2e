// crates/countrydb-core/src/alias.rs

//! Alternate names that resolve to an existing entity without creating a new
//! one. Country aliases are matched folded (see [`fold_key`](crate::text::fold_key));
//! area aliases are matched exactly, like area names.

/// An extra name for a country.
#[derive(Debug, Clone, Copy)]
pub struct CountryAlias {
    pub iso_alpha2: &'static str,
    pub alias: &'static str,
}

/// An extra name for a subdivision, addressed by `(country, code)`.
#[derive(Debug, Clone, Copy)]
pub struct AreaAlias {
    pub country_code: &'static str,
    pub code: &'static str,
    pub alias: &'static str,
}

const fn country(iso_alpha2: &'static str, alias: &'static str) -> CountryAlias {
    CountryAlias { iso_alpha2, alias }
}

/// Former, short or locally preferred country names.
pub const COUNTRY_NAME_ALIASES: &[CountryAlias] = &[
    country("MK", "Macedonia"),
    country("GB", "Great Britain"),
    country("GB", "Britain"),
    country("CI", "Côte d'Ivoire"),
    country("CV", "Cabo Verde"),
    country("SZ", "Swaziland"),
    country("MM", "Burma"),
    country("TL", "East Timor"),
    country("TR", "Turkey"),
    country("VA", "Holy See"),
    country("VA", "Vatican"),
    country("BN", "Brunei Darussalam"),
    country("CD", "Congo-Kinshasa"),
    country("CG", "Congo-Brazzaville"),
    country("MO", "Macao"),
    country("VN", "Viet Nam"),
    country("FK", "Falkland Islands (Malvinas)"),
];

/// Spellings of subdivision names that differ from the canonical table entry.
pub const AREA_NAME_ALIASES: &[AreaAlias] = &[AreaAlias {
    country_code: "CA",
    code: "QC",
    alias: "Quebec",
}];
