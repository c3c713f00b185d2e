// crates/countrydb-core/src/data/areas.rs

/// `(code, name)` pairs of one country's subdivisions, in display order.
pub type AreaTable = &'static [(&'static str, &'static str)];

/// Subdivisions keyed by the alpha-2 code of the owning country.
///
/// The naming (`AdministrativeArea`) follows geonames, which uses it for any
/// state, province, region or similar first-level area.
pub const ADMINISTRATIVE_AREAS: &[(&str, AreaTable)] = &[
    ("US", US_AREAS),
    ("GB", GB_AREAS),
    ("CA", CA_AREAS),
    ("IE", IE_AREAS),
    ("AU", AU_AREAS),
];

/// 50 states, the District of Columbia and the inhabited territories.
const US_AREAS: AreaTable = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("MP", "Northern Mariana Islands"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UM", "U.S. Minor Outlying Islands"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VI", "Virgin Islands of the U.S."),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

const GB_AREAS: AreaTable = &[
    ("EN", "England"),
    ("SC", "Scotland"),
    ("NO", "Northern Ireland"),
    ("WA", "Wales"),
];

const CA_AREAS: AreaTable = &[
    ("AB", "Alberta"),
    ("BC", "British Columbia"),
    ("MB", "Manitoba"),
    ("NB", "New Brunswick"),
    ("NL", "Newfoundland and Labrador"),
    ("NT", "Northwest Territories"),
    ("NS", "Nova Scotia"),
    ("NU", "Nunavut"),
    ("ON", "Ontario"),
    ("PE", "Prince Edward Island"),
    ("QC", "Québec"),
    ("SK", "Saskatchewan"),
    ("YT", "Yukon"),
];

/// Irish counties.
const IE_AREAS: AreaTable = &[
    ("CE", "Clare"),
    ("LM", "Leitrim"),
    ("CK", "Cork"),
    ("LS", "Laois"),
    ("CN", "Cavan"),
    ("MH", "Meath"),
    ("CW", "Carlow"),
    ("MN", "Monaghan"),
    ("DL", "Donegal"),
    ("MO", "Mayo"),
    ("DN", "Dublin"),
    ("OY", "Offaly"),
    ("GY", "Galway"),
    ("RN", "Roscommon"),
    ("KE", "Kildare"),
    ("SO", "Sligo"),
    ("KK", "Kilkenny"),
    ("TY", "Tipperary"),
    ("KY", "Kerry"),
    ("WD", "Waterford"),
    ("LD", "Longford"),
    ("WH", "Westmeath"),
    ("LH", "Louth"),
    ("WW", "Wicklow"),
    ("LK", "Limerick"),
    ("WX", "Wexford"),
];

const AU_AREAS: AreaTable = &[
    ("NSW", "New South Wales"),
    ("QLD", "Queensland"),
    ("SA", "South Australia"),
    ("TAS", "Tasmania"),
    ("VIC", "Victoria"),
    ("WA", "Western Australia"),
];
