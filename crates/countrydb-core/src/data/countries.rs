// crates/countrydb-core/src/data/countries.rs

/// One row of the country table:
/// `(alpha-2, alpha-3, numeric, common name, official name, continent,
///   long-distance prefix, TLD, currency)`.
pub type CountryRow = (
    &'static str,
    &'static str,
    u16,
    &'static str,
    &'static str,
    &'static str,
    u32,
    &'static str,
    &'static str,
);

/// All 249 ISO 3166-1 entries, sorted by alpha-2.
#[rustfmt::skip]
pub const COUNTRIES: &[CountryRow] = &[
    ("AD", "AND", 20, "Andorra", "Principality of Andorra", "Europe", 376, "ad", "EUR"),
    ("AE", "ARE", 784, "United Arab Emirates", "United Arab Emirates", "Asia", 971, "ae", "AED"),
    ("AF", "AFG", 4, "Afghanistan", "Islamic Republic of Afghanistan", "Asia", 93, "af", "AFN"),
    ("AG", "ATG", 28, "Antigua and Barbuda", "Antigua and Barbuda", "North America", 1, "ag", "XCD"),
    ("AI", "AIA", 660, "Anguilla", "Anguilla", "North America", 1, "ai", "XCD"),
    ("AL", "ALB", 8, "Albania", "Republic of Albania", "Europe", 355, "al", "ALL"),
    ("AM", "ARM", 51, "Armenia", "Republic of Armenia", "Asia", 374, "am", "AMD"),
    ("AO", "AGO", 24, "Angola", "Republic of Angola", "Africa", 244, "ao", "AOA"),
    ("AQ", "ATA", 10, "Antarctica", "Antarctica", "Antarctica", 672, "aq", ""),
    ("AR", "ARG", 32, "Argentina", "Argentine Republic", "South America", 54, "ar", "ARS"),
    ("AS", "ASM", 16, "American Samoa", "Territory of American Samoa", "Oceania", 1, "as", "USD"),
    ("AT", "AUT", 40, "Austria", "Republic of Austria", "Europe", 43, "at", "EUR"),
    ("AU", "AUS", 36, "Australia", "Commonwealth of Australia", "Oceania", 61, "au", "AUD"),
    ("AW", "ABW", 533, "Aruba", "Country of Aruba", "North America", 297, "aw", "AWG"),
    ("AX", "ALA", 248, "Åland Islands", "Åland", "Europe", 358, "ax", "EUR"),
    ("AZ", "AZE", 31, "Azerbaijan", "Republic of Azerbaijan", "Asia", 994, "az", "AZN"),
    ("BA", "BIH", 70, "Bosnia and Herzegovina", "Bosnia and Herzegovina", "Europe", 387, "ba", "BAM"),
    ("BB", "BRB", 52, "Barbados", "Barbados", "North America", 1, "bb", "BBD"),
    ("BD", "BGD", 50, "Bangladesh", "People's Republic of Bangladesh", "Asia", 880, "bd", "BDT"),
    ("BE", "BEL", 56, "Belgium", "Kingdom of Belgium", "Europe", 32, "be", "EUR"),
    ("BF", "BFA", 854, "Burkina Faso", "Burkina Faso", "Africa", 226, "bf", "XOF"),
    ("BG", "BGR", 100, "Bulgaria", "Republic of Bulgaria", "Europe", 359, "bg", "BGN"),
    ("BH", "BHR", 48, "Bahrain", "Kingdom of Bahrain", "Asia", 973, "bh", "BHD"),
    ("BI", "BDI", 108, "Burundi", "Republic of Burundi", "Africa", 257, "bi", "BIF"),
    ("BJ", "BEN", 204, "Benin", "Republic of Benin", "Africa", 229, "bj", "XOF"),
    ("BL", "BLM", 652, "Saint Barthélemy", "Collectivity of Saint Barthélemy", "North America", 590, "bl", "EUR"),
    ("BM", "BMU", 60, "Bermuda", "Bermuda", "North America", 1, "bm", "BMD"),
    ("BN", "BRN", 96, "Brunei", "Nation of Brunei, the Abode of Peace", "Asia", 673, "bn", "BND"),
    ("BO", "BOL", 68, "Bolivia", "Plurinational State of Bolivia", "South America", 591, "bo", "BOB"),
    ("BQ", "BES", 535, "Caribbean Netherlands", "Bonaire, Sint Eustatius and Saba", "North America", 599, "bq", "USD"),
    ("BR", "BRA", 76, "Brazil", "Federative Republic of Brazil", "South America", 55, "br", "BRL"),
    ("BS", "BHS", 44, "Bahamas", "Commonwealth of The Bahamas", "North America", 1, "bs", "BSD"),
    ("BT", "BTN", 64, "Bhutan", "Kingdom of Bhutan", "Asia", 975, "bt", "BTN"),
    ("BV", "BVT", 74, "Bouvet Island", "Bouvet Island", "Antarctica", 47, "bv", "NOK"),
    ("BW", "BWA", 72, "Botswana", "Republic of Botswana", "Africa", 267, "bw", "BWP"),
    ("BY", "BLR", 112, "Belarus", "Republic of Belarus", "Europe", 375, "by", "BYN"),
    ("BZ", "BLZ", 84, "Belize", "Belize", "North America", 501, "bz", "BZD"),
    ("CA", "CAN", 124, "Canada", "Canada", "North America", 1, "ca", "CAD"),
    ("CC", "CCK", 166, "Cocos (Keeling) Islands", "Territory of the Cocos (Keeling) Islands", "Asia", 61, "cc", "AUD"),
    ("CD", "COD", 180, "DR Congo", "Democratic Republic of the Congo", "Africa", 243, "cd", "CDF"),
    ("CF", "CAF", 140, "Central African Republic", "Central African Republic", "Africa", 236, "cf", "XAF"),
    ("CG", "COG", 178, "Congo", "Republic of the Congo", "Africa", 242, "cg", "XAF"),
    ("CH", "CHE", 756, "Switzerland", "Swiss Confederation", "Europe", 41, "ch", "CHF"),
    ("CI", "CIV", 384, "Ivory Coast", "Republic of Côte d'Ivoire", "Africa", 225, "ci", "XOF"),
    ("CK", "COK", 184, "Cook Islands", "Cook Islands", "Oceania", 682, "ck", "NZD"),
    ("CL", "CHL", 152, "Chile", "Republic of Chile", "South America", 56, "cl", "CLP"),
    ("CM", "CMR", 120, "Cameroon", "Republic of Cameroon", "Africa", 237, "cm", "XAF"),
    ("CN", "CHN", 156, "China", "People's Republic of China", "Asia", 86, "cn", "CNY"),
    ("CO", "COL", 170, "Colombia", "Republic of Colombia", "South America", 57, "co", "COP"),
    ("CR", "CRI", 188, "Costa Rica", "Republic of Costa Rica", "North America", 506, "cr", "CRC"),
    ("CU", "CUB", 192, "Cuba", "Republic of Cuba", "North America", 53, "cu", "CUP"),
    ("CV", "CPV", 132, "Cape Verde", "Republic of Cabo Verde", "Africa", 238, "cv", "CVE"),
    ("CW", "CUW", 531, "Curaçao", "Country of Curaçao", "North America", 599, "cw", "ANG"),
    ("CX", "CXR", 162, "Christmas Island", "Territory of Christmas Island", "Asia", 61, "cx", "AUD"),
    ("CY", "CYP", 196, "Cyprus", "Republic of Cyprus", "Europe", 357, "cy", "EUR"),
    ("CZ", "CZE", 203, "Czechia", "Czech Republic", "Europe", 420, "cz", "CZK"),
    ("DE", "DEU", 276, "Germany", "Federal Republic of Germany", "Europe", 49, "de", "EUR"),
    ("DJ", "DJI", 262, "Djibouti", "Republic of Djibouti", "Africa", 253, "dj", "DJF"),
    ("DK", "DNK", 208, "Denmark", "Kingdom of Denmark", "Europe", 45, "dk", "DKK"),
    ("DM", "DMA", 212, "Dominica", "Commonwealth of Dominica", "North America", 1, "dm", "XCD"),
    ("DO", "DOM", 214, "Dominican Republic", "Dominican Republic", "North America", 1, "do", "DOP"),
    ("DZ", "DZA", 12, "Algeria", "People's Democratic Republic of Algeria", "Africa", 213, "dz", "DZD"),
    ("EC", "ECU", 218, "Ecuador", "Republic of Ecuador", "South America", 593, "ec", "USD"),
    ("EE", "EST", 233, "Estonia", "Republic of Estonia", "Europe", 372, "ee", "EUR"),
    ("EG", "EGY", 818, "Egypt", "Arab Republic of Egypt", "Africa", 20, "eg", "EGP"),
    ("EH", "ESH", 732, "Western Sahara", "Sahrawi Arab Democratic Republic", "Africa", 212, "eh", "MAD"),
    ("ER", "ERI", 232, "Eritrea", "State of Eritrea", "Africa", 291, "er", "ERN"),
    ("ES", "ESP", 724, "Spain", "Kingdom of Spain", "Europe", 34, "es", "EUR"),
    ("ET", "ETH", 231, "Ethiopia", "Federal Democratic Republic of Ethiopia", "Africa", 251, "et", "ETB"),
    ("FI", "FIN", 246, "Finland", "Republic of Finland", "Europe", 358, "fi", "EUR"),
    ("FJ", "FJI", 242, "Fiji", "Republic of Fiji", "Oceania", 679, "fj", "FJD"),
    ("FK", "FLK", 238, "Falkland Islands", "Falkland Islands", "South America", 500, "fk", "FKP"),
    ("FM", "FSM", 583, "Micronesia", "Federated States of Micronesia", "Oceania", 691, "fm", "USD"),
    ("FO", "FRO", 234, "Faroe Islands", "Faroe Islands", "Europe", 298, "fo", "DKK"),
    ("FR", "FRA", 250, "France", "French Republic", "Europe", 33, "fr", "EUR"),
    ("GA", "GAB", 266, "Gabon", "Gabonese Republic", "Africa", 241, "ga", "XAF"),
    ("GB", "GBR", 826, "United Kingdom", "United Kingdom of Great Britain and Northern Ireland", "Europe", 44, "gb", "GBP"),
    ("GD", "GRD", 308, "Grenada", "Grenada", "North America", 1, "gd", "XCD"),
    ("GE", "GEO", 268, "Georgia", "Georgia", "Asia", 995, "ge", "GEL"),
    ("GF", "GUF", 254, "French Guiana", "Guiana", "South America", 594, "gf", "EUR"),
    ("GG", "GGY", 831, "Guernsey", "Bailiwick of Guernsey", "Europe", 44, "gg", "GBP"),
    ("GH", "GHA", 288, "Ghana", "Republic of Ghana", "Africa", 233, "gh", "GHS"),
    ("GI", "GIB", 292, "Gibraltar", "Gibraltar", "Europe", 350, "gi", "GIP"),
    ("GL", "GRL", 304, "Greenland", "Greenland", "North America", 299, "gl", "DKK"),
    ("GM", "GMB", 270, "Gambia", "Republic of the Gambia", "Africa", 220, "gm", "GMD"),
    ("GN", "GIN", 324, "Guinea", "Republic of Guinea", "Africa", 224, "gn", "GNF"),
    ("GP", "GLP", 312, "Guadeloupe", "Guadeloupe", "North America", 590, "gp", "EUR"),
    ("GQ", "GNQ", 226, "Equatorial Guinea", "Republic of Equatorial Guinea", "Africa", 240, "gq", "XAF"),
    ("GR", "GRC", 300, "Greece", "Hellenic Republic", "Europe", 30, "gr", "EUR"),
    ("GS", "SGS", 239, "South Georgia", "South Georgia and the South Sandwich Islands", "Antarctica", 500, "gs", "GBP"),
    ("GT", "GTM", 320, "Guatemala", "Republic of Guatemala", "North America", 502, "gt", "GTQ"),
    ("GU", "GUM", 316, "Guam", "Guam", "Oceania", 1, "gu", "USD"),
    ("GW", "GNB", 624, "Guinea-Bissau", "Republic of Guinea-Bissau", "Africa", 245, "gw", "XOF"),
    ("GY", "GUY", 328, "Guyana", "Co-operative Republic of Guyana", "South America", 592, "gy", "GYD"),
    ("HK", "HKG", 344, "Hong Kong", "Hong Kong Special Administrative Region of the People's Republic of China", "Asia", 852, "hk", "HKD"),
    ("HM", "HMD", 334, "Heard Island and McDonald Islands", "Heard Island and McDonald Islands", "Antarctica", 672, "hm", "AUD"),
    ("HN", "HND", 340, "Honduras", "Republic of Honduras", "North America", 504, "hn", "HNL"),
    ("HR", "HRV", 191, "Croatia", "Republic of Croatia", "Europe", 385, "hr", "EUR"),
    ("HT", "HTI", 332, "Haiti", "Republic of Haiti", "North America", 509, "ht", "HTG"),
    ("HU", "HUN", 348, "Hungary", "Hungary", "Europe", 36, "hu", "HUF"),
    ("ID", "IDN", 360, "Indonesia", "Republic of Indonesia", "Asia", 62, "id", "IDR"),
    ("IE", "IRL", 372, "Ireland", "Ireland", "Europe", 353, "ie", "EUR"),
    ("IL", "ISR", 376, "Israel", "State of Israel", "Asia", 972, "il", "ILS"),
    ("IM", "IMN", 833, "Isle of Man", "Isle of Man", "Europe", 44, "im", "GBP"),
    ("IN", "IND", 356, "India", "Republic of India", "Asia", 91, "in", "INR"),
    ("IO", "IOT", 86, "British Indian Ocean Territory", "British Indian Ocean Territory", "Asia", 246, "io", "USD"),
    ("IQ", "IRQ", 368, "Iraq", "Republic of Iraq", "Asia", 964, "iq", "IQD"),
    ("IR", "IRN", 364, "Iran", "Islamic Republic of Iran", "Asia", 98, "ir", "IRR"),
    ("IS", "ISL", 352, "Iceland", "Iceland", "Europe", 354, "is", "ISK"),
    ("IT", "ITA", 380, "Italy", "Italian Republic", "Europe", 39, "it", "EUR"),
    ("JE", "JEY", 832, "Jersey", "Bailiwick of Jersey", "Europe", 44, "je", "GBP"),
    ("JM", "JAM", 388, "Jamaica", "Jamaica", "North America", 1, "jm", "JMD"),
    ("JO", "JOR", 400, "Jordan", "Hashemite Kingdom of Jordan", "Asia", 962, "jo", "JOD"),
    ("JP", "JPN", 392, "Japan", "Japan", "Asia", 81, "jp", "JPY"),
    ("KE", "KEN", 404, "Kenya", "Republic of Kenya", "Africa", 254, "ke", "KES"),
    ("KG", "KGZ", 417, "Kyrgyzstan", "Kyrgyz Republic", "Asia", 996, "kg", "KGS"),
    ("KH", "KHM", 116, "Cambodia", "Kingdom of Cambodia", "Asia", 855, "kh", "KHR"),
    ("KI", "KIR", 296, "Kiribati", "Republic of Kiribati", "Oceania", 686, "ki", "AUD"),
    ("KM", "COM", 174, "Comoros", "Union of the Comoros", "Africa", 269, "km", "KMF"),
    ("KN", "KNA", 659, "Saint Kitts and Nevis", "Federation of Saint Christopher and Nevis", "North America", 1, "kn", "XCD"),
    ("KP", "PRK", 408, "North Korea", "Democratic People's Republic of Korea", "Asia", 850, "kp", "KPW"),
    ("KR", "KOR", 410, "South Korea", "Republic of Korea", "Asia", 82, "kr", "KRW"),
    ("KW", "KWT", 414, "Kuwait", "State of Kuwait", "Asia", 965, "kw", "KWD"),
    ("KY", "CYM", 136, "Cayman Islands", "Cayman Islands", "North America", 1, "ky", "KYD"),
    ("KZ", "KAZ", 398, "Kazakhstan", "Republic of Kazakhstan", "Asia", 7, "kz", "KZT"),
    ("LA", "LAO", 418, "Laos", "Lao People's Democratic Republic", "Asia", 856, "la", "LAK"),
    ("LB", "LBN", 422, "Lebanon", "Lebanese Republic", "Asia", 961, "lb", "LBP"),
    ("LC", "LCA", 662, "Saint Lucia", "Saint Lucia", "North America", 1, "lc", "XCD"),
    ("LI", "LIE", 438, "Liechtenstein", "Principality of Liechtenstein", "Europe", 423, "li", "CHF"),
    ("LK", "LKA", 144, "Sri Lanka", "Democratic Socialist Republic of Sri Lanka", "Asia", 94, "lk", "LKR"),
    ("LR", "LBR", 430, "Liberia", "Republic of Liberia", "Africa", 231, "lr", "LRD"),
    ("LS", "LSO", 426, "Lesotho", "Kingdom of Lesotho", "Africa", 266, "ls", "LSL"),
    ("LT", "LTU", 440, "Lithuania", "Republic of Lithuania", "Europe", 370, "lt", "EUR"),
    ("LU", "LUX", 442, "Luxembourg", "Grand Duchy of Luxembourg", "Europe", 352, "lu", "EUR"),
    ("LV", "LVA", 428, "Latvia", "Republic of Latvia", "Europe", 371, "lv", "EUR"),
    ("LY", "LBY", 434, "Libya", "State of Libya", "Africa", 218, "ly", "LYD"),
    ("MA", "MAR", 504, "Morocco", "Kingdom of Morocco", "Africa", 212, "ma", "MAD"),
    ("MC", "MCO", 492, "Monaco", "Principality of Monaco", "Europe", 377, "mc", "EUR"),
    ("MD", "MDA", 498, "Moldova", "Republic of Moldova", "Europe", 373, "md", "MDL"),
    ("ME", "MNE", 499, "Montenegro", "Montenegro", "Europe", 382, "me", "EUR"),
    ("MF", "MAF", 663, "Saint Martin", "Collectivity of Saint Martin", "North America", 590, "mf", "EUR"),
    ("MG", "MDG", 450, "Madagascar", "Republic of Madagascar", "Africa", 261, "mg", "MGA"),
    ("MH", "MHL", 584, "Marshall Islands", "Republic of the Marshall Islands", "Oceania", 692, "mh", "USD"),
    ("MK", "MKD", 807, "North Macedonia", "Republic of North Macedonia", "Europe", 389, "mk", "MKD"),
    ("ML", "MLI", 466, "Mali", "Republic of Mali", "Africa", 223, "ml", "XOF"),
    ("MM", "MMR", 104, "Myanmar", "Republic of the Union of Myanmar", "Asia", 95, "mm", "MMK"),
    ("MN", "MNG", 496, "Mongolia", "Mongolia", "Asia", 976, "mn", "MNT"),
    ("MO", "MAC", 446, "Macau", "Macao Special Administrative Region of the People's Republic of China", "Asia", 853, "mo", "MOP"),
    ("MP", "MNP", 580, "Northern Mariana Islands", "Commonwealth of the Northern Mariana Islands", "Oceania", 1, "mp", "USD"),
    ("MQ", "MTQ", 474, "Martinique", "Martinique", "North America", 596, "mq", "EUR"),
    ("MR", "MRT", 478, "Mauritania", "Islamic Republic of Mauritania", "Africa", 222, "mr", "MRU"),
    ("MS", "MSR", 500, "Montserrat", "Montserrat", "North America", 1, "ms", "XCD"),
    ("MT", "MLT", 470, "Malta", "Republic of Malta", "Europe", 356, "mt", "EUR"),
    ("MU", "MUS", 480, "Mauritius", "Republic of Mauritius", "Africa", 230, "mu", "MUR"),
    ("MV", "MDV", 462, "Maldives", "Republic of Maldives", "Asia", 960, "mv", "MVR"),
    ("MW", "MWI", 454, "Malawi", "Republic of Malawi", "Africa", 265, "mw", "MWK"),
    ("MX", "MEX", 484, "Mexico", "United Mexican States", "North America", 52, "mx", "MXN"),
    ("MY", "MYS", 458, "Malaysia", "Malaysia", "Asia", 60, "my", "MYR"),
    ("MZ", "MOZ", 508, "Mozambique", "Republic of Mozambique", "Africa", 258, "mz", "MZN"),
    ("NA", "NAM", 516, "Namibia", "Republic of Namibia", "Africa", 264, "na", "NAD"),
    ("NC", "NCL", 540, "New Caledonia", "New Caledonia", "Oceania", 687, "nc", "XPF"),
    ("NE", "NER", 562, "Niger", "Republic of Niger", "Africa", 227, "ne", "XOF"),
    ("NF", "NFK", 574, "Norfolk Island", "Territory of Norfolk Island", "Oceania", 672, "nf", "AUD"),
    ("NG", "NGA", 566, "Nigeria", "Federal Republic of Nigeria", "Africa", 234, "ng", "NGN"),
    ("NI", "NIC", 558, "Nicaragua", "Republic of Nicaragua", "North America", 505, "ni", "NIO"),
    ("NL", "NLD", 528, "Netherlands", "Kingdom of the Netherlands", "Europe", 31, "nl", "EUR"),
    ("NO", "NOR", 578, "Norway", "Kingdom of Norway", "Europe", 47, "no", "NOK"),
    ("NP", "NPL", 524, "Nepal", "Federal Democratic Republic of Nepal", "Asia", 977, "np", "NPR"),
    ("NR", "NRU", 520, "Nauru", "Republic of Nauru", "Oceania", 674, "nr", "AUD"),
    ("NU", "NIU", 570, "Niue", "Niue", "Oceania", 683, "nu", "NZD"),
    ("NZ", "NZL", 554, "New Zealand", "New Zealand", "Oceania", 64, "nz", "NZD"),
    ("OM", "OMN", 512, "Oman", "Sultanate of Oman", "Asia", 968, "om", "OMR"),
    ("PA", "PAN", 591, "Panama", "Republic of Panama", "North America", 507, "pa", "PAB"),
    ("PE", "PER", 604, "Peru", "Republic of Peru", "South America", 51, "pe", "PEN"),
    ("PF", "PYF", 258, "French Polynesia", "French Polynesia", "Oceania", 689, "pf", "XPF"),
    ("PG", "PNG", 598, "Papua New Guinea", "Independent State of Papua New Guinea", "Oceania", 675, "pg", "PGK"),
    ("PH", "PHL", 608, "Philippines", "Republic of the Philippines", "Asia", 63, "ph", "PHP"),
    ("PK", "PAK", 586, "Pakistan", "Islamic Republic of Pakistan", "Asia", 92, "pk", "PKR"),
    ("PL", "POL", 616, "Poland", "Republic of Poland", "Europe", 48, "pl", "PLN"),
    ("PM", "SPM", 666, "Saint Pierre and Miquelon", "Saint Pierre and Miquelon", "North America", 508, "pm", "EUR"),
    ("PN", "PCN", 612, "Pitcairn Islands", "Pitcairn, Henderson, Ducie and Oeno Islands", "Oceania", 64, "pn", "NZD"),
    ("PR", "PRI", 630, "Puerto Rico", "Commonwealth of Puerto Rico", "North America", 1, "pr", "USD"),
    ("PS", "PSE", 275, "Palestine", "State of Palestine", "Asia", 970, "ps", "ILS"),
    ("PT", "PRT", 620, "Portugal", "Portuguese Republic", "Europe", 351, "pt", "EUR"),
    ("PW", "PLW", 585, "Palau", "Republic of Palau", "Oceania", 680, "pw", "USD"),
    ("PY", "PRY", 600, "Paraguay", "Republic of Paraguay", "South America", 595, "py", "PYG"),
    ("QA", "QAT", 634, "Qatar", "State of Qatar", "Asia", 974, "qa", "QAR"),
    ("RE", "REU", 638, "Réunion", "Réunion Island", "Africa", 262, "re", "EUR"),
    ("RO", "ROU", 642, "Romania", "Romania", "Europe", 40, "ro", "RON"),
    ("RS", "SRB", 688, "Serbia", "Republic of Serbia", "Europe", 381, "rs", "RSD"),
    ("RU", "RUS", 643, "Russia", "Russian Federation", "Europe", 7, "ru", "RUB"),
    ("RW", "RWA", 646, "Rwanda", "Republic of Rwanda", "Africa", 250, "rw", "RWF"),
    ("SA", "SAU", 682, "Saudi Arabia", "Kingdom of Saudi Arabia", "Asia", 966, "sa", "SAR"),
    ("SB", "SLB", 90, "Solomon Islands", "Solomon Islands", "Oceania", 677, "sb", "SBD"),
    ("SC", "SYC", 690, "Seychelles", "Republic of Seychelles", "Africa", 248, "sc", "SCR"),
    ("SD", "SDN", 729, "Sudan", "Republic of the Sudan", "Africa", 249, "sd", "SDG"),
    ("SE", "SWE", 752, "Sweden", "Kingdom of Sweden", "Europe", 46, "se", "SEK"),
    ("SG", "SGP", 702, "Singapore", "Republic of Singapore", "Asia", 65, "sg", "SGD"),
    ("SH", "SHN", 654, "Saint Helena", "Saint Helena, Ascension and Tristan da Cunha", "Africa", 290, "sh", "SHP"),
    ("SI", "SVN", 705, "Slovenia", "Republic of Slovenia", "Europe", 386, "si", "EUR"),
    ("SJ", "SJM", 744, "Svalbard and Jan Mayen", "Svalbard and Jan Mayen", "Europe", 47, "sj", "NOK"),
    ("SK", "SVK", 703, "Slovakia", "Slovak Republic", "Europe", 421, "sk", "EUR"),
    ("SL", "SLE", 694, "Sierra Leone", "Republic of Sierra Leone", "Africa", 232, "sl", "SLE"),
    ("SM", "SMR", 674, "San Marino", "Republic of San Marino", "Europe", 378, "sm", "EUR"),
    ("SN", "SEN", 686, "Senegal", "Republic of Senegal", "Africa", 221, "sn", "XOF"),
    ("SO", "SOM", 706, "Somalia", "Federal Republic of Somalia", "Africa", 252, "so", "SOS"),
    ("SR", "SUR", 740, "Suriname", "Republic of Suriname", "South America", 597, "sr", "SRD"),
    ("SS", "SSD", 728, "South Sudan", "Republic of South Sudan", "Africa", 211, "ss", "SSP"),
    ("ST", "STP", 678, "São Tomé and Príncipe", "Democratic Republic of São Tomé and Príncipe", "Africa", 239, "st", "STN"),
    ("SV", "SLV", 222, "El Salvador", "Republic of El Salvador", "North America", 503, "sv", "USD"),
    ("SX", "SXM", 534, "Sint Maarten", "Country of Sint Maarten", "North America", 1, "sx", "ANG"),
    ("SY", "SYR", 760, "Syria", "Syrian Arab Republic", "Asia", 963, "sy", "SYP"),
    ("SZ", "SWZ", 748, "Eswatini", "Kingdom of Eswatini", "Africa", 268, "sz", "SZL"),
    ("TC", "TCA", 796, "Turks and Caicos Islands", "Turks and Caicos Islands", "North America", 1, "tc", "USD"),
    ("TD", "TCD", 148, "Chad", "Republic of Chad", "Africa", 235, "td", "XAF"),
    ("TF", "ATF", 260, "French Southern and Antarctic Lands", "Territory of the French Southern and Antarctic Lands", "Antarctica", 262, "tf", "EUR"),
    ("TG", "TGO", 768, "Togo", "Togolese Republic", "Africa", 228, "tg", "XOF"),
    ("TH", "THA", 764, "Thailand", "Kingdom of Thailand", "Asia", 66, "th", "THB"),
    ("TJ", "TJK", 762, "Tajikistan", "Republic of Tajikistan", "Asia", 992, "tj", "TJS"),
    ("TK", "TKL", 772, "Tokelau", "Tokelau", "Oceania", 690, "tk", "NZD"),
    ("TL", "TLS", 626, "Timor-Leste", "Democratic Republic of Timor-Leste", "Asia", 670, "tl", "USD"),
    ("TM", "TKM", 795, "Turkmenistan", "Turkmenistan", "Asia", 993, "tm", "TMT"),
    ("TN", "TUN", 788, "Tunisia", "Tunisian Republic", "Africa", 216, "tn", "TND"),
    ("TO", "TON", 776, "Tonga", "Kingdom of Tonga", "Oceania", 676, "to", "TOP"),
    ("TR", "TUR", 792, "Türkiye", "Republic of Türkiye", "Asia", 90, "tr", "TRY"),
    ("TT", "TTO", 780, "Trinidad and Tobago", "Republic of Trinidad and Tobago", "North America", 1, "tt", "TTD"),
    ("TV", "TUV", 798, "Tuvalu", "Tuvalu", "Oceania", 688, "tv", "AUD"),
    ("TW", "TWN", 158, "Taiwan", "Republic of China", "Asia", 886, "tw", "TWD"),
    ("TZ", "TZA", 834, "Tanzania", "United Republic of Tanzania", "Africa", 255, "tz", "TZS"),
    ("UA", "UKR", 804, "Ukraine", "Ukraine", "Europe", 380, "ua", "UAH"),
    ("UG", "UGA", 800, "Uganda", "Republic of Uganda", "Africa", 256, "ug", "UGX"),
    ("UM", "UMI", 581, "United States Minor Outlying Islands", "United States Minor Outlying Islands", "Oceania", 1, "um", "USD"),
    ("US", "USA", 840, "United States", "United States of America", "North America", 1, "us", "USD"),
    ("UY", "URY", 858, "Uruguay", "Oriental Republic of Uruguay", "South America", 598, "uy", "UYU"),
    ("UZ", "UZB", 860, "Uzbekistan", "Republic of Uzbekistan", "Asia", 998, "uz", "UZS"),
    ("VA", "VAT", 336, "Vatican City", "Vatican City State", "Europe", 379, "va", "EUR"),
    ("VC", "VCT", 670, "Saint Vincent and the Grenadines", "Saint Vincent and the Grenadines", "North America", 1, "vc", "XCD"),
    ("VE", "VEN", 862, "Venezuela", "Bolivarian Republic of Venezuela", "South America", 58, "ve", "VES"),
    ("VG", "VGB", 92, "British Virgin Islands", "Virgin Islands", "North America", 1, "vg", "USD"),
    ("VI", "VIR", 850, "United States Virgin Islands", "Virgin Islands of the United States", "North America", 1, "vi", "USD"),
    ("VN", "VNM", 704, "Vietnam", "Socialist Republic of Vietnam", "Asia", 84, "vn", "VND"),
    ("VU", "VUT", 548, "Vanuatu", "Republic of Vanuatu", "Oceania", 678, "vu", "VUV"),
    ("WF", "WLF", 876, "Wallis and Futuna", "Territory of the Wallis and Futuna Islands", "Oceania", 681, "wf", "XPF"),
    ("WS", "WSM", 882, "Samoa", "Independent State of Samoa", "Oceania", 685, "ws", "WST"),
    ("YE", "YEM", 887, "Yemen", "Republic of Yemen", "Asia", 967, "ye", "YER"),
    ("YT", "MYT", 175, "Mayotte", "Department of Mayotte", "Africa", 262, "yt", "EUR"),
    ("ZA", "ZAF", 710, "South Africa", "Republic of South Africa", "Africa", 27, "za", "ZAR"),
    ("ZM", "ZMB", 894, "Zambia", "Republic of Zambia", "Africa", 260, "zm", "ZMW"),
    ("ZW", "ZWE", 716, "Zimbabwe", "Republic of Zimbabwe", "Africa", 263, "zw", "ZWL"),
];
