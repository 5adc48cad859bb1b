//! Currency reference table.
//!
//! Codes are kept sorted so lookups can binary search.

use serde::Serialize;

use crate::error::ValidationError;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub name_plural: &'static str,
}

/// Find a currency by its three letter code, ignoring case.
pub fn lookup(code: &str) -> Result<&'static Currency, ValidationError> {
    let wanted = code.trim().to_ascii_uppercase();
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(wanted.as_str()))
        .map(|i| &CURRENCIES[i])
        .map_err(|_| ValidationError::UnknownCurrency {
            code: code.to_string(),
        })
}

static CURRENCIES: &[Currency] = &[
    Currency {
        code: "AED",
        symbol: "AED",
        name: "United Arab Emirates Dirham",
        name_plural: "UAE dirhams",
    },
    Currency {
        code: "AFN",
        symbol: "Af",
        name: "Afghan Afghani",
        name_plural: "Afghan Afghanis",
    },
    Currency {
        code: "ALL",
        symbol: "ALL",
        name: "Albanian Lek",
        name_plural: "Albanian lekë",
    },
    Currency {
        code: "AMD",
        symbol: "AMD",
        name: "Armenian Dram",
        name_plural: "Armenian drams",
    },
    Currency {
        code: "ARS",
        symbol: "AR$",
        name: "Argentine Peso",
        name_plural: "Argentine pesos",
    },
    Currency {
        code: "AUD",
        symbol: "AU$",
        name: "Australian Dollar",
        name_plural: "Australian dollars",
    },
    Currency {
        code: "AZN",
        symbol: "man.",
        name: "Azerbaijani Manat",
        name_plural: "Azerbaijani manats",
    },
    Currency {
        code: "BAM",
        symbol: "KM",
        name: "Bosnia-Herzegovina Convertible Mark",
        name_plural: "Bosnia-Herzegovina convertible marks",
    },
    Currency {
        code: "BDT",
        symbol: "Tk",
        name: "Bangladeshi Taka",
        name_plural: "Bangladeshi takas",
    },
    Currency {
        code: "BGN",
        symbol: "BGN",
        name: "Bulgarian Lev",
        name_plural: "Bulgarian leva",
    },
    Currency {
        code: "BHD",
        symbol: "BD",
        name: "Bahraini Dinar",
        name_plural: "Bahraini dinars",
    },
    Currency {
        code: "BIF",
        symbol: "FBu",
        name: "Burundian Franc",
        name_plural: "Burundian francs",
    },
    Currency {
        code: "BND",
        symbol: "BN$",
        name: "Brunei Dollar",
        name_plural: "Brunei dollars",
    },
    Currency {
        code: "BOB",
        symbol: "Bs",
        name: "Bolivian Boliviano",
        name_plural: "Bolivian bolivianos",
    },
    Currency {
        code: "BRL",
        symbol: "R$",
        name: "Brazilian Real",
        name_plural: "Brazilian reals",
    },
    Currency {
        code: "BWP",
        symbol: "BWP",
        name: "Botswanan Pula",
        name_plural: "Botswanan pulas",
    },
    Currency {
        code: "BYN",
        symbol: "Br",
        name: "Belarusian Ruble",
        name_plural: "Belarusian rubles",
    },
    Currency {
        code: "BZD",
        symbol: "BZ$",
        name: "Belize Dollar",
        name_plural: "Belize dollars",
    },
    Currency {
        code: "CAD",
        symbol: "CA$",
        name: "Canadian Dollar",
        name_plural: "Canadian dollars",
    },
    Currency {
        code: "CDF",
        symbol: "CDF",
        name: "Congolese Franc",
        name_plural: "Congolese francs",
    },
    Currency {
        code: "CHF",
        symbol: "CHF",
        name: "Swiss Franc",
        name_plural: "Swiss francs",
    },
    Currency {
        code: "CLP",
        symbol: "CL$",
        name: "Chilean Peso",
        name_plural: "Chilean pesos",
    },
    Currency {
        code: "CNY",
        symbol: "CN¥",
        name: "Chinese Yuan",
        name_plural: "Chinese yuan",
    },
    Currency {
        code: "COP",
        symbol: "CO$",
        name: "Colombian Peso",
        name_plural: "Colombian pesos",
    },
    Currency {
        code: "CRC",
        symbol: "₡",
        name: "Costa Rican Colón",
        name_plural: "Costa Rican colóns",
    },
    Currency {
        code: "CUP",
        symbol: "MN$",
        name: "Cuban peso",
        name_plural: "Cuban pesos",
    },
    Currency {
        code: "CVE",
        symbol: "CV$",
        name: "Cape Verdean Escudo",
        name_plural: "Cape Verdean escudos",
    },
    Currency {
        code: "CZK",
        symbol: "Kč",
        name: "Czech Republic Koruna",
        name_plural: "Czech Republic korunas",
    },
    Currency {
        code: "DJF",
        symbol: "Fdj",
        name: "Djiboutian Franc",
        name_plural: "Djiboutian francs",
    },
    Currency {
        code: "DKK",
        symbol: "Dkr",
        name: "Danish Krone",
        name_plural: "Danish kroner",
    },
    Currency {
        code: "DOP",
        symbol: "RD$",
        name: "Dominican Peso",
        name_plural: "Dominican pesos",
    },
    Currency {
        code: "DZD",
        symbol: "DA",
        name: "Algerian Dinar",
        name_plural: "Algerian dinars",
    },
    Currency {
        code: "EEK",
        symbol: "Ekr",
        name: "Estonian Kroon",
        name_plural: "Estonian kroons",
    },
    Currency {
        code: "EGP",
        symbol: "EGP",
        name: "Egyptian Pound",
        name_plural: "Egyptian pounds",
    },
    Currency {
        code: "ERN",
        symbol: "Nfk",
        name: "Eritrean Nakfa",
        name_plural: "Eritrean nakfas",
    },
    Currency {
        code: "ETB",
        symbol: "Br",
        name: "Ethiopian Birr",
        name_plural: "Ethiopian birrs",
    },
    Currency {
        code: "EUR",
        symbol: "€",
        name: "Euro",
        name_plural: "euros",
    },
    Currency {
        code: "GBP",
        symbol: "£",
        name: "British Pound Sterling",
        name_plural: "British pounds sterling",
    },
    Currency {
        code: "GEL",
        symbol: "GEL",
        name: "Georgian Lari",
        name_plural: "Georgian laris",
    },
    Currency {
        code: "GHS",
        symbol: "GH₵",
        name: "Ghanaian Cedi",
        name_plural: "Ghanaian cedis",
    },
    Currency {
        code: "GNF",
        symbol: "FG",
        name: "Guinean Franc",
        name_plural: "Guinean francs",
    },
    Currency {
        code: "GTQ",
        symbol: "GTQ",
        name: "Guatemalan Quetzal",
        name_plural: "Guatemalan quetzals",
    },
    Currency {
        code: "HKD",
        symbol: "HK$",
        name: "Hong Kong Dollar",
        name_plural: "Hong Kong dollars",
    },
    Currency {
        code: "HNL",
        symbol: "HNL",
        name: "Honduran Lempira",
        name_plural: "Honduran lempiras",
    },
    Currency {
        code: "HRK",
        symbol: "kn",
        name: "Croatian Kuna",
        name_plural: "Croatian kunas",
    },
    Currency {
        code: "HUF",
        symbol: "Ft",
        name: "Hungarian Forint",
        name_plural: "Hungarian forints",
    },
    Currency {
        code: "IDR",
        symbol: "Rp",
        name: "Indonesian Rupiah",
        name_plural: "Indonesian rupiahs",
    },
    Currency {
        code: "ILS",
        symbol: "₪",
        name: "Israeli New Sheqel",
        name_plural: "Israeli new sheqels",
    },
    Currency {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
        name_plural: "Indian rupees",
    },
    Currency {
        code: "IQD",
        symbol: "IQD",
        name: "Iraqi Dinar",
        name_plural: "Iraqi dinars",
    },
    Currency {
        code: "IRR",
        symbol: "IRR",
        name: "Iranian Rial",
        name_plural: "Iranian rials",
    },
    Currency {
        code: "ISK",
        symbol: "Ikr",
        name: "Icelandic Króna",
        name_plural: "Icelandic krónur",
    },
    Currency {
        code: "JMD",
        symbol: "J$",
        name: "Jamaican Dollar",
        name_plural: "Jamaican dollars",
    },
    Currency {
        code: "JOD",
        symbol: "JD",
        name: "Jordanian Dinar",
        name_plural: "Jordanian dinars",
    },
    Currency {
        code: "JPY",
        symbol: "¥",
        name: "Japanese Yen",
        name_plural: "Japanese yen",
    },
    Currency {
        code: "KES",
        symbol: "Ksh",
        name: "Kenyan Shilling",
        name_plural: "Kenyan shillings",
    },
    Currency {
        code: "KHR",
        symbol: "KHR",
        name: "Cambodian Riel",
        name_plural: "Cambodian riels",
    },
    Currency {
        code: "KMF",
        symbol: "CF",
        name: "Comorian Franc",
        name_plural: "Comorian francs",
    },
    Currency {
        code: "KRW",
        symbol: "₩",
        name: "South Korean Won",
        name_plural: "South Korean won",
    },
    Currency {
        code: "KWD",
        symbol: "KD",
        name: "Kuwaiti Dinar",
        name_plural: "Kuwaiti dinars",
    },
    Currency {
        code: "KZT",
        symbol: "KZT",
        name: "Kazakhstani Tenge",
        name_plural: "Kazakhstani tenges",
    },
    Currency {
        code: "LBP",
        symbol: "L.L.",
        name: "Lebanese Pound",
        name_plural: "Lebanese pounds",
    },
    Currency {
        code: "LKR",
        symbol: "SLRs",
        name: "Sri Lankan Rupee",
        name_plural: "Sri Lankan rupees",
    },
    Currency {
        code: "LTL",
        symbol: "Lt",
        name: "Lithuanian Litas",
        name_plural: "Lithuanian litai",
    },
    Currency {
        code: "LVL",
        symbol: "Ls",
        name: "Latvian Lats",
        name_plural: "Latvian lati",
    },
    Currency {
        code: "LYD",
        symbol: "LD",
        name: "Libyan Dinar",
        name_plural: "Libyan dinars",
    },
    Currency {
        code: "MAD",
        symbol: "MAD",
        name: "Moroccan Dirham",
        name_plural: "Moroccan dirhams",
    },
    Currency {
        code: "MDL",
        symbol: "MDL",
        name: "Moldovan Leu",
        name_plural: "Moldovan lei",
    },
    Currency {
        code: "MGA",
        symbol: "MGA",
        name: "Malagasy Ariary",
        name_plural: "Malagasy Ariaries",
    },
    Currency {
        code: "MKD",
        symbol: "MKD",
        name: "Macedonian Denar",
        name_plural: "Macedonian denari",
    },
    Currency {
        code: "MMK",
        symbol: "MMK",
        name: "Myanma Kyat",
        name_plural: "Myanma kyats",
    },
    Currency {
        code: "MOP",
        symbol: "MOP$",
        name: "Macanese Pataca",
        name_plural: "Macanese patacas",
    },
    Currency {
        code: "MUR",
        symbol: "MURs",
        name: "Mauritian Rupee",
        name_plural: "Mauritian rupees",
    },
    Currency {
        code: "MXN",
        symbol: "MX$",
        name: "Mexican Peso",
        name_plural: "Mexican pesos",
    },
    Currency {
        code: "MYR",
        symbol: "RM",
        name: "Malaysian Ringgit",
        name_plural: "Malaysian ringgits",
    },
    Currency {
        code: "MZN",
        symbol: "MTn",
        name: "Mozambican Metical",
        name_plural: "Mozambican meticals",
    },
    Currency {
        code: "NAD",
        symbol: "N$",
        name: "Namibian Dollar",
        name_plural: "Namibian dollars",
    },
    Currency {
        code: "NGN",
        symbol: "₦",
        name: "Nigerian Naira",
        name_plural: "Nigerian nairas",
    },
    Currency {
        code: "NIO",
        symbol: "C$",
        name: "Nicaraguan Córdoba",
        name_plural: "Nicaraguan córdobas",
    },
    Currency {
        code: "NOK",
        symbol: "Nkr",
        name: "Norwegian Krone",
        name_plural: "Norwegian kroner",
    },
    Currency {
        code: "NPR",
        symbol: "NPRs",
        name: "Nepalese Rupee",
        name_plural: "Nepalese rupees",
    },
    Currency {
        code: "NZD",
        symbol: "NZ$",
        name: "New Zealand Dollar",
        name_plural: "New Zealand dollars",
    },
    Currency {
        code: "OMR",
        symbol: "OMR",
        name: "Omani Rial",
        name_plural: "Omani rials",
    },
    Currency {
        code: "PAB",
        symbol: "B/.",
        name: "Panamanian Balboa",
        name_plural: "Panamanian balboas",
    },
    Currency {
        code: "PEN",
        symbol: "S/.",
        name: "Peruvian Nuevo Sol",
        name_plural: "Peruvian nuevos soles",
    },
    Currency {
        code: "PHP",
        symbol: "₱",
        name: "Philippine Peso",
        name_plural: "Philippine pesos",
    },
    Currency {
        code: "PKR",
        symbol: "PKRs",
        name: "Pakistani Rupee",
        name_plural: "Pakistani rupees",
    },
    Currency {
        code: "PLN",
        symbol: "zł",
        name: "Polish Zloty",
        name_plural: "Polish zlotys",
    },
    Currency {
        code: "PYG",
        symbol: "₲",
        name: "Paraguayan Guarani",
        name_plural: "Paraguayan guaranis",
    },
    Currency {
        code: "QAR",
        symbol: "QR",
        name: "Qatari Rial",
        name_plural: "Qatari rials",
    },
    Currency {
        code: "RON",
        symbol: "RON",
        name: "Romanian Leu",
        name_plural: "Romanian lei",
    },
    Currency {
        code: "RSD",
        symbol: "din.",
        name: "Serbian Dinar",
        name_plural: "Serbian dinars",
    },
    Currency {
        code: "RUB",
        symbol: "RUB",
        name: "Russian Ruble",
        name_plural: "Russian rubles",
    },
    Currency {
        code: "RWF",
        symbol: "RWF",
        name: "Rwandan Franc",
        name_plural: "Rwandan francs",
    },
    Currency {
        code: "SAR",
        symbol: "SR",
        name: "Saudi Riyal",
        name_plural: "Saudi riyals",
    },
    Currency {
        code: "SDG",
        symbol: "SDG",
        name: "Sudanese Pound",
        name_plural: "Sudanese pounds",
    },
    Currency {
        code: "SEK",
        symbol: "Skr",
        name: "Swedish Krona",
        name_plural: "Swedish kronor",
    },
    Currency {
        code: "SGD",
        symbol: "S$",
        name: "Singapore Dollar",
        name_plural: "Singapore dollars",
    },
    Currency {
        code: "SOS",
        symbol: "Ssh",
        name: "Somali Shilling",
        name_plural: "Somali shillings",
    },
    Currency {
        code: "SYP",
        symbol: "SY£",
        name: "Syrian Pound",
        name_plural: "Syrian pounds",
    },
    Currency {
        code: "THB",
        symbol: "฿",
        name: "Thai Baht",
        name_plural: "Thai baht",
    },
    Currency {
        code: "TND",
        symbol: "DT",
        name: "Tunisian Dinar",
        name_plural: "Tunisian dinars",
    },
    Currency {
        code: "TOP",
        symbol: "T$",
        name: "Tongan Paʻanga",
        name_plural: "Tongan paʻanga",
    },
    Currency {
        code: "TRY",
        symbol: "TL",
        name: "Turkish Lira",
        name_plural: "Turkish Lira",
    },
    Currency {
        code: "TTD",
        symbol: "TT$",
        name: "Trinidad and Tobago Dollar",
        name_plural: "Trinidad and Tobago dollars",
    },
    Currency {
        code: "TWD",
        symbol: "NT$",
        name: "New Taiwan Dollar",
        name_plural: "New Taiwan dollars",
    },
    Currency {
        code: "TZS",
        symbol: "TSh",
        name: "Tanzanian Shilling",
        name_plural: "Tanzanian shillings",
    },
    Currency {
        code: "UAH",
        symbol: "₴",
        name: "Ukrainian Hryvnia",
        name_plural: "Ukrainian hryvnias",
    },
    Currency {
        code: "UGX",
        symbol: "USh",
        name: "Ugandan Shilling",
        name_plural: "Ugandan shillings",
    },
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        name_plural: "US dollars",
    },
    Currency {
        code: "UYU",
        symbol: "$U",
        name: "Uruguayan Peso",
        name_plural: "Uruguayan pesos",
    },
    Currency {
        code: "UZS",
        symbol: "UZS",
        name: "Uzbekistan Som",
        name_plural: "Uzbekistan som",
    },
    Currency {
        code: "VEF",
        symbol: "Bs.F.",
        name: "Venezuelan Bolívar",
        name_plural: "Venezuelan bolívars",
    },
    Currency {
        code: "VND",
        symbol: "₫",
        name: "Vietnamese Dong",
        name_plural: "Vietnamese dong",
    },
    Currency {
        code: "XAF",
        symbol: "FCFA",
        name: "CFA Franc BEAC",
        name_plural: "CFA francs BEAC",
    },
    Currency {
        code: "XCD",
        symbol: "EC$",
        name: "Eastern Caribbean dollar",
        name_plural: "Eastern Caribbean dollars",
    },
    Currency {
        code: "XOF",
        symbol: "CFA",
        name: "CFA Franc BCEAO",
        name_plural: "CFA francs BCEAO",
    },
    Currency {
        code: "YER",
        symbol: "YR",
        name: "Yemeni Rial",
        name_plural: "Yemeni rials",
    },
    Currency {
        code: "ZAR",
        symbol: "R",
        name: "South African Rand",
        name_plural: "South African rand",
    },
    Currency {
        code: "ZMK",
        symbol: "ZK",
        name: "Zambian Kwacha",
        name_plural: "Zambian kwachas",
    },
    Currency {
        code: "ZWL",
        symbol: "ZWL$",
        name: "Zimbabwean Dollar",
        name_plural: "Zimbabwean Dollar",
    },
];
