//! Currency symbol table.

/// Symbol glyph to lowercase currency code.
///
/// Order matters: rewrite rules are applied in this order, so a shorter
/// symbol listed earlier (`$`) wins over a longer one containing it (`A$`)
/// when both could match the same text.
pub const SYMBOL_TO_CODE: &[(&str, &str)] = &[
    ("$", "usd"),
    ("€", "eur"),
    ("£", "gbp"),
    ("¥", "jpy"),
    ("₹", "inr"),
    ("₽", "rub"),
    ("₩", "krw"),
    ("₨", "pkr"),
    ("₺", "try"),
    ("R$", "brl"),
    ("₫", "vnd"),
    ("₴", "uah"),
    ("₦", "ngn"),
    ("₪", "ils"),
    ("₡", "crc"),
    ("₱", "php"),
    ("฿", "thb"),
    ("₭", "lak"),
    ("₮", "mnt"),
    ("₼", "azn"),
    ("₵", "ghs"),
    ("₸", "kzt"),
    ("A$", "aud"),
    ("C$", "cad"),
    ("NZ$", "nzd"),
    ("S$", "sgd"),
    ("HK$", "hkd"),
    ("₲", "pyg"),
    ("₠", "euro"),
    ("₢", "brb"),
    ("₣", "frf"),
    ("₤", "itl"),
    ("₧", "esp"),
    ("₯", "grd"),
    ("₰", "pfennig"),
    ("₳", "ara"),
    ("₾", "gel"),
    ("₿", "btc"),
    ("៛", "khr"),
    ("₥", "mill"),
];

/// Look up the currency code for a symbol glyph (case-insensitive).
pub fn code_for_symbol(symbol: &str) -> Option<&'static str> {
    let symbol = symbol.trim();
    SYMBOL_TO_CODE
        .iter()
        .find(|(glyph, _)| glyph.eq_ignore_ascii_case(symbol))
        .map(|&(_, code)| code)
}
