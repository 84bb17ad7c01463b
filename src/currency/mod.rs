//! Currency conversion support.
//!
//! This module provides functionality to:
//! - Detect conversion requests like `$5 to eur` in free text
//! - Map currency symbols to codes
//! - Read the conversion service's `"$5 = €4.61"` answers

mod conversion;
mod parser;
mod symbols;

pub use conversion::{Conversion, parse_conversion, parse_converted_amount};
pub use parser::{CurrencyQuery, normalize_symbols, parse_currency_query};
pub use symbols::{SYMBOL_TO_CODE, code_for_symbol};
