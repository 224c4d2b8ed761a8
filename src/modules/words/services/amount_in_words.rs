//! Indian-numbering amount in words.
//!
//! Amounts are spelled out with Hundred, Thousand, Lakh and Crore. Crore is
//! the largest scale word: quantities of a hundred crore or more spell the
//! crore count itself (`"One Hundred Crore"`), never a larger unit.

use rust_decimal::Decimal;

use crate::core::Rupee;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

// Indices 0 and 1 are covered by ONES.
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// A magnitude band: amounts below `limit` are split into
/// `amount / unit` + `word` + `amount % unit`
struct ScaleBand {
    unit: u128,
    limit: u128,
    word: &'static str,
}

const SCALE_BANDS: [ScaleBand; 3] = [
    ScaleBand {
        unit: 100,
        limit: 1_000,
        word: "Hundred",
    },
    ScaleBand {
        unit: 1_000,
        limit: 100_000,
        word: "Thousand",
    },
    ScaleBand {
        unit: 100_000,
        limit: 10_000_000,
        word: "Lakh",
    },
];

const CRORE: u128 = 10_000_000;

/// AmountInWords converts whole amounts into Indian-numbering words
pub struct AmountInWords;

impl AmountInWords {
    pub fn new() -> Self {
        Self
    }

    /// Spell out `amount`; zero is the empty string
    pub fn convert(&self, amount: u128) -> String {
        if amount == 0 {
            return String::new();
        }
        Self::in_words(amount)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Grand total as shown under the invoice: rounded to whole rupees and
    /// followed by "Rupees Only". Non-positive totals give `""`.
    pub fn rupees(&self, grand_total: Decimal) -> String {
        if grand_total <= Decimal::ZERO {
            return String::new();
        }
        let words = self.convert(Rupee::round_to_unit(grand_total));
        format!("{} {}", words, Rupee::WORDS_SUFFIX)
            .trim()
            .to_string()
    }

    fn in_words(n: u128) -> String {
        if n < 20 {
            return ONES[n as usize].to_string();
        }
        if n < 100 {
            return format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize]);
        }
        for band in &SCALE_BANDS {
            if n < band.limit {
                return format!(
                    "{} {} {}",
                    Self::in_words(n / band.unit),
                    band.word,
                    Self::in_words(n % band.unit)
                );
            }
        }
        format!(
            "{} Crore {}",
            Self::in_words(n / CRORE),
            Self::in_words(n % CRORE)
        )
    }
}

impl Default for AmountInWords {
    fn default() -> Self {
        Self::new()
    }
}
