use rust_decimal::{Decimal, RoundingStrategy};

/// Indian Rupee display rules for invoice amounts.
///
/// Every amount shown on the invoice goes through [`Rupee::format_amount`],
/// which hides zero and negative values instead of printing `₹0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rupee;

impl Rupee {
    /// Currency glyph prefixed to rendered amounts
    pub const SYMBOL: &'static str = "₹";

    /// Suffix appended to the amount in words
    pub const WORDS_SUFFIX: &'static str = "Rupees Only";

    /// Decimal places shown for paise
    pub const SCALE: u32 = 2;

    /// Rounds to paise, midpoint away from zero
    pub fn round(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Rounds to whole rupees, dropping paise.
    ///
    /// Non-positive amounts map to `0`.
    pub fn round_to_unit(amount: Decimal) -> u128 {
        if amount <= Decimal::ZERO {
            return 0;
        }
        let mut whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        whole.rescale(0);
        u128::try_from(whole.mantissa()).unwrap_or(0)
    }

    /// Formats an amount as `₹1234.50`; non-positive amounts render as `""`
    pub fn format_amount(amount: Decimal) -> String {
        if amount <= Decimal::ZERO {
            return String::new();
        }
        // Display precision pads with zeros even where rescale cannot widen
        format!(
            "{}{:.*}",
            Self::SYMBOL,
            Self::SCALE as usize,
            Self::round(amount)
        )
    }

    /// Formats an amount that may be absent for the active tax regime
    pub fn format_optional(amount: Option<Decimal>) -> String {
        amount.map(Self::format_amount).unwrap_or_default()
    }
}
