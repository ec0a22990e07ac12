//! Conversion between decimal and American odds notation.
//!
//! Decimal odds are the canonical form everywhere in this crate; American
//! odds exist only at the display and input boundaries. Both directions are
//! total functions: malformed input yields a sentinel (`"-"` or `None`)
//! rather than an error, so callers can use them directly in formatting
//! paths without surrounding error handling.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// The display placeholder for a price that cannot be expressed in
/// American notation (break-even or worse, i.e. decimal odds <= 1.00).
pub const NO_PRICE: &str = "-";

/// Format decimal odds in American notation.
///
/// Decimal odds >= 2.00 map to a positive (underdog) price of
/// `round((d - 1) * 100)`; odds strictly between 1.00 and 2.00 map to a
/// negative (favorite) price of `round(-100 / (d - 1))`. The boundary 2.00
/// belongs to the positive branch and maps to exactly `+100`. Midpoints
/// round away from zero.
///
/// Odds <= 1.00 have no American representation and render as [`NO_PRICE`].
pub fn decimal_to_american(decimal: Decimal) -> String {
    if decimal <= Decimal::ONE {
        return NO_PRICE.to_string();
    }

    let stake = decimal - Decimal::ONE;
    if decimal >= Decimal::TWO {
        let american = (stake * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("+{american}")
    } else {
        // Already negative; the sign carries through the division.
        let american = (-Decimal::ONE_HUNDRED / stake)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{american}")
    }
}

/// Parse American odds text into decimal odds.
///
/// Accepts a signed integer magnitude >= 100 (`"+150"`, `"-200"`). As a
/// deliberate compatibility fallback, any other input is given exactly one
/// chance to parse as a plain decimal price > 1.0, so a user who types
/// `1.8` (or an out-of-range magnitude such as `+50`) into an
/// American-odds field is not hard-rejected. Everything else returns
/// `None`.
pub fn american_to_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(magnitude) = parse_signed_magnitude(text) {
        let hundred = Decimal::ONE_HUNDRED;
        let price = Decimal::from(magnitude.unsigned_abs());
        // Division carries the operands' scale (250/100 -> 2.50); drop the
        // trailing zeros so the canonical decimal serializes as `3.5`.
        return Some(if magnitude > 0 {
            (price / hundred + Decimal::ONE).normalize()
        } else {
            (hundred / price + Decimal::ONE).normalize()
        });
    }

    // Compatibility fallback: the whole string as a decimal price.
    match Decimal::from_str(text) {
        Ok(d) if d > Decimal::ONE => Some(d),
        _ => None,
    }
}

/// Parse `+NNN` / `-NNN` with magnitude >= 100, the only well-formed
/// American odds shape. Anything else falls through to the decimal
/// fallback in the caller.
fn parse_signed_magnitude(text: &str) -> Option<i64> {
    let rest = text.strip_prefix('+').or_else(|| text.strip_prefix('-'))?;
    let magnitude: i64 = rest.parse().ok()?;
    if magnitude < 100 {
        return None;
    }
    Some(if text.starts_with('-') {
        -magnitude
    } else {
        magnitude
    })
}
