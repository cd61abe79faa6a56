use std::str::FromStr;

use super::{ByteCount, KB, KIB, Scale, Tier};
use crate::error::{Error, Result};

// u128 headroom: 25 fractional digits times a magnitude below 2^41 stays
// well under u128::MAX.
const MAX_FRACTION_DIGITS: usize = 25;

/// Magnitude named by `suffix`. An empty suffix means bytes.
fn magnitude_of(suffix: &str) -> Option<ByteCount> {
    match suffix {
        "" => return Some(ByteCount(1)),
        "KiB" => return Some(KIB),
        "KB" => return Some(KB),
        _ => {}
    }
    [Scale::Binary, Scale::Decimal]
        .into_iter()
        .flat_map(|scale| Tier::ALL.into_iter().map(move |tier| (scale, tier)))
        .find(|&(scale, tier)| scale.suffix(tier) == suffix)
        .map(|(scale, tier)| scale.magnitude(tier))
}

/// Parses sizes like `1536`, `2MiB`, `1.5 kB`. Fractions are truncated to
/// whole bytes.
///
/// ```
/// use byteunits::units::ByteCount;
/// assert_eq!("1.5kiB".parse::<ByteCount>().unwrap(), ByteCount(1536));
/// assert_eq!("2 MB".parse::<ByteCount>().unwrap(), ByteCount(2_000_000));
/// ```
impl FromStr for ByteCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let invalid = |reason: &str| Error::InvalidSize {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let overflow = || Error::SizeOverflow {
            input: s.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("empty input"));
        }

        let split = input
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(input.len());
        let (number, suffix) = input.split_at(split);
        let suffix = suffix.trim_start();

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("missing number"));
        }
        if fraction.contains('.') {
            return Err(invalid("more than one decimal point"));
        }

        let magnitude = magnitude_of(suffix).ok_or_else(|| Error::UnknownUnit {
            input: s.to_string(),
            suffix: suffix.to_string(),
        })?;

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let bytes = whole.checked_mul(magnitude.0).ok_or_else(overflow)?;

        let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        if fraction.is_empty() {
            return Ok(ByteCount(bytes));
        }
        let numerator: u128 = fraction.parse().map_err(|_| invalid("malformed fraction"))?;
        let denominator = 10u128.pow(fraction.len() as u32);
        // Bounded by one magnitude, so it always fits in u64.
        let partial = (numerator * u128::from(magnitude.0) / denominator) as u64;

        bytes.checked_add(partial).map(ByteCount).ok_or_else(overflow)
    }
}
