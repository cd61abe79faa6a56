use std::fmt;
use std::str::FromStr;

use super::format::{FormatDirective, MAX_FORMAT_ARG, Verb};
use super::Tier;
use crate::error::{Error, Result};

impl Verb {
    /// Decode a verb letter. Letters without a meaning of their own render
    /// the raw count.
    pub fn from_char(c: char) -> Self {
        match c {
            'b' => Verb::Tier(Tier::Unit),
            'k' => Verb::Tier(Tier::Kilo),
            'm' => Verb::Tier(Tier::Mega),
            'g' => Verb::Tier(Tier::Giga),
            't' => Verb::Tier(Tier::Tera),
            's' | 'v' => Verb::Auto,
            'f' => Verb::Fixed,
            _ => Verb::Raw,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Verb::Raw => 'd',
            Verb::Tier(Tier::Unit) => 'b',
            Verb::Tier(Tier::Kilo) => 'k',
            Verb::Tier(Tier::Mega) => 'm',
            Verb::Tier(Tier::Giga) => 'g',
            Verb::Tier(Tier::Tera) => 't',
            Verb::Auto => 's',
            Verb::Fixed => 'f',
        }
    }
}

/// Parses `[%][flags][width][.precision]verb`, where the flags are `#`
/// (decimal scale) and a space (no unit suffix).
///
/// ```
/// use byteunits::units::{ByteCount, FormatDirective};
/// let directive: FormatDirective = "%#6k".parse().unwrap();
/// assert_eq!(ByteCount(1000).format(&directive), "   1kB");
/// ```
impl FromStr for FormatDirective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidDirective {
            directive: s.to_string(),
            reason: reason.to_string(),
        };

        let mut rest = s.strip_prefix('%').unwrap_or(s);
        if rest.is_empty() {
            return Err(invalid("empty directive"));
        }

        let mut directive = FormatDirective::new(Verb::Raw);
        loop {
            if let Some(r) = rest.strip_prefix('#') {
                directive.decimal = true;
                rest = r;
            } else if let Some(r) = rest.strip_prefix(' ') {
                directive.suppress_suffix = true;
                rest = r;
            } else {
                break;
            }
        }

        let (digits, r) = split_digits(rest);
        if !digits.is_empty() {
            let width = parse_bounded(digits).ok_or_else(|| invalid("width out of range"))?;
            directive.width = Some(width);
        }
        rest = r;

        if let Some(r) = rest.strip_prefix('.') {
            let (digits, r) = split_digits(r);
            // A bare '.' means zero digits.
            let precision = if digits.is_empty() {
                0
            } else {
                parse_bounded(digits).ok_or_else(|| invalid("precision out of range"))?
            };
            directive.precision = Some(precision);
            rest = r;
        }

        let mut chars = rest.chars();
        let verb = chars.next().ok_or_else(|| invalid("missing verb"))?;
        if !chars.as_str().is_empty() {
            return Err(invalid("unexpected characters after verb"));
        }
        directive.verb = Verb::from_char(verb);

        Ok(directive)
    }
}

// std::fmt only takes widths and precisions up to u16::MAX.
fn parse_bounded(digits: &str) -> Option<usize> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= MAX_FORMAT_ARG)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

impl fmt::Display for FormatDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.decimal {
            f.write_str("#")?;
        }
        if self.suppress_suffix {
            f.write_str(" ")?;
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        write!(f, "{}", self.verb.as_char())
    }
}
