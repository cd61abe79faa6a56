use std::fmt;

use super::{ByteCount, Scale, Tier};

/// Precision used by [`Verb::Fixed`] when none is given.
pub const DEFAULT_PRECISION: usize = 1;

/// Largest width or precision a directive can carry.
pub const MAX_FORMAT_ARG: usize = u16::MAX as usize;

/// What kind of numeral a directive renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// The unscaled byte count, never followed by a suffix.
    Raw,
    /// Integer count of an explicit tier (`b`, `k`, `m`, `g`, `t`).
    Tier(Tier),
    /// Integer count of the auto-selected magnitude.
    Auto,
    /// Fixed-point count of the auto-selected magnitude.
    Fixed,
}

/// A decoded formatting request.
///
/// `width` is the total width of numeral and suffix together. The numeral is
/// right-justified in whatever the suffix leaves over; the suffix itself is
/// never padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDirective {
    pub verb: Verb,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// Use the decimal scale (kB, MB, ...) instead of the binary one.
    pub decimal: bool,
    pub suppress_suffix: bool,
}

impl FormatDirective {
    pub const fn new(verb: Verb) -> Self {
        Self {
            verb,
            width: None,
            precision: None,
            decimal: false,
            suppress_suffix: false,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn decimal(mut self) -> Self {
        self.decimal = true;
        self
    }

    pub fn without_suffix(mut self) -> Self {
        self.suppress_suffix = true;
        self
    }

    pub fn scale(&self) -> Scale {
        if self.decimal {
            Scale::Decimal
        } else {
            Scale::Binary
        }
    }

    /// Fold the flags of a `std::fmt` request into this directive: `#` selects
    /// the decimal scale, and width/precision override the stored ones.
    fn merge(mut self, f: &fmt::Formatter<'_>) -> Self {
        self.decimal |= f.alternate();
        self.width = f.width().or(self.width);
        self.precision = f.precision().or(self.precision);
        self
    }
}

impl Default for FormatDirective {
    fn default() -> Self {
        Self::new(Verb::Auto)
    }
}

impl ByteCount {
    /// Render according to `directive` into `sink`.
    pub fn write_formatted<W: fmt::Write>(
        self,
        sink: &mut W,
        directive: &FormatDirective,
    ) -> fmt::Result {
        let scale = directive.scale();
        let tier = match directive.verb {
            Verb::Raw => {
                let width = padding(directive.width);
                return write!(sink, "{:>width$}", self.0);
            }
            Verb::Tier(tier) => tier,
            Verb::Auto | Verb::Fixed => scale.tier_of(self),
        };

        let magnitude = scale.magnitude(tier).0;
        let suffix = if directive.suppress_suffix {
            ""
        } else {
            scale.suffix(tier)
        };
        let width = padding(directive.width.map(|w| w.saturating_sub(suffix.len())));

        if directive.verb == Verb::Fixed {
            let precision = directive
                .precision
                .unwrap_or(DEFAULT_PRECISION)
                .min(MAX_FORMAT_ARG);
            let value = self.0 as f64 / magnitude as f64;
            write!(sink, "{value:>width$.precision$}")?;
        } else {
            write!(sink, "{:>width$}", self.0 / magnitude)?;
        }
        sink.write_str(suffix)
    }

    /// Render according to `directive`.
    ///
    /// ```
    /// use byteunits::units::{ByteCount, FormatDirective, Verb};
    /// let directive = FormatDirective::new(Verb::Fixed).precision(3);
    /// assert_eq!(ByteCount(1025).format(&directive), "1.001kiB");
    /// ```
    pub fn format(self, directive: &FormatDirective) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_formatted(&mut out, directive);
        out
    }

    /// Adapter that renders with `verb` through `std::fmt`.
    ///
    /// The adapter honours `#` (decimal scale), width and precision from the
    /// format string, on top of the flags set with its builder methods.
    pub fn display(self, verb: Verb) -> Formatted {
        Formatted {
            bytes: self,
            directive: FormatDirective::new(verb),
        }
    }
}

// Widths of 0 and 1 never pad a numeral, so both mean natural width.
fn padding(width: Option<usize>) -> usize {
    width.filter(|&w| w > 1).unwrap_or(0).min(MAX_FORMAT_ARG)
}

/// Auto-scaled rendering: `{}` gives an integer count, `{:.N}` a fixed-point
/// one, and `{:#}` switches to decimal magnitudes.
///
/// Fill, alignment and the `0` flag are not supported. The numeral is always
/// right-justified with spaces, so `{:<8}` renders the same as `{:8}`.
///
/// ```
/// use byteunits::units::ByteCount;
/// assert_eq!(format!("{}", ByteCount(2048)), "2kiB");
/// assert_eq!(format!("{:#.1}", ByteCount(1500)), "1.5kB");
/// assert_eq!(format!("{:6}", ByteCount(2048)), "  2kiB");
/// ```
impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if f.precision().is_some() {
            Verb::Fixed
        } else {
            Verb::Auto
        };
        let directive = FormatDirective::new(verb).merge(f);
        self.write_formatted(f, &directive)
    }
}

/// A byte count paired with a directive, see [`ByteCount::display`].
///
/// Padding follows the same rules as `Display for ByteCount`.
#[derive(Debug, Clone, Copy)]
pub struct Formatted {
    bytes: ByteCount,
    directive: FormatDirective,
}

impl Formatted {
    pub fn decimal(mut self) -> Self {
        self.directive.decimal = true;
        self
    }

    pub fn without_suffix(mut self) -> Self {
        self.directive.suppress_suffix = true;
        self
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directive = self.directive.merge(f);
        self.bytes.write_formatted(f, &directive)
    }
}
