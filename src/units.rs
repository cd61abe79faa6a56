use serde::{Deserialize, Serialize};

mod directive;
mod format;
mod magnitude;
mod parse;

pub use self::format::{DEFAULT_PRECISION, FormatDirective, Formatted, MAX_FORMAT_ARG, Verb};

/// A count of bytes.
///
/// `ByteCount` is a plain `u64` wrapper: every rounding operation returns a
/// new value, equality and ordering are numeric, and it serializes as the
/// bare integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteCount(pub u64);

pub const B: ByteCount = ByteCount(1);
pub const KIB: ByteCount = ByteCount(1 << 10);
pub const MIB: ByteCount = ByteCount(1 << 20);
pub const GIB: ByteCount = ByteCount(1 << 30);
pub const TIB: ByteCount = ByteCount(1 << 40);

pub const KB: ByteCount = ByteCount(1000);
pub const MB: ByteCount = ByteCount(1000 * 1000);
pub const GB: ByteCount = ByteCount(1000 * 1000 * 1000);
pub const TB: ByteCount = ByteCount(1000 * 1000 * 1000 * 1000);

/// Which family of magnitudes a value is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Powers of 1024: B, kiB, MiB, GiB, TiB.
    Binary,
    /// Powers of 1000: B, kB, MB, GB, TB.
    Decimal,
}

/// Position within a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Tier {
    /// All tiers, smallest first.
    pub const ALL: [Tier; 5] = [Tier::Unit, Tier::Kilo, Tier::Mega, Tier::Giga, Tier::Tera];
}

/// Magnitude and suffix for every (scale, tier) pair, indexed by tier.
const BINARY_UNITS: [(ByteCount, &str); 5] = [
    (B, "B"),
    (KIB, "kiB"),
    (MIB, "MiB"),
    (GIB, "GiB"),
    (TIB, "TiB"),
];

const DECIMAL_UNITS: [(ByteCount, &str); 5] = [
    (B, "B"),
    (KB, "kB"),
    (MB, "MB"),
    (GB, "GB"),
    (TB, "TB"),
];

impl Scale {
    fn units(self) -> &'static [(ByteCount, &'static str); 5] {
        match self {
            Scale::Binary => &BINARY_UNITS,
            Scale::Decimal => &DECIMAL_UNITS,
        }
    }

    /// Magnitude in bytes of `tier` on this scale.
    pub fn magnitude(self, tier: Tier) -> ByteCount {
        self.units()[tier as usize].0
    }

    /// Canonical display suffix of `tier` on this scale.
    pub fn suffix(self, tier: Tier) -> &'static str {
        self.units()[tier as usize].1
    }

    /// Largest tier whose magnitude does not exceed `bytes`, capped at tera.
    /// Anything below one kilo unit (zero included) is `Tier::Unit`.
    pub fn tier_of(self, bytes: ByteCount) -> Tier {
        Tier::ALL
            .into_iter()
            .rev()
            .find(|&tier| bytes >= self.magnitude(tier))
            .unwrap_or(Tier::Unit)
    }
}

impl ByteCount {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteCount> for u64 {
    fn from(bytes: ByteCount) -> Self {
        bytes.0
    }
}

// The operators wrap at u64::MAX in every build profile, like the rounding
// operations do.
impl std::ops::Mul<ByteCount> for u64 {
    type Output = ByteCount;

    fn mul(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.wrapping_mul(rhs.0))
    }
}

impl std::ops::Add for ByteCount {
    type Output = ByteCount;

    fn add(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.wrapping_add(rhs.0))
    }
}

impl std::ops::Sub for ByteCount {
    type Output = ByteCount;

    fn sub(self, rhs: ByteCount) -> ByteCount {
        ByteCount(self.0.wrapping_sub(rhs.0))
    }
}
