use super::{ByteCount, B, GIB, KIB, MIB, Scale, TIB};

// Binary magnitudes are powers of two, so rounding against them is done with
// masks. Decimal magnitudes go through the remainder instead.
//
// Arithmetic near u64::MAX wraps, the same in debug and release builds. The
// `checked_*` variants report that case as `None`.

impl ByteCount {
    /// Largest binary magnitude not exceeding this value: B below 1kiB,
    /// then kiB, MiB, GiB, and TiB for everything from 1TiB up.
    pub fn binary_magnitude(self) -> ByteCount {
        Scale::Binary.magnitude(Scale::Binary.tier_of(self))
    }

    /// Decimal counterpart of [`ByteCount::binary_magnitude`].
    pub fn decimal_magnitude(self) -> ByteCount {
        Scale::Decimal.magnitude(Scale::Decimal.tier_of(self))
    }

    /// Round up to a multiple of [`ByteCount::binary_magnitude`].
    ///
    /// ```
    /// use byteunits::units::{ByteCount, KIB};
    /// assert_eq!(ByteCount(2001).ceil(), ByteCount(2 * 1024));
    /// assert_eq!(KIB.ceil(), KIB);
    /// ```
    pub fn ceil(self) -> ByteCount {
        let mask = self.binary_magnitude().0 - 1;
        ByteCount(self.0.wrapping_add(mask) & !mask)
    }

    /// Like [`ByteCount::ceil`], but `None` if the result does not fit in 64 bits.
    pub fn checked_ceil(self) -> Option<ByteCount> {
        let mask = self.binary_magnitude().0 - 1;
        self.0.checked_add(mask).map(|v| ByteCount(v & !mask))
    }

    /// Round up to a multiple of [`ByteCount::decimal_magnitude`].
    ///
    /// ```
    /// use byteunits::units::ByteCount;
    /// assert_eq!(ByteCount(2001).decimal_ceil(), ByteCount(3000));
    /// ```
    pub fn decimal_ceil(self) -> ByteCount {
        let mag = self.decimal_magnitude().0;
        match self.0 % mag {
            0 => self,
            rem => ByteCount(self.0.wrapping_add(mag - rem)),
        }
    }

    /// Like [`ByteCount::decimal_ceil`], but `None` if the result does not fit in 64 bits.
    pub fn checked_decimal_ceil(self) -> Option<ByteCount> {
        let mag = self.decimal_magnitude().0;
        match self.0 % mag {
            0 => Some(self),
            rem => self.0.checked_add(mag - rem).map(ByteCount),
        }
    }

    /// Round down to a multiple of [`ByteCount::binary_magnitude`].
    pub fn floor(self) -> ByteCount {
        ByteCount(self.0 & !(self.binary_magnitude().0 - 1))
    }

    /// Round down to a multiple of [`ByteCount::decimal_magnitude`].
    pub fn decimal_floor(self) -> ByteCount {
        self.truncate(self.decimal_magnitude())
    }

    /// Round down to a multiple of an arbitrary magnitude.
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` is zero.
    pub fn truncate(self, magnitude: ByteCount) -> ByteCount {
        ByteCount(self.0 - self.0 % magnitude.0)
    }

    /// Round to the nearest multiple of `magnitude`, halves rounding up.
    ///
    /// ```
    /// use byteunits::units::{ByteCount, KIB};
    /// assert_eq!(ByteCount(1024 + 512).round_by(KIB), ByteCount(2048));
    /// assert_eq!(ByteCount(1024 + 511).round_by(KIB), ByteCount(1024));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` is zero.
    pub fn round_by(self, magnitude: ByteCount) -> ByteCount {
        match magnitude {
            B => self,
            KIB | MIB | GIB | TIB => {
                let mag = magnitude.0;
                ByteCount(self.0.wrapping_add(mag >> 1) & !(mag - 1))
            }
            _ => ByteCount(self.0.wrapping_add(magnitude.0 / 2)).truncate(magnitude),
        }
    }

    /// Like [`ByteCount::round_by`], but `None` if rounding up would overflow.
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` is zero.
    pub fn checked_round_by(self, magnitude: ByteCount) -> Option<ByteCount> {
        let mag = magnitude.0;
        let rem = self.0 % mag;
        if rem < mag - mag / 2 {
            Some(ByteCount(self.0 - rem))
        } else {
            self.0.checked_add(mag - rem).map(ByteCount)
        }
    }

    /// Round to the nearest multiple of [`ByteCount::binary_magnitude`].
    pub fn round(self) -> ByteCount {
        self.round_by(self.binary_magnitude())
    }

    /// Round to the nearest multiple of [`ByteCount::decimal_magnitude`].
    pub fn decimal_round(self) -> ByteCount {
        self.round_by(self.decimal_magnitude())
    }
}
