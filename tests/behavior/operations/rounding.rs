use crate::*;
use byteunits::error::Result;
use byteunits::units::{B, ByteCount, GB, GIB, KB, KIB, MB, MIB, TB, TIB};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_ceil,
        test_decimal_ceil,
        test_floor,
        test_decimal_floor,
        test_truncate,
        test_round_by_ties_up,
        test_round_by_arbitrary_magnitude,
        test_round_and_decimal_round,
        test_bounds_are_multiples,
        test_ceil_equals_floor_only_on_multiples,
        test_binary_matches_float_reference,
        test_decimal_matches_float_reference,
        test_full_range_matches_integer_reference,
        test_truncate_properties,
        test_checked_round_by_agrees_with_round_by,
        test_overflow_wraps_and_checked_reports,
        test_zero_magnitude_panics
    ));
}

fn bc(bytes: u64) -> ByteCount {
    ByteCount(bytes)
}

pub fn test_ceil() -> Result<()> {
    assert_eq!(bc(0).ceil(), bc(0));
    assert_eq!(bc(1).ceil(), B);
    for unit in [KIB, MIB, GIB, TIB] {
        assert_eq!(unit.ceil(), unit);
        assert_eq!((unit + B).ceil(), 2 * unit);
        assert_eq!((2 * unit - B).ceil(), 2 * unit);
        assert_eq!((2 * unit).ceil(), 2 * unit);
        assert_eq!((2 * unit + B).ceil(), 3 * unit);
    }
    Ok(())
}

pub fn test_decimal_ceil() -> Result<()> {
    assert_eq!(bc(1).decimal_ceil(), B);
    for unit in [KB, MB, GB, TB] {
        assert_eq!(unit.decimal_ceil(), unit);
        assert_eq!((unit + B).decimal_ceil(), 2 * unit);
        assert_eq!((2 * unit - B).decimal_ceil(), 2 * unit);
        assert_eq!((2 * unit).decimal_ceil(), 2 * unit);
        assert_eq!((2 * unit + B).decimal_ceil(), 3 * unit);
    }
    // Same raw value, different scales
    assert_eq!(bc(2001).ceil(), 2 * KIB);
    assert_eq!(bc(2001).decimal_ceil(), 3 * KB);
    Ok(())
}

pub fn test_floor() -> Result<()> {
    assert_eq!(bc(0).floor(), bc(0));
    assert_eq!(bc(1).floor(), B);
    for unit in [KIB, MIB, GIB, TIB] {
        assert_eq!(unit.floor(), unit);
        assert_eq!((unit + B).floor(), unit);
        assert_eq!((2 * unit + B).floor(), 2 * unit);
        assert_eq!((2 * unit).floor(), 2 * unit);
        assert_eq!((2 * unit - B).floor(), unit);
    }
    Ok(())
}

pub fn test_decimal_floor() -> Result<()> {
    assert_eq!(bc(1).decimal_floor(), B);
    for unit in [KB, MB, GB, TB] {
        assert_eq!(unit.decimal_floor(), unit);
        assert_eq!((unit + B).decimal_floor(), unit);
        assert_eq!((2 * unit - B).decimal_floor(), unit);
        assert_eq!((2 * unit).decimal_floor(), 2 * unit);
        assert_eq!((2 * unit + B).decimal_floor(), 2 * unit);
    }
    assert_eq!(bc(2001).floor(), KIB);
    assert_eq!(bc(2001).decimal_floor(), 2 * KB);
    Ok(())
}

pub fn test_truncate() -> Result<()> {
    let cases = [
        (bc(0), B, bc(0)),
        (bc(0), KIB, bc(0)),
        (bc(0), KB, bc(0)),
        (KIB + B, KIB, KIB),
        (MIB + KIB + B, KIB, MIB + KIB),
        (KIB + B, MIB, bc(0)),
        (KB + B, KB, KB),
        (MB + KB + B, KB, MB + KB),
        (KB + B, MB, bc(0)),
        (MIB + 512 * KIB + 512 * B, KIB, MIB + 512 * KIB),
        (MIB + 512 * KIB + 512 * B, MIB, MIB),
    ];
    for (bytes, mag, want) in cases {
        assert_eq!(bytes.truncate(mag), want, "{bytes:?} truncated by {mag:?}");
    }
    Ok(())
}

pub fn test_round_by_ties_up() -> Result<()> {
    let up = 512 * TIB + 512 * GIB + 512 * MIB + 512 * KIB + 512 * B;
    assert_eq!(up.round_by(KIB), 512 * TIB + 512 * GIB + 512 * MIB + 513 * KIB);
    assert_eq!(up.round_by(MIB), 512 * TIB + 512 * GIB + 513 * MIB);
    assert_eq!(up.round_by(GIB), 512 * TIB + 513 * GIB);
    assert_eq!(up.round_by(TIB), 513 * TIB);

    let down = 511 * TIB + 511 * GIB + 511 * MIB + 511 * KIB + 511 * B;
    assert_eq!(down.round_by(KIB), 511 * TIB + 511 * GIB + 511 * MIB + 511 * KIB);
    assert_eq!(down.round_by(MIB), 511 * TIB + 511 * GIB + 511 * MIB);
    assert_eq!(down.round_by(GIB), 511 * TIB + 511 * GIB);
    assert_eq!(down.round_by(TIB), 511 * TIB);

    let up = 500 * TB + 500 * GB + 500 * MB + 500 * KB + 500 * B;
    assert_eq!(up.round_by(KB), 500 * TB + 500 * GB + 500 * MB + 501 * KB);
    assert_eq!(up.round_by(MB), 500 * TB + 500 * GB + 501 * MB);
    assert_eq!(up.round_by(GB), 500 * TB + 501 * GB);
    assert_eq!(up.round_by(TB), 501 * TB);

    let down = 499 * TB + 499 * GB + 499 * MB + 499 * KB + 499 * B;
    assert_eq!(down.round_by(KB), 499 * TB + 499 * GB + 499 * MB + 499 * KB);
    assert_eq!(down.round_by(MB), 499 * TB + 499 * GB + 499 * MB);
    assert_eq!(down.round_by(GB), 499 * TB + 499 * GB);
    assert_eq!(down.round_by(TB), 499 * TB);

    assert_eq!(up.round_by(B), up);
    Ok(())
}

pub fn test_round_by_arbitrary_magnitude() -> Result<()> {
    // Neither binary nor decimal, and odd
    assert_eq!(bc(10).round_by(bc(3)), bc(9));
    assert_eq!(bc(11).round_by(bc(3)), bc(12));
    assert_eq!(bc(14).round_by(bc(4096)), bc(0));
    assert_eq!(bc(2048).round_by(bc(4096)), bc(4096));
    assert_eq!(bc(2047).round_by(bc(4096)), bc(0));

    let b = MB + 500 * KB + 500 * B;
    assert_eq!(b.round_by(KB), MB + 501 * KB);
    assert_eq!(b.round_by(MB), 2 * MB);
    Ok(())
}

pub fn test_round_and_decimal_round() -> Result<()> {
    let b = KIB + 512 * B;
    assert_eq!(b.round(), 2 * KIB);
    assert_eq!((b - B).round(), KIB);

    let b = KB + 500 * B;
    assert_eq!(b.decimal_round(), 2 * KB);
    assert_eq!((b - B).decimal_round(), KB);

    assert_eq!(bc(700).round(), bc(700));
    assert_eq!(bc(700).decimal_round(), bc(700));
    Ok(())
}

pub fn test_bounds_are_multiples() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let b = bc(random_bytes(&mut rng, 60));

        let (mag, floor, ceil) = (b.binary_magnitude(), b.floor(), b.ceil());
        assert!(floor <= b && b <= ceil, "{b:?}: {floor:?} {ceil:?}");
        assert_eq!(floor.as_u64() % mag.as_u64(), 0);
        assert_eq!(ceil.as_u64() % mag.as_u64(), 0);

        let (mag, floor, ceil) = (b.decimal_magnitude(), b.decimal_floor(), b.decimal_ceil());
        assert!(floor <= b && b <= ceil, "{b:?}: {floor:?} {ceil:?}");
        assert_eq!(floor.as_u64() % mag.as_u64(), 0);
        assert_eq!(ceil.as_u64() % mag.as_u64(), 0);
    }
    Ok(())
}

pub fn test_ceil_equals_floor_only_on_multiples() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let b = bc(random_bytes(&mut rng, 60));
        let on_binary = b.as_u64() % b.binary_magnitude().as_u64() == 0;
        let on_decimal = b.as_u64() % b.decimal_magnitude().as_u64() == 0;
        assert_eq!(b.ceil() == b.floor(), on_binary, "{b:?}");
        assert_eq!(b.decimal_ceil() == b.decimal_floor(), on_decimal, "{b:?}");
    }
    for unit in [KIB, MIB, GIB, TIB] {
        assert_eq!(unit.ceil(), unit.floor());
        assert_ne!((unit + B).ceil(), (unit + B).floor());
    }
    Ok(())
}

pub fn test_binary_matches_float_reference() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let bytes = random_bytes(&mut rng, 50);
        let mag = binary_threshold(bytes);
        let b = bc(bytes);
        assert_eq!(b.ceil().as_u64(), float_reference(bytes, mag, f64::ceil), "ceil {bytes}");
        assert_eq!(b.floor().as_u64(), float_reference(bytes, mag, f64::floor), "floor {bytes}");
        assert_eq!(b.round().as_u64(), float_reference(bytes, mag, f64::round), "round {bytes}");
    }
    Ok(())
}

pub fn test_decimal_matches_float_reference() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let bytes = random_bytes(&mut rng, 50);
        let mag = decimal_threshold(bytes);
        let b = bc(bytes);
        assert_eq!(
            b.decimal_ceil().as_u64(),
            float_reference(bytes, mag, f64::ceil),
            "decimal_ceil {bytes}"
        );
        assert_eq!(
            b.decimal_floor().as_u64(),
            float_reference(bytes, mag, f64::floor),
            "decimal_floor {bytes}"
        );
        assert_eq!(
            b.decimal_round().as_u64(),
            float_reference(bytes, mag, f64::round),
            "decimal_round {bytes}"
        );
    }
    Ok(())
}

pub fn test_full_range_matches_integer_reference() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let bytes = random_bytes(&mut rng, 64);
        let b = bc(bytes);
        let wide = u128::from(bytes);

        for (mag, floor, ceil, checked) in [
            (binary_threshold(bytes), b.floor(), b.ceil(), b.checked_ceil()),
            (
                decimal_threshold(bytes),
                b.decimal_floor(),
                b.decimal_ceil(),
                b.checked_decimal_ceil(),
            ),
        ] {
            let mag = u128::from(mag);
            let want_floor = wide / mag * mag;
            let want_ceil = wide.div_ceil(mag) * mag;

            assert_eq!(u128::from(floor.as_u64()), want_floor, "floor {bytes}");
            assert_eq!(u128::from(ceil.as_u64()), want_ceil % (1u128 << 64), "ceil {bytes}");
            assert_eq!(
                checked.map(|c| u128::from(c.as_u64())),
                (want_ceil <= u128::from(u64::MAX)).then_some(want_ceil),
                "checked ceil {bytes}"
            );
        }
    }
    Ok(())
}

pub fn test_truncate_properties() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let b = bc(random_bytes(&mut rng, 64));
        let mag = bc(random_bytes(&mut rng, 48).max(1));
        let t = b.truncate(mag);
        assert_eq!((b - t).as_u64(), b.as_u64() % mag.as_u64());
        assert_eq!(t.as_u64() % mag.as_u64(), 0);
        assert_eq!(bc(0).truncate(mag), bc(0));
    }
    Ok(())
}

pub fn test_checked_round_by_agrees_with_round_by() -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..PROPERTY_ITERATIONS {
        let bytes = random_bytes(&mut rng, 64);
        let b = bc(bytes);
        let magnitudes = [
            bc(random_bytes(&mut rng, 48).max(1)),
            bc(binary_threshold(bytes)),
            bc(decimal_threshold(bytes)),
        ];
        for mag in magnitudes {
            let m = mag.as_u64();
            if bytes.checked_add(m / 2).is_none() {
                continue;
            }
            assert_eq!(b.checked_round_by(mag), Some(b.round_by(mag)), "{bytes} by {m}");
            let wide = (u128::from(bytes) + u128::from(m / 2)) / u128::from(m) * u128::from(m);
            if wide <= u128::from(u64::MAX) {
                assert_eq!(u128::from(b.round_by(mag).as_u64()), wide, "{bytes} by {m}");
            }
        }
    }

    let small = random_bytes(&mut rng, 50);
    let b = bc(small);
    assert_eq!(
        b.checked_round_by(b.binary_magnitude()).map(ByteCount::as_u64),
        Some(float_reference(small, binary_threshold(small), f64::round))
    );
    assert_eq!(
        b.checked_round_by(b.decimal_magnitude()).map(ByteCount::as_u64),
        Some(float_reference(small, decimal_threshold(small), f64::round))
    );
    Ok(())
}

pub fn test_overflow_wraps_and_checked_reports() -> Result<()> {
    let top = bc(u64::MAX);
    // 2^64 rounded up wraps to zero
    assert_eq!(top.ceil(), bc(0));
    assert_eq!(top.checked_ceil(), None);
    assert_eq!(top.checked_decimal_ceil(), None);
    assert_eq!(top.floor(), bc(u64::MAX & !(TIB.as_u64() - 1)));

    assert_eq!(top.checked_round_by(KIB), None);
    assert_eq!(top.checked_round_by(B), Some(top));
    // Rounds down, so the sum overflowing along the way does not matter
    assert_eq!(bc(u64::MAX - 1).checked_round_by(bc(10)), Some(bc(u64::MAX - 5)));

    let largest_tib = bc(u64::MAX & !(TIB.as_u64() - 1));
    assert_eq!(largest_tib.checked_ceil(), Some(largest_tib));

    // The operators wrap the same way
    assert_eq!(top + B, bc(0));
    assert_eq!(bc(0) - B, top);
    assert_eq!(2 * bc(1 << 63), bc(0));
    Ok(())
}

pub fn test_zero_magnitude_panics() -> Result<()> {
    assert!(std::panic::catch_unwind(|| bc(10).truncate(bc(0))).is_err());
    assert!(std::panic::catch_unwind(|| bc(10).round_by(bc(0))).is_err());
    Ok(())
}
