//! Human-readable rendering of durations and byte counts.

pub const TIME_UNITS: [&str; 5] = ["s", "m", "h", "d", "y"];
pub const TIME_FACTORS: [u64; 4] = [60, 60, 24, 365];

pub const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
pub const BYTE_FACTORS: [u64; 4] = [1024; 4];

/// How byte counts are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteMode {
    /// Every unit down to bytes, e.g. `1KB 512B`.
    #[default]
    Full,
    /// The largest fitting unit with one decimal, e.g. `1.5KB`.
    Short,
}

/// A single unit and its amount within an expanded magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitValue {
    pub value: u64,
    pub unit: &'static str,
}

/// Breaks `value` into units, smallest first, then returns them largest first.
///
/// `factors[i]` is how many `units[i]` make one `units[i + 1]`. A unit without
/// a factor absorbs whatever remains. Expansion stops as soon as the carried
/// magnitude hits zero, so `3600` yields `1h 0m 0s` while `60` yields `1m 0s`.
pub fn expand(value: u64, units: &[&'static str], factors: &[u64]) -> Vec<UnitValue> {
    let mut remain = value;
    let mut parts = Vec::with_capacity(units.len());

    for (idx, &unit) in units.iter().enumerate() {
        let amount = match factors.get(idx) {
            Some(&factor) if factor > 0 => {
                let amount = remain % factor;
                remain /= factor;
                amount
            }
            _ => std::mem::take(&mut remain),
        };
        parts.push(UnitValue {
            value: amount,
            unit,
        });
        if remain == 0 {
            break;
        }
    }

    parts.reverse();
    parts
}

pub fn expand_units(value: u64, units: &[&'static str], factors: &[u64]) -> String {
    expand(value, units, factors)
        .iter()
        .map(|part| format!("{}{}", part.value, part.unit))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scales `value` into the first unit it fits below, formatted with one decimal.
pub fn short_units(value: f64, units: &[&'static str], factors: &[u64]) -> String {
    let mut value = value;
    for (idx, unit) in units.iter().enumerate() {
        match factors.get(idx) {
            Some(&factor) if factor > 0 && value >= factor as f64 => value /= factor as f64,
            _ => return format!("{value:.1}{unit}"),
        }
    }
    format!("{value:.1}")
}

pub fn seconds_to_hms(seconds: f64) -> String {
    expand_units(whole(seconds), &TIME_UNITS, &TIME_FACTORS)
}

pub fn bytes_to_human(bytes: f64, mode: ByteMode) -> String {
    match mode {
        ByteMode::Full => bytes_to_full(whole(bytes)),
        ByteMode::Short => {
            let bytes = if bytes.is_finite() { bytes.max(0.0) } else { 0.0 };
            short_units(bytes, &BYTE_UNITS, &BYTE_FACTORS)
        }
    }
}

/// Exact full form for integer byte counters.
pub fn bytes_to_full(bytes: u64) -> String {
    expand_units(bytes, &BYTE_UNITS, &BYTE_FACTORS)
}

fn whole(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recombine(parts: &[UnitValue], factors: &[u64]) -> u64 {
        let mut total = 0;
        let mut scale = 1;
        for (idx, part) in parts.iter().rev().enumerate() {
            total += part.value * scale;
            if let Some(factor) = factors.get(idx) {
                scale *= factor;
            }
        }
        total
    }

    #[test]
    fn time_expansion_recombines_exactly() {
        let samples = (0..5_000)
            .chain((0..400).map(|n| n * 3_607 + 11))
            .chain([86_399, 86_400, 31_535_999, 31_536_000, 94_608_123, u32::MAX as u64]);

        for seconds in samples {
            let parts = expand(seconds, &TIME_UNITS, &TIME_FACTORS);
            assert_eq!(recombine(&parts, &TIME_FACTORS), seconds, "seconds = {seconds}");
        }
    }

    #[test]
    fn time_expansion_stops_once_remainder_is_zero() {
        assert_eq!(seconds_to_hms(0.0), "0s");
        assert_eq!(seconds_to_hms(59.0), "59s");
        assert_eq!(seconds_to_hms(60.0), "1m 0s");
        assert_eq!(seconds_to_hms(61.0), "1m 1s");
        assert_eq!(seconds_to_hms(3600.0), "1h 0m 0s");
        assert_eq!(seconds_to_hms(3661.0), "1h 1m 1s");
        assert_eq!(seconds_to_hms(86_400.0), "1d 0h 0m 0s");
    }

    #[test]
    fn years_absorb_the_remainder() {
        let two_years: u64 = 2 * 365 * 86_400;
        assert_eq!(seconds_to_hms(two_years as f64), "2y 0d 0h 0m 0s");
        assert_eq!(seconds_to_hms((400u64 * 365 * 86_400 + 5) as f64), "400y 0d 0h 0m 5s");
    }

    #[test]
    fn fractional_and_invalid_seconds_are_floored() {
        assert_eq!(seconds_to_hms(90.9), "1m 30s");
        assert_eq!(seconds_to_hms(-5.0), "0s");
        assert_eq!(seconds_to_hms(f64::NAN), "0s");
    }

    #[test]
    fn full_byte_form() {
        assert_eq!(bytes_to_human(0.0, ByteMode::Full), "0B");
        assert_eq!(bytes_to_human(1536.0, ByteMode::Full), "1KB 512B");
        assert_eq!(bytes_to_human(1_048_576.0, ByteMode::Full), "1MB 0KB 0B");
    }

    #[test]
    fn integer_counters_stay_exact_past_f64_precision() {
        assert_eq!(bytes_to_full((1u64 << 53) + 1), "8192TB 0GB 0MB 0KB 1B");
        assert_eq!(bytes_to_full(u64::MAX), expand_units(u64::MAX, &BYTE_UNITS, &BYTE_FACTORS));
    }

    #[test]
    fn short_byte_form() {
        assert_eq!(bytes_to_human(1536.0, ByteMode::Short), "1.5KB");
        assert_eq!(bytes_to_human(1_073_741_824.0, ByteMode::Short), "1.0GB");
        assert_eq!(bytes_to_human(0.0, ByteMode::Short), "0.0B");
        assert_eq!(bytes_to_human(1023.0, ByteMode::Short), "1023.0B");
        assert_eq!(bytes_to_human(1024.0, ByteMode::Short), "1.0KB");
    }

    #[test]
    fn short_form_caps_at_largest_unit() {
        let pib = 1024f64.powi(5);
        assert_eq!(bytes_to_human(pib, ByteMode::Short), "1024.0TB");
    }
}
