//! Dotted-frequency conversion helpers.
//!
//! Convenience conversions for callers; the parse core keeps frequency
//! tokens verbatim.

/// Converts dotted `MHz[.kHz[.Hz]]` notation to Hz.
///
/// Fractional groups shorter than three digits are right-padded with zeros,
/// so `"146.52"` is 146 MHz + 520 kHz = 146_520_000 Hz. Returns `None` for
/// non-numeric input or groups longer than three digits.
pub fn to_hz(freq: &str) -> Option<u64> {
    let mut parts = freq.split('.');
    let mhz_part = parts.next()?;
    if mhz_part.is_empty() || !mhz_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut hz: u64 = mhz_part.parse::<u64>().ok()?.checked_mul(1_000_000)?;

    if let Some(khz) = parts.next() {
        hz = hz.checked_add(padded_group(khz)?.checked_mul(1_000)?)?;
    }
    if let Some(sub) = parts.next() {
        hz = hz.checked_add(padded_group(sub)?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(hz)
}

/// Renders `hz` with `.` separators every three digits from the right,
/// the inverse notation of [`to_hz`]: `14_025_000` becomes `"14.025.000"`.
pub fn to_mhz(hz: u64) -> String {
    let digits = hz.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

fn padded_group(group: &str) -> Option<u64> {
    if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut value: u64 = group.parse().ok()?;
    for _ in group.len()..3 {
        value *= 10;
    }
    Some(value)
}
