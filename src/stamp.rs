//! Timestamp extraction from monitor output lines.
//!
//! Two independent stamps can appear in a line: the producer's origin
//! timestamp anchored at the start of the line, and a processing stamp the
//! monitor injects behind a literal tag anywhere in the line. Both are runs
//! of at least twelve decimal digits, read as nanoseconds since the epoch.

/// Marker the monitor prepends to its processing timestamp.
pub const MONITOR_STAMP_TAG: &str = "\t#MON_TS=";

/// Minimum digit count for a run to qualify as an epoch-nanosecond stamp.
const MIN_STAMP_DIGITS: usize = 12;

/// Extracts the producer's origin timestamp from the start of a line.
///
/// Lines that do not open with a qualifying digit run are not measurable
/// samples and yield `None`.
#[must_use]
pub fn origin_ns(line: &str) -> Option<u64> {
    parse_stamp(line)
}

/// Extracts the monitor's processing timestamp, if the line carries one.
///
/// The first tag occurrence that is followed by a qualifying digit run
/// wins; later tags are ignored.
#[must_use]
pub fn monitor_ns(line: &str) -> Option<u64> {
    for (index, _) in line.match_indices(MONITOR_STAMP_TAG) {
        let after_tag = index.checked_add(MONITOR_STAMP_TAG.len())?;
        if let Some(rest) = line.get(after_tag..)
            && let Some(value) = parse_stamp(rest)
        {
            return Some(value);
        }
    }
    None
}

/// Parses the leading ASCII digit run of `text` as a stamp.
///
/// The whole run participates: fewer than twelve digits or a run that
/// overflows `u64` yields `None`.
fn parse_stamp(text: &str) -> Option<u64> {
    let mut digits = 0usize;
    let mut value = 0u64;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        digits = digits.checked_add(1)?;
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(byte.wrapping_sub(b'0')))?;
    }
    (digits >= MIN_STAMP_DIGITS).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_requires_twelve_leading_digits() {
        assert_eq!(origin_ns("100000000000000\tfoo"), Some(100_000_000_000_000));
        assert_eq!(origin_ns("100000000000\tfoo"), Some(100_000_000_000));
        assert_eq!(origin_ns("10000000000\tfoo"), None);
        assert_eq!(origin_ns(""), None);
        assert_eq!(origin_ns("foo 100000000000000"), None);
    }

    #[test]
    fn origin_is_pure_and_idempotent() {
        let line = "123456789012345\tpayload";
        assert_eq!(origin_ns(line), origin_ns(line));
    }

    #[test]
    fn monitor_stamp_found_anywhere_in_line() {
        let line = "100000000000000\tfoo\t#MON_TS=100000000300000";
        assert_eq!(monitor_ns(line), Some(100_000_000_300_000));
        assert_eq!(monitor_ns("100000000000000\tfoo"), None);
    }

    #[test]
    fn monitor_stamp_first_qualifying_tag_wins() {
        let line = "x\t#MON_TS=111111111111\tmid\t#MON_TS=222222222222";
        assert_eq!(monitor_ns(line), Some(111_111_111_111));

        let short_then_valid = "x\t#MON_TS=123\tmid\t#MON_TS=222222222222";
        assert_eq!(monitor_ns(short_then_valid), Some(222_222_222_222));
    }

    #[test]
    fn monitor_tag_without_digits_is_not_a_stamp() {
        assert_eq!(monitor_ns("100000000000000\tfoo\t#MON_TS="), None);
        assert_eq!(monitor_ns("100000000000000\tfoo\t#MON_TS=abc"), None);
    }

    #[test]
    fn overflowing_digit_run_is_rejected() {
        // 30 digits, well past u64::MAX.
        assert_eq!(origin_ns("999999999999999999999999999999\tfoo"), None);
    }
}
