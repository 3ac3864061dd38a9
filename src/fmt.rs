//! Human-readable unit formatting shared by every meter.
//!
//! Meter values are kept in KiB (the unit `/proc/meminfo` reports), so the
//! default formatter starts at the `K` prefix. A platform reporting another
//! base unit can start higher with [`human_unit_from`].

const ONE_K: f64 = 1024.0;

/// Binary unit prefix a value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnitPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl UnitPrefix {
    const ALL: [UnitPrefix; 8] = [
        UnitPrefix::Kibi,
        UnitPrefix::Mebi,
        UnitPrefix::Gibi,
        UnitPrefix::Tebi,
        UnitPrefix::Pebi,
        UnitPrefix::Exbi,
        UnitPrefix::Zebi,
        UnitPrefix::Yobi,
    ];

    /// Single-letter suffix used in meter output (`"K"`, `"M"`, ...).
    pub fn letter(self) -> char {
        match self {
            UnitPrefix::Kibi => 'K',
            UnitPrefix::Mebi => 'M',
            UnitPrefix::Gibi => 'G',
            UnitPrefix::Tebi => 'T',
            UnitPrefix::Pebi => 'P',
            UnitPrefix::Exbi => 'E',
            UnitPrefix::Zebi => 'Z',
            UnitPrefix::Yobi => 'Y',
        }
    }

    fn next(self) -> Option<UnitPrefix> {
        Self::ALL.get(self as usize + 1).copied()
    }
}

/// Formats a KiB value as a short human-readable string.
///
/// `512.0` -> `"512K"`, `1536.0` -> `"1.50M"`, `8388608.0` -> `"8.00G"`
pub fn human_unit(kib: f64) -> String {
    human_unit_from(kib, UnitPrefix::Kibi)
}

/// Formats `value`, expressed in `base` units, as a short human-readable string.
///
/// At most four significant characters are printed before the suffix: `K`
/// values print without fraction, larger prefixes print two decimals up to
/// 9.99, one decimal up to 99.9 and none above. Precision depends only on the
/// final prefix, so the same quantity prints the same from any base unit. Values that
/// would round to a wider number (`9.999`, `99.95`) are lifted to `10.0` /
/// `100` so the width stays stable.
pub fn human_unit_from(value: f64, base: UnitPrefix) -> String {
    // NaN and negatives cannot come from a counter; clamp instead of printing "-0K".
    let mut value = if value.is_nan() { 0.0 } else { value.max(0.0) };
    let mut prefix = base;

    while value >= ONE_K {
        match prefix.next() {
            Some(next) => {
                value /= ONE_K;
                prefix = next;
            }
            None => {
                if value > 9999.0 {
                    return "inf".to_string();
                }
                break;
            }
        }
    }

    let mut precision = 0;
    if prefix > UnitPrefix::Kibi {
        precision = if value <= 9.99 {
            2
        } else if value <= 99.9 {
            1
        } else {
            0
        };
        if precision < 2 {
            let limit = if precision == 1 { 10.0 } else { 100.0 };
            if value < limit {
                value = limit;
            }
        }
    }

    format!("{:.*}{}", precision, value, prefix.letter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_values_have_no_fraction() {
        assert_eq!(human_unit(0.0), "0K");
        assert_eq!(human_unit(512.0), "512K");
        assert_eq!(human_unit(1023.0), "1023K");
    }

    #[test]
    fn test_precision_follows_magnitude() {
        assert_eq!(human_unit(1536.0), "1.50M");
        assert_eq!(human_unit(50.0 * 1024.0), "50.0M");
        assert_eq!(human_unit(500.0 * 1024.0), "500M");
        assert_eq!(human_unit(8.0 * 1024.0 * 1024.0), "8.00G");
    }

    #[test]
    fn test_round_up_keeps_width() {
        // 9.995 would print as "10.00"
        assert_eq!(human_unit(9.995 * 1024.0), "10.0M");
        // 99.95 would print as "100.0"
        assert_eq!(human_unit(99.95 * 1024.0), "100M");
    }

    #[test]
    fn test_mebibyte_base() {
        assert_eq!(human_unit_from(500.0, UnitPrefix::Mebi), "500M");
        assert_eq!(human_unit_from(4000.0, UnitPrefix::Mebi), "3.91G");
        assert_eq!(human_unit_from(1200.0, UnitPrefix::Mebi), "1.17G");
        assert_eq!(human_unit_from(8192.0, UnitPrefix::Mebi), "8.00G");
    }

    #[test]
    fn test_output_does_not_depend_on_base_unit() {
        assert_eq!(human_unit(5.0 * 1024.0), human_unit_from(5.0, UnitPrefix::Mebi));
        assert_eq!(human_unit_from(5.0, UnitPrefix::Mebi), "5.00M");
        assert_eq!(
            human_unit(50.0 * 1024.0),
            human_unit_from(50.0, UnitPrefix::Mebi)
        );
        assert_eq!(
            human_unit(3.0 * 1024.0 * 1024.0),
            human_unit_from(3.0, UnitPrefix::Gibi)
        );
        assert_eq!(human_unit_from(0.0, UnitPrefix::Mebi), "0.00M");
    }

    #[test]
    fn test_largest_prefix_overflow() {
        assert_eq!(human_unit_from(2048.0, UnitPrefix::Yobi), "2048Y");
        assert_eq!(human_unit_from(20000.0, UnitPrefix::Yobi), "inf");
    }

    #[test]
    fn test_invalid_input_is_clamped() {
        assert_eq!(human_unit(f64::NAN), "0K");
        assert_eq!(human_unit(-5.0), "0K");
    }
}
