use strum_macros::Display;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Suffix appended to the scaled download count.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum Scale {
    #[strum(serialize = "")]
    Units,
    #[strum(serialize = "k")]
    Thousands,
    #[strum(serialize = "M")]
    Millions,
}

impl Scale {
    /// Picks the scale from the raw total, before any rounding.
    pub fn of(total: u64) -> Self {
        match total {
            t if t >= MILLION => Scale::Millions,
            t if t >= THOUSAND => Scale::Thousands,
            _ => Scale::Units,
        }
    }

    fn divisor(self) -> f64 {
        match self {
            Scale::Units => 1.0,
            Scale::Thousands => THOUSAND as f64,
            Scale::Millions => MILLION as f64,
        }
    }
}

/// Formats `total` as a badge message, e.g. `"400.0k downloads"`.
///
/// Totals below a thousand are printed as plain integers. Larger totals are
/// divided by the scale and printed with one decimal place, so `999_999`
/// gives `"1000.0k downloads"`.
pub fn format_downloads(total: u64) -> String {
    match Scale::of(total) {
        Scale::Units => format!("{} downloads", total),
        scale => format!("{:.1}{} downloads", total as f64 / scale.divisor(), scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_test() {
        assert_eq!(format_downloads(0), "0 downloads");
        assert_eq!(format_downloads(4), "4 downloads");
        assert_eq!(format_downloads(999), "999 downloads");
    }

    #[test]
    fn thousands_test() {
        assert_eq!(format_downloads(1_000), "1.0k downloads");
        assert_eq!(format_downloads(1_040), "1.0k downloads");
        assert_eq!(format_downloads(12_345), "12.3k downloads");
        assert_eq!(format_downloads(400_004), "400.0k downloads");
    }

    #[test]
    fn thousands_upper_bound_test() {
        // scale is picked before rounding
        assert_eq!(format_downloads(999_999), "1000.0k downloads");
        assert_eq!(format_downloads(999_949), "999.9k downloads");
    }

    #[test]
    fn millions_test() {
        assert_eq!(format_downloads(1_000_000), "1.0M downloads");
        assert_eq!(format_downloads(2_345_678), "2.3M downloads");
        assert_eq!(format_downloads(1_000_000_000), "1000.0M downloads");
    }

    #[test]
    fn suffix_matches_scale_test() {
        for total in (0..3_000_000).step_by(7_919) {
            let message = format_downloads(total);
            match Scale::of(total) {
                Scale::Units => {
                    assert_eq!(message, format!("{} downloads", total))
                }
                Scale::Thousands => assert!(message.ends_with("k downloads"), "{}", message),
                Scale::Millions => assert!(message.ends_with("M downloads"), "{}", message),
            }
        }
    }

    #[test]
    fn scale_display_test() {
        assert_eq!(Scale::Units.to_string(), "");
        assert_eq!(Scale::Thousands.to_string(), "k");
        assert_eq!(Scale::Millions.to_string(), "M");
    }
}
