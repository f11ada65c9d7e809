//! Count-to-color bucketing.

use std::fmt;

/// Fill colors from lightest (no records) to darkest.
pub const BUCKET_COLORS: [&str; 5] = ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"];

/// Smallest count that lands in each non-empty bucket.
pub const BUCKET_THRESHOLDS: [u32; 4] = [1, 2, 4, 7];

/// One of the five heatmap color tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBucket {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl ColorBucket {
    pub const ALL: [ColorBucket; 5] = [
        ColorBucket::None,
        ColorBucket::Low,
        ColorBucket::Medium,
        ColorBucket::High,
        ColorBucket::Max,
    ];

    /// Bucket for a day with `count` records.
    pub fn for_count(count: u32) -> Self {
        let index = BUCKET_THRESHOLDS.iter().filter(|&&t| count >= t).count();
        ColorBucket::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Fill color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        BUCKET_COLORS[self.index()]
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorBucket::None => write!(f, "0"),
            ColorBucket::Low => write!(f, "1"),
            ColorBucket::Medium => write!(f, "2-3"),
            ColorBucket::High => write!(f, "4-6"),
            ColorBucket::Max => write!(f, "7+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(ColorBucket::for_count(0), ColorBucket::None);
        assert_eq!(ColorBucket::for_count(1), ColorBucket::Low);
        assert_eq!(ColorBucket::for_count(2), ColorBucket::Medium);
        assert_eq!(ColorBucket::for_count(3), ColorBucket::Medium);
        assert_eq!(ColorBucket::for_count(4), ColorBucket::High);
        assert_eq!(ColorBucket::for_count(5), ColorBucket::High);
        assert_eq!(ColorBucket::for_count(6), ColorBucket::High);
        assert_eq!(ColorBucket::for_count(7), ColorBucket::Max);
        assert_eq!(ColorBucket::for_count(1000), ColorBucket::Max);
        assert_eq!(ColorBucket::for_count(u32::MAX), ColorBucket::Max);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = ColorBucket::for_count(0);
        for count in 1..100 {
            let bucket = ColorBucket::for_count(count);
            assert!(bucket >= previous, "count {} went lighter", count);
            previous = bucket;
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(ColorBucket::None.color(), "#ebedf0");
        assert_eq!(ColorBucket::Max.color(), "#216e39");
        assert_eq!(ColorBucket::Low.rgb(), (0x9b, 0xe9, 0xa8));
    }
}
