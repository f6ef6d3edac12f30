use std::ops::RangeInclusive;

/// Counter values visited by the printer: 1 through 1001.
pub const DEFAULT_RANGE: RangeInclusive<u32> = 1..=1001;

pub fn signal_for(n: u32) -> Option<&'static str> {
    if n % 100 == 0 {
        Some("beep boop")
    } else if n % 20 == 0 {
        Some("boop")
    } else if n % 5 == 0 {
        Some("beep")
    } else {
        None
    }
}

pub fn signals(range: RangeInclusive<u32>) -> impl Iterator<Item = &'static str> {
    range.filter_map(signal_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_precedence() {
        assert_eq!(signal_for(5), Some("beep"));
        assert_eq!(signal_for(20), Some("boop"));
        assert_eq!(signal_for(40), Some("boop"));
        assert_eq!(signal_for(100), Some("beep boop"));
        assert_eq!(signal_for(1000), Some("beep boop"));
        assert_eq!(signal_for(7), None);
        assert_eq!(signal_for(1001), None);
    }

    #[test]
    fn test_zero_is_never_visited() {
        assert_eq!(*DEFAULT_RANGE.start(), 1);
    }

    #[test]
    fn test_default_range_totals() {
        let all: Vec<_> = signals(DEFAULT_RANGE).collect();
        assert_eq!(all.iter().filter(|s| **s == "beep boop").count(), 10);
        assert_eq!(all.iter().filter(|s| **s == "boop").count(), 40);
        assert_eq!(all.iter().filter(|s| **s == "beep").count(), 150);
        assert_eq!(all[..4], ["beep", "beep", "beep", "boop"]);
    }
}
