use serde::{Deserialize, Serialize};

use super::Locale;

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Cardinal category of `count` in `locale`.
    pub fn for_count(locale: Locale, count: u64) -> Self {
        match locale {
            Locale::En => match count {
                1 => PluralCategory::One,
                _ => PluralCategory::Other,
            },
            Locale::Ar => match (count, count % 100) {
                (0, _) => PluralCategory::Zero,
                (1, _) => PluralCategory::One,
                (2, _) => PluralCategory::Two,
                (_, 3..=10) => PluralCategory::Few,
                (_, 11..=99) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_categories() {
        let cases = [
            (0, PluralCategory::Zero),
            (1, PluralCategory::One),
            (2, PluralCategory::Two),
            (3, PluralCategory::Few),
            (10, PluralCategory::Few),
            (11, PluralCategory::Many),
            (99, PluralCategory::Many),
            (100, PluralCategory::Other),
            (102, PluralCategory::Other),
            (103, PluralCategory::Few),
        ];
        for (count, expected) in cases {
            assert_eq!(PluralCategory::for_count(Locale::Ar, count), expected, "count {}", count);
        }
    }

    #[test]
    fn test_english_categories() {
        assert_eq!(PluralCategory::for_count(Locale::En, 1), PluralCategory::One);
        assert_eq!(PluralCategory::for_count(Locale::En, 0), PluralCategory::Other);
        assert_eq!(PluralCategory::for_count(Locale::En, 2), PluralCategory::Other);
    }
}
