//! Threshold-bucketed range tables.
//!
//! A range section maps numeric thresholds (stored as JSON object keys) to
//! phrases. The table is normalized once, at load time, into a single
//! ascending `(threshold, phrase)` array so lookups never have to guess
//! whether a key was written as `"45"` or `"45.0"`.

use std::fmt;
use std::str::FromStr;

use crate::types::Fragment;

/// Named range sections of the lighting maps document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSection {
    Intensity,
    Azimuth,
    Elevation,
}

impl RangeSection {
    pub const ALL: [RangeSection; 3] = [Self::Intensity, Self::Azimuth, Self::Elevation];

    /// Section name in the lighting maps document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intensity => "intensity_ranges",
            Self::Azimuth => "azimuth_ranges",
            Self::Elevation => "elevation_ranges",
        }
    }
}

impl fmt::Display for RangeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSection {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|r| r.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Bucket {
    threshold: f64,
    phrase: Fragment,
    /// How canonical the key's spelling is; see [`spelling_rank`].
    rank: u8,
}

/// Sorted, deduplicated thresholds paired with their phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    buckets: Vec<Bucket>,
}

impl RangeTable {
    /// Build a table from raw `(key, phrase)` pairs.
    ///
    /// Returns `None` when any key is not a number; a single bad key
    /// disables the whole section. A `None` phrase (non-string value in the
    /// document) keeps its threshold but resolves to [`Fragment::Absent`].
    ///
    /// Keys naming the same number collapse into one bucket. The canonical
    /// float spelling (`"45.0"`) wins, then the plain integer (`"45"`),
    /// otherwise the first one seen; `"45.00"` never beats `"45"`.
    pub fn from_entries<'a, I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut buckets: Vec<Bucket> = Vec::new();
        for (key, phrase) in entries {
            let threshold = parse_threshold(key)?;
            let bucket = Bucket {
                threshold,
                phrase: phrase.into(),
                rank: spelling_rank(key, threshold),
            };
            match buckets.iter_mut().find(|b| b.threshold == threshold) {
                Some(existing) => {
                    if bucket.rank > existing.rank {
                        *existing = bucket;
                    }
                }
                None => buckets.push(bucket),
            }
        }
        buckets.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        Some(Self { buckets })
    }

    /// Phrase for the greatest threshold `<= value`.
    ///
    /// Values below every threshold (and NaN) fall back to the smallest
    /// threshold rather than missing. An empty table resolves to absent.
    pub fn resolve(&self, value: f64) -> Fragment {
        let Some(first) = self.buckets.first() else {
            return Fragment::Absent;
        };
        self.buckets
            .iter()
            .take_while(|b| b.threshold <= value)
            .last()
            .unwrap_or(first)
            .phrase
            .clone()
    }

    /// Thresholds in ascending order.
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.buckets.iter().map(|b| b.threshold)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Parse a threshold key. NaN is rejected since it has no place in the order.
fn parse_threshold(key: &str) -> Option<f64> {
    key.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// 2 for the canonical float form, 1 for the plain integer form, else 0.
fn spelling_rank(key: &str, threshold: f64) -> u8 {
    if key == format!("{threshold:?}") {
        2
    } else if threshold.fract() == 0.0 && key == format!("{}", threshold as i64) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> RangeTable {
        RangeTable::from_entries(entries.iter().map(|(k, v)| (*k, Some(*v)))).unwrap()
    }

    fn phrase(table: &RangeTable, value: f64) -> Option<String> {
        table.resolve(value).as_str().map(str::to_string)
    }

    #[test]
    fn picks_greatest_threshold_not_exceeding_value() {
        let t = table(&[("0", "front"), ("90", "right"), ("180", "back")]);
        assert_eq!(phrase(&t, 0.0).as_deref(), Some("front"));
        assert_eq!(phrase(&t, 89.0).as_deref(), Some("front"));
        assert_eq!(phrase(&t, 90.0).as_deref(), Some("right"));
        assert_eq!(phrase(&t, 359.0).as_deref(), Some("back"));
    }

    #[test]
    fn below_all_thresholds_floors_to_smallest() {
        let t = table(&[("10", "low"), ("20", "high")]);
        assert_eq!(phrase(&t, -5.0).as_deref(), Some("low"));
    }

    #[test]
    fn nan_value_floors_to_smallest() {
        let t = table(&[("10", "low"), ("20", "high")]);
        assert_eq!(phrase(&t, f64::NAN).as_deref(), Some("low"));
    }

    #[test]
    fn keys_sort_numerically_not_lexically() {
        let t = table(&[("100", "c"), ("9", "a"), ("20", "b")]);
        assert_eq!(t.thresholds().collect::<Vec<_>>(), vec![9.0, 20.0, 100.0]);
        assert_eq!(phrase(&t, 25.0).as_deref(), Some("b"));
    }

    #[test]
    fn float_and_integer_spellings_both_resolve() {
        let t = table(&[("0.5", "half"), ("1", "full")]);
        assert_eq!(phrase(&t, 0.7).as_deref(), Some("half"));
        assert_eq!(phrase(&t, 1.2).as_deref(), Some("full"));
    }

    #[test]
    fn duplicate_spellings_prefer_float_form() {
        let t = table(&[("45", "integer"), ("45.0", "float")]);
        assert_eq!(t.len(), 1);
        assert_eq!(phrase(&t, 50.0).as_deref(), Some("float"));

        let t = table(&[("45.0", "float"), ("45", "integer")]);
        assert_eq!(phrase(&t, 50.0).as_deref(), Some("float"));
    }

    #[test]
    fn padded_spelling_loses_to_integer_form() {
        let t = table(&[("45", "int"), ("45.00", "padded")]);
        assert_eq!(t.len(), 1);
        assert_eq!(phrase(&t, 50.0).as_deref(), Some("int"));

        let t = table(&[("0.50", "padded"), ("0.5", "canonical")]);
        assert_eq!(phrase(&t, 0.7).as_deref(), Some("canonical"));

        let t = table(&[("1.50", "first"), ("1.500", "second")]);
        assert_eq!(phrase(&t, 2.0).as_deref(), Some("first"));
    }

    #[test]
    fn negative_thresholds() {
        let t = table(&[("-90", "below"), ("0", "level"), ("45", "above")]);
        assert_eq!(phrase(&t, -30.0).as_deref(), Some("below"));
        assert_eq!(phrase(&t, 10.0).as_deref(), Some("level"));
    }

    #[test]
    fn unparsable_key_disables_section() {
        let entries = [("0", Some("a")), ("bright", Some("b"))];
        assert!(RangeTable::from_entries(entries).is_none());
    }

    #[test]
    fn nan_key_disables_section() {
        let entries = [("0", Some("a")), ("NaN", Some("b"))];
        assert!(RangeTable::from_entries(entries).is_none());
    }

    #[test]
    fn empty_table_resolves_absent() {
        let t = RangeTable::from_entries(std::iter::empty()).unwrap();
        assert!(t.is_empty());
        assert!(t.resolve(1.0).is_absent());
    }

    #[test]
    fn non_string_phrase_resolves_absent() {
        let t = RangeTable::from_entries([("0", Some("low")), ("1", None)]).unwrap();
        assert!(t.resolve(1.5).is_absent());
        assert_eq!(phrase(&t, 0.5).as_deref(), Some("low"));
    }

    #[test]
    fn section_names_round_trip() {
        for section in RangeSection::ALL {
            assert_eq!(section.as_str().parse::<RangeSection>(), Ok(section));
        }
        assert!("colors".parse::<RangeSection>().is_err());
    }
}
