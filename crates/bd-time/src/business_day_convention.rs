//! Rolling conventions for dates that land on non-business days.

use std::str::FromStr;

use bd_core::errors::Error;

/// How [`Calendar::adjust`](crate::calendar::Calendar::adjust) moves a date
/// that is not a business day.  Business days are never moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Leave the date where it is.
    Unadjusted,
    /// Roll forward to the next business day.
    #[default]
    Following,
    /// Roll forward, unless that changes the month; then roll backward.
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
    /// Roll backward, unless that changes the month; then roll forward.
    ModifiedPreceding,
    /// Roll to whichever business day is closer, forward on a tie.
    Nearest,
    /// Move to the last business day of the date's month.
    EndOfMonth,
}

const LABELS: [(BusinessDayConvention, &str); 7] = [
    (BusinessDayConvention::Unadjusted, "Unadjusted"),
    (BusinessDayConvention::Following, "Following"),
    (BusinessDayConvention::ModifiedFollowing, "Modified Following"),
    (BusinessDayConvention::Preceding, "Preceding"),
    (BusinessDayConvention::ModifiedPreceding, "Modified Preceding"),
    (BusinessDayConvention::Nearest, "Nearest"),
    (BusinessDayConvention::EndOfMonth, "End of Month"),
];

/// Lowercase with separators dropped, so `"end-of-month"`, `"EndOfMonth"`
/// and `"End of Month"` all fold to the same key.
fn fold(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl BusinessDayConvention {
    /// Every convention, in declaration order.
    pub fn all() -> impl Iterator<Item = BusinessDayConvention> {
        LABELS.iter().map(|&(c, _)| c)
    }

    /// Human-readable name, e.g. `"Modified Following"`.
    pub fn label(self) -> &'static str {
        LABELS
            .iter()
            .find(|&&(c, _)| c == self)
            .map_or("", |&(_, label)| label)
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a label case-insensitively, ignoring spaces, hyphens and
/// underscores.
impl FromStr for BusinessDayConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold(s);
        LABELS
            .iter()
            .find(|&&(_, label)| fold(label) == key)
            .map(|&(c, _)| c)
            .ok_or_else(|| Error::Precondition(format!("unknown business day convention {s:?}")))
    }
}
