// Shift category model
// Classification of free-text event labels into canonical categories

use std::fmt;

/// The canonical shift categories.
///
/// Labels are free text, but these four lowercase forms drive both coloring
/// and the summary tallies; anything else lands in `Other`. Classification is
/// shared by rendering and the summary calculator so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftCategory {
    /// "nocka" — night shift
    Night,
    /// "dniówka" — day shift
    Day,
    /// "nadgodziny" — overtime
    Overtime,
    /// "urlop" — vacation
    Vacation,
    Other,
}

impl ShiftCategory {
    /// Classify a label: case-insensitive exact match against the canonical
    /// forms, `Other` otherwise.
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "nocka" => Self::Night,
            "dniówka" => Self::Day,
            "nadgodziny" => Self::Overtime,
            "urlop" => Self::Vacation,
            _ => Self::Other,
        }
    }

    /// The canonical lowercase label, where one exists.
    pub fn canonical_label(self) -> Option<&'static str> {
        match self {
            Self::Night => Some("nocka"),
            Self::Day => Some("dniówka"),
            Self::Overtime => Some("nadgodziny"),
            Self::Vacation => Some("urlop"),
            Self::Other => None,
        }
    }

    /// Whether events of this category count toward the worked-day total.
    /// Vacation is tracked but deliberately excluded.
    pub fn counts_as_worked(self) -> bool {
        matches!(self, Self::Night | Self::Day | Self::Overtime)
    }
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Night => "night shift",
            Self::Day => "day shift",
            Self::Overtime => "overtime",
            Self::Vacation => "vacation",
            Self::Other => "other",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("nocka", ShiftCategory::Night; "night")]
    #[test_case("dniówka", ShiftCategory::Day; "day")]
    #[test_case("nadgodziny", ShiftCategory::Overtime; "overtime")]
    #[test_case("urlop", ShiftCategory::Vacation; "vacation")]
    #[test_case("NOCKA", ShiftCategory::Night; "uppercase")]
    #[test_case("Dniówka", ShiftCategory::Day; "mixed case with diacritic")]
    #[test_case("  urlop  ", ShiftCategory::Vacation; "surrounding whitespace")]
    #[test_case("szkolenie", ShiftCategory::Other; "unrecognized label")]
    #[test_case("", ShiftCategory::Other; "empty label")]
    fn test_classify(label: &str, expected: ShiftCategory) {
        assert_eq!(ShiftCategory::classify(label), expected);
    }

    #[test]
    fn test_vacation_does_not_count_as_worked() {
        assert!(ShiftCategory::Night.counts_as_worked());
        assert!(ShiftCategory::Day.counts_as_worked());
        assert!(ShiftCategory::Overtime.counts_as_worked());
        assert!(!ShiftCategory::Vacation.counts_as_worked());
        assert!(!ShiftCategory::Other.counts_as_worked());
    }
}
