//! Calendar year source for the footer.

use chrono::Datelike;

/// Provides the year stamped into the copyright line.
pub trait YearProvider {
    fn current_year(&self) -> i32;
}

/// Reads the local calendar.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemYear;

impl YearProvider for SystemYear {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always returns the wrapped year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearProvider for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_year_is_stable() {
        let year = FixedYear(2031);
        assert_eq!(year.current_year(), 2031);
        assert_eq!(year.current_year(), 2031);
    }

    #[test]
    fn system_year_is_plausible() {
        assert!(SystemYear.current_year() >= 2024);
    }
}
