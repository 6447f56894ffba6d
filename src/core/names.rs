use chrono::Weekday;

/// Caller-supplied month and weekday name tables.
///
/// The kernel does no localization of its own; callers that want anything
/// other than English full names supply their own tables. `days` is indexed
/// Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    pub months: Vec<String>,
    pub days: Vec<String>,
}

impl Default for NameTable {
    fn default() -> Self {
        Self {
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(str::to_owned)
            .to_vec(),
            days: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}

impl NameTable {
    /// Name for a 1-based month number; empty for out-of-range input.
    #[must_use]
    pub fn month_name(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|index| self.months.get(index as usize))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn day_name(&self, weekday: Weekday) -> &str {
        self.days
            .get(weekday.num_days_from_sunday() as usize)
            .map_or("", String::as_str)
    }

    /// Truncates `full` to `len` characters, appending a period only when the
    /// abbreviated form is strictly shorter than the full form.
    #[must_use]
    pub fn abbreviate(full: &str, len: usize) -> String {
        if full.chars().count() <= len {
            return full.to_owned();
        }
        let mut abbreviated: String = full.chars().take(len).collect();
        abbreviated.push('.');
        abbreviated
    }
}
