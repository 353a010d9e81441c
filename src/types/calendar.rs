//! Calendar constants used to label chart axes.

/// Number of day-of-year columns in a heatmap row (leap years included).
pub const DAYS_IN_LEAP_YEAR: usize = 366;

/// Abbreviated month names, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Day of the year on which each month starts in a non-leap year.
pub const MONTH_START_DAYS: [u32; 12] = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Abbreviated name of `month` (1-12).
pub fn month_label(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_LABELS.get(index).copied()
}
