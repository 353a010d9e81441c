// Source columns
pub const COL_TIME: &str = "time";
pub const COL_KTEMP: &str = "Ktemp"; // Temperature in kelvin

// Derived at load time
pub const COL_YEAR: &str = "year";
pub const COL_MONTH: &str = "month";
pub const COL_DAY_OF_YEAR: &str = "day_of_year";
pub const COL_FTEMP: &str = "Ftemp"; // Temperature in fahrenheit

/// Columns the source file must provide.
pub const REQUIRED_COLUMNS: [&str; 2] = [COL_TIME, COL_KTEMP];

/// Cell values read as missing, matching the markers common CSV exports use.
pub const MISSING_VALUE_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];
