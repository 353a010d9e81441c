use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the location of the weather CSV file.
pub const DATA_PATH_ENV: &str = "WEATHER_DATA_PATH";

const DEFAULT_DATA_FILE: &str = "data/weather.csv";

/// Resolves the location of the weather data file.
///
/// Uses `WEATHER_DATA_PATH` when it is set to a non-empty value, otherwise
/// `data/weather.csv` relative to the working directory.
pub fn get_data_path() -> PathBuf {
    resolve_data_path(env::var_os(DATA_PATH_ENV).map(PathBuf::from))
}

fn resolve_data_path(configured: Option<PathBuf>) -> PathBuf {
    configured
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
