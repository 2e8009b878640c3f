use chrono::{DateTime, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const SECONDS_IN_D: i64 = 60 * 60 * 24;
    /// Date layout of the embedded WACC table, e.g. `12/31/15` or `3/4/25`.
    pub const TABLE_DATE_FORMAT: &str = "%m/%d/%y";
    /// Layout used for x axis tick labels.
    pub const AXIS_DATE_FORMAT: &str = "%Y-%m";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Plot x coordinate for a calendar date: whole days since the Unix epoch.
pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    // NaiveDate::default() is 1970-01-01
    date.signed_duration_since(NaiveDate::default()).num_days() as f64
}

/// Inverse of [`date_to_plot_x`]. Fractional days are truncated.
pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    let secs = (x.floor() as i64).checked_mul(TimeUtils::SECONDS_IN_D)?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

pub fn format_axis_date(x: f64) -> String {
    // Ticks outside chrono's range get no label
    plot_x_to_date(x)
        .map(|date| date.format(TimeUtils::AXIS_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_maps_to_zero() {
        assert_eq!(date_to_plot_x(ymd(1970, 1, 1)), 0.0);
        assert_eq!(date_to_plot_x(ymd(1970, 1, 31)), 30.0);
    }

    #[test]
    fn plot_x_round_trips_for_table_dates() {
        let date = ymd(2016, 3, 31);
        assert_eq!(plot_x_to_date(date_to_plot_x(date)), Some(date));
    }

    #[test]
    fn axis_labels_show_year_and_month() {
        assert_eq!(format_axis_date(date_to_plot_x(ymd(2025, 3, 4))), "2025-03");
        assert_eq!(format_axis_date(f64::NAN), "");
    }
}
