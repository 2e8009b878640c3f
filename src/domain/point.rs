use chrono::NaiveDate;

/// One quarterly observation of the WACC series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub date: NaiveDate,
    pub value: f64,
}

impl Point {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Point { date, value }
    }

    /// Text shown next to the highlighted point, e.g. `12.99%`.
    pub fn value_label(&self) -> String {
        format!("{:.2}%", self.value)
    }
}
