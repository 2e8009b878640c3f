/// All user-facing strings in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub heading: &'static str,
    pub series_name: &'static str,
    pub highlight_name: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "WACC Dashboard",
    heading: "WACC Dashboard",
    series_name: "WACC",
    highlight_name: "Latest WACC",
    plot_x_axis: "Date",
    plot_y_axis: "WACC (%)",
};
