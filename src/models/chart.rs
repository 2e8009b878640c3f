//! Geometry for one animation frame of the WACC chart.

use thiserror::Error;

use crate::config::PLOT_CONFIG;
use crate::domain::Series;
use crate::utils::maths_utils::{catmull_rom, get_min_max, pad_range};
use crate::utils::time_utils::date_to_plot_x;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("prefix end {upto} is past the series length {len}")]
    PrefixOutOfRange { upto: usize, len: usize },

    #[error("point {index} has a non-finite value ({value})")]
    NonFiniteValue { index: usize, value: f64 },
}

/// The newest visible point, drawn larger and labelled with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub position: [f64; 2],
    pub label: String,
    /// Anchor for the label, just below the point
    pub label_position: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Everything the plot needs to draw the first `frame_index` points.
///
/// Plot x is days since the Unix epoch, plot y is the WACC value in percent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartFrame {
    pub frame_index: usize,
    /// Smoothed polyline through the markers
    pub line: Vec<[f64; 2]>,
    pub markers: Vec<[f64; 2]>,
    pub highlight: Option<Highlight>,
    /// `None` for an empty chart; the plot keeps its default view
    pub bounds: Option<PlotBounds>,
}

impl ChartFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Builds the frame showing `series[0..upto]`.
    ///
    /// Depends only on its arguments, so rebuilding the same frame gives an
    /// equal result. `upto == 0` (or an empty series) gives an empty chart.
    pub fn build(series: &Series, upto: usize) -> Result<Self, RenderError> {
        if upto > series.len() {
            return Err(RenderError::PrefixOutOfRange {
                upto,
                len: series.len(),
            });
        }

        let markers = series
            .prefix(upto)
            .iter()
            .enumerate()
            .map(|(index, p)| {
                if p.value.is_finite() {
                    Ok([date_to_plot_x(p.date), p.value])
                } else {
                    Err(RenderError::NonFiniteValue {
                        index,
                        value: p.value,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Some(last) = series.last_in_prefix(upto) else {
            return Ok(Self::empty());
        };

        let line = catmull_rom(&markers, PLOT_CONFIG.spline_samples_per_segment);

        // Markers always exist here, so both ranges are Some
        let x_range = get_min_max(markers.iter().map(|m| m[0])).unwrap_or_default();
        // The spline may overshoot the markers, keep it inside the view
        let y_range = get_min_max(line.iter().map(|p| p[1])).unwrap_or_default();
        let bounds = PlotBounds {
            x: pad_range(
                x_range,
                PLOT_CONFIG.bounds_padding_pct,
                PLOT_CONFIG.min_x_padding_days,
            ),
            y: pad_range(
                y_range,
                PLOT_CONFIG.bounds_padding_pct,
                PLOT_CONFIG.min_y_padding,
            ),
        };

        let position = [date_to_plot_x(last.date), last.value];
        let label_drop = (bounds.y.1 - bounds.y.0) * PLOT_CONFIG.highlight_label_offset_pct;
        let highlight = Highlight {
            position,
            label: last.value_label(),
            label_position: [position[0], position[1] - label_drop],
        };

        Ok(Self {
            frame_index: upto,
            line,
            markers,
            highlight: Some(highlight),
            bounds: Some(bounds),
        })
    }
}
