//! The quarterly WACC figures shown by the dashboard.

use std::sync::Arc;

use crate::domain::Series;

use super::prepare::{ParseError, prepare_series};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Source table, one row per quarter end (the final row is an intra-quarter reading).
pub const WACC_TABLE: &str = "Date,Value
12/31/15,6.1403
3/31/16,12.162
6/30/16,11.0909
9/30/16,11.45
12/31/16,9.8059
3/31/17,10.3306
6/30/17,11.0793
9/30/17,11.4353
12/31/17,11.0004
3/31/18,12.2839
6/30/18,13.5906
9/30/18,12.5345
12/31/18,16.5534
3/31/19,14.6615
6/30/19,14.064
9/30/19,13.4716
12/31/19,12.3025
3/31/20,14.7086
6/30/20,13.9079
9/30/20,14.1174
12/31/20,13.7566
3/31/21,14.9758
6/30/21,16.1742
9/30/21,17.0009
12/31/21,15.5105
3/31/22,15.7077
6/30/22,16.4159
9/30/22,14.129
12/31/22,12.7491
3/31/23,13.9667
6/30/23,15.7544
9/30/23,15.2208
12/31/23,17.6384
3/31/24,14.8147
6/30/24,14.3514
9/30/24,14.9211
12/31/24,13.8734
3/4/25,12.9881";

/// Prepares the embedded table once; the result is shared read-only for the
/// rest of the process.
pub fn load_wacc_series() -> Result<Arc<Series>, ParseError> {
    let series = prepare_series(WACC_TABLE)?;

    log::info!("Prepared WACC series with {} points", series.len());

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_series_summary {
        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            log::debug!(
                "WACC series spans {} ({:.4}) .. {} ({:.4})",
                crate::utils::time_utils::format_date(first.date),
                first.value,
                crate::utils::time_utils::format_date(last.date),
                last.value
            );
        }
    }

    Ok(Arc::new(series))
}
