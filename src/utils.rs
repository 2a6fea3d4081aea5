use std::env;

use log::LevelFilter;

/// Constants configurable through environment variables (loaded from a
/// `.env` file if present).
///
/// An example `.env`:
///
/// ```txt
///     LOW_STOCK_THRESHOLD_FRACTION = "0.10"
///     RUST_LOG = "info"
/// ```
pub struct Consts;
impl Consts {
    /// Fraction of an ingredient's historical peak stock below which it is
    /// reported in the low-stock report, read from
    /// `LOW_STOCK_THRESHOLD_FRACTION`. Defaults to 0.10 (10% of peak).
    pub fn low_stock_threshold_fraction() -> f64 {
        env::var("LOW_STOCK_THRESHOLD_FRACTION")
            .unwrap_or_else(|_| "0.10".to_string())
            .parse::<f64>()
            .unwrap_or(0.10)
    }
}

/// Maximum length of an ingredient or recipe name, enforced by the parser.
pub const MAX_NAME_LEN: usize = 19;

/// Initializes the logger. Reads `RUST_LOG` for the filter level; defaults
/// to `INFO` when unset or unparsable.
pub fn init_logger() {
    env_logger::builder()
        .filter(
            None,
            env::var("RUST_LOG")
                .unwrap_or_default()
                .parse::<LevelFilter>()
                .unwrap_or(LevelFilter::Info),
        )
        .format_timestamp(None)
        .init();
}
