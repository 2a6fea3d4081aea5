use log::info;

use crate::utils::Consts;
use crate::warehouse::Warehouse;

/// Synchronous low-stock reporter. Where the original threaded system alert
/// polled container levels on its own timer, the command loop here has no
/// background thread to poll from, so the check instead runs inline at the
/// same points stock changes: after a `rifornimento` and after a courier
/// dispatch drains the ready queue.
pub struct StockAlerts;

impl StockAlerts {
    /// Logs one `info!` line per ingredient whose current stock has fallen at
    /// or below [`Consts::low_stock_threshold_fraction`] of its historical
    /// peak. Ingredients that have never been delivered (peak of zero) are
    /// not reported — an ingredient that was never stocked isn't "running
    /// low", it's simply unused so far.
    pub fn report(warehouse: &mut Warehouse, tick: i64) {
        let fraction = Consts::low_stock_threshold_fraction();
        for (ingredient, stock, peak) in warehouse.stocks_with_peaks(tick) {
            if peak == 0 {
                continue;
            }
            let threshold = (peak as f64) * fraction;
            if (stock as f64) <= threshold {
                info!(
                    "[ STOCK ALERT ]: '{}' at {} units ({:.0}% of peak {})",
                    ingredient,
                    stock,
                    fraction * 100.0,
                    peak
                );
            }
        }
    }
}
