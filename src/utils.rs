//! Synthetic OHLCV data generation for examples, tests and benchmarks.

use crate::{PriceFrame, Result};
use rand::Rng;

/// Generate a random-walk OHLCV frame.
///
/// Closes follow a random walk starting at `start_price`, each bar opens
/// at the previous close, the high and low bracket the open and close by
/// a random margin, and volume is drawn between 1,000 and 10,000.
///
/// # Arguments
///
/// * `rows` - Number of bars to generate, at least 1
/// * `start_price` - Opening price of the first bar
/// * `volatility` - Maximum close-to-close move per bar, must be positive
///
/// # Returns
///
/// A frame ready for indicator computation
///
/// # Example
///
/// ```
/// use price_frame::generate_frame;
///
/// let frame = generate_frame(100, 250.0, 2.5).unwrap();
/// assert_eq!(frame.len(), 100);
/// ```
pub fn generate_frame(rows: usize, start_price: f64, volatility: f64) -> Result<PriceFrame> {
    let mut rng = rand::thread_rng();
    let mut open = Vec::with_capacity(rows);
    let mut high = Vec::with_capacity(rows);
    let mut low = Vec::with_capacity(rows);
    let mut close = Vec::with_capacity(rows);
    let mut volume = Vec::with_capacity(rows);

    let mut price = start_price;
    for _ in 0..rows {
        let bar_open = price;
        let bar_close = price + rng.gen_range(-volatility..volatility);
        let bar_high = bar_open.max(bar_close) + rng.gen_range(0.0..volatility / 2.0);
        let bar_low = bar_open.min(bar_close) - rng.gen_range(0.0..volatility / 2.0);

        open.push(bar_open);
        high.push(bar_high);
        low.push(bar_low);
        close.push(bar_close);
        volume.push(rng.gen_range(1_000.0..10_000.0));

        price = bar_close;
    }

    PriceFrame::new(open, high, low, close, volume)
}
