//! Volume-weighted indicators.

use crate::frame::{check_period, mfi_column, vwma_column};
use crate::{PriceFrame, Result};

impl PriceFrame {
    /// Volume-weighted moving average of `source`, stored under
    /// [`vwma_column`] naming (`vwma_<source>_<period>`).
    ///
    /// Once `period` bars of history exist the average runs over a
    /// trailing window of `period + 1` bars; before that it covers the
    /// full history so far. Bars whose window volume sums to exactly zero
    /// fall back to the raw `source` value, keeping the division defined.
    /// The conventional period is 14.
    ///
    /// # Arguments
    ///
    /// * `source` - Name of the price column to weight, typically `"close"`
    /// * `period` - The look-back window length
    pub fn set_vwma(&mut self, source: &str, period: usize) -> Result<()> {
        check_period(period)?;
        let prices = self.source(source)?;
        let volume = self.volume();
        let mut weighted = Vec::with_capacity(prices.len());
        let mut out = Vec::with_capacity(prices.len());
        for i in 0..prices.len() {
            weighted.push(prices[i] * volume[i]);
            let start = i.saturating_sub(period);
            let volume_sum: f64 = volume[start..=i].iter().sum();
            if volume_sum == 0.0 {
                out.push(prices[i]);
            } else {
                let weighted_sum: f64 = weighted[start..=i].iter().sum();
                out.push(weighted_sum / volume_sum);
            }
        }
        self.store(vwma_column(source, period), out);
        Ok(())
    }

    /// Money Flow Index over `period`, stored as `mfi_<period>`.
    ///
    /// Raw money flow is typical price `(high + low + close) / 3` times
    /// volume, counted positive when the typical price rose against the
    /// previous bar and negative otherwise; a tie counts as a fall and
    /// the first bar as a rise. The first `period - 1` rows are
    /// placeholder zeros. A window whose positive and negative flows sum
    /// to zero falls back to the typical price of its last bar, a
    /// price-scale value in an otherwise 0-100 column.
    ///
    /// # Arguments
    ///
    /// * `period` - The look-back window length, conventionally 14
    pub fn set_mfi(&mut self, period: usize) -> Result<()> {
        check_period(period)?;
        let n = self.len();
        let high = self.high();
        let low = self.low();
        let close = self.close();
        let volume = self.volume();

        let mut typical = Vec::with_capacity(n);
        for i in 0..n {
            typical.push((high[i] + low[i] + close[i]) / 3.0);
        }

        let mut flows = Vec::with_capacity(n);
        for i in 0..n {
            let flow = typical[i] * volume[i];
            if i > 0 && typical[i - 1] >= typical[i] {
                flows.push(-flow);
            } else {
                flows.push(flow);
            }
        }

        let mut out = vec![0.0; period.saturating_sub(1).min(n)];
        for end in period..=n {
            let window = &flows[end - period..end];
            let positive: f64 = window.iter().filter(|&&f| f >= 0.0).sum();
            let negative: f64 = -window.iter().filter(|&&f| f < 0.0).sum::<f64>();
            if positive + negative > 0.0 {
                out.push(100.0 * positive / (positive + negative));
            } else {
                out.push(typical[end - 1]);
            }
        }
        self.store(mfi_column(period), out);
        Ok(())
    }
}
