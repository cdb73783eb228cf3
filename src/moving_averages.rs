//! Moving average primitives and the frame operations built on them.
//!
//! All window-based functions share the same warm-up policy: while fewer
//! than `period` values are available, the window shrinks to the history
//! seen so far instead of emitting NaN or placeholder values.

use crate::frame::{check_period, ema_column, ma_column, MIDDLE_COLUMN};
use crate::{PriceFrame, Result};

/// Simple moving average with a growing warm-up window.
///
/// Each output is the mean of the trailing `period` values, or of all
/// values seen so far while the window is still filling, so the first
/// `period - 1` outputs average 1, 2, .. `period - 1` values. Every
/// window is summed independently, which makes a `period` of 1 reproduce
/// the input exactly; a `period` of 0 is treated as 1.
///
/// # Arguments
///
/// * `values` - The input series
/// * `period` - The look-back window length
///
/// # Returns
///
/// A vector the same length as `values`
///
/// # Example
///
/// ```
/// use price_frame::rolling_mean;
///
/// let avg = rolling_mean(&[10.0, 20.0, 30.0], 2);
/// assert_eq!(avg, vec![10.0, 15.0, 25.0]);
/// ```
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let window = &values[(i + 1).saturating_sub(period)..=i];
        out.push(window.iter().sum::<f64>() / window.len() as f64);
    }
    out
}

/// Symmetric 4-tap weighted average with weights `[1, 2, 2, 1] / 6`.
///
/// The window holds the current value and the three before it, oldest
/// first. Near the start of the series the kernel shrinks to the
/// available history: the first output is the raw value, the second uses
/// weights `[1, 2] / 3`, the third `[1, 2, 2] / 5`, with the divisor
/// always the sum of the weights actually applied.
pub fn swma(values: &[f64]) -> Vec<f64> {
    const WEIGHTS: [f64; 4] = [1.0, 2.0, 2.0, 1.0];
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let window = &values[i.saturating_sub(3)..=i];
        let weights = &WEIGHTS[..window.len()];
        let weighted: f64 = window.iter().zip(weights).map(|(v, w)| v * w).sum();
        let divisor: f64 = weights.iter().sum();
        out.push(weighted / divisor);
    }
    out
}

/// Exponential moving average with multiplier `2 / (period + 1)`.
///
/// The series seeds with the first input value, so `ema[0] == values[0]`
/// exactly; every later output is `value * k + previous * (1 - k)`.
/// A `period` of 0 is treated as 1.
///
/// # Arguments
///
/// * `values` - The input series
/// * `period` - The smoothing period
///
/// # Returns
///
/// A vector the same length as `values`
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    if let Some(&first) = values.first() {
        let mut prev = first;
        out.push(prev);
        for &value in &values[1..] {
            prev = value * k + prev * (1.0 - k);
            out.push(prev);
        }
    }
    out
}

impl PriceFrame {
    /// Store the bar midpoint `(open + high + low + close) / 4` as
    /// `middle`.
    pub fn set_middle(&mut self) -> Result<()> {
        let open = self.open();
        let high = self.high();
        let low = self.low();
        let close = self.close();
        let middle: Vec<f64> = (0..self.len())
            .map(|i| (open[i] + high[i] + low[i] + close[i]) / 4.0)
            .collect();
        self.store(MIDDLE_COLUMN.to_string(), middle);
        Ok(())
    }

    /// Simple moving average of `source` over `period`, stored under
    /// [`ma_column`] naming (`ma_<source>_<period>`).
    ///
    /// During warm-up the average covers only the history seen so far, so
    /// every row holds a finite value. The conventional period is 14.
    ///
    /// # Arguments
    ///
    /// * `source` - Name of the column to average, typically `"close"`
    /// * `period` - The look-back window length
    pub fn set_ma(&mut self, source: &str, period: usize) -> Result<()> {
        check_period(period)?;
        let values = self.source(source)?;
        let ma = rolling_mean(values, period);
        self.store(ma_column(source, period), ma);
        Ok(())
    }

    /// Exponential moving average of `source`, returned without storing.
    ///
    /// MACD builds its lines from this; use [`PriceFrame::set_ema`] to
    /// keep the result as a column.
    pub fn ema(&self, source: &str, period: usize) -> Result<Vec<f64>> {
        check_period(period)?;
        let values = self.source(source)?;
        Ok(ema(values, period))
    }

    /// Exponential moving average of `source` over `period`, stored under
    /// [`ema_column`] naming (`ema_<source>_<period>`).
    ///
    /// The conventional period is 10.
    ///
    /// # Arguments
    ///
    /// * `source` - Name of the column to smooth, typically `"close"`
    /// * `period` - The smoothing period
    pub fn set_ema(&mut self, source: &str, period: usize) -> Result<()> {
        let series = self.ema(source, period)?;
        self.store(ema_column(source, period), series);
        Ok(())
    }
}
