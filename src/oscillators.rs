//! Momentum oscillators built on the smoothing primitives.

use crate::frame::{
    check_period, rvgi_column, rvgi_signal_column, MACD_COLUMN, MACD_HISTOGRAM_COLUMN,
    MACD_SIGNAL_COLUMN,
};
use crate::moving_averages::{ema, rolling_mean, swma};
use crate::{PriceFrame, Result};

/// Fast EMA period of the MACD line
const MACD_FAST_PERIOD: usize = 12;
/// Slow EMA period of the MACD line
const MACD_SLOW_PERIOD: usize = 26;
/// EMA period of the MACD signal line
const MACD_SIGNAL_PERIOD: usize = 9;

impl PriceFrame {
    /// Moving average convergence/divergence over the close, stored as
    /// `macd`, `macds` and `macdh`.
    ///
    /// The MACD line is the 12-period EMA of the close minus the
    /// 26-period EMA, the signal line is the 9-period EMA of the MACD
    /// line, and the histogram is their difference. The periods are
    /// fixed; both EMAs are recomputed from the current close on every
    /// call.
    pub fn set_macd(&mut self) -> Result<()> {
        let close = self.close();
        let fast = ema(close, MACD_FAST_PERIOD);
        let slow = ema(close, MACD_SLOW_PERIOD);
        let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
        let signal = ema(&macd, MACD_SIGNAL_PERIOD);
        let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();
        self.store(MACD_COLUMN.to_string(), macd);
        self.store(MACD_SIGNAL_COLUMN.to_string(), signal);
        self.store(MACD_HISTOGRAM_COLUMN.to_string(), histogram);
        Ok(())
    }

    /// Relative Vigor Index over `period`, stored as `rvgi_<period>` with
    /// its signal line as `rvgis_<period>`.
    ///
    /// Close-minus-open and high-minus-low are each smoothed with the
    /// shrinking `[1, 2, 2, 1] / 6` kernel of [`swma`]; the index is the
    /// rolling mean of their ratio over `period`, and the signal applies
    /// the same kernel to the index itself. The conventional period is
    /// 10. Bars whose smoothed high-low span is zero divide by zero and
    /// put IEEE infinities or NaN into the ratio.
    ///
    /// # Arguments
    ///
    /// * `period` - The look-back window length
    pub fn set_rvgi(&mut self, period: usize) -> Result<()> {
        check_period(period)?;
        let n = self.len();
        let open = self.open();
        let high = self.high();
        let low = self.low();
        let close = self.close();

        let mut close_open = Vec::with_capacity(n);
        let mut high_low = Vec::with_capacity(n);
        for i in 0..n {
            close_open.push(close[i] - open[i]);
            high_low.push(high[i] - low[i]);
        }

        let vigor = swma(&close_open);
        let range = swma(&high_low);
        let ratio: Vec<f64> = vigor.iter().zip(&range).map(|(v, r)| v / r).collect();
        let rvi = rolling_mean(&ratio, period);
        let signal = swma(&rvi);

        self.store(rvgi_column(period), rvi);
        self.store(rvgi_signal_column(period), signal);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_frame() -> PriceFrame {
        // Waveform around 100 with a constant bar geometry: close - open
        // is always 2 and high - low is always 4
        let rows = 40;
        let mut open = Vec::with_capacity(rows);
        let mut high = Vec::with_capacity(rows);
        let mut low = Vec::with_capacity(rows);
        let mut close = Vec::with_capacity(rows);
        for i in 0..rows {
            let price = 100.0 + (i as f64 * 0.35).sin() * 4.0;
            open.push(price - 1.0);
            high.push(price + 2.0);
            low.push(price - 2.0);
            close.push(price + 1.0);
        }
        PriceFrame::new(open, high, low, close, vec![1_000.0; rows]).unwrap()
    }

    #[test]
    fn test_set_macd_histogram_is_macd_minus_signal() {
        let mut frame = create_test_frame();
        frame.set_macd().unwrap();
        let macd = frame.column("macd").unwrap();
        let signal = frame.column("macds").unwrap();
        let histogram = frame.column("macdh").unwrap();
        for i in 0..frame.len() {
            assert_eq!(histogram[i], macd[i] - signal[i]);
        }
    }

    #[test]
    fn test_set_macd_opens_at_zero() {
        let mut frame = create_test_frame();
        frame.set_macd().unwrap();
        // Both EMAs seed with the first close, so the lines start equal
        assert_eq!(frame.column("macd").unwrap()[0], 0.0);
        assert_eq!(frame.column("macds").unwrap()[0], 0.0);
        assert_eq!(frame.column("macdh").unwrap()[0], 0.0);
    }

    #[test]
    fn test_set_macd_adds_three_columns() {
        let mut frame = create_test_frame();
        let before = frame.column_names().len();
        frame.set_macd().unwrap();
        assert_eq!(frame.column_names().len(), before + 3);
    }

    #[test]
    fn test_set_rvgi_on_constant_bar_geometry() {
        let mut frame = create_test_frame();
        frame.set_rvgi(4).unwrap();
        let rvi = frame.column("rvgi_4").unwrap();
        let signal = frame.column("rvgis_4").unwrap();
        // A fixed 2-point body inside a fixed 4-point range pins the
        // index at one half from the very first bar
        for i in 0..frame.len() {
            assert_relative_eq!(rvi[i], 0.5);
            assert_relative_eq!(signal[i], 0.5);
        }
    }

    #[test]
    fn test_set_rvgi_rejects_zero_period() {
        let mut frame = create_test_frame();
        assert!(frame.set_rvgi(0).is_err());
    }
}
