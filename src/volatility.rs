//! True range and average true range.

use crate::frame::{atr_column, atr_percent_column, check_period, tr_column};
use crate::moving_averages::rolling_mean;
use crate::{PriceFrame, Result};

/// True range of each bar against the prior close.
///
/// `tr[0]` is 0.0 since no prior close exists; every later bar takes the
/// greatest of the high-low span and the two absolute gaps from the
/// previous close, so the result is never negative.
///
/// # Arguments
///
/// * `high` - High price per bar
/// * `low` - Low price per bar
/// * `close` - Close price per bar
pub fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(high.len());
    for i in 0..high.len() {
        if i == 0 {
            out.push(0.0);
        } else {
            let span = high[i] - low[i];
            let gap_high = (high[i] - close[i - 1]).abs();
            let gap_low = (low[i] - close[i - 1]).abs();
            out.push(span.max(gap_high).max(gap_low));
        }
    }
    out
}

impl PriceFrame {
    /// True range and its rolling average over `period`, stored as
    /// `tr_<period>` and `atr_<period>`.
    ///
    /// ADX, Supertrend and the ATR percentage call this automatically
    /// when the ATR column they need is missing. The conventional period
    /// is 14.
    ///
    /// # Arguments
    ///
    /// * `period` - The look-back window length
    pub fn set_atr(&mut self, period: usize) -> Result<()> {
        check_period(period)?;
        let tr = true_range(self.high(), self.low(), self.close());
        let atr = rolling_mean(&tr, period);
        self.store(tr_column(period), tr);
        self.store(atr_column(period), atr);
        Ok(())
    }

    /// ATR as a fraction of the close, stored as `%atr_<period>`.
    ///
    /// Computes `atr_<period>` first when it is not already present.
    ///
    /// # Arguments
    ///
    /// * `period` - The look-back window length
    pub fn set_atr_percent(&mut self, period: usize) -> Result<()> {
        check_period(period)?;
        let atr_name = atr_column(period);
        if !self.has_column(&atr_name) {
            self.set_atr(period)?;
        }
        let atr = self.source(&atr_name)?;
        let close = self.close();
        let percent: Vec<f64> = atr.iter().zip(close).map(|(a, c)| a / c).collect();
        self.store(atr_percent_column(period), percent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_frame() -> PriceFrame {
        PriceFrame::new(
            vec![10.0, 11.0, 12.0, 11.5],
            vec![12.0, 13.0, 14.0, 12.5],
            vec![9.0, 10.0, 11.0, 10.0],
            vec![11.0, 12.0, 13.0, 10.5],
            vec![100.0, 150.0, 120.0, 80.0],
        )
        .unwrap()
    }

    #[test]
    fn test_true_range_starts_at_zero() {
        let tr = true_range(&[12.0, 13.0], &[9.0, 10.0], &[11.0, 12.0]);
        assert_eq!(tr[0], 0.0);
    }

    #[test]
    fn test_true_range_takes_largest_of_three_spans() {
        // Bar 1: high-low is 3, the gaps from the prior close are 2 and 1
        let tr = true_range(&[12.0, 13.0], &[9.0, 10.0], &[11.0, 12.0]);
        assert_relative_eq!(tr[1], 3.0);

        // Gap up: the distance from the prior close dominates the span
        let tr = true_range(&[12.0, 20.0], &[9.0, 18.0], &[11.0, 19.0]);
        assert_relative_eq!(tr[1], 9.0);
    }

    #[test]
    fn test_true_range_is_never_negative() {
        let frame = create_test_frame();
        let tr = true_range(frame.high(), frame.low(), frame.close());
        assert!(tr.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_set_atr_stores_both_columns() {
        let mut frame = create_test_frame();
        frame.set_atr(2).unwrap();
        assert!(frame.has_column("tr_2"));
        assert!(frame.has_column("atr_2"));

        let tr = frame.column("tr_2").unwrap();
        let atr = frame.column("atr_2").unwrap();
        assert_eq!(atr[0], tr[0]);
        assert_relative_eq!(atr[1], (tr[0] + tr[1]) / 2.0);
        assert_relative_eq!(atr[3], (tr[2] + tr[3]) / 2.0);
    }

    #[test]
    fn test_set_atr_percent_computes_atr_dependency() {
        let mut frame = create_test_frame();
        frame.set_atr_percent(2).unwrap();
        assert!(frame.has_column("atr_2"));

        let atr = frame.column("atr_2").unwrap();
        let percent = frame.column("%atr_2").unwrap();
        for i in 0..frame.len() {
            assert_relative_eq!(percent[i], atr[i] / frame.close()[i]);
        }
    }

    #[test]
    fn test_set_atr_rejects_zero_period() {
        let mut frame = create_test_frame();
        assert!(frame.set_atr(0).is_err());
    }
}
