//! Trend strength and trend-following indicators.

use crate::frame::{
    adx_column, atr_column, check_period, ndi_column, pdi_column, supertrend_column,
};
use crate::moving_averages::ema;
use crate::{PriceFrame, Result};

impl PriceFrame {
    /// Average Directional Index over `period` with its directional
    /// indicator pair, stored as `adx_<period>`, `pdi_<period>` and
    /// `ndi_<period>`.
    ///
    /// Computes `atr_<period>` first when it is not already present.
    /// Directional movement takes the up-move (down-move) only when it is
    /// strictly positive and strictly larger than its counterpart; both
    /// legs are smoothed with the EMA multiplier `2 / (period + 1)`,
    /// seeded at zero. A bar with zero ATR yields zero directional
    /// indicators and a zero indicator sum yields a zero DX, so the
    /// stored series stay finite everywhere; index 0 is zero in all three
    /// columns. The conventional period is 14.
    ///
    /// # Arguments
    ///
    /// * `period` - The look-back window length
    pub fn set_adx(&mut self, period: usize) -> Result<()> {
        check_period(period)?;
        let atr_name = atr_column(period);
        if !self.has_column(&atr_name) {
            self.set_atr(period)?;
        }

        let n = self.len();
        let high = self.high();
        let low = self.low();
        let mut pdm = vec![0.0; n];
        let mut ndm = vec![0.0; n];
        for i in 1..n {
            let move_high = high[i] - high[i - 1];
            let move_low = low[i - 1] - low[i];
            if move_high > 0.0 && move_high > move_low {
                pdm[i] = move_high;
            }
            if move_low > 0.0 && move_low > move_high {
                ndm[i] = move_low;
            }
        }

        let pdm_smooth = ema(&pdm, period);
        let ndm_smooth = ema(&ndm, period);
        let atr = self.source(&atr_name)?;
        let mut pdi = Vec::with_capacity(n);
        let mut ndi = Vec::with_capacity(n);
        let mut dx = Vec::with_capacity(n);
        for i in 0..n {
            let (plus, minus) = if atr[i] == 0.0 {
                (0.0, 0.0)
            } else {
                (
                    100.0 * pdm_smooth[i] / atr[i],
                    100.0 * ndm_smooth[i] / atr[i],
                )
            };
            let sum = plus + minus;
            if i == 0 || sum == 0.0 {
                dx.push(0.0);
            } else {
                dx.push(100.0 * (plus - minus).abs() / sum);
            }
            pdi.push(plus);
            ndi.push(minus);
        }
        let adx = ema(&dx, period);

        self.store(pdi_column(period), pdi);
        self.store(ndi_column(period), ndi);
        self.store(adx_column(period), adx);
        Ok(())
    }

    /// Supertrend line over `period` with band multiplier `factor`,
    /// stored as `supertrend_<period>`.
    ///
    /// Computes `atr_<period>` first when it is not already present. The
    /// band midpoint is `(high + low) / factor` rather than the classical
    /// half of the range, and the bands sit `factor * atr` either side of
    /// it. Each band ratchets: it only
    /// moves toward the price unless the prior close already broke
    /// through it. The emitted value tracks one band at a time, switching
    /// to the lower band once the close rises above the upper band and
    /// back to the upper band once the close falls below the lower band.
    /// Conventional parameters are a factor of 2.0 and a period of 14.
    ///
    /// # Arguments
    ///
    /// * `factor` - Band offset multiplier (and midpoint divisor)
    /// * `period` - The ATR look-back window length
    pub fn set_supertrend(&mut self, factor: f64, period: usize) -> Result<()> {
        check_period(period)?;
        let atr_name = atr_column(period);
        if !self.has_column(&atr_name) {
            self.set_atr(period)?;
        }

        let n = self.len();
        let atr = self.source(&atr_name)?;
        let high = self.high();
        let low = self.low();
        let close = self.close();

        let mut final_upper = Vec::with_capacity(n);
        let mut final_lower = Vec::with_capacity(n);
        for i in 0..n {
            let midpoint = (high[i] + low[i]) / factor;
            let basic_upper = midpoint + factor * atr[i];
            let basic_lower = midpoint - factor * atr[i];
            if i == 0 {
                final_upper.push(basic_upper);
                final_lower.push(basic_lower);
                continue;
            }
            let prev_upper = final_upper[i - 1];
            let prev_lower = final_lower[i - 1];
            let prev_close = close[i - 1];
            final_upper.push(if basic_upper < prev_upper || prev_close > prev_upper {
                basic_upper
            } else {
                prev_upper
            });
            final_lower.push(if basic_lower > prev_lower || prev_close < prev_lower {
                basic_lower
            } else {
                prev_lower
            });
        }

        let mut tracking_upper = close[0] < final_upper[0];
        let mut line = Vec::with_capacity(n);
        for i in 0..n {
            if tracking_upper {
                if close[i] > final_upper[i] {
                    tracking_upper = false;
                }
            } else if close[i] < final_lower[i] {
                tracking_upper = true;
            }
            line.push(if tracking_upper {
                final_upper[i]
            } else {
                final_lower[i]
            });
        }

        self.store(supertrend_column(period), line);
        Ok(())
    }
}
