//! The OHLCV table and the derived-column naming contract.
//!
//! A [`PriceFrame`] owns five base series fixed at construction and a map
//! of derived series appended by the indicator operations. All series
//! share one length; index `i` in every series refers to the same bar.

use crate::{FrameError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Base series names, present in every frame in this order
pub const BASE_COLUMNS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Column name of the bar midpoint stored by [`PriceFrame::set_middle`]
pub const MIDDLE_COLUMN: &str = "middle";

/// Column name of the MACD line stored by [`PriceFrame::set_macd`]
pub const MACD_COLUMN: &str = "macd";

/// Column name of the MACD signal line
pub const MACD_SIGNAL_COLUMN: &str = "macds";

/// Column name of the MACD histogram
pub const MACD_HISTOGRAM_COLUMN: &str = "macdh";

/// Column name of a simple moving average, e.g. `ma_close_14`
pub fn ma_column(source: &str, period: usize) -> String {
    format!("ma_{}_{}", source, period)
}

/// Column name of a volume-weighted moving average, e.g. `vwma_close_14`
pub fn vwma_column(source: &str, period: usize) -> String {
    format!("vwma_{}_{}", source, period)
}

/// Column name of an exponential moving average, e.g. `ema_close_10`
pub fn ema_column(source: &str, period: usize) -> String {
    format!("ema_{}_{}", source, period)
}

/// Column name of the true range series, e.g. `tr_14`
pub fn tr_column(period: usize) -> String {
    format!("tr_{}", period)
}

/// Column name of the average true range, e.g. `atr_14`
pub fn atr_column(period: usize) -> String {
    format!("atr_{}", period)
}

/// Column name of the ATR-to-close ratio, e.g. `%atr_14`
pub fn atr_percent_column(period: usize) -> String {
    format!("%atr_{}", period)
}

/// Column name of the Average Directional Index, e.g. `adx_14`
pub fn adx_column(period: usize) -> String {
    format!("adx_{}", period)
}

/// Column name of the positive directional indicator, e.g. `pdi_14`
pub fn pdi_column(period: usize) -> String {
    format!("pdi_{}", period)
}

/// Column name of the negative directional indicator, e.g. `ndi_14`
pub fn ndi_column(period: usize) -> String {
    format!("ndi_{}", period)
}

/// Column name of the Money Flow Index, e.g. `mfi_14`
pub fn mfi_column(period: usize) -> String {
    format!("mfi_{}", period)
}

/// Column name of the Relative Vigor Index, e.g. `rvgi_10`
pub fn rvgi_column(period: usize) -> String {
    format!("rvgi_{}", period)
}

/// Column name of the Relative Vigor Index signal line, e.g. `rvgis_10`
pub fn rvgi_signal_column(period: usize) -> String {
    format!("rvgis_{}", period)
}

/// Column name of the Supertrend line, e.g. `supertrend_14`
pub fn supertrend_column(period: usize) -> String {
    format!("supertrend_{}", period)
}

/// Validate a look-back period parameter
pub(crate) fn check_period(period: usize) -> Result<()> {
    if period == 0 {
        return Err(FrameError::ParameterError(
            "period must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// A table of named OHLCV and indicator series sharing one length.
///
/// The five base series never change after construction. Indicator
/// operations append derived series under names built by the
/// `<kind>_<source>_<period>` contract; calling the same operation with
/// the same parameters again overwrites the column with identical values.
#[derive(Debug, Clone, Serialize)]
pub struct PriceFrame {
    /// Open prices
    open: Vec<f64>,
    /// High prices
    high: Vec<f64>,
    /// Low prices
    low: Vec<f64>,
    /// Close prices
    close: Vec<f64>,
    /// Traded volumes
    volume: Vec<f64>,
    /// Derived indicator series keyed by column name
    derived: HashMap<String, Vec<f64>>,
    /// Derived column names in insertion order
    #[serde(skip)]
    order: Vec<String>,
}

impl PriceFrame {
    /// Create a frame from five equal-length series.
    ///
    /// # Arguments
    ///
    /// * `open` - Open price per bar
    /// * `high` - High price per bar
    /// * `low` - Low price per bar
    /// * `close` - Close price per bar
    /// * `volume` - Traded volume per bar
    ///
    /// # Returns
    ///
    /// The frame, or [`FrameError::InvalidData`] when the series are empty
    /// or their lengths differ.
    ///
    /// # Example
    ///
    /// ```
    /// use price_frame::PriceFrame;
    ///
    /// let frame = PriceFrame::new(
    ///     vec![10.0, 11.0],
    ///     vec![12.0, 13.0],
    ///     vec![9.0, 10.0],
    ///     vec![11.0, 12.0],
    ///     vec![100.0, 150.0],
    /// )
    /// .unwrap();
    /// assert_eq!(frame.len(), 2);
    /// ```
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self> {
        if open.is_empty() {
            return Err(FrameError::InvalidData(
                "input series must contain at least one bar".to_string(),
            ));
        }
        let n = open.len();
        if high.len() != n || low.len() != n || close.len() != n || volume.len() != n {
            return Err(FrameError::InvalidData(format!(
                "input series must have equal lengths: open {}, high {}, low {}, close {}, volume {}",
                open.len(),
                high.len(),
                low.len(),
                close.len(),
                volume.len()
            )));
        }
        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
            derived: HashMap::new(),
            order: Vec::new(),
        })
    }

    /// Number of bars in the frame
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Whether the frame has no bars (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Open prices
    pub fn open(&self) -> &[f64] {
        &self.open
    }

    /// High prices
    pub fn high(&self) -> &[f64] {
        &self.high
    }

    /// Low prices
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    /// Close prices
    pub fn close(&self) -> &[f64] {
        &self.close
    }

    /// Traded volumes
    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    /// Look up a series by name, resolving base and derived columns alike.
    ///
    /// # Example
    ///
    /// ```
    /// use price_frame::PriceFrame;
    ///
    /// let frame = PriceFrame::new(
    ///     vec![1.0],
    ///     vec![2.0],
    ///     vec![0.5],
    ///     vec![1.5],
    ///     vec![10.0],
    /// )
    /// .unwrap();
    /// assert_eq!(frame.column("close"), Some(&[1.5][..]));
    /// assert_eq!(frame.column("ma_close_14"), None);
    /// ```
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        match name {
            "open" => Some(self.open.as_slice()),
            "high" => Some(self.high.as_slice()),
            "low" => Some(self.low.as_slice()),
            "close" => Some(self.close.as_slice()),
            "volume" => Some(self.volume.as_slice()),
            _ => self.derived.get(name).map(Vec::as_slice),
        }
    }

    /// Whether a column with the given name exists
    pub fn has_column(&self, name: &str) -> bool {
        BASE_COLUMNS.contains(&name) || self.derived.contains_key(name)
    }

    /// All column names, base series first, then derived series in the
    /// order they were added
    pub fn column_names(&self) -> Vec<&str> {
        BASE_COLUMNS
            .iter()
            .copied()
            .chain(self.order.iter().map(String::as_str))
            .collect()
    }

    /// Attach an externally computed series as a derived column.
    ///
    /// Re-inserting an existing derived name overwrites its values; the
    /// base series cannot be replaced.
    ///
    /// # Arguments
    ///
    /// * `name` - Column name to store the series under
    /// * `values` - The series, which must match the frame length
    pub fn insert_series(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if BASE_COLUMNS.contains(&name) {
            return Err(FrameError::InvalidData(format!(
                "column {} is a base series and cannot be replaced",
                name
            )));
        }
        if values.len() != self.len() {
            return Err(FrameError::InvalidData(format!(
                "series {} has length {}, expected {}",
                name,
                values.len(),
                self.len()
            )));
        }
        self.store(name.to_string(), values);
        Ok(())
    }

    /// Store a computed series, keeping `order` in sync. Callers guarantee
    /// the length matches the frame.
    pub(crate) fn store(&mut self, name: String, values: Vec<f64>) {
        if !self.derived.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.derived.insert(name, values);
    }

    /// Resolve a source column or report it as unknown
    pub(crate) fn source(&self, name: &str) -> Result<&[f64]> {
        self.column(name)
            .ok_or_else(|| FrameError::UnknownColumn(name.to_string()))
    }
}
