//! # Price Frame
//!
//! `price_frame` is a Rust library for computing technical indicators over
//! OHLCV (Open, High, Low, Close, Volume) price data.
//!
//! The core type is [`PriceFrame`], a table of equal-length `f64` series.
//! The five base series are supplied once at construction; every indicator
//! operation appends derived columns computed from the table's current
//! contents. Indicators are organized by family:
//!
//! - **Moving averages**: simple, volume-weighted and exponential averages,
//!   plus the bar midpoint
//! - **Volatility**: true range, average true range and ATR percentage
//! - **Oscillators**: MACD and the Relative Vigor Index
//! - **Trend**: the Average Directional Index and Supertrend
//! - **Volume**: the Money Flow Index
//!
//! Derived columns are addressed by synthesized names following the
//! `<kind>_<source>_<period>` contract (for example `ma_close_14`), so a
//! consumer only needs the parameters, not the compute history. Indicators
//! that build on the ATR compute it on demand when the matching ATR column
//! is missing.
//!
//! Window-based indicators share one warm-up policy: while fewer than
//! `period` rows of history exist, the window shrinks to the rows seen so
//! far, so every output row holds a finite value from index 0 onward.
//!
//! ## Usage Example
//!
//! ```
//! use price_frame::PriceFrame;
//!
//! let mut frame = PriceFrame::new(
//!     vec![10.0, 11.0, 12.0],
//!     vec![12.0, 13.0, 14.0],
//!     vec![9.0, 10.0, 11.0],
//!     vec![11.0, 12.0, 13.0],
//!     vec![100.0, 100.0, 100.0],
//! )
//! .unwrap();
//!
//! frame.set_middle().unwrap();
//! frame.set_ma("close", 2).unwrap();
//!
//! assert_eq!(frame.column("middle").unwrap(), &[10.5, 11.5, 12.5]);
//! assert_eq!(frame.column("ma_close_2").unwrap(), &[11.0, 11.5, 12.5]);
//! ```

use thiserror::Error;

// Indicator modules
pub mod frame;
pub mod moving_averages;
pub mod oscillators;
pub mod trend;
pub mod utils;
pub mod volatility;
pub mod volume;

// Re-export the core types and helpers for convenient access
pub use frame::{
    adx_column, atr_column, atr_percent_column, ema_column, ma_column, mfi_column, ndi_column,
    pdi_column, rvgi_column, rvgi_signal_column, supertrend_column, tr_column, vwma_column,
    PriceFrame, BASE_COLUMNS, MACD_COLUMN, MACD_HISTOGRAM_COLUMN, MACD_SIGNAL_COLUMN,
    MIDDLE_COLUMN,
};
pub use moving_averages::{ema, rolling_mean, swma};
pub use utils::generate_frame;
pub use volatility::true_range;

/// Errors that can occur when building frames or computing indicators
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Parameter validation error: {0}")]
    ParameterError(String),
}

/// Result type for frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
