//! FifoGains takes a trade history and computes, for every record, the
//! realized cost basis, proceeds, and gain/loss using First-In-First-Out
//! lot matching.  Buys open lots; sells consume the oldest open lots of the
//! same pair first.
//!
//! - `Trade` - one row of trade history as the upstream parser produced it
//! - `EnrichedTrade` - a trade plus the three derived fields, `None` where
//!     not applicable (a buy realizes nothing)
//! - `compute_fifo` - the matching pass; returns enriched trades in the
//!     original input order plus a `MatchReport` of degraded outcomes
//! - `summarize_by_pair` - gain/loss totals per pair over the sell records
//!
//! Trades are processed oldest-first by timestamp no matter how the input is
//! ordered.  Matching is FIFO only; LIFO and average-cost are not supported.
//!
//! Example
//! ```
//! use fifogains::engine::compute_fifo;
//! use fifogains::trade::Trade;
//!
//! let trades = [
//!     Trade::from("2024-01-05 09:30:00,BTCUSDT,BUY,100.0,1.0,100.0,0.1"),
//!     Trade::from("2024-02-01 14:00:00,BTCUSDT,BUY,200.0,1.0,200.0,0.1"),
//!     Trade::from("2024-03-10 10:15:00,BTCUSDT,SELL,300.0,1.5,450.0,0.2"),
//! ];
//!
//! let outcome = compute_fifo(&trades);
//!
//! // the sell consumes the whole first lot and half the second
//! let sell = &outcome.trades[2];
//! assert_eq!(sell.cost_basis, Some(200.0));
//! assert_eq!(sell.proceeds, Some(450.0));
//! assert_eq!(sell.gain_loss, Some(250.0));
//! assert!(outcome.report.is_clean());
//! ```
//!
//! Look also in the demos directory.

const QUANTITY_EPSILON: f64 = 0.0000000001;

/// the matching pass over a trade history
pub mod engine;
/// open acquisition lots and the per-pair FIFO queue
pub mod lot;
/// chronological ordering of trades by timestamp
pub mod sequence;
/// gain/loss aggregation by pair
pub mod summary;
/// trade records, sides, and enriched output records
pub mod trade;
