use crate::lot::{Lot, LotQueue};
use crate::sequence::chronological_order;
use crate::trade::{EnrichedTrade, Side, Trade};
use crate::QUANTITY_EPSILON;
use std::collections::HashMap;
use std::fmt;

/// Counts of degraded outcomes from one matching pass.  None of these abort
/// the pass; they exist so a caller can surface data-quality issues instead
/// of getting an invisible no-op.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct MatchReport {
    /// records left unenriched: a numeric column failed to parse or the
    /// side was neither buy nor sell
    pub skipped: usize,
    /// sells whose quantity outran the pair's open lots; the unmatched
    /// remainder was absorbed at zero cost
    pub oversold: usize,
    /// timestamps that failed to parse and were ordered by raw text
    pub unreadable_timestamps: usize,
}

impl MatchReport {
    pub fn is_clean(&self) -> bool {
        *self == MatchReport::default()
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MatchReport; skipped:{}, oversold:{}, unreadable_timestamps:{}",
            self.skipped, self.oversold, self.unreadable_timestamps
        )
    }
}

/// Enriched trades in their original input order, plus the report.
#[derive(Debug, PartialEq)]
pub struct FifoOutcome {
    pub trades: Vec<EnrichedTrade>,
    pub report: MatchReport,
}

/// Match every sell against the oldest open buy lots of its pair and fill
/// in realized cost basis, proceeds, and gain/loss.
///
/// Trades are processed oldest-first by timestamp no matter how the input
/// is ordered; the returned sequence keeps the input order and length.  A
/// buy gets its notional amount as cost basis and realizes nothing.  A sell
/// that outruns the pair's open lots absorbs the unmatched remainder at
/// zero cost and is counted in the report.
///
/// Lot queues live only for the duration of one call; two calls over the
/// same input produce identical output.
pub fn compute_fifo(trades: &[Trade]) -> FifoOutcome {
    let mut enriched: Vec<EnrichedTrade> = trades.iter().map(EnrichedTrade::from).collect();
    let sequenced = chronological_order(trades);
    let mut report = MatchReport {
        unreadable_timestamps: sequenced.unreadable,
        ..MatchReport::default()
    };

    let mut lots: HashMap<String, LotQueue> = HashMap::new();

    for i in sequenced.order {
        let t = &mut enriched[i];
        let (price, executed, amount) = match parse_columns(&t.trade) {
            Some(columns) => columns,
            None => {
                report.skipped += 1;
                continue;
            }
        };
        let queue = lots.entry(t.trade.pair.clone()).or_default();
        match t.trade.side.parse::<Side>() {
            Ok(Side::Buy) => {
                queue.push(Lot {
                    quantity: executed,
                    unit_cost: price,
                });
                t.cost_basis = Some(amount);
            }
            Ok(Side::Sell) => {
                let matched = queue.consume(executed);
                if matched.unfilled > QUANTITY_EPSILON {
                    report.oversold += 1;
                }
                t.proceeds = Some(amount);
                t.cost_basis = Some(matched.cost);
                t.gain_loss = Some(amount - matched.cost);
            }
            Err(_) => report.skipped += 1,
        }
    }

    FifoOutcome {
        trades: enriched,
        report,
    }
}

// price, executed quantity, notional amount; all three or none.
// str::parse accepts "NaN" and "inf", which the derived fields must never
// carry and which a lot quantity could never exhaust, so only finite values
// pass the gate.
fn parse_columns(t: &Trade) -> Option<(f64, f64, f64)> {
    let price = parse_finite(&t.price)?;
    let executed = parse_finite(&t.executed)?;
    let amount = parse_finite(&t.amount)?;
    Some((price, executed, amount))
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse().ok().filter(|v: &f64| v.is_finite())
}
