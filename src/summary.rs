use crate::trade::{EnrichedTrade, Side};
use std::collections::HashMap;
use std::fmt;

/// Realized gain/loss for one pair, summed over its sell records.
#[derive(Debug, PartialEq, Clone)]
pub struct PairSummary {
    pub pair: String,
    /// sell records that carried a gain/loss
    pub sells: usize,
    pub gain_loss: f64,
}

impl fmt::Display for PairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pair: {} sells:{}, gain_loss:{:+.2}",
            self.pair, self.sells, self.gain_loss
        )
    }
}

/// Group realized gain/loss by pair.  Only sell records with a gain/loss
/// present contribute; buys and unenriched records are ignored.  Pairs come
/// back sorted by name, and a pair with no qualifying sells is absent.
pub fn summarize_by_pair(trades: &[EnrichedTrade]) -> Vec<PairSummary> {
    let mut by_pair: HashMap<&str, PairSummary> = HashMap::new();
    for t in trades {
        if !matches!(t.trade.side.parse::<Side>(), Ok(Side::Sell)) {
            continue;
        }
        let gain = match t.gain_loss {
            Some(g) => g,
            None => continue,
        };
        let row = by_pair
            .entry(t.trade.pair.as_str())
            .or_insert_with(|| PairSummary {
                pair: t.trade.pair.clone(),
                sells: 0,
                gain_loss: 0.0,
            });
        row.sells += 1;
        row.gain_loss += gain;
    }
    let mut rows: Vec<PairSummary> = by_pair.into_values().collect();
    rows.sort_by(|a, b| a.pair.cmp(&b.pair));
    rows
}

/// Total gains, total losses, and net over a set of pair summaries.  Gains
/// and losses are split the way a tax report wants them: a pair contributes
/// its whole gain/loss to one bucket or the other.
pub fn net_realized(summaries: &[PairSummary]) -> (f64, f64, f64) {
    let gains: f64 = summaries.iter().map(|s| s.gain_loss.max(0.0)).sum();
    let losses: f64 = summaries.iter().map(|s| s.gain_loss.min(0.0)).sum();
    (gains, losses, gains + losses)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::engine::compute_fifo;
    use crate::trade::Trade;

    fn set_trades() -> Vec<EnrichedTrade> {
        let trades = [
            Trade::from("2024-01-01 10:00:00,BTCUSDT,BUY,100.0,2.0,200.0,0.0"),
            Trade::from("2024-01-02 10:00:00,BTCUSDT,SELL,150.0,1.0,150.0,0.0"),
            Trade::from("2024-01-03 10:00:00,BTCUSDT,SELL,120.0,1.0,120.0,0.0"),
            Trade::from("2024-01-01 11:00:00,ETHUSDT,BUY,50.0,2.0,100.0,0.0"),
            Trade::from("2024-01-04 10:00:00,ETHUSDT,SELL,40.0,2.0,80.0,0.0"),
        ];
        compute_fifo(&trades).trades
    }

    #[test]
    fn groups_sell_gains_by_pair_sorted_by_name() {
        let summaries = summarize_by_pair(&set_trades());
        assert_eq!(
            summaries,
            vec![
                PairSummary {
                    pair: String::from("BTCUSDT"),
                    sells: 2,
                    gain_loss: 70.0,
                },
                PairSummary {
                    pair: String::from("ETHUSDT"),
                    sells: 1,
                    gain_loss: -20.0,
                },
            ]
        );
    }

    #[test]
    fn buys_and_unenriched_records_do_not_contribute() {
        let trades = [
            Trade::from("2024-01-01 10:00:00,BTCUSDT,BUY,100.0,1.0,100.0,0.0"),
            Trade::from("2024-01-02 10:00:00,BTCUSDT,SELL,abc,1.0,150.0,0.0"),
        ];
        let enriched = compute_fifo(&trades).trades;
        assert!(summarize_by_pair(&enriched).is_empty());
    }

    #[test]
    fn net_realized_splits_gains_and_losses() {
        let summaries = summarize_by_pair(&set_trades());
        let (gains, losses, net) = net_realized(&summaries);
        assert_eq!(gains, 70.0);
        assert_eq!(losses, -20.0);
        assert_eq!(net, 50.0);
    }

    #[test]
    fn empty_input_yields_no_summaries() {
        assert!(summarize_by_pair(&[]).is_empty());
        assert_eq!(net_realized(&[]), (0.0, 0.0, 0.0));
    }
}
