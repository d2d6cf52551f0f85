use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side of a trade.  The raw side column is compared case-insensitively;
/// anything that is not a buy or a sell fails to parse and the record stays
/// unenriched.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid trade side")]
pub struct ParseSideError(String);

impl FromStr for Side {
    type Err = ParseSideError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(ParseSideError(s.to_owned())),
        }
    }
}

/// Trade
/// date, pair, side, price, executed quantity, notional amount, fee
///
/// One row of trade history, kept exactly as the upstream parser produced
/// it.  The numeric columns stay as text until the engine needs them; `fee`
/// is carried through untouched and never interpreted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub date: String,
    pub pair: String,
    pub side: String,
    pub price: String,
    pub executed: String,
    pub amount: String,
    pub fee: String,
}

impl From<&str> for Trade {
    fn from(s: &str) -> Self {
        let field: Vec<&str> = s.split(',').collect();
        Trade {
            date: field[0].to_owned(),
            pair: field[1].to_owned(),
            side: field[2].to_owned(),
            price: field[3].to_owned(),
            executed: field[4].to_owned(),
            amount: field[5].to_owned(),
            fee: field[6].to_owned(),
        }
    }
}

/// A trade plus the three derived fields.  `None` means not applicable: a
/// buy has no proceeds or gain/loss, and a record that failed to parse has
/// none of the three.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct EnrichedTrade {
    #[serde(flatten)]
    pub trade: Trade,
    pub cost_basis: Option<f64>,
    pub proceeds: Option<f64>,
    pub gain_loss: Option<f64>,
}

impl From<&Trade> for EnrichedTrade {
    fn from(t: &Trade) -> Self {
        EnrichedTrade {
            trade: t.clone(),
            cost_basis: None,
            proceeds: None,
            gain_loss: None,
        }
    }
}

fn fmt_derived(n: Option<f64>) -> String {
    match n {
        Some(v) => format!("{:.2}", v),
        None => String::from("n/a"),
    }
}

impl fmt::Display for EnrichedTrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}@{}; cost_basis:{}, proceeds:{}, gain_loss:{}",
            self.trade.date,
            self.trade.pair,
            self.trade.side,
            self.trade.executed,
            self.trade.price,
            fmt_derived(self.cost_basis),
            fmt_derived(self.proceeds),
            fmt_derived(self.gain_loss),
        )
    }
}
