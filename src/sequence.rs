use crate::trade::Trade;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Sort key for one trade.  Readable timestamps order by instant; anything
/// that fails to parse sorts after every readable timestamp, by raw text.
/// Text comparison is how the upstream export was ordered historically, so
/// confining it to the unreadable records keeps them deterministic without
/// trusting it for the rest.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub enum TimeKey {
    Instant(NaiveDateTime),
    Unreadable(String),
}

// formats the trade-history exports actually emit; %.f also accepts the
// variant without fractional seconds
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl TimeKey {
    pub fn parse(raw: &str) -> TimeKey {
        let trimmed = raw.trim();
        for format in TIMESTAMP_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return TimeKey::Instant(dt);
            }
        }
        // date-only exports carry no time column; midnight keeps them ordered
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return TimeKey::Instant(d.and_time(NaiveTime::MIN));
        }
        TimeKey::Unreadable(raw.to_owned())
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, TimeKey::Unreadable(_))
    }
}

/// Processing order for a set of trades, oldest first.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChronologicalOrder {
    /// permutation of input positions
    pub order: Vec<usize>,
    /// timestamps that failed to parse and were ordered by raw text instead
    pub unreadable: usize,
}

/// Order trade positions oldest to newest by timestamp.  The sort is stable,
/// so equal timestamps keep their original relative order.  Empty input
/// yields an empty ordering.
pub fn chronological_order(trades: &[Trade]) -> ChronologicalOrder {
    let keys: Vec<TimeKey> = trades.iter().map(|t| TimeKey::parse(&t.date)).collect();
    let unreadable = keys.iter().filter(|k| k.is_unreadable()).count();
    let mut order: Vec<usize> = (0..trades.len()).collect();
    order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
    ChronologicalOrder { order, unreadable }
}
