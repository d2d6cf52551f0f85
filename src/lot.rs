use crate::QUANTITY_EPSILON;
use std::fmt;

/// An open acquisition: remaining quantity at a fixed unit cost.  Created by
/// a buy, consumed wholly or partly by later sells of the same pair.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Lot {
    pub quantity: f64,
    pub unit_cost: f64,
}

/// What a sell matched against a queue: the cost accumulated over the
/// consumed lots and any quantity the queue could not cover.
#[derive(Debug, PartialEq)]
pub struct Matched {
    pub cost: f64,
    pub unfilled: f64,
}

/// FIFO queue of open lots for one pair, oldest first.
///
/// Backed by a `Vec` with a logical head index; consuming the front lot
/// advances the head instead of shifting the remaining elements forward.
#[derive(Debug, Default)]
pub struct LotQueue {
    lots: Vec<Lot>,
    head: usize,
}

impl LotQueue {
    pub fn push(&mut self, lot: Lot) {
        self.lots.push(lot);
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.lots.len()
    }

    /// open lots in acquisition order, oldest first
    pub fn open(&self) -> &[Lot] {
        &self.lots[self.head..]
    }

    pub fn open_quantity(&self) -> f64 {
        self.open().iter().map(|l| l.quantity).sum()
    }

    /// Consume up to `quantity`, oldest lots first.  A lot whose remainder
    /// falls to or below the tolerance is dropped from the front.  Quantity
    /// the queue cannot cover comes back as `unfilled` and costs nothing.
    pub fn consume(&mut self, quantity: f64) -> Matched {
        let mut remaining = quantity;
        let mut cost = 0.0;
        while remaining > QUANTITY_EPSILON && !self.is_empty() {
            let lot = &mut self.lots[self.head];
            let used = lot.quantity.min(remaining);
            cost += used * lot.unit_cost;
            lot.quantity -= used;
            remaining -= used;
            if lot.quantity <= QUANTITY_EPSILON {
                self.head += 1;
            }
        }
        Matched {
            cost,
            unfilled: remaining,
        }
    }
}

impl fmt::Display for LotQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LotQueue; open_lots:{}, open_quantity:{:.8}",
            self.open().len(),
            self.open_quantity()
        )
    }
}
