use std::collections::HashMap;

use crate::catalog::Requirement;

/// A batch of one ingredient sharing a single expiration tick.
///
/// A lot is alive at tick `t` iff `expiration > t`; at `expiration == t` it is
/// dead and must be invisible to every operation below, even though it may
/// still physically sit in its ingredient's vector until the next traversal
/// purges it (lazy expiration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lot {
    pub quantity: i64,
    pub expiration: i64,
}

/// Per-ingredient collection of lots, kept sorted by ascending expiration so
/// that FEFO consumption is a straight left-to-right walk. Two lots sharing a
/// `(name, expiration)` are always coalesced into one entry; after
/// coalescing, expirations within a single ingredient's vector are unique, so
/// ascending-expiration order is the whole ordering contract (no further
/// tiebreak is observable).
#[derive(Debug, Default)]
pub struct Warehouse {
    lots: HashMap<String, Vec<Lot>>,
    /// Highest alive stock ever observed per ingredient, updated on every
    /// delivery. Used only to judge "running low" relative to how much of
    /// an ingredient the shop has ever held at once.
    peaks: HashMap<String, i64>,
}

impl Warehouse {
    pub fn new() -> Self {
        Warehouse::default()
    }

    /// Drops every lot of `ingredient` that is dead at `tick`. No-op if the
    /// ingredient has never been seen.
    fn purge_expired(&mut self, ingredient: &str, tick: i64) {
        if let Some(lots) = self.lots.get_mut(ingredient) {
            lots.retain(|lot| lot.expiration > tick);
        }
    }

    /// Current alive stock of `ingredient` at `tick`. Purges first so the sum
    /// never counts a dead lot.
    pub fn stock(&mut self, ingredient: &str, tick: i64) -> i64 {
        self.purge_expired(ingredient, tick);
        self.lots
            .get(ingredient)
            .map(|lots| lots.iter().map(|lot| lot.quantity).sum())
            .unwrap_or(0)
    }

    /// Applies one `(name, qty, expiration)` triple from a `rifornimento`
    /// line. Silently drops deliveries that are already expired on arrival;
    /// otherwise coalesces into a matching lot or inserts a new one,
    /// preserving ascending-expiration order.
    pub fn receive(&mut self, ingredient: &str, qty: i64, expiration: i64, tick: i64) {
        if expiration <= tick {
            return;
        }
        self.purge_expired(ingredient, tick);
        let lots = self.lots.entry(ingredient.to_string()).or_default();
        match lots.iter_mut().find(|lot| lot.expiration == expiration) {
            Some(lot) => lot.quantity += qty,
            None => {
                let pos = lots
                    .iter()
                    .position(|lot| lot.expiration > expiration)
                    .unwrap_or(lots.len());
                lots.insert(pos, Lot { quantity: qty, expiration });
            }
        }
        let current: i64 = lots.iter().map(|lot| lot.quantity).sum();
        self.peaks
            .entry(ingredient.to_string())
            .and_modify(|peak| *peak = (*peak).max(current))
            .or_insert(current);
    }

    /// Highest alive stock this ingredient has ever held at once. `0` if it
    /// has never been delivered.
    pub fn peak(&self, ingredient: &str) -> i64 {
        self.peaks.get(ingredient).copied().unwrap_or(0)
    }

    /// Returns the total alive stock still required by `requirements` at
    /// `quantity` units, without mutating anything — the feasibility half of
    /// the atomic check-then-deduct pair.
    fn is_feasible(&mut self, requirements: &[Requirement], quantity: i64, tick: i64) -> bool {
        requirements
            .iter()
            .all(|req| self.stock(&req.ingredient, tick) >= req.qty_per_unit * quantity)
    }

    /// Deducts `need` units of `ingredient` from its alive lots in ascending
    /// expiration order (FEFO), removing any lot that reaches zero. Assumes
    /// the caller already confirmed enough stock exists.
    fn deduct(&mut self, ingredient: &str, mut need: i64, tick: i64) {
        self.purge_expired(ingredient, tick);
        if let Some(lots) = self.lots.get_mut(ingredient) {
            let mut i = 0;
            while need > 0 && i < lots.len() {
                let taken = need.min(lots[i].quantity);
                lots[i].quantity -= taken;
                need -= taken;
                if lots[i].quantity == 0 {
                    lots.remove(i);
                } else {
                    i += 1;
                }
            }
        }
    }

    /// Feasibility and deduction as a single atomic step: either every
    /// requirement is satisfied and all of them are deducted, or nothing is
    /// touched and `false` is returned.
    pub fn try_consume(&mut self, requirements: &[Requirement], quantity: i64, tick: i64) -> bool {
        if !self.is_feasible(requirements, quantity, tick) {
            return false;
        }
        for req in requirements {
            self.deduct(&req.ingredient, req.qty_per_unit * quantity, tick);
        }
        true
    }

    /// Snapshot of every known ingredient's current alive stock alongside its
    /// historical peak, purging expired lots along the way. Used only by the
    /// low-stock reporter; the scheduling path never needs a full snapshot.
    pub fn stocks_with_peaks(&mut self, tick: i64) -> Vec<(String, i64, i64)> {
        let names: Vec<String> = self.lots.keys().cloned().collect();
        names
            .into_iter()
            .map(|name| {
                let qty = self.stock(&name, tick);
                let peak = self.peak(&name);
                (name, qty, peak)
            })
            .collect()
    }
}
