use std::collections::{HashMap, VecDeque};

use crate::catalog::Catalog;
use crate::errors::{ErrorKind, SimulatorError};
use crate::order::Order;
use crate::warehouse::Warehouse;

/// Owns the wait queue (FIFO by arrival) and the ready queue
/// (arrival-ascending), and the two operations that move orders between
/// them: `submit` and `promote_waiting` (the promotion pass).
#[derive(Debug, Default)]
pub struct Scheduler {
    wait_queue: VecDeque<Order>,
    ready_queue: VecDeque<Order>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler::default()
    }

    pub fn ready_queue(&self) -> &VecDeque<Order> {
        &self.ready_queue
    }

    /// `true` if any order in either queue references `recipe_name` — used to
    /// refuse removing a recipe that an order still depends on.
    pub fn references_recipe(&self, recipe_name: &str) -> bool {
        self.wait_queue.iter().chain(self.ready_queue.iter())
            .any(|order| order.recipe_name == recipe_name)
    }

    /// Inserts `order` into the ready queue at the position preserving
    /// ascending `arrival_tick`. Arrivals are monotonic in the command loop
    /// so this is almost always a tail push, but the promotion pass can
    /// promote an older waiting order after newer ones are already ready.
    fn insert_ready(&mut self, order: Order) {
        let pos = self
            .ready_queue
            .iter()
            .position(|existing| existing.arrival_tick > order.arrival_tick)
            .unwrap_or(self.ready_queue.len());
        self.ready_queue.insert(pos, order);
    }

    /// Handles `ordine recipe qty`. The caller has already confirmed `recipe`
    /// exists in `catalog` and printed `rifiutato` otherwise; this method
    /// only runs once the recipe is known present, classifying the order as
    /// ready (stock reserved) or waiting.
    ///
    /// Returns a [`SimulatorError`] of kind [`ErrorKind::StructuralViolation`]
    /// if the recipe has no requirements — scheduling against an empty
    /// recipe is an input invariant violation, not a normal rejection.
    pub fn submit(
        &mut self,
        catalog: &Catalog,
        warehouse: &mut Warehouse,
        recipe_name: &str,
        quantity: i64,
        tick: i64,
    ) -> Result<(), SimulatorError> {
        let recipe = catalog
            .get(recipe_name)
            .expect("caller must confirm the recipe exists before calling submit");

        if recipe.requirements.is_empty() {
            return Err(SimulatorError::new_of_kind(
                format!("order placed against empty recipe '{}'", recipe_name),
                ErrorKind::StructuralViolation,
            ));
        }

        let order = Order::new(recipe_name, quantity, tick);
        if warehouse.try_consume(&recipe.requirements, quantity, tick) {
            self.insert_ready(order);
        } else {
            self.wait_queue.push_back(order);
        }
        Ok(())
    }

    /// The wait-queue promotion pass, invoked once at the end of every
    /// `rifornimento`. Walks the wait queue head to tail, attempting
    /// feasibility+deduction for each order against the warehouse as it
    /// stands *during* the pass — a promotion earlier in the pass reduces
    /// stock visible to a later one, which is intentional.
    ///
    /// Skip optimization: feasibility is monotone in order quantity with the
    /// warehouse held fixed, so once a `(recipe_name, quantity)` is found
    /// infeasible, any later wait-queue order for the same recipe with
    /// quantity `>=` that value is skipped without re-checking. This bound
    /// only holds within a single pass, since the warehouse only shrinks
    /// (promotions consume, nothing restocks mid-pass).
    pub fn promote_waiting(&mut self, catalog: &Catalog, warehouse: &mut Warehouse, tick: i64) {
        let mut known_infeasible: HashMap<String, i64> = HashMap::new();
        let pending = std::mem::take(&mut self.wait_queue);

        for order in pending {
            if let Some(&min_infeasible) = known_infeasible.get(&order.recipe_name) {
                if order.quantity >= min_infeasible {
                    self.wait_queue.push_back(order);
                    continue;
                }
            }

            let recipe = catalog
                .get(&order.recipe_name)
                .expect("waiting order references a recipe that was removed");

            if warehouse.try_consume(&recipe.requirements, order.quantity, tick) {
                self.insert_ready(order);
            } else {
                known_infeasible
                    .entry(order.recipe_name.clone())
                    .and_modify(|min| *min = (*min).min(order.quantity))
                    .or_insert(order.quantity);
                self.wait_queue.push_back(order);
            }
        }
    }

    /// Removes exactly the orders at `indices` (already sorted ascending)
    /// from the ready queue — used by courier dispatch after it has chosen
    /// the selected set.
    pub fn drain_ready(&mut self, indices: &[usize]) -> Vec<Order> {
        let mut removed = Vec::with_capacity(indices.len());
        for (offset, &idx) in indices.iter().enumerate() {
            removed.push(self.ready_queue.remove(idx - offset).expect("index out of bounds"));
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Recipe, Requirement};

    fn catalog_with_torta() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Recipe::new(
            "torta",
            vec![Requirement {
                ingredient: "farina".to_string(),
                qty_per_unit: 10,
            }],
        ));
        catalog
    }

    #[test]
    fn test1_submit_with_sufficient_stock_goes_ready() {
        let catalog = catalog_with_torta();
        let mut warehouse = Warehouse::new();
        warehouse.receive("farina", 100, 50, 0);
        let mut scheduler = Scheduler::new();
        scheduler.submit(&catalog, &mut warehouse, "torta", 1, 0).unwrap();
        assert_eq!(scheduler.ready_queue().len(), 1);
    }

    #[test]
    fn test2_submit_without_stock_goes_waiting() {
        let catalog = catalog_with_torta();
        let mut warehouse = Warehouse::new();
        let mut scheduler = Scheduler::new();
        scheduler.submit(&catalog, &mut warehouse, "torta", 1, 0).unwrap();
        assert!(scheduler.ready_queue().is_empty());
        assert!(scheduler.references_recipe("torta"));
    }

    #[test]
    fn test3_submit_against_empty_recipe_is_structural_violation() {
        let mut catalog = Catalog::new();
        catalog.add(Recipe::new("vuota", vec![]));
        let mut warehouse = Warehouse::new();
        let mut scheduler = Scheduler::new();
        let err = scheduler
            .submit(&catalog, &mut warehouse, "vuota", 1, 0)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StructuralViolation);
    }

    #[test]
    fn test4_promotion_restores_arrival_order_position() {
        let catalog = catalog_with_torta();
        let mut warehouse = Warehouse::new();
        let mut scheduler = Scheduler::new();
        scheduler.submit(&catalog, &mut warehouse, "torta", 1, 2).unwrap();
        assert!(scheduler.ready_queue().is_empty());

        warehouse.receive("farina", 1000, 100, 4);
        scheduler.promote_waiting(&catalog, &mut warehouse, 4);

        assert_eq!(scheduler.ready_queue().len(), 1);
        assert_eq!(scheduler.ready_queue()[0].arrival_tick, 2);
    }

    #[test]
    fn test5_promotion_skip_optimization_preserves_order_among_waiters() {
        let catalog = catalog_with_torta();
        let mut warehouse = Warehouse::new();
        warehouse.receive("farina", 15, 100, 0);
        let mut scheduler = Scheduler::new();
        scheduler.submit(&catalog, &mut warehouse, "torta", 1, 0).unwrap();

        let mut empty_warehouse = Warehouse::new();
        let mut scheduler2 = Scheduler::new();
        scheduler2.submit(&catalog, &mut empty_warehouse, "torta", 5, 0).unwrap();
        scheduler2.submit(&catalog, &mut empty_warehouse, "torta", 10, 1).unwrap();
        scheduler2.promote_waiting(&catalog, &mut empty_warehouse, 1);
        assert_eq!(scheduler2.ready_queue().len(), 0);
    }

    #[test]
    fn test6_references_recipe_is_false_once_order_leaves_queues() {
        let catalog = catalog_with_torta();
        let mut warehouse = Warehouse::new();
        warehouse.receive("farina", 100, 50, 0);
        let mut scheduler = Scheduler::new();
        scheduler.submit(&catalog, &mut warehouse, "torta", 1, 0).unwrap();
        assert!(scheduler.references_recipe("torta"));
        scheduler.drain_ready(&[0]);
        assert!(!scheduler.references_recipe("torta"));
    }
}
