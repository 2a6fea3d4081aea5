use crate::catalog::Catalog;
use crate::scheduler::Scheduler;

/// Printed when a dispatch fires but no ready order fits the truck.
pub const EMPTY_SHIPMENT: &str = "camioncino vuoto";

/// Capacity-bounded courier dispatch selector. Stateless beyond the
/// truck's fixed `capacity`; all mutable state it touches lives in the
/// [`Scheduler`] it is given.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    capacity: i64,
    periodicity: i64,
}

impl Dispatcher {
    pub fn new(periodicity: i64, capacity: i64) -> Self {
        Dispatcher { capacity, periodicity }
    }

    /// `true` at ticks where `t > 0 && t % periodicity == 0`. Tick 0 is
    /// explicitly excluded even though `0 % periodicity == 0`.
    pub fn should_dispatch(&self, tick: i64) -> bool {
        tick > 0 && tick % self.periodicity == 0
    }

    /// Runs one dispatch: selects the capacity-fitting prefix of the ready
    /// queue, reorders it into shipment order, removes the selected orders
    /// from `scheduler`, and returns the lines to print (in order). An empty
    /// selection returns a single [`EMPTY_SHIPMENT`] line.
    pub fn dispatch(&self, scheduler: &mut Scheduler, catalog: &Catalog) -> Vec<String> {
        let ready = scheduler.ready_queue();
        let weights: Vec<i64> = ready.iter().map(|order| order.weight(catalog)).collect();

        let mut selected_indices = Vec::new();
        let mut running_weight = 0i64;
        for (idx, &weight) in weights.iter().enumerate() {
            if running_weight + weight > self.capacity {
                break;
            }
            running_weight += weight;
            selected_indices.push(idx);
        }

        if selected_indices.is_empty() {
            return vec![EMPTY_SHIPMENT.to_string()];
        }

        let mut lines_input: Vec<(i64, String, i64, i64)> = selected_indices
            .iter()
            .map(|&idx| {
                let order = &ready[idx];
                (weights[idx], order.recipe_name.clone(), order.quantity, order.arrival_tick)
            })
            .collect();

        // Primary key weight descending, secondary key arrival_tick ascending.
        lines_input.sort_by(|a, b| b.0.cmp(&a.0).then(a.3.cmp(&b.3)));

        let lines = lines_input
            .iter()
            .map(|(_, name, qty, arrival)| format!("{} {} {}", arrival, name, qty))
            .collect();

        scheduler.drain_ready(&selected_indices);
        lines
    }
}
