use std::io::{BufRead, Write};

use log::debug;

use crate::alerts::StockAlerts;
use crate::catalog::{Catalog, Recipe};
use crate::dispatch::Dispatcher;
use crate::errors::SimulatorError;
use crate::parser::{self, Command};
use crate::scheduler::Scheduler;
use crate::warehouse::Warehouse;

/// Owns the three coupled data structures — catalog, warehouse, and order
/// queues — and drives the command loop that ties them together.
pub struct Shop {
    catalog: Catalog,
    warehouse: Warehouse,
    scheduler: Scheduler,
    dispatcher: Dispatcher,
    tick: i64,
}

impl Shop {
    fn new(dispatcher: Dispatcher) -> Self {
        Shop {
            catalog: Catalog::new(),
            warehouse: Warehouse::new(),
            scheduler: Scheduler::new(),
            dispatcher,
            tick: 0,
        }
    }

    fn maybe_dispatch(&mut self, out: &mut impl Write) -> Result<(), SimulatorError> {
        if self.dispatcher.should_dispatch(self.tick) {
            for line in self.dispatcher.dispatch(&mut self.scheduler, &self.catalog) {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: Command, out: &mut impl Write) -> Result<(), SimulatorError> {
        match command {
            Command::AddRecipe { name, requirements } => {
                if self.catalog.contains(&name) {
                    writeln!(out, "ignorato")?;
                } else {
                    self.catalog.add(Recipe::new(name, requirements));
                    writeln!(out, "aggiunta")?;
                }
            }
            Command::RemoveRecipe { name } => {
                if !self.catalog.contains(&name) {
                    writeln!(out, "non presente")?;
                } else if self.scheduler.references_recipe(&name) {
                    writeln!(out, "ordini in sospeso")?;
                } else {
                    self.catalog.remove(&name);
                    writeln!(out, "rimossa")?;
                }
            }
            Command::Restock { deliveries } => {
                for (ingredient, qty, expiration) in deliveries {
                    self.warehouse.receive(&ingredient, qty, expiration, self.tick);
                }
                writeln!(out, "rifornito")?;
                self.scheduler
                    .promote_waiting(&self.catalog, &mut self.warehouse, self.tick);
                StockAlerts::report(&mut self.warehouse, self.tick);
            }
            Command::Order { recipe_name, quantity } => {
                if !self.catalog.contains(&recipe_name) {
                    writeln!(out, "rifiutato")?;
                } else {
                    writeln!(out, "accettato")?;
                    self.scheduler.submit(
                        &self.catalog,
                        &mut self.warehouse,
                        &recipe_name,
                        quantity,
                        self.tick,
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Runs the full simulation: reads the header line, then one command per
/// subsequent line, driving dispatch checks and command effects until EOF.
pub fn run(input: impl BufRead, mut out: impl Write) -> Result<(), SimulatorError> {
    let mut lines = input.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| SimulatorError::new("missing header line"))??;
    let header = parser::parse_header(&header_line)?;
    let mut shop = Shop::new(Dispatcher::new(header.periodicity, header.capacity));

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        shop.maybe_dispatch(&mut out)?;
        let command = parser::parse_line(&line)?;
        debug!("tick {}: {:?}", shop.tick, command);
        shop.apply(command, &mut out)?;
        shop.tick += 1;
    }

    shop.maybe_dispatch(&mut out)?;
    Ok(())
}
