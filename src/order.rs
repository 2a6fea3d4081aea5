use crate::catalog::Catalog;

/// A pending or ready unit of work: `quantity` units of `recipe_name`,
/// stamped with the tick it arrived on. Weight is not stored — it is a
/// function of the catalog at lookup time, since the recipe is guaranteed
/// immutable for as long as an order can reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub recipe_name: String,
    pub quantity: i64,
    pub arrival_tick: i64,
}

impl Order {
    pub fn new(recipe_name: impl Into<String>, quantity: i64, arrival_tick: i64) -> Self {
        Order {
            recipe_name: recipe_name.into(),
            quantity,
            arrival_tick,
        }
    }

    /// Σ over the recipe's requirements of `qty_per_unit * quantity`. Panics
    /// if `catalog` no longer holds the recipe, which cannot happen while the
    /// order is live in a queue (recipe removal is refused while referenced).
    pub fn weight(&self, catalog: &Catalog) -> i64 {
        let recipe = catalog
            .get(&self.recipe_name)
            .expect("order references a recipe no longer in the catalog");
        recipe
            .requirements
            .iter()
            .map(|req| req.qty_per_unit * self.quantity)
            .sum()
    }
}
