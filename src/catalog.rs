use std::collections::HashMap;

/// A single `(ingredient, quantity-per-unit)` pair within a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub ingredient: String,
    pub qty_per_unit: i64,
}

/// Immutable once added to the [`Catalog`]: a recipe name plus the ingredient
/// requirements needed to prepare one unit of it. No ingredient name repeats
/// within `requirements`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub requirements: Vec<Requirement>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, requirements: Vec<Requirement>) -> Self {
        Recipe {
            name: name.into(),
            requirements,
        }
    }
}

/// Mapping recipe-name → recipe. Keys never repeat: [`Catalog::add`] refuses a
/// recipe whose name is already present.
#[derive(Debug, Default)]
pub struct Catalog {
    recipes: HashMap<String, Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Inserts `recipe` if its name is not already present.
    ///
    /// Returns `true` if the recipe was inserted, `false` if a recipe with
    /// the same name already exists (the caller is responsible for printing
    /// `ignorato` in that case; this method does not mutate on a duplicate).
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.recipes.contains_key(&recipe.name) {
            return false;
        }
        self.recipes.insert(recipe.name.clone(), recipe);
        true
    }

    /// Removes the named recipe unconditionally. Callers must have already
    /// checked that no order references it before calling this.
    ///
    /// Returns `true` if a recipe was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.recipes.remove(name).is_some()
    }
}
