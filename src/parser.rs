use itertools::Itertools;

use crate::catalog::Requirement;
use crate::errors::{ErrorKind, SimulatorError};
use crate::utils::MAX_NAME_LEN;

/// One parsed line of input, stripped of its command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddRecipe {
        name: String,
        requirements: Vec<Requirement>,
    },
    RemoveRecipe {
        name: String,
    },
    Restock {
        deliveries: Vec<(String, i64, i64)>,
    },
    Order {
        recipe_name: String,
        quantity: i64,
    },
}

/// The first line of input: `periodicity capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub periodicity: i64,
    pub capacity: i64,
}

fn malformed(detail: impl Into<String>) -> SimulatorError {
    SimulatorError::new_of_kind(detail.into(), ErrorKind::MalformedInput)
}

fn parse_int(token: &str) -> Result<i64, SimulatorError> {
    token
        .parse::<i64>()
        .map_err(|_| malformed(format!("expected an integer, got '{}'", token)))
}

/// Validates a recipe or ingredient name token against [`MAX_NAME_LEN`].
fn validate_name(name: &str) -> Result<(), SimulatorError> {
    if name.len() > MAX_NAME_LEN {
        return Err(malformed(format!(
            "name '{}' exceeds the maximum length of {} characters",
            name, MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Parses the mandatory first input line.
pub fn parse_header(line: &str) -> Result<Header, SimulatorError> {
    let mut tokens = line.split_whitespace();
    let periodicity = tokens
        .next()
        .ok_or_else(|| malformed("missing periodicity"))
        .and_then(parse_int)?;
    let capacity = tokens
        .next()
        .ok_or_else(|| malformed("missing capacity"))
        .and_then(parse_int)?;
    Ok(Header { periodicity, capacity })
}

/// Parses one command line. Tokens after `aggiungi_ricetta`'s name are
/// grouped in pairs `(ingredient, qty)`; tokens after `rifornimento` are
/// grouped in triples `(ingredient, qty, expiration)`. A trailing group that
/// does not divide evenly is a malformed-input error.
pub fn parse_line(line: &str) -> Result<Command, SimulatorError> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next().ok_or_else(|| malformed("empty command line"))?;

    match keyword {
        "aggiungi_ricetta" => {
            let name = tokens
                .next()
                .ok_or_else(|| malformed("aggiungi_ricetta missing recipe name"))?
                .to_string();
            validate_name(&name)?;
            let rest: Vec<&str> = tokens.collect();
            if rest.len() % 2 != 0 {
                return Err(malformed("aggiungi_ricetta has an incomplete ingredient pair"));
            }
            let mut requirements = Vec::with_capacity(rest.len() / 2);
            for (ing, qty) in rest.iter().tuples() {
                validate_name(ing)?;
                requirements.push(Requirement {
                    ingredient: ing.to_string(),
                    qty_per_unit: parse_int(qty)?,
                });
            }
            Ok(Command::AddRecipe { name, requirements })
        }
        "rimuovi_ricetta" => {
            let name = tokens
                .next()
                .ok_or_else(|| malformed("rimuovi_ricetta missing recipe name"))?
                .to_string();
            validate_name(&name)?;
            Ok(Command::RemoveRecipe { name })
        }
        "rifornimento" => {
            let rest: Vec<&str> = tokens.collect();
            if rest.len() % 3 != 0 {
                return Err(malformed("rifornimento has an incomplete ingredient triple"));
            }
            let mut deliveries = Vec::with_capacity(rest.len() / 3);
            for (ing, qty, exp) in rest.iter().tuples() {
                validate_name(ing)?;
                deliveries.push((ing.to_string(), parse_int(qty)?, parse_int(exp)?));
            }
            Ok(Command::Restock { deliveries })
        }
        "ordine" => {
            let recipe_name = tokens
                .next()
                .ok_or_else(|| malformed("ordine missing recipe name"))?
                .to_string();
            validate_name(&recipe_name)?;
            let quantity = tokens
                .next()
                .ok_or_else(|| malformed("ordine missing quantity"))
                .and_then(parse_int)?;
            Ok(Command::Order { recipe_name, quantity })
        }
        other => Err(malformed(format!("unrecognized command '{}'", other))),
    }
}
