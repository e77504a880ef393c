//! Catalogue export.
//!
//! # Usage
//!
//! ```bash
//! # Dump the whole catalogue as JSON on stdout
//! op-cli catalog export
//!
//! # Compact output for piping
//! op-cli catalog export --compact
//! ```

use serde_json::{Value, json};
use thiserror::Error;

use overland_core::Money;
use overland_storefront::data::{parts, vehicles};

/// Errors from catalogue export.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON serialization failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Dump the vehicle list and parts catalogue as JSON on stdout.
///
/// Prices come out as `{"amount": "45.99", "currency": "EUR"}` so
/// downstream tooling never has to parse a display string.
pub fn export(compact: bool) -> Result<(), CatalogError> {
    let vehicles: Vec<Value> = vehicles::vehicles()
        .iter()
        .map(|v| json!({ "slug": v.slug, "name": v.name }))
        .collect();

    let parts: Vec<Value> = parts::all_parts().iter().map(part_json).collect();

    let document = json!({
        "vehicles": vehicles,
        "parts": parts,
    });

    let output = if compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{output}");
    Ok(())
}

fn money_json(money: Money) -> Value {
    json!({
        "amount": format!("{:.2}", money.amount()),
        "currency": money.currency().code(),
    })
}

fn part_json(part: &parts::Part) -> Value {
    json!({
        "id": part.id.as_i32(),
        "name": part.name,
        "part_number": part.part_number,
        "brand": part.brand,
        "category": part.category,
        "price": money_json(part.price),
        "original_price": part.original_price.map(money_json),
        "rating": part.rating,
        "reviews": part.reviews,
        "in_stock": part.in_stock,
        "vehicle": part.vehicle,
        "badge": part.badge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use overland_core::Currency;

    #[test]
    fn test_money_json_is_structured() {
        let value = money_json(Money::from_cents(45_99, Currency::EUR));
        assert_eq!(value["amount"], "45.99");
        assert_eq!(value["currency"], "EUR");
    }

    #[test]
    fn test_every_part_serializes() {
        for part in parts::all_parts() {
            let value = part_json(part);
            assert!(value["id"].is_number());
            assert!(value["price"]["amount"].is_string());
        }
    }
}
