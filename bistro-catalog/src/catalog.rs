use crate::dish::{CatalogError, Dish, DishKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A line on the printed menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: DishKind,
    pub price_cents: i64,
}

/// Factory for dishes, restricted to the variants registered on it
pub struct DishCatalog {
    kinds: Vec<DishKind>,
}

impl DishCatalog {
    pub fn new() -> Self {
        Self::with_kinds(DishKind::ALL.to_vec())
    }

    /// Catalog serving only the given variants
    pub fn with_kinds(kinds: Vec<DishKind>) -> Self {
        Self { kinds }
    }

    /// Build a dish by variant name
    pub fn create_dish(&self, kind: &str, ingredients: Vec<String>) -> Result<Arc<Dish>, CatalogError> {
        let kind = kind.parse::<DishKind>()?;

        if !self.kinds.contains(&kind) {
            return Err(CatalogError::UnknownDishKind(kind.to_string()));
        }

        tracing::debug!("Created {} with {} ingredients", kind, ingredients.len());
        Ok(Arc::new(Dish::new(kind, ingredients)))
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        self.kinds
            .iter()
            .map(|kind| MenuEntry {
                kind: *kind,
                price_cents: kind.price_cents(),
            })
            .collect()
    }
}

impl Default for DishCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_dish_keeps_ingredients() {
        let catalog = DishCatalog::new();

        for kind in DishKind::ALL {
            let given = ingredients(&["bun", "cheddar", "tomato"]);
            let dish = catalog.create_dish(kind.name(), given.clone()).unwrap();

            assert_eq!(dish.kind(), kind);
            assert_eq!(dish.show_ingredients(), given.as_slice());
        }
    }

    #[test]
    fn test_unknown_kind() {
        let catalog = DishCatalog::new();

        let result = catalog.create_dish("Unknown", vec![]);
        assert_eq!(result.unwrap_err(), CatalogError::UnknownDishKind("Unknown".to_string()));
    }

    #[test]
    fn test_unregistered_kind() {
        let catalog = DishCatalog::with_kinds(vec![DishKind::Salad]);

        assert!(catalog.create_dish("Salad", ingredients(&["lettuce"])).is_ok());
        assert!(matches!(
            catalog.create_dish("Brownie", vec![]),
            Err(CatalogError::UnknownDishKind(_))
        ));
    }

    #[test]
    fn test_menu() {
        let menu = DishCatalog::new().menu();

        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0], MenuEntry { kind: DishKind::CheeseBurger, price_cents: 1000 });
        assert_eq!(menu[2].price_cents, 600);
    }
}
