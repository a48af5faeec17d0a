use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dish variants served by the restaurant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DishKind {
    CheeseBurger,
    Salad,
    Brownie,
}

/// Allergen flags a dish can declare
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Allergen {
    Gluten,
    Nuts,
}

impl DishKind {
    /// Every registered variant, in menu order
    pub const ALL: [DishKind; 3] = [DishKind::CheeseBurger, DishKind::Salad, DishKind::Brownie];

    /// Fixed price of the variant (in cents)
    pub fn price_cents(&self) -> i64 {
        match self {
            DishKind::CheeseBurger => 1000,
            DishKind::Salad => 800,
            DishKind::Brownie => 600,
        }
    }

    pub fn allergens(&self) -> &'static [Allergen] {
        match self {
            DishKind::CheeseBurger => &[Allergen::Gluten],
            DishKind::Salad => &[],
            DishKind::Brownie => &[Allergen::Gluten, Allergen::Nuts],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DishKind::CheeseBurger => "CheeseBurger",
            DishKind::Salad => "Salad",
            DishKind::Brownie => "Brownie",
        }
    }
}

impl fmt::Display for DishKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DishKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DishKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CatalogError::UnknownDishKind(s.to_string()))
    }
}

/// Immutable menu item: a variant plus the ingredients it was built with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    kind: DishKind,
    ingredients: Vec<String>,
}

impl Dish {
    pub fn new(kind: DishKind, ingredients: Vec<String>) -> Self {
        Self { kind, ingredients }
    }

    pub fn kind(&self) -> DishKind {
        self.kind
    }

    pub fn show_price(&self) -> i64 {
        self.kind.price_cents()
    }

    /// Ingredients exactly as given at construction
    pub fn show_ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn allergens(&self) -> &'static [Allergen] {
        self.kind.allergens()
    }

    /// Dishes that do not declare an allergen report `false`
    pub fn has_allergen(&self, allergen: Allergen) -> bool {
        self.allergens().contains(&allergen)
    }

    pub fn has_gluten(&self) -> bool {
        self.has_allergen(Allergen::Gluten)
    }

    pub fn has_nuts(&self) -> bool {
        self.has_allergen(Allergen::Nuts)
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown dish kind: {0}")]
    UnknownDishKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_prices() {
        assert_eq!(DishKind::CheeseBurger.price_cents(), 1000);
        assert_eq!(DishKind::Salad.price_cents(), 800);
        assert_eq!(DishKind::Brownie.price_cents(), 600);
    }

    #[test]
    fn test_allergen_flags() {
        let burger = Dish::new(DishKind::CheeseBurger, vec![]);
        let salad = Dish::new(DishKind::Salad, vec![]);
        let brownie = Dish::new(DishKind::Brownie, vec![]);

        assert!(burger.has_gluten());
        assert!(!burger.has_nuts());

        // No allergen declared at all
        assert!(!salad.has_gluten());
        assert!(!salad.has_nuts());

        assert!(brownie.has_gluten());
        assert!(brownie.has_nuts());
    }

    #[test]
    fn test_kind_parsing() {
        for kind in DishKind::ALL {
            assert_eq!(kind.to_string().parse::<DishKind>().unwrap(), kind);
        }

        let err = "Pizza".parse::<DishKind>().unwrap_err();
        assert_eq!(err, CatalogError::UnknownDishKind("Pizza".to_string()));
    }

    #[test]
    fn test_allergen_serialization() {
        let json = serde_json::to_string(&Allergen::Nuts).unwrap();
        assert_eq!(json, "\"NUTS\"");
    }
}
