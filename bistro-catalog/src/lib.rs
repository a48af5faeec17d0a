pub mod dish;
pub mod catalog;
pub mod pricing;

pub use dish::{Allergen, CatalogError, Dish, DishKind};
pub use catalog::{DishCatalog, MenuEntry};
pub use pricing::{DiscountSpec, DiscountStrategy, FixedAmountDiscount, PercentageDiscount, Priced};
