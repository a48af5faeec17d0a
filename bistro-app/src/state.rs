use std::sync::Arc;

use bistro_catalog::{DiscountStrategy, DishCatalog};
use bistro_core::Customer;
use bistro_order::{Kitchen, Order};

use crate::error::AppError;
use crate::settings::Settings;

/// Everything the restaurant needs to take and serve orders
pub struct AppState {
    pub settings: Settings,
    pub catalog: DishCatalog,
    pub kitchen: Arc<Kitchen>,
    pub house_discount: Option<Box<dyn DiscountStrategy>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let kitchen = Arc::new(Kitchen::new(settings.orders.transition_policy));
        let house_discount = settings
            .pricing
            .house_discount
            .clone()
            .map(|spec| spec.into_strategy());

        Self {
            settings,
            catalog: DishCatalog::new(),
            kitchen,
            house_discount,
        }
    }

    /// Build from `config/` files and `BISTRO_*` environment variables
    pub fn load() -> Result<Self, AppError> {
        Ok(Self::new(Settings::load()?))
    }

    /// Open an order for a customer, honouring the configured notification mode and policy
    pub fn open_order(&self, customer: Arc<Customer>) -> Order {
        Order::new(customer)
            .with_notification_mode(self.settings.orders.notification_mode)
            .with_transition_policy(self.settings.orders.transition_policy)
    }
}
