use bistro_catalog::DiscountSpec;
use bistro_core::{NotificationMode, TransitionPolicy};
use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub restaurant: RestaurantSettings,
    #[serde(default)]
    pub orders: OrderSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestaurantSettings {
    pub name: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: "Bistro".to_string(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String { "$".to_string() }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OrderSettings {
    #[serde(default)]
    pub notification_mode: NotificationMode,
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PricingSettings {
    pub house_discount: Option<DiscountSpec>,
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            // Environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Eg.. `BISTRO_ORDERS__TRANSITION_POLICY=strict`
            .add_source(
                config::Environment::with_prefix("BISTRO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.restaurant.name.trim().is_empty() {
            return Err(AppError::InvalidSettings("restaurant.name must not be empty".to_string()));
        }

        if let Some(DiscountSpec::Percentage { percentage }) = &self.pricing.house_discount {
            if !percentage.is_finite() {
                return Err(AppError::InvalidSettings(format!(
                    "pricing.house_discount.percentage must be a finite number, got {}",
                    percentage
                )));
            }
            if !(0.0..=100.0).contains(percentage) {
                tracing::warn!("House discount of {}% is outside 0-100, totals will not be clamped", percentage);
            }
        }

        Ok(())
    }
}
