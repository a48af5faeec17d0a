use bistro_catalog::CatalogError;
use bistro_order::OrderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
