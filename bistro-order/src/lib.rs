pub mod models;
pub mod observer;
pub mod updater;
pub mod customer;
pub mod kitchen;
pub mod invoice;

pub use models::{Order, OrderSnapshot, OrderStatus};
pub use observer::{ObserverRegistry, OrderObserver};
pub use updater::{OrderError, StatusChange, StatusUpdater};
pub use customer::CustomerActions;
pub use kitchen::{Kitchen, KitchenUpdate};
pub use invoice::Invoice;
