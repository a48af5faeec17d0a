pub mod identity;
pub mod money;
pub mod policy;

pub use identity::Customer;
pub use money::{format_cents, format_money};
pub use policy::{NotificationMode, TransitionPolicy};
