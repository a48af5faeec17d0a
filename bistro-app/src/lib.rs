use std::sync::Arc;

use bistro_core::{format_money, Customer};
use bistro_order::{CustomerActions, Invoice, OrderSnapshot, OrderStatus};

pub mod error;
pub mod settings;
pub mod state;

pub use error::AppError;
pub use settings::Settings;
pub use state::AppState;

/// What the demo service produced, in order of events
#[derive(Debug)]
pub struct DemoReport {
    pub total_cents: i64,
    pub discounted_cents: Option<i64>,
    pub customer_notice: String,
    pub kitchen_notices: Vec<String>,
    /// Subscriber messages from the kitchen's status change, in fan-out order
    pub preparation_messages: Vec<String>,
    pub snapshots: Vec<OrderSnapshot>,
    pub invoice: String,
}

/// One service: Alice orders a burger and a salad, validates, and the kitchen prepares it
pub fn run_demo(state: &AppState) -> Result<DemoReport, AppError> {
    let burger = state.catalog.create_dish(
        "CheeseBurger",
        ingredients(&["brioche bun", "ground beef patty", "cheddar", "lettuce", "tomato", "onion", "burger sauce"]),
    )?;
    let salad = state
        .catalog
        .create_dish("Salad", ingredients(&["lettuce", "tomato", "cucumber", "vinaigrette"]))?;

    let customer = Arc::new(Customer::new("Alice"));
    let mut order = state.open_order(customer.clone());
    customer.add_dish_to_order(&mut order, burger);
    customer.add_dish_to_order(&mut order, salad);

    let mut snapshots = vec![order.snapshot()];
    let total_cents = customer.order_total_price(&order);
    let symbol = &state.settings.restaurant.currency_symbol;
    tracing::info!("Order {} total {}", order.id, format_money(total_cents, symbol));

    let customer_notice = customer.validate_order(&mut order)?;
    tracing::info!("{}", customer_notice);

    order.add_observer(state.kitchen.clone());
    snapshots.push(order.snapshot());

    let update = state.kitchen.update_order_status(&mut order, OrderStatus::InPreparation)?;
    tracing::info!("{}", update.notice);
    for message in &update.change.messages {
        tracing::debug!("Notified: {}", message);
    }
    snapshots.push(order.snapshot());

    let invoice_writer = Invoice::new(symbol.clone());
    let (invoice, discounted_cents) = match &state.house_discount {
        Some(discount) => (
            invoice_writer.generate_invoice_with_discount(&order, &**discount),
            Some(order.total_with_discount(&**discount)),
        ),
        None => (invoice_writer.generate_invoice(&order), None),
    };

    Ok(DemoReport {
        total_cents,
        discounted_cents,
        customer_notice,
        kitchen_notices: vec![update.notice],
        preparation_messages: update.change.messages,
        snapshots,
        invoice,
    })
}

fn ingredients(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
