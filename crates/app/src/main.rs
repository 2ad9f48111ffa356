use anyhow::Context;

use storefront_customers::{Address, Customer};
use storefront_products::Product;

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let dispatcher = storefront_app::default_dispatcher();

    let product = Product::new("p-1", "Product 1", 10.0).context("invalid product")?;
    dispatcher.notify(&product.created_event("Product 1 description"))?;

    let mut customer = Customer::new("uuid-1", "Customer Name").context("invalid customer")?;
    dispatcher.notify(&customer.created_event())?;

    let address = Address::new("Rua A", 123, "zip-123", "City A").context("invalid address")?;
    let moved = customer.change_address(address);
    customer.activate().context("customer activation failed")?;
    dispatcher.notify(&moved)?;

    tracing::info!(active = customer.is_active(), "storefront demo finished");
    Ok(())
}
