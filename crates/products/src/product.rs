use storefront_core::error::require_text;
use storefront_core::{DomainError, DomainResult, Entity, EntityId};

use crate::events::{ProductCreated, ProductCreatedEvent};

/// Entity: Product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: EntityId,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();
        require_text("name", &name)?;
        ensure_price(price)?;
        Ok(Self {
            id: EntityId::parse(id)?,
            name,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        require_text("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        ensure_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn created_event(&self, description: impl Into<String>) -> ProductCreatedEvent {
        ProductCreatedEvent::new(ProductCreated {
            name: self.name.clone(),
            description: description.into(),
            price: self.price,
        })
    }
}

impl Entity for Product {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative amount"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_fields() {
        assert!(matches!(
            Product::new("", "Product 1", 10.0),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            Product::new("p1", "", 10.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Product::new("p1", "Product 1", -1.0),
            Err(DomainError::Validation(_))
        ));
        assert!(Product::new("p1", "Product 1", f64::NAN).is_err());
    }

    #[test]
    fn change_price_and_name() {
        let mut product = Product::new("p1", "Product 1", 10.0).unwrap();

        product.change_price(15.5).unwrap();
        product.change_name("Product 2").unwrap();

        assert_eq!(product.price(), 15.5);
        assert_eq!(product.name(), "Product 2");
        assert!(product.change_price(-0.01).is_err());
        assert_eq!(product.price(), 15.5);
    }

    #[test]
    fn created_event_copies_catalogue_data() {
        let product = Product::new("p1", "Product 1", 10.0).unwrap();
        let event = product.created_event("Product 1 description");
        assert_eq!(
            event.payload(),
            &ProductCreated {
                name: "Product 1".to_string(),
                description: "Product 1 description".to_string(),
                price: 10.0,
            }
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-negative finite price is accepted, any negative one rejected.
            #[test]
            fn price_sign_decides_validity(price in 0.0f64..1_000_000.0) {
                prop_assert!(Product::new("p1", "Product", price).is_ok());
                if price > 0.0 {
                    prop_assert!(Product::new("p1", "Product", -price).is_err());
                }
            }
        }
    }
}
