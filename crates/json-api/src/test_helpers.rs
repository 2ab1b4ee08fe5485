//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::domain::products::{
    MockProductsService,
    models::{Product, ProductUuid},
};

use crate::state::State;

pub(crate) fn make_product(id: ProductUuid) -> Product {
    Product {
        id,
        product_name: "Laptop".to_string(),
        category: "Electronics".to_string(),
        price: Decimal::new(99999, 2),
        availability_date: date(2026, 10, 1),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
