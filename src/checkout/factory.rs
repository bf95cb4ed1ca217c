use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::patrons::factory::create_patron_service;

pub fn create_checkout_service(config: &Configuration) -> Box<dyn CheckoutService> {
    let catalog_svc = create_catalog_service(config);
    let patron_svc = create_patron_service(config);
    let publisher = create_publisher(config.publisher);
    Box::new(CheckoutServiceImpl::new(config, patron_svc, catalog_svc, publisher))
}
