mod checkout_locator;

pub use checkout_locator::{homepage_for_location, CheckoutLocator};
