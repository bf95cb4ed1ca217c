pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod patrons;
pub mod reservations;
pub mod utils;
