use serde::{Deserialize, Serialize};
use crate::books::domain::CheckoutOutcome;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> CheckoutBookCommand<'a> {
    pub fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    patron_id: String,
    isbn: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub patron_id: String,
    pub isbn: String,
    pub outcome: CheckoutOutcome,
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand<'_> {
    fn execute(&mut self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        let outcome = self.checkout_service.checkout(req.patron_id.as_str(), req.isbn.as_str())?;
        Ok(CheckoutBookCommandResponse {
            patron_id: req.patron_id,
            isbn: req.isbn,
            outcome,
        })
    }
}
