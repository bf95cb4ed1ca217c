use serde::{Deserialize, Serialize};
use crate::books::domain::ReturnOutcome;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub isbn: String,
    pub outcome: ReturnOutcome,
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let outcome = self.checkout_service.return_book(req.isbn.as_str())?;
        Ok(ReturnBookCommandResponse {
            isbn: req.isbn,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::ReturnOutcome;
    use crate::books::domain::model::BookEntity;
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::Role;
    use crate::gateway::GatewayPublisherVia;
    use crate::patrons::domain::model::PatronEntity;

    #[test]
    fn test_should_run_return_book() {
        let mut svc = create_checkout_service(&Configuration::new("test").with_publisher(GatewayPublisherVia::Memory));
        svc.catalog_mut().add_book(BookEntity::new("002", "1984", "George Orwell", "Dystopian")).expect("should add book");
        svc.patrons_mut().add_patron(PatronEntity::new("U1", "Alice", Role::Undergraduate)).expect("should add patron");
        svc.patrons_mut().add_patron(PatronEntity::new("U2", "Bob", Role::Professor)).expect("should add patron");
        svc.checkout("U1", "002").expect("should checkout");
        svc.checkout("U2", "002").expect("should queue");

        let res = ReturnBookCommand::new(svc.as_mut())
            .execute(ReturnBookCommandRequest::new("002")).expect("should return book");
        assert!(matches!(res.outcome, ReturnOutcome::ReassignedTo(ref p) if p.patron_id == "U2"));
        let json = serde_json::to_value(&res).expect("should serialize");
        assert_eq!("U2", json["outcome"]["ReassignedTo"]["patron_id"]);
    }

    #[test]
    fn test_should_fail_unknown_book() {
        let mut svc = create_checkout_service(&Configuration::new("test").with_publisher(GatewayPublisherVia::Memory));
        let res = ReturnBookCommand::new(svc.as_mut()).execute(ReturnBookCommandRequest::new("999"));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
