use serde::{Deserialize, Serialize};
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct GetHistoryCommand<'a> {
    patron_service: &'a dyn PatronService,
}

impl<'a> GetHistoryCommand<'a> {
    pub fn new(patron_service: &'a dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetHistoryCommandRequest {
    patron_id: String,
}

impl GetHistoryCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetHistoryCommandResponse {
    pub patron: PatronDto,
    pub records: Vec<CheckoutDto>,
}

impl Command<GetHistoryCommandRequest, GetHistoryCommandResponse> for GetHistoryCommand<'_> {
    fn execute(&mut self, req: GetHistoryCommandRequest) -> Result<GetHistoryCommandResponse, CommandError> {
        let patron = self.patron_service.find_patron_by_id(req.patron_id.as_str())?;
        let records = self.patron_service.history(req.patron_id.as_str())?.records().to_vec();
        Ok(GetHistoryCommandResponse {
            patron,
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::Role;
    use crate::gateway::GatewayPublisherVia;
    use crate::patrons::command::get_history_cmd::{GetHistoryCommand, GetHistoryCommandRequest};
    use crate::patrons::domain::model::PatronEntity;

    #[test]
    fn test_should_run_get_history() {
        let mut svc = create_checkout_service(&Configuration::new("test").with_publisher(GatewayPublisherVia::Memory));
        svc.catalog_mut().add_book(BookEntity::new("001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction")).expect("should add book");
        svc.catalog_mut().add_book(BookEntity::new("002", "1984", "George Orwell", "Dystopian")).expect("should add book");
        svc.patrons_mut().add_patron(PatronEntity::new("U1", "Alice", Role::Undergraduate)).expect("should add patron");
        svc.checkout("U1", "001").expect("should checkout");
        svc.checkout("U1", "002").expect("should checkout");

        let res = GetHistoryCommand::new(svc.patrons())
            .execute(GetHistoryCommandRequest::new("U1")).expect("should get history");
        assert_eq!("Alice", res.patron.name.as_str());
        let titles: Vec<&str> = res.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(vec!["The Great Gatsby", "1984"], titles);

        let res = GetHistoryCommand::new(svc.patrons()).execute(GetHistoryCommandRequest::new("U404"));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
