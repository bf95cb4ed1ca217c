use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Role;

pub struct ReservationLineCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ReservationLineCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReservationLineCommandRequest {
    isbn: String,
}

impl ReservationLineCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WaitingPatron {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct ReservationLineCommandResponse {
    pub isbn: String,
    pub title: String,
    pub waiting: Vec<WaitingPatron>,
}

impl Command<ReservationLineCommandRequest, ReservationLineCommandResponse> for ReservationLineCommand<'_> {
    fn execute(&mut self, req: ReservationLineCommandRequest) -> Result<ReservationLineCommandResponse, CommandError> {
        let book = self.catalog_service.find_book_by_isbn(req.isbn.as_str())?;
        let waiting = self.catalog_service.reservation_line(req.isbn.as_str())?
            .into_iter().map(|(name, role)| WaitingPatron { name, role }).collect();
        Ok(ReservationLineCommandResponse {
            isbn: req.isbn,
            title: book.title,
            waiting,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::reservation_line_cmd::{ReservationLineCommand, ReservationLineCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::Role;
    use crate::gateway::GatewayPublisherVia;
    use crate::patrons::dto::PatronDto;

    #[test]
    fn test_should_run_reservation_line() {
        let mut svc = create_catalog_service(&Configuration::new("test").with_publisher(GatewayPublisherVia::Memory));
        svc.add_book(BookEntity::new("001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction")).expect("should add book");
        let book = svc.book_mut("001").expect("should find book");
        book.checkout(&PatronDto::new("U1", "Alice", Role::Undergraduate), false);
        book.checkout(&PatronDto::new("U3", "Charlie", Role::Graduate), false);
        book.checkout(&PatronDto::new("U2", "Bob", Role::Professor), false);

        let res = ReservationLineCommand::new(svc.as_ref())
            .execute(ReservationLineCommandRequest::new("001")).expect("should show line");
        assert_eq!("The Great Gatsby", res.title.as_str());
        let names: Vec<&str> = res.waiting.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(vec!["Bob", "Charlie"], names);
        assert_eq!(Role::Professor, res.waiting[0].role);

        let res = ReservationLineCommand::new(svc.as_ref()).execute(ReservationLineCommandRequest::new("999"));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
