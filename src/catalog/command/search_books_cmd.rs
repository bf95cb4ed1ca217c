use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    keyword: String,
    page: Option<String>,
    page_size: Option<usize>,
}

impl SearchBooksCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            page: None,
            page_size: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub keyword: String,
    pub books: Vec<BookDto>,
    pub next_page: Option<String>,
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let res = self.catalog_service.search_books(
            req.keyword.as_str(), req.page.as_deref(), req.page_size.unwrap_or(50))?;
        Ok(SearchBooksCommandResponse {
            keyword: req.keyword,
            books: res.records,
            next_page: res.next_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_search_books() {
        let mut svc = create_catalog_service(&Configuration::new("test").with_publisher(GatewayPublisherVia::Memory));
        svc.add_book(BookEntity::new("001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction")).expect("should add book");
        svc.add_book(BookEntity::new("002", "1984", "George Orwell", "Dystopian")).expect("should add book");

        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new("fiction")).expect("should search");
        assert_eq!(1, res.books.len());
        assert_eq!("The Great Gatsby", res.books[0].title.as_str());

        let req: SearchBooksCommandRequest = serde_json::from_str(r#"{"keyword":"o","page":"1","page_size":1}"#)
            .expect("should parse request");
        let res = SearchBooksCommand::new(svc.as_ref()).execute(req).expect("should search");
        assert_eq!("002", res.books[0].isbn.as_str());
        assert!(res.next_page.is_none());
    }
}
