use tracing::info;
use crate::checkout::dto::CheckoutDto;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::patrons::domain::history::BorrowHistory;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;

pub(crate) struct PatronServiceImpl {
    patron_repository: Box<dyn PatronRepository>,
}

impl PatronServiceImpl {
    pub(crate) fn new(_config: &Configuration, patron_repository: Box<dyn PatronRepository>) -> Self {
        PatronServiceImpl {
            patron_repository,
        }
    }
}

impl PatronService for PatronServiceImpl {
    fn add_patron(&mut self, patron: PatronEntity) -> LibraryResult<PatronDto> {
        let dto = PatronDto::from(&patron);
        self.patron_repository.create(patron)?;
        info!(patron_id = dto.patron_id.as_str(), role = %dto.role, "patron added");
        Ok(dto)
    }

    fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto> {
        self.patron_repository.get(id).map(PatronDto::from)
    }

    fn find_patrons_by_name(&self, name: &str) -> Vec<PatronDto> {
        self.patron_repository.find_by_name(name).into_iter().map(PatronDto::from).collect()
    }

    fn history(&self, id: &str) -> LibraryResult<&BorrowHistory> {
        self.patron_repository.get(id).map(|p| &p.history)
    }

    fn record_checkout(&mut self, id: &str, record: CheckoutDto) -> LibraryResult<()> {
        self.patron_repository.get_mut(id)?.history.add(record);
        Ok(())
    }

    fn record_return(&mut self, id: &str, book_id: &str) -> LibraryResult<bool> {
        Ok(self.patron_repository.get_mut(id)?.history.mark_returned(book_id))
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            role: other.role,
        }
    }
}
