use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::Role;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct AddPatronCommand<'a> {
    patron_service: &'a mut dyn PatronService,
}

impl<'a> AddPatronCommand<'a> {
    pub fn new(patron_service: &'a mut dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub patron_id: String,
    pub name: String,
    pub role: String,
}

impl AddPatronCommandRequest {
    pub fn new(patron_id: &str, name: &str, role: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
        }
    }

    pub fn build_patron(&self) -> PatronEntity {
        PatronEntity::new(self.patron_id.as_str(), self.name.as_str(), Role::from(self.role.as_str()))
    }
}


#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand<'_> {
    fn execute(&mut self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        self.patron_service.add_patron(req.build_patron())
            .map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::Role;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::factory::create_patron_service;

    #[test]
    fn test_should_run_add_patron() {
        let mut svc = create_patron_service(&Configuration::new("test"));
        let res = AddPatronCommand::new(svc.as_mut())
            .execute(AddPatronCommandRequest::new("U2", "Bob", "professor")).expect("should add patron");
        assert_eq!(Role::Professor, res.patron.role);
        let res = AddPatronCommand::new(svc.as_mut())
            .execute(AddPatronCommandRequest::new("U5", "Dana", "alumni")).expect("should add patron");
        assert_eq!(Role::Other, res.patron.role);
        let res = AddPatronCommand::new(svc.as_mut())
            .execute(AddPatronCommandRequest::new("U2", "Bobby", "graduate"));
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
