pub mod add_patron_cmd;
pub mod get_history_cmd;
