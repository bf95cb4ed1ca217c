pub mod add_book_cmd;
pub mod reservation_line_cmd;
pub mod search_books_cmd;
