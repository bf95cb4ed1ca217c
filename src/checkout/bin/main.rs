use lms_reservations::books::domain::{CheckoutOutcome, ReturnOutcome};
use lms_reservations::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use lms_reservations::catalog::command::reservation_line_cmd::{ReservationLineCommand, ReservationLineCommandRequest};
use lms_reservations::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use lms_reservations::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use lms_reservations::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use lms_reservations::checkout::domain::CheckoutService;
use lms_reservations::core::command::{Command, CommandError};
use lms_reservations::core::domain::Configuration;
use lms_reservations::checkout::factory::create_checkout_service;
use lms_reservations::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
use lms_reservations::patrons::command::get_history_cmd::{GetHistoryCommand, GetHistoryCommandRequest};
use lms_reservations::utils::logging::setup_tracing;

const BOOKS: [(&str, &str, &str, &str); 3] = [
    ("001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
    ("002", "1984", "George Orwell", "Dystopian"),
    ("003", "The Art of Computer Programming", "Donald Knuth", "Computer Science"),
];

const PATRONS: [(&str, &str, &str); 3] = [
    ("U1", "Alice", "undergraduate"),
    ("U2", "Bob", "professor"),
    ("U3", "Charlie", "graduate"),
];

const REQUESTS: [(&str, &str); 5] = [
    ("U1", "001"),
    ("U1", "002"),
    ("U3", "001"),
    ("U2", "003"),
    ("U2", "001"),
];

fn main() -> Result<(), CommandError> {
    setup_tracing();

    let mut svc = create_checkout_service(&Configuration::new("main"));
    for (isbn, title, author, category) in BOOKS {
        AddBookCommand::new(svc.catalog_mut())
            .execute(AddBookCommandRequest::new(isbn, title, author, category))?;
    }
    for (id, name, role) in PATRONS {
        AddPatronCommand::new(svc.patrons_mut())
            .execute(AddPatronCommandRequest::new(id, name, role))?;
    }

    let found = SearchBooksCommand::new(svc.catalog())
        .execute(SearchBooksCommandRequest::new("Fiction"))?;
    println!("Search results for '{}':", found.keyword);
    for book in &found.books {
        println!("  {} by {} ({})", book.title, book.author, book.book_status);
    }

    for (patron_id, isbn) in REQUESTS {
        let res = CheckoutBookCommand::new(svc.as_mut())
            .execute(CheckoutBookCommandRequest::new(patron_id, isbn))?;
        match res.outcome {
            CheckoutOutcome::Success => println!("{} checked out {}", res.patron_id, res.isbn),
            CheckoutOutcome::Queued => println!("{} reserved {}", res.patron_id, res.isbn),
        }
    }

    let line = ReservationLineCommand::new(svc.catalog())
        .execute(ReservationLineCommandRequest::new("001"))?;
    println!("Reservation line for {}:", line.title);
    for (position, waiting) in line.waiting.iter().enumerate() {
        println!("  {}. {} ({})", position + 1, waiting.name, waiting.role);
    }

    print_histories(svc.as_ref())?;

    let returned = ReturnBookCommand::new(svc.as_mut())
        .execute(ReturnBookCommandRequest::new("001"))?;
    match returned.outcome {
        ReturnOutcome::ReassignedTo(patron) => println!("{} returned and passed to {}", returned.isbn, patron.name),
        ReturnOutcome::NowAvailable => println!("{} returned and is available", returned.isbn),
        ReturnOutcome::AlreadyAvailable => println!("{} was not checked out", returned.isbn),
    }

    print_histories(svc.as_ref())
}

fn print_histories(svc: &dyn CheckoutService) -> Result<(), CommandError> {
    for (id, _, _) in PATRONS {
        let res = GetHistoryCommand::new(svc.patrons())
            .execute(GetHistoryCommandRequest::new(id))?;
        println!("History of {}:", res.patron.name);
        for record in &res.records {
            println!("  {} due {} [{}]", record.title, record.due_at.format("%Y-%m-%d"), record.checkout_status);
        }
    }
    Ok(())
}
