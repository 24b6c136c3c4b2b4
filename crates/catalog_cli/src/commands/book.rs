use catalog_core::{
    BookPatchInput, BookService, NewBookInput, SqliteAuthorRepository, SqliteBookRepository,
    SqliteCategoryRepository,
};
use rusqlite::Connection;

use super::BookCommand;
use crate::response::{CommandError, Envelope, Status};

pub(super) fn execute(command: BookCommand, conn: &Connection) -> Result<Envelope, CommandError> {
    let service = BookService::new(
        SqliteBookRepository::try_new(conn)?,
        SqliteAuthorRepository::try_new(conn)?,
        SqliteCategoryRepository::try_new(conn)?,
    );

    match command {
        BookCommand::Create {
            title,
            author_id,
            category_id,
        } => {
            let input = NewBookInput::parse(title, author_id, category_id)?;
            let book = service.create(&input)?;
            Envelope::with_data(Status::Created, "Book created", &book)
        }
        BookCommand::List => {
            let books = service.find_all()?;
            let message = if books.is_empty() {
                "No books registered"
            } else {
                "Books in the catalog"
            };
            Envelope::with_data(Status::Ok, message, &books)
        }
        BookCommand::Get { id } => {
            let book = service.find_one(id)?;
            Envelope::with_data(Status::Ok, "Book found", &book)
        }
        BookCommand::Update {
            id,
            title,
            author_id,
            category_id,
        } => {
            let patch = BookPatchInput::parse(title, author_id, category_id)?;
            let book = service.update(id, &patch)?;
            Envelope::with_data(Status::Ok, "Book updated", &book)
        }
        BookCommand::Delete { id } => {
            service.remove(id)?;
            Ok(Envelope::empty(Status::NoContent, "Book deleted"))
        }
    }
}
