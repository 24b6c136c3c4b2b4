use catalog_core::{AuthorInput, AuthorService, SqliteAuthorRepository};
use rusqlite::Connection;

use super::NamedCommand;
use crate::response::{CommandError, Envelope, Status};

pub(super) fn execute(command: NamedCommand, conn: &Connection) -> Result<Envelope, CommandError> {
    let service = AuthorService::new(SqliteAuthorRepository::try_new(conn)?);

    match command {
        NamedCommand::Create { name } => {
            let input = AuthorInput::parse(name)?;
            let author = service.create(&input)?;
            Envelope::with_data(Status::Created, "Author created", &author)
        }
        NamedCommand::List => {
            let authors = service.find_all()?;
            let message = if authors.is_empty() {
                "No authors registered"
            } else {
                "Authors in the catalog"
            };
            Envelope::with_data(Status::Ok, message, &authors)
        }
        NamedCommand::Get { id } => {
            let author = service.find_one(id)?;
            Envelope::with_data(Status::Ok, "Author found", &author)
        }
        NamedCommand::Update { id, name } => {
            let input = name.map(AuthorInput::parse).transpose()?;
            let author = service.update(id, input.as_ref())?;
            Envelope::with_data(Status::Ok, "Author updated", &author)
        }
        NamedCommand::Delete { id } => {
            service.remove(id)?;
            Ok(Envelope::empty(Status::NoContent, "Author deleted"))
        }
    }
}
