use catalog_core::{CategoryInput, CategoryService, SqliteCategoryRepository};
use rusqlite::Connection;

use super::NamedCommand;
use crate::response::{CommandError, Envelope, Status};

pub(super) fn execute(command: NamedCommand, conn: &Connection) -> Result<Envelope, CommandError> {
    let service = CategoryService::new(SqliteCategoryRepository::try_new(conn)?);

    match command {
        NamedCommand::Create { name } => {
            let input = CategoryInput::parse(name)?;
            let category = service.create(&input)?;
            Envelope::with_data(Status::Created, "Category created", &category)
        }
        NamedCommand::List => {
            let categories = service.find_all()?;
            let message = if categories.is_empty() {
                "No categories registered"
            } else {
                "Categories in the catalog"
            };
            Envelope::with_data(Status::Ok, message, &categories)
        }
        NamedCommand::Get { id } => {
            let category = service.find_one(id)?;
            Envelope::with_data(Status::Ok, "Category found", &category)
        }
        NamedCommand::Update { id, name } => {
            let input = name.map(CategoryInput::parse).transpose()?;
            let category = service.update(id, input.as_ref())?;
            Envelope::with_data(Status::Ok, "Category updated", &category)
        }
        NamedCommand::Delete { id } => {
            service.remove(id)?;
            Ok(Envelope::empty(Status::NoContent, "Category deleted"))
        }
    }
}
