use catalog_core::db::open_db_in_memory;
use catalog_core::{
    Author, AuthorInput, AuthorService, BookPatchInput, BookService, CatalogError, Category,
    CategoryInput, CategoryService, EntityKind, NewBookInput, SqliteAuthorRepository,
    SqliteBookRepository, SqliteCategoryRepository,
};
use rusqlite::Connection;
use serde_json::json;

type SqliteBookService<'conn> = BookService<
    SqliteBookRepository<'conn>,
    SqliteAuthorRepository<'conn>,
    SqliteCategoryRepository<'conn>,
>;

fn book_service(conn: &Connection) -> SqliteBookService<'_> {
    BookService::new(
        SqliteBookRepository::try_new(conn).unwrap(),
        SqliteAuthorRepository::try_new(conn).unwrap(),
        SqliteCategoryRepository::try_new(conn).unwrap(),
    )
}

fn seed_author(conn: &Connection, name: &str) -> Author {
    AuthorService::new(SqliteAuthorRepository::try_new(conn).unwrap())
        .create(&AuthorInput::parse(name).unwrap())
        .unwrap()
}

fn seed_category(conn: &Connection, name: &str) -> Category {
    CategoryService::new(SqliteCategoryRepository::try_new(conn).unwrap())
        .create(&CategoryInput::parse(name).unwrap())
        .unwrap()
}

fn new_book(title: &str, author_id: i64, category_id: i64) -> NewBookInput {
    NewBookInput::parse(title, author_id, category_id).unwrap()
}

fn patch(title: Option<&str>, author_id: Option<i64>, category_id: Option<i64>) -> BookPatchInput {
    BookPatchInput::parse(title.map(str::to_string), author_id, category_id).unwrap()
}

#[test]
fn create_binds_resolved_author_and_category() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Laura Esquivel");
    let category = seed_category(&conn, "Novela");
    let service = book_service(&conn);

    let book = service
        .create(&new_book("  Como agua para chocolate ", author.id, category.id))
        .unwrap();

    assert_eq!(book.title, "Como agua para chocolate");
    assert_eq!(book.author, author);
    assert_eq!(book.category, category);
}

#[test]
fn create_fails_when_author_is_missing() {
    let conn = open_db_in_memory().unwrap();
    let category = seed_category(&conn, "Novela");
    let service = book_service(&conn);

    let err = service
        .create(&new_book("Pedro Páramo", 999, category.id))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            kind: EntityKind::Author,
            id: 999
        }
    ));
    assert_eq!(err.to_string(), "Author not found");
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn create_fails_when_category_is_missing() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Juan Rulfo");
    let service = book_service(&conn);

    let err = service
        .create(&new_book("Pedro Páramo", author.id, 999))
        .unwrap_err();
    assert_eq!(err.to_string(), "Category not found");
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn author_is_checked_before_category() {
    let conn = open_db_in_memory().unwrap();
    let service = book_service(&conn);

    let err = service.create(&new_book("Ficciones", 5, 6)).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            kind: EntityKind::Author,
            id: 5
        }
    ));
}

#[test]
fn titles_are_not_unique() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Anónimo");
    let category = seed_category(&conn, "Poesía");
    let service = book_service(&conn);

    let first = service
        .create(&new_book("Poemas", author.id, category.id))
        .unwrap();
    let second = service
        .create(&new_book("Poemas", author.id, category.id))
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(service.find_all().unwrap().len(), 2);
}

#[test]
fn reads_embed_author_and_category() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Ernesto Sabato");
    let category = seed_category(&conn, "Novela");
    let service = book_service(&conn);
    let created = service
        .create(&new_book("El túnel", author.id, category.id))
        .unwrap();

    let all = service.find_all().unwrap();
    assert_eq!(all, vec![created.clone()]);
    assert_eq!(all, service.find_all().unwrap());
    assert_eq!(service.find_one(created.id).unwrap().author.name, "Ernesto Sabato");
}

#[test]
fn serialized_book_nests_references_instead_of_ids() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Horacio Quiroga");
    let category = seed_category(&conn, "Cuento");
    let service = book_service(&conn);
    let created = service
        .create(&new_book("  Cuentos de la selva ", author.id, category.id))
        .unwrap();

    let value = serde_json::to_value(service.find_one(created.id).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": created.id,
            "title": "Cuentos de la selva",
            "author": { "id": author.id, "name": "Horacio Quiroga" },
            "category": { "id": category.id, "name": "cuento" },
        })
    );
    assert!(value.get("author_id").is_none());
    assert!(value.get("category_id").is_none());
}

#[test]
fn partial_update_changes_only_supplied_author() {
    let conn = open_db_in_memory().unwrap();
    let first_author = seed_author(&conn, "Mario Vargas Llosa");
    let second_author = seed_author(&conn, "Alfredo Bryce Echenique");
    let category = seed_category(&conn, "Novela");
    let service = book_service(&conn);
    let created = service
        .create(&new_book("La ciudad y los perros", first_author.id, category.id))
        .unwrap();

    let updated = service
        .update(created.id, &patch(None, Some(second_author.id), None))
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.author, second_author);
    assert_eq!(service.find_one(created.id).unwrap(), updated);
}

#[test]
fn update_applies_title_and_category_independently() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Elena Poniatowska");
    let cronica = seed_category(&conn, "Crónica");
    let novela = seed_category(&conn, "Novela");
    let service = book_service(&conn);
    let created = service
        .create(&new_book("La noche de Tlatelolco", author.id, cronica.id))
        .unwrap();

    let retitled = service
        .update(created.id, &patch(Some("  Hasta no verte Jesús mío "), None, None))
        .unwrap();
    assert_eq!(retitled.title, "Hasta no verte Jesús mío");
    assert_eq!(retitled.category, cronica);

    let recategorized = service
        .update(created.id, &patch(None, None, Some(novela.id)))
        .unwrap();
    assert_eq!(recategorized.title, "Hasta no verte Jesús mío");
    assert_eq!(recategorized.category, novela);
    assert_eq!(recategorized.author, author);
}

#[test]
fn update_with_unknown_reference_leaves_book_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Julio Cortázar");
    let category = seed_category(&conn, "Novela");
    let service = book_service(&conn);
    let created = service
        .create(&new_book("Rayuela", author.id, category.id))
        .unwrap();

    let err = service
        .update(created.id, &patch(Some("62/Modelo para armar"), None, Some(77)))
        .unwrap_err();
    assert_eq!(err.to_string(), "Category not found");

    let err = service
        .update(created.id, &patch(None, Some(78), None))
        .unwrap_err();
    assert_eq!(err.to_string(), "Author not found");

    assert_eq!(service.find_one(created.id).unwrap(), created);
}

#[test]
fn unknown_book_ids_fail_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = book_service(&conn);

    for err in [
        service.find_one(31).unwrap_err(),
        service.update(31, &patch(Some("x"), None, None)).unwrap_err(),
        service.remove(31).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Book,
                id: 31
            }
        ));
        assert_eq!(err.to_string(), "Book not found");
    }
}

#[test]
fn remove_keeps_author_and_category() {
    let conn = open_db_in_memory().unwrap();
    let author = seed_author(&conn, "Roberto Bolaño");
    let category = seed_category(&conn, "Novela");
    let service = book_service(&conn);
    let created = service
        .create(&new_book("Los detectives salvajes", author.id, category.id))
        .unwrap();

    service.remove(created.id).unwrap();

    assert!(service.find_one(created.id).unwrap_err().is_not_found());
    let authors = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    assert_eq!(authors.find_one(author.id).unwrap(), author);
    assert_eq!(categories.find_one(category.id).unwrap(), category);
}
