use catalog_core::db::open_db_in_memory;
use catalog_core::{
    CatalogError, CategoryInput, CategoryService, EntityKind, SqliteCategoryRepository,
};
use rusqlite::Connection;

fn category_service(conn: &Connection) -> CategoryService<SqliteCategoryRepository<'_>> {
    CategoryService::new(SqliteCategoryRepository::try_new(conn).unwrap())
}

fn name(value: &str) -> CategoryInput {
    CategoryInput::parse(value).unwrap()
}

#[test]
fn create_stores_trimmed_lowercase_name() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let created = service.create(&name("  Ciencia Ficción ")).unwrap();
    assert_eq!(created.name, "ciencia ficción");
    assert_eq!(service.find_one(created.id).unwrap().name, "ciencia ficción");
}

#[test]
fn create_rejects_case_insensitive_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    service.create(&name("historia")).unwrap();
    let err = service.create(&name("Historia")).unwrap_err();

    assert!(err.is_conflict());
    assert!(matches!(
        err,
        CatalogError::DuplicateName {
            kind: EntityKind::Category,
            ref name
        } if name == "historia"
    ));
}

#[test]
fn update_rejects_name_of_another_category_in_any_case() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    service.create(&name("poesía")).unwrap();
    let ensayo = service.create(&name("ensayo")).unwrap();

    let err = service.update(ensayo.id, Some(&name(" POESÍA "))).unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(service.find_one(ensayo.id).unwrap().name, "ensayo");
}

#[test]
fn update_may_change_only_the_case_of_its_own_name() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let created = service.create(&name("drama")).unwrap();

    let updated = service.update(created.id, Some(&name("DRAMA"))).unwrap();
    assert_eq!(updated, created);
}

#[test]
fn update_renames_category() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let created = service.create(&name("cuento")).unwrap();

    let updated = service.update(created.id, Some(&name("Relato Corto"))).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "relato corto");
}

#[test]
fn find_all_returns_every_category_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let first = service.create(&name("Novela")).unwrap();
    let second = service.create(&name("Teatro")).unwrap();

    let all = service.find_all().unwrap();
    assert_eq!(all, vec![first, second]);
    assert_eq!(all, service.find_all().unwrap());
}

#[test]
fn unknown_ids_fail_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    for err in [
        service.find_one(9).unwrap_err(),
        service.update(9, None).unwrap_err(),
        service.remove(9).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Category,
                id: 9
            }
        ));
        assert_eq!(err.to_string(), "Category not found");
    }
}

#[test]
fn remove_deletes_category() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let created = service.create(&name("biografía")).unwrap();

    service.remove(created.id).unwrap();
    assert!(service.find_one(created.id).unwrap_err().is_not_found());
}
