use super::prelude::*;

fn check_category_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() || slugify(name).is_empty() {
        return Err(Error::CategoryName);
    }
    Ok(name)
}

fn check_unique<R: CategoryRepo>(repo: &R, category: &Category) -> Result<()> {
    let conflict = repo
        .all_categories()?
        .into_iter()
        .any(|c| c.id != category.id && (c.name == category.name || c.slug == category.slug));
    if conflict {
        return Err(Error::CategoryExists);
    }
    Ok(())
}

fn already_exists_as_conflict(err: crate::repositories::Error) -> Error {
    match err {
        crate::repositories::Error::AlreadyExists => Error::CategoryExists,
        err => Error::Repo(err),
    }
}

pub fn list_categories<R: CategoryRepo>(repo: &R) -> Result<Vec<Category>> {
    Ok(repo.all_categories()?)
}

pub fn create_category<R: CategoryRepo>(repo: &R, name: &str) -> Result<Category> {
    let category = Category::new(check_category_name(name)?.to_owned());
    check_unique(repo, &category)?;
    log::debug!("Creating category: slug = {}", category.slug);
    repo.create_category(&category)
        .map_err(already_exists_as_conflict)?;
    Ok(category)
}

pub fn update_category<R: CategoryRepo>(repo: &R, id: &str, name: &str) -> Result<Category> {
    let mut category = repo
        .get_category(id)
        .or_not_found(Error::CategoryNotFound)?;
    category.rename(check_category_name(name)?.to_owned());
    check_unique(repo, &category)?;
    repo.update_category(&category)
        .map_err(already_exists_as_conflict)?;
    Ok(category)
}

pub fn delete_category<R: CategoryRepo>(repo: &R, id: &str) -> Result<()> {
    repo.delete_category(id)
        .or_not_found(Error::CategoryNotFound)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn create_and_list_sorted_by_name() {
        let db = MockDb::default();
        create_category(&db, "Naturaleza").unwrap();
        let c = create_category(&db, " Café & Montaña 2 ").unwrap();
        assert_eq!("Café & Montaña 2", c.name);
        assert_eq!("caf-monta-a-2", c.slug);
        let names: Vec<_> = list_categories(&db)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(vec!["Café & Montaña 2", "Naturaleza"], names);
    }

    #[test]
    fn reject_missing_name() {
        let db = MockDb::default();
        assert!(matches!(
            create_category(&db, "  "),
            Err(Error::CategoryName)
        ));
    }

    #[test]
    fn reject_duplicate_name_or_slug() {
        let db = MockDb::default();
        create_category(&db, "Historia").unwrap();
        assert!(matches!(
            create_category(&db, "Historia"),
            Err(Error::CategoryExists)
        ));
        assert!(matches!(
            create_category(&db, "HISTORIA!"),
            Err(Error::CategoryExists)
        ));
    }

    #[test]
    fn rename_category() {
        let db = MockDb::default();
        let c = create_category(&db, "Historia").unwrap();
        let other = create_category(&db, "Museos").unwrap();
        let renamed = update_category(&db, c.id.as_str(), "Historia Minera").unwrap();
        assert_eq!("historia-minera", renamed.slug);
        // Renaming to its own name is not a conflict
        assert!(update_category(&db, c.id.as_str(), "Historia Minera").is_ok());
        assert!(matches!(
            update_category(&db, other.id.as_str(), "historia minera"),
            Err(Error::CategoryExists)
        ));
        assert!(matches!(
            update_category(&db, "missing", "Algo"),
            Err(Error::CategoryNotFound)
        ));
    }

    #[test]
    fn delete_missing_category() {
        let db = MockDb::default();
        let c = create_category(&db, "Historia").unwrap();
        assert!(delete_category(&db, c.id.as_str()).is_ok());
        assert!(matches!(
            delete_category(&db, c.id.as_str()),
            Err(Error::CategoryNotFound)
        ));
    }
}
