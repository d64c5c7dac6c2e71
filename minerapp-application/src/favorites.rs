use super::*;

/// Returns the favorite and whether it has been newly created.
pub fn add_favorite(
    connections: &sqlite::Connections,
    user_id: &Id,
    place_id: &str,
) -> Result<(Favorite, bool)> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::add_favorite(conn, user_id, place_id))?)
}

/// Returns `false` if the place was not a favorite of the user.
pub fn remove_favorite(connections: &sqlite::Connections, user_id: &Id, place_id: &str) -> Result<bool> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::remove_favorite(conn, user_id, place_id))?)
}
