use super::prelude::*;
use crate::util::query::*;
use std::{cell::RefCell, cmp::Ordering};

type RepoResult<T> = std::result::Result<T, crate::repositories::Error>;

#[derive(Default)]
pub struct MockDb {
    pub admins: RefCell<Vec<Admin>>,
    pub users: RefCell<Vec<User>>,
    pub places: RefCell<Vec<Place>>,
    pub categories: RefCell<Vec<Category>>,
    pub reviews: RefCell<Vec<Review>>,
    pub favorites: RefCell<Vec<Favorite>>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

fn sort_with_direction<T>(items: &mut [T], direction: SortDirection, cmp: impl Fn(&T, &T) -> Ordering) {
    items.sort_by(cmp);
    if direction == SortDirection::Desc {
        items.reverse();
    }
}

impl MockDb {
    fn matching_places(&self, query: &PlaceQuery) -> Vec<Place> {
        let PlaceQuery {
            text,
            category,
            tag,
            sort,
        } = query;
        let mut places: Vec<_> = self
            .places
            .borrow()
            .iter()
            .filter(|p| {
                text.as_ref().is_none_or(|t| {
                    contains_ci(&p.name, t)
                        || p.description.as_ref().is_some_and(|d| contains_ci(d, t))
                })
            })
            .filter(|p| {
                category
                    .as_ref()
                    .is_none_or(|c| p.category.as_ref().is_some_and(|pc| contains_ci(pc, c)))
            })
            .filter(|p| tag.as_ref().is_none_or(|t| p.tags.iter().any(|pt| contains_ci(pt, t))))
            .cloned()
            .collect();
        sort_with_direction(&mut places, sort.direction, |a, b| match sort.field {
            PlaceSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            PlaceSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            PlaceSortField::Name => a.name.cmp(&b.name),
            PlaceSortField::Visits => a.visits.cmp(&b.visits),
            PlaceSortField::Likes => a.likes.cmp(&b.likes),
        });
        places
    }

    fn matching_reviews(&self, query: &ReviewQuery) -> Vec<ReviewWithRefs> {
        let ReviewQuery {
            rating,
            place_id,
            user_id,
            text,
            sort,
        } = query;
        let users = self.users.borrow();
        let places = self.places.borrow();
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| rating.is_none_or(|x| i64::from(r.rating) == x))
            .filter(|r| place_id.as_ref().is_none_or(|id| r.place_id == *id))
            .filter(|r| user_id.as_ref().is_none_or(|id| r.user_id == *id))
            .map(|r| ReviewWithRefs {
                review: r.clone(),
                user: users.iter().find(|u| u.id == r.user_id).map(UserRef::from),
                place: places.iter().find(|p| p.id == r.place_id).map(PlaceRef::from),
            })
            .filter(|r| {
                let Some(t) = text else {
                    return true;
                };
                r.review.comment.as_ref().is_some_and(|c| contains_ci(c, t))
                    || r.user.as_ref().is_some_and(|u| {
                        contains_ci(&u.name, t) || contains_ci(u.email.as_str(), t)
                    })
                    || r.place.as_ref().is_some_and(|p| {
                        contains_ci(&p.name, t)
                            || p.category.as_ref().is_some_and(|c| contains_ci(c, t))
                    })
            })
            .collect();
        sort_with_direction(&mut reviews, sort.direction, |a, b| match sort.field {
            ReviewSortField::CreatedAt => a.review.created_at.cmp(&b.review.created_at),
            ReviewSortField::UpdatedAt => a.review.updated_at.cmp(&b.review.updated_at),
            ReviewSortField::Rating => a.review.rating.cmp(&b.review.rating),
        });
        reviews
    }
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: &Place) -> RepoResult<()> {
        create(&mut *self.places.borrow_mut(), place.clone(), |p| &p.id)
    }
    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(self.places.borrow_mut().as_mut_slice(), place.clone(), |p| &p.id)
    }
    fn delete_place(&self, id: &str) -> RepoResult<()> {
        delete(&mut *self.places.borrow_mut(), id, |p| &p.id)?;
        self.reviews.borrow_mut().retain(|r| r.place_id.as_str() != id);
        self.favorites.borrow_mut().retain(|f| f.place_id.as_str() != id);
        Ok(())
    }
    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(self.places.borrow().as_slice(), id, |p| &p.id)
    }
    fn get_places(&self, ids: &[&str]) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| ids.contains(&p.id.as_str()))
            .cloned()
            .collect())
    }
    fn query_places(&self, query: &PlaceQuery, pagination: &Pagination) -> RepoResult<Vec<Place>> {
        Ok(paginate(self.matching_places(query), pagination))
    }
    fn count_places(&self, query: &PlaceQuery) -> RepoResult<u64> {
        Ok(self.matching_places(query).len() as u64)
    }
    fn increment_place_visits(&self, id: &str) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(crate::repositories::Error::NotFound)?;
        place.visits += 1;
        Ok(())
    }
    fn add_place_likes(&self, id: &str, delta: i64) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(crate::repositories::Error::NotFound)?;
        place.likes = (place.likes as i64 + delta).max(0) as u64;
        Ok(())
    }
    fn list_place_refs(&self, pagination: &Pagination) -> RepoResult<Vec<PlaceRef>> {
        let mut places: Vec<_> = self.places.borrow().iter().map(PlaceRef::from).collect();
        places.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(places, pagination))
    }
}

impl CategoryRepo for MockDb {
    fn create_category(&self, category: &Category) -> RepoResult<()> {
        create(&mut *self.categories.borrow_mut(), category.clone(), |c| &c.id)
    }
    fn update_category(&self, category: &Category) -> RepoResult<()> {
        update(self.categories.borrow_mut().as_mut_slice(), category.clone(), |c| &c.id)
    }
    fn delete_category(&self, id: &str) -> RepoResult<()> {
        delete(&mut *self.categories.borrow_mut(), id, |c| &c.id)
    }
    fn get_category(&self, id: &str) -> RepoResult<Category> {
        get(self.categories.borrow().as_slice(), id, |c| &c.id)
    }
    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        let mut categories = self.categories.borrow().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

impl AdminRepo for MockDb {
    fn create_admin(&self, admin: &Admin) -> RepoResult<()> {
        create(&mut *self.admins.borrow_mut(), admin.clone(), |a| &a.id)
    }
    fn get_admin(&self, id: &str) -> RepoResult<Admin> {
        get(self.admins.borrow().as_slice(), id, |a| &a.id)
    }
    fn try_get_admin_by_username(&self, username: &str) -> RepoResult<Option<Admin>> {
        Ok(self
            .admins
            .borrow()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
    fn try_get_admin_by_email(&self, email: &EmailAddress) -> RepoResult<Option<Admin>> {
        Ok(self
            .admins
            .borrow()
            .iter()
            .find(|a| a.email == *email)
            .cloned())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut *self.users.borrow_mut(), user.clone(), |u| &u.id)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(self.users.borrow().as_slice(), id, |u| &u.id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }
    fn list_user_refs(&self, pagination: &Pagination) -> RepoResult<Vec<UserRef>> {
        let mut users: Vec<_> = self.users.borrow().iter().map(UserRef::from).collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(users, pagination))
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews
            .iter()
            .any(|r| r.user_id == review.user_id && r.place_id == review.place_id)
        {
            return Err(crate::repositories::Error::AlreadyExists);
        }
        create(&mut *reviews, review.clone(), |r| &r.id)
    }
    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update(self.reviews.borrow_mut().as_mut_slice(), review.clone(), |r| &r.id)
    }
    fn delete_review(&self, id: &str) -> RepoResult<()> {
        delete(&mut *self.reviews.borrow_mut(), id, |r| &r.id)
    }
    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get(self.reviews.borrow().as_slice(), id, |r| &r.id)
    }
    fn try_get_review_of_user_and_place(
        &self,
        user_id: &str,
        place_id: &str,
    ) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.place_id.as_str() == place_id)
            .cloned())
    }
    fn query_reviews(
        &self,
        query: &ReviewQuery,
        pagination: &Pagination,
    ) -> RepoResult<Vec<ReviewWithRefs>> {
        Ok(paginate(self.matching_reviews(query), pagination))
    }
    fn count_reviews(&self, query: &ReviewQuery) -> RepoResult<u64> {
        Ok(self.matching_reviews(query).len() as u64)
    }
    fn summarize_review_ratings(&self, query: &ReviewQuery) -> RepoResult<Vec<RatingCount>> {
        let reviews = self.matching_reviews(query);
        Ok(RatingValue::all_desc()
            .map(|rating| RatingCount {
                rating,
                count: reviews.iter().filter(|r| r.review.rating == rating).count() as u64,
            })
            .filter(|c| c.count > 0)
            .collect())
    }
}

impl FavoriteRepo for MockDb {
    fn create_favorite(&self, favorite: &Favorite) -> RepoResult<()> {
        let mut favorites = self.favorites.borrow_mut();
        if favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.place_id == favorite.place_id)
        {
            return Err(crate::repositories::Error::AlreadyExists);
        }
        create(&mut *favorites, favorite.clone(), |f| &f.id)
    }
    fn delete_favorite(&self, user_id: &str, place_id: &str) -> RepoResult<bool> {
        let mut favorites = self.favorites.borrow_mut();
        let len = favorites.len();
        favorites.retain(|f| !(f.user_id.as_str() == user_id && f.place_id.as_str() == place_id));
        Ok(favorites.len() < len)
    }
    fn try_get_favorite(&self, user_id: &str, place_id: &str) -> RepoResult<Option<Favorite>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .find(|f| f.user_id.as_str() == user_id && f.place_id.as_str() == place_id)
            .cloned())
    }
    fn favorite_place_ids_of_user(&self, user_id: &str) -> RepoResult<Vec<Id>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .rev()
            .filter(|f| f.user_id.as_str() == user_id)
            .map(|f| f.place_id.clone())
            .collect())
    }
    fn summarize_favorites(
        &self,
        place_ids: &[&str],
        viewer_id: Option<&str>,
    ) -> RepoResult<Vec<(Id, FavoriteSummary)>> {
        let favorites = self.favorites.borrow();
        let users = self.users.borrow();
        Ok(place_ids
            .iter()
            .filter_map(|place_id| {
                let of_place: Vec<_> = favorites
                    .iter()
                    .rev()
                    .filter(|f| f.place_id.as_str() == *place_id)
                    .collect();
                if of_place.is_empty() {
                    return None;
                }
                let summary = FavoriteSummary {
                    count: of_place.len() as u64,
                    sample_users: of_place
                        .iter()
                        .filter_map(|f| users.iter().find(|u| u.id == f.user_id))
                        .map(|u| u.name.clone())
                        .take(FavoriteSummary::MAX_SAMPLE_USERS)
                        .collect(),
                    is_favorite: viewer_id
                        .is_some_and(|v| of_place.iter().any(|f| f.user_id.as_str() == v)),
                };
                Some((Id::from(*place_id), summary))
            })
            .collect())
    }
}

fn create<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &Id) -> RepoResult<()> {
    if items.iter().any(|x| id(x) == id(&item)) {
        return Err(crate::repositories::Error::AlreadyExists);
    }
    items.push(item);
    Ok(())
}

fn update<T>(items: &mut [T], item: T, id: impl Fn(&T) -> &Id) -> RepoResult<()> {
    let existing = items
        .iter_mut()
        .find(|x| id(x) == id(&item))
        .ok_or(crate::repositories::Error::NotFound)?;
    *existing = item;
    Ok(())
}

fn delete<T>(items: &mut Vec<T>, item_id: &str, id: impl Fn(&T) -> &Id) -> RepoResult<()> {
    let pos = items
        .iter()
        .position(|x| id(x).as_str() == item_id)
        .ok_or(crate::repositories::Error::NotFound)?;
    items.remove(pos);
    Ok(())
}

fn get<T: Clone>(items: &[T], item_id: &str, id: impl Fn(&T) -> &Id) -> RepoResult<T> {
    items
        .iter()
        .find(|x| id(x).as_str() == item_id)
        .cloned()
        .ok_or(crate::repositories::Error::NotFound)
}
