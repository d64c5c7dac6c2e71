pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, user_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{id::*, location::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = Some(desc.into());
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = Some(category.into());
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.place.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.place.images = images.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn location(mut self, lat: f64, lng: f64) -> Self {
            self.place.location = Some(Location { lat, lng });
            self
        }
        pub fn visits(mut self, visits: u64) -> Self {
            self.place.visits = visits;
            self
        }
        pub fn likes(mut self, likes: u64) -> Self {
            self.place.likes = likes;
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.place.created_at = Timestamp::from_millis(millis);
            self.place.updated_at = self.place.created_at;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            let now = Timestamp::now();
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    name: "".into(),
                    description: None,
                    category: None,
                    tags: vec![],
                    images: vec![],
                    location: None,
                    map_link: None,
                    created_by: None,
                    visits: 0,
                    likes: 0,
                    active: true,
                    featured: false,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn password(mut self, pw: &str) -> Self {
            self.user.password = pw.parse().unwrap();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    password: Password::from_hash(""),
                    created_at: Timestamp::now(),
                },
            }
        }
    }

    #[test]
    fn build_user_with_hashed_password() {
        let user = User::build().name("Ana").password("secret").finish();
        assert_eq!("Ana", user.name);
        assert!(user.password.verify("secret"));
    }
}
