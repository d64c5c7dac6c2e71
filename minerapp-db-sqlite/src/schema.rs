///////////////////////////////////////////////////////////////////////
// Accounts
///////////////////////////////////////////////////////////////////////

table! {
    admins (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
        created_at -> BigInt,
    }
}

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        email -> Text,
        password -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Categories
///////////////////////////////////////////////////////////////////////

table! {
    categories (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        slug -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        category -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        map_link -> Nullable<Text>,
        created_by -> Nullable<Text>,
        visits -> BigInt,
        likes -> BigInt,
        active -> Bool,
        featured -> Bool,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    place_tags (parent_rowid, position) {
        parent_rowid -> BigInt,
        position -> BigInt,
        tag -> Text,
    }
}

joinable!(place_tags -> places (parent_rowid));

table! {
    place_images (parent_rowid, position) {
        parent_rowid -> BigInt,
        position -> BigInt,
        path -> Text,
    }
}

joinable!(place_images -> places (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Reviews & favorites
///////////////////////////////////////////////////////////////////////

table! {
    reviews (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> BigInt,
        place_rowid -> BigInt,
        rating -> SmallInt,
        // An empty string means no comment
        comment -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(reviews -> users (user_rowid));
joinable!(reviews -> places (place_rowid));

table! {
    favorites (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> BigInt,
        place_rowid -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(favorites -> users (user_rowid));
joinable!(favorites -> places (place_rowid));

allow_tables_to_appear_in_same_query!(
    admins,
    users,
    categories,
    places,
    place_tags,
    place_images,
    reviews,
    favorites,
);
