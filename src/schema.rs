diesel::table! {
    games (id) {
        id -> Integer,
        title -> Text,
        genre -> Text,
        platform -> Text,
        price -> Double,
    }
}

diesel::table! {
    reviews (id) {
        id -> Integer,
        score -> Integer,
        comment -> Text,
        game_id -> Integer,
        user_id -> Integer,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::joinable!(reviews -> games (game_id));
diesel::joinable!(reviews -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(
    games,
    reviews,
    users,
);
