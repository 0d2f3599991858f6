use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;

use crate::models::{Game, NewReview, Review, ReviewChanges, User};
use crate::schema::{games, reviews, users};

pub type DBPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DBPooledConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite ships with foreign keys off; reviews rely on them.
#[derive(Debug)]
pub struct ForeignKeysEnabled;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ForeignKeysEnabled {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map(|_| ())
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn init_pool(database_url: &str) -> Result<DBPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .connection_customizer(Box::new(ForeignKeysEnabled))
        .build(manager)
}

pub fn all_games(conn: &mut SqliteConnection) -> QueryResult<Vec<Game>> {
    games::table.order(games::id.asc()).load(conn)
}

pub fn find_game(conn: &mut SqliteConnection, game_id: i32) -> QueryResult<Option<Game>> {
    games::table.find(game_id).first(conn).optional()
}

pub fn all_reviews(conn: &mut SqliteConnection) -> QueryResult<Vec<Review>> {
    reviews::table.order(reviews::id.asc()).load(conn)
}

pub fn find_review(conn: &mut SqliteConnection, review_id: i32) -> QueryResult<Option<Review>> {
    reviews::table.find(review_id).first(conn).optional()
}

pub fn insert_review(conn: &mut SqliteConnection, new_review: &NewReview) -> QueryResult<Review> {
    diesel::insert_into(reviews::table)
        .values(new_review)
        .get_result(conn)
}

pub fn update_review(
    conn: &mut SqliteConnection,
    review_id: i32,
    changes: &ReviewChanges,
) -> QueryResult<Review> {
    // An all-None changeset is a no-op; diesel refuses to build the UPDATE.
    if changes.is_empty() {
        return reviews::table.find(review_id).first(conn);
    }

    diesel::update(reviews::table.find(review_id))
        .set(changes)
        .get_result(conn)
}

pub fn delete_review(conn: &mut SqliteConnection, review_id: i32) -> QueryResult<usize> {
    diesel::delete(reviews::table.find(review_id)).execute(conn)
}

pub fn all_users(conn: &mut SqliteConnection) -> QueryResult<Vec<User>> {
    users::table.order(users::id.asc()).load(conn)
}
