use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{games, reviews, users};

#[derive(Debug, Queryable, Identifiable, Serialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}

/// Listing shape for `/games`: flat fields, no id.
#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}

impl From<Game> for GameSummary {
    fn from(game: Game) -> Self {
        Self {
            title: game.title,
            genre: game.genre,
            platform: game.platform,
            price: game.price,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = games)]
pub struct NewGame {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}

#[derive(Debug, Queryable, Identifiable, Associations, Serialize)]
#[diesel(belongs_to(Game))]
#[diesel(belongs_to(User))]
pub struct Review {
    pub id: i32,
    pub score: i32,
    pub comment: String,
    pub game_id: i32,
    pub user_id: i32,
}

/// Intake for `POST /reviews`. Every field is required; form values are
/// coerced to the column types during deserialization.
#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview {
    pub score: i32,
    pub comment: String,
    pub game_id: i32,
    pub user_id: i32,
}

/// Allow-list for `PATCH /reviews/{id}`. Only these four columns are
/// mutable; any other key in the body is rejected at deserialization.
#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = reviews)]
#[serde(deny_unknown_fields)]
pub struct ReviewChanges {
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub game_id: Option<i32>,
    pub user_id: Option<i32>,
}

impl ReviewChanges {
    pub fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.comment.is_none()
            && self.game_id.is_none()
            && self.user_id.is_none()
    }
}

#[derive(Debug, Queryable, Identifiable, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
}
