use actix_web::web::{Data, Path};
use actix_web::{HttpResponse, get};

use crate::constants::CONNECTION_POOL_ERROR;
use crate::db::{self, DBPool};
use crate::models::GameSummary;
use crate::response::record_not_found;

#[get("/games")]
pub async fn list(pool: Data<DBPool>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    match db::all_games(conn) {
        Ok(games) => {
            let games: Vec<GameSummary> = games.into_iter().map(GameSummary::from).collect();
            HttpResponse::Ok().json(games)
        }
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load games")
        }
    }
}

#[get("/games/{id}")]
pub async fn get(pool: Data<DBPool>, path: Path<(i32,)>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    let (game_id,) = path.into_inner();

    match db::find_game(conn, game_id) {
        Ok(Some(game)) => HttpResponse::Ok().json(game),
        Ok(None) => record_not_found(),
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load game")
        }
    }
}
