use actix_web::web::Data;
use actix_web::{HttpResponse, get};

use crate::constants::CONNECTION_POOL_ERROR;
use crate::db::{self, DBPool};

#[get("/users")]
pub async fn list(pool: Data<DBPool>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    match db::all_users(conn) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load users")
        }
    }
}
