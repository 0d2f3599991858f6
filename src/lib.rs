use actix_web::web::ServiceConfig;
use actix_web::{HttpResponse, get};

pub mod constants;
pub mod db;
pub mod games;
pub mod models;
pub mod response;
pub mod reviews;
pub mod schema;
pub mod users;

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Index for Game/Review/User API")
}

/// Registers every HTTP handler; shared between the server and the tests.
pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(index)
        .service(games::list)
        .service(games::get)
        .service(reviews::list)
        .service(reviews::create)
        .service(reviews::get)
        .service(reviews::update)
        .service(reviews::delete)
        .service(users::list);
}
