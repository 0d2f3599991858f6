use std::{env, io};

use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware};

use game_review_api::{db, routes};

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "actix_web=debug,actix_server=info");
        }
    }

    env_logger::init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "app.db".to_string());
    let pool = db::init_pool(&database_url).expect("failed to create DB pool");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(pool.clone()))
            .wrap(Cors::permissive())
            // enable logger - always register actix-web Logger middleware last
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind("0.0.0.0:5555")?
    .run()
    .await
}
