use actix_web::web::{Data, Form, Json, Path};
use actix_web::{HttpResponse, delete, get, patch, post};
use serde_json::json;

use crate::constants::{APPLICATION_JSON, CONNECTION_POOL_ERROR};
use crate::db::{self, DBPool};
use crate::models::{NewReview, ReviewChanges};
use crate::response::record_not_found;

#[get("/reviews")]
pub async fn list(pool: Data<DBPool>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    match db::all_reviews(conn) {
        Ok(reviews) => HttpResponse::Ok()
            .content_type(APPLICATION_JSON)
            .json(reviews),
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load reviews")
        }
    }
}

#[post("/reviews")]
pub async fn create(pool: Data<DBPool>, form: Form<NewReview>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    match db::insert_review(conn, &form.into_inner()) {
        Ok(review) => HttpResponse::Created()
            .content_type(APPLICATION_JSON)
            .json(review),
        Err(err) => {
            // A bad game_id/user_id lands here as a foreign key violation.
            log::error!("Failed to insert review: {}", err);
            HttpResponse::InternalServerError().body("Failed to create review")
        }
    }
}

#[get("/reviews/{id}")]
pub async fn get(pool: Data<DBPool>, path: Path<(i32,)>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    let (review_id,) = path.into_inner();

    match db::find_review(conn, review_id) {
        Ok(Some(review)) => HttpResponse::Ok()
            .content_type(APPLICATION_JSON)
            .json(review),
        Ok(None) => record_not_found(),
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load review")
        }
    }
}

#[patch("/reviews/{id}")]
pub async fn update(
    pool: Data<DBPool>,
    path: Path<(i32,)>,
    changes: Json<ReviewChanges>,
) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    let (review_id,) = path.into_inner();

    match db::find_review(conn, review_id) {
        Ok(Some(_)) => match db::update_review(conn, review_id, &changes.into_inner()) {
            Ok(review) => HttpResponse::Ok()
                .content_type(APPLICATION_JSON)
                .json(review),
            Err(err) => {
                log::error!("Failed to update review {}: {}", review_id, err);
                HttpResponse::InternalServerError().body("Failed to update review")
            }
        },
        Ok(None) => record_not_found(),
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load review")
        }
    }
}

#[delete("/reviews/{id}")]
pub async fn delete(pool: Data<DBPool>, path: Path<(i32,)>) -> HttpResponse {
    let conn = &mut pool.get().expect(CONNECTION_POOL_ERROR);

    let (review_id,) = path.into_inner();

    match db::find_review(conn, review_id) {
        Ok(Some(_)) => match db::delete_review(conn, review_id) {
            Ok(_) => HttpResponse::Ok().json(json!({
                "delete_successful": true,
                "message": "Review deleted."
            })),
            Err(err) => {
                log::error!("Failed to delete review {}: {}", review_id, err);
                HttpResponse::InternalServerError().body("Failed to delete review")
            }
        },
        Ok(None) => record_not_found(),
        Err(err) => {
            log::error!("Database query error: {}", err);
            HttpResponse::InternalServerError().body("Failed to load review")
        }
    }
}
