//! Read-only catalog endpoints of the development API.
//!
//! - `GET /categories`: the two activation tiers.
//! - `GET /languages`: the bundled translation tree, as the client expects it.

use actix_web::{HttpResponse, Responder};
use common::i18n::BUNDLED_TRANSLATIONS_JSON;
use common::model::category::Category;

pub async fn categories() -> impl Responder {
    HttpResponse::Ok().json(dev_categories())
}

pub async fn languages() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(BUNDLED_TRANSLATIONS_JSON)
}

fn dev_categories() -> Vec<Category> {
    vec![
        Category { id: 1, name: "Standard".to_string() },
        Category { id: 2, name: "Premium".to_string() },
    ]
}
