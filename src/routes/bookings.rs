use actix_web::{Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::bookings as booking_service;
use crate::ui::UiState;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
}

#[get("/bookings")]
pub async fn list_bookings(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let view = booking_service::load_list_page(&backend, &ui, params.page).await;

    let mut context = base_context(&flash_messages, &ui, &user, "bookings");
    context.insert("view", &view);

    render_template(&tera, "shared/list.html", &context)
}

#[get("/bookings/detail/{id}")]
pub async fn booking_detail(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    match booking_service::get_booking(&backend, id).await {
        Ok(booking) => {
            let mut context = base_context(&flash_messages, &ui, &user, "bookings");
            context.insert("booking", &booking);
            render_template(&tera, "bookings/detail.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load booking {id}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/bookings")
        }
    }
}
