use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;
use crate::ui::UiState;

#[get("/")]
pub async fn show_index(
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let totals = main_service::load_dashboard(&backend, &ui).await;

    let mut context = base_context(&flash_messages, &ui, &user, "index");
    context.insert("totals", &totals);

    render_template(&tera, "main/index.html", &context)
}
