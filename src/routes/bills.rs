use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::confirm::DeleteConfirmation;
use crate::forms::ConfirmDeleteForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, flash_ui_messages, redirect, render_template};
use crate::services::bills as bill_service;
use crate::ui::UiState;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
}

#[get("/bills")]
pub async fn list_bills(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let view = bill_service::load_list_page(&backend, &ui, params.page).await;

    let mut context = base_context(&flash_messages, &ui, &user, "bills");
    context.insert("view", &view);

    render_template(&tera, "shared/list.html", &context)
}

#[get("/bills/detail/{id}")]
pub async fn bill_detail(
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

    match bill_service::get_bill(&backend, id).await {
        Ok(bill) => {
            let mut context = base_context(&flash_messages, &ui, &user, "bills");
            context.insert("bill", &bill);
            render_template(&tera, "bills/detail.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load bill {id}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/bills")
        }
    }
}

#[get("/bills/delete/{id}")]
pub async fn delete_bill_page(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let confirmation = DeleteConfirmation::open(path.into_inner());
    let ui = UiState::new();

    let mut context = base_context(&flash_messages, &ui, &user, "bills");
    if let Some(target) = confirmation.target() {
        context.insert("title", "Eliminar factura");
        context.insert("target", target);
        context.insert("confirm_url", &format!("/bills/delete/{target}"));
    }

    render_template(&tera, "shared/confirm_delete.html", &context)
}

#[post("/bills/delete/{id}")]
pub async fn delete_bill(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ConfirmDeleteForm>,
) -> impl Responder {
    let id = path.into_inner();
    let ui = UiState::new();

    let _refresh = if form.is_confirmed() {
        let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
        bill_service::delete_bill(&backend, &ui, id).await
    } else {
        DeleteConfirmation::open(id).cancel()
    };

    flash_ui_messages(&ui);

    redirect("/bills")
}
