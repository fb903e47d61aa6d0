use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::confirm::DeleteConfirmation;
use crate::forms::ConfirmDeleteForm;
use crate::forms::wallets::{CreateWalletForm, EditWalletForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, flash_ui_messages, redirect, render_template};
use crate::services::wallets as wallet_service;
use crate::ui::UiState;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
}

#[get("/wallets")]
pub async fn list_wallets(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let view = wallet_service::load_list_page(&backend, &ui, params.page).await;

    let mut context = base_context(&flash_messages, &ui, &user, "wallets");
    context.insert("view", &view);

    render_template(&tera, "shared/list.html", &context)
}

#[get("/wallets/create")]
pub async fn create_wallet_page(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ui = UiState::new();
    let context = base_context(&flash_messages, &ui, &user, "wallets");
    render_template(&tera, "wallets/create.html", &context)
}

#[post("/wallets/create")]
pub async fn create_wallet(
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<CreateWalletForm>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = wallet_service::create_wallet(&backend, &ui, &form).await;
    flash_ui_messages(&ui);

    match result {
        Ok(_) => redirect("/wallets"),
        Err(_) => redirect("/wallets/create"),
    }
}

#[get("/wallets/edit/{id}")]
pub async fn edit_wallet_page(
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

    match wallet_service::get_wallet(&backend, id).await {
        Ok(wallet) => {
            let mut context = base_context(&flash_messages, &ui, &user, "wallets");
            context.insert("wallet", &wallet);
            render_template(&tera, "wallets/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load wallet {id}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/wallets")
        }
    }
}

#[post("/wallets/edit/{id}")]
pub async fn edit_wallet(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<EditWalletForm>,
) -> impl Responder {
    let id = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = wallet_service::update_wallet(&backend, &ui, id, &form).await;
    flash_ui_messages(&ui);

    match result {
        // Wallets have no detail page; either refresh outcome lands on the list.
        Ok(_) => redirect("/wallets"),
        Err(_) => redirect(&format!("/wallets/edit/{id}")),
    }
}

#[get("/wallets/delete/{id}")]
pub async fn delete_wallet_page(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let confirmation = DeleteConfirmation::open(path.into_inner());
    let ui = UiState::new();

    let mut context = base_context(&flash_messages, &ui, &user, "wallets");
    if let Some(target) = confirmation.target() {
        context.insert("title", "Eliminar monedero");
        context.insert("target", target);
        context.insert("confirm_url", &format!("/wallets/delete/{target}"));
    }

    render_template(&tera, "shared/confirm_delete.html", &context)
}

#[post("/wallets/delete/{id}")]
pub async fn delete_wallet(
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
        wallet_service::delete_wallet(&backend, &ui, id).await
    } else {
        DeleteConfirmation::open(id).cancel()
    };

    flash_ui_messages(&ui);

    redirect("/wallets")
}
