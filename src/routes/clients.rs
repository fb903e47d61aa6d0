use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::confirm::DeleteConfirmation;
use crate::controller::ListRefresh;
use crate::forms::ConfirmDeleteForm;
use crate::forms::clients::{CreateClientForm, EditClientForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, flash_ui_messages, redirect, render_template};
use crate::services::clients as client_service;
use crate::ui::UiState;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
}

#[get("/clients")]
pub async fn list_clients(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let view = client_service::load_list_page(&backend, &ui, params.page).await;

    let mut context = base_context(&flash_messages, &ui, &user, "clients");
    context.insert("view", &view);

    render_template(&tera, "shared/list.html", &context)
}

#[get("/clients/detail/{dni}")]
pub async fn client_detail(
    path: web::Path<String>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let dni = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    match client_service::get_client(&backend, &dni).await {
        Ok(client) => {
            let mut context = base_context(&flash_messages, &ui, &user, "clients");
            context.insert("client", &client);
            render_template(&tera, "clients/detail.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load client {dni}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/clients")
        }
    }
}

#[get("/clients/create")]
pub async fn create_client_page(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ui = UiState::new();
    let context = base_context(&flash_messages, &ui, &user, "clients");
    render_template(&tera, "clients/create.html", &context)
}

#[post("/clients/create")]
pub async fn create_client(
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<CreateClientForm>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = client_service::create_client(&backend, &ui, &form).await;
    flash_ui_messages(&ui);

    match result {
        Ok(_) => redirect("/clients"),
        Err(_) => redirect("/clients/create"),
    }
}

#[get("/clients/edit/{dni}")]
pub async fn edit_client_page(
    path: web::Path<String>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let dni = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    match client_service::get_client(&backend, &dni).await {
        Ok(client) => {
            let mut context = base_context(&flash_messages, &ui, &user, "clients");
            context.insert("client", &client);
            render_template(&tera, "clients/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load client {dni}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/clients")
        }
    }
}

#[post("/clients/edit/{dni}")]
pub async fn edit_client(
    path: web::Path<String>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<EditClientForm>,
) -> impl Responder {
    let dni = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = client_service::update_client(&backend, &ui, &dni, &form).await;
    flash_ui_messages(&ui);

    match result {
        Ok(ListRefresh::Required) => redirect("/clients"),
        Ok(ListRefresh::NotRequired) => redirect(&format!("/clients/detail/{dni}")),
        Err(_) => redirect(&format!("/clients/edit/{dni}")),
    }
}

#[get("/clients/delete/{dni}")]
pub async fn delete_client_page(
    path: web::Path<String>,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let confirmation = DeleteConfirmation::open(path.into_inner());
    let ui = UiState::new();

    let mut context = base_context(&flash_messages, &ui, &user, "clients");
    if let Some(target) = confirmation.target() {
        context.insert("title", "Eliminar cliente");
        context.insert("target", target);
        context.insert("confirm_url", &format!("/clients/delete/{target}"));
    }

    render_template(&tera, "shared/confirm_delete.html", &context)
}

#[post("/clients/delete/{dni}")]
pub async fn delete_client(
    path: web::Path<String>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ConfirmDeleteForm>,
) -> impl Responder {
    let dni = path.into_inner();
    let ui = UiState::new();

    let _refresh = if form.is_confirmed() {
        let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
        client_service::delete_client(&backend, &ui, dni).await
    } else {
        DeleteConfirmation::open(dni).cancel()
    };

    flash_ui_messages(&ui);

    // Landing on the list is the unconditional post-delete refetch.
    redirect("/clients")
}
