use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::confirm::DeleteConfirmation;
use crate::controller::ListRefresh;
use crate::forms::ConfirmDeleteForm;
use crate::forms::products::ProductForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, flash_ui_messages, redirect, render_template};
use crate::services::products as product_service;
use crate::ui::UiState;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let view = product_service::load_list_page(&backend, &ui, params.page).await;

    let mut context = base_context(&flash_messages, &ui, &user, "products");
    context.insert("view", &view);

    render_template(&tera, "shared/list.html", &context)
}

#[get("/products/detail/{id}")]
pub async fn product_detail(
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

    match product_service::get_product(&backend, id).await {
        Ok(product) => {
            let mut context = base_context(&flash_messages, &ui, &user, "products");
            context.insert("product", &product);
            render_template(&tera, "products/detail.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load product {id}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/products")
        }
    }
}

#[get("/products/create")]
pub async fn create_product_page(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ui = UiState::new();
    let context = base_context(&flash_messages, &ui, &user, "products");
    render_template(&tera, "products/create.html", &context)
}

#[post("/products/create")]
pub async fn create_product(
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = product_service::create_product(&backend, &ui, &form).await;
    flash_ui_messages(&ui);

    match result {
        Ok(_) => redirect("/products"),
        Err(_) => redirect("/products/create"),
    }
}

#[get("/products/edit/{id}")]
pub async fn edit_product_page(
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

    match product_service::get_product(&backend, id).await {
        Ok(product) => {
            let mut context = base_context(&flash_messages, &ui, &user, "products");
            context.insert("product", &product);
            render_template(&tera, "products/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load product {id}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/products")
        }
    }
}

#[post("/products/edit/{id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let id = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = product_service::update_product(&backend, &ui, id, &form).await;
    flash_ui_messages(&ui);

    match result {
        Ok(ListRefresh::Required) => redirect("/products"),
        Ok(ListRefresh::NotRequired) => redirect(&format!("/products/detail/{id}")),
        Err(_) => redirect(&format!("/products/edit/{id}")),
    }
}

#[get("/products/delete/{id}")]
pub async fn delete_product_page(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let confirmation = DeleteConfirmation::open(path.into_inner());
    let ui = UiState::new();

    let mut context = base_context(&flash_messages, &ui, &user, "products");
    if let Some(target) = confirmation.target() {
        context.insert("title", "Eliminar producto");
        context.insert("target", target);
        context.insert("confirm_url", &format!("/products/delete/{target}"));
    }

    render_template(&tera, "shared/confirm_delete.html", &context)
}

#[post("/products/delete/{id}")]
pub async fn delete_product(
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
        product_service::delete_product(&backend, &ui, id).await
    } else {
        DeleteConfirmation::open(id).cancel()
    };

    flash_ui_messages(&ui);

    redirect("/products")
}
