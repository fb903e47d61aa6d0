use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::confirm::DeleteConfirmation;
use crate::forms::ConfirmDeleteForm;
use crate::forms::jobs::JobForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, flash_ui_messages, redirect, render_template};
use crate::services::jobs as job_service;
use crate::ui::UiState;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<usize>,
}

#[get("/jobs")]
pub async fn list_jobs(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let view = job_service::load_list_page(&backend, &ui, params.page).await;

    let mut context = base_context(&flash_messages, &ui, &user, "jobs");
    context.insert("view", &view);

    render_template(&tera, "shared/list.html", &context)
}

#[get("/jobs/create")]
pub async fn create_job_page(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ui = UiState::new();
    let context = base_context(&flash_messages, &ui, &user, "jobs");
    render_template(&tera, "jobs/create.html", &context)
}

#[post("/jobs/create")]
pub async fn create_job(
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<JobForm>,
) -> impl Responder {
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = job_service::create_job(&backend, &ui, &form).await;
    flash_ui_messages(&ui);

    match result {
        Ok(_) => redirect("/jobs"),
        Err(_) => redirect("/jobs/create"),
    }
}

#[get("/jobs/edit/{id}")]
pub async fn edit_job_page(
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

    match job_service::get_job(&backend, id).await {
        Ok(job) => {
            let mut context = base_context(&flash_messages, &ui, &user, "jobs");
            context.insert("job", &job);
            render_template(&tera, "jobs/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load job {id}: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/jobs")
        }
    }
}

#[post("/jobs/edit/{id}")]
pub async fn edit_job(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<JobForm>,
) -> impl Responder {
    let id = path.into_inner();
    let backend = HttpBackend::new(&http_client, &server_config.api_base_url, &user.token);
    let ui = UiState::new();

    let result = job_service::update_job(&backend, &ui, id, &form).await;
    flash_ui_messages(&ui);

    match result {
        // Jobs have no detail page; either refresh outcome lands on the list.
        Ok(_) => redirect("/jobs"),
        Err(_) => redirect(&format!("/jobs/edit/{id}")),
    }
}

#[get("/jobs/delete/{id}")]
pub async fn delete_job_page(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let confirmation = DeleteConfirmation::open(path.into_inner());
    let ui = UiState::new();

    let mut context = base_context(&flash_messages, &ui, &user, "jobs");
    if let Some(target) = confirmation.target() {
        context.insert("title", "Eliminar cargo");
        context.insert("target", target);
        context.insert("confirm_url", &format!("/jobs/delete/{target}"));
    }

    render_template(&tera, "shared/confirm_delete.html", &context)
}

#[post("/jobs/delete/{id}")]
pub async fn delete_job(
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
        job_service::delete_job(&backend, &ui, id).await
    } else {
        DeleteConfirmation::open(id).cancel()
    };

    flash_ui_messages(&ui);

    redirect("/jobs")
}
