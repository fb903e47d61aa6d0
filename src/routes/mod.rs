//! HTTP route handlers for the console.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::ui::{UiMessage, UiState};

pub mod auth;
pub mod bills;
pub mod bookings;
pub mod clients;
pub mod jobs;
pub mod main;
pub mod products;
pub mod wallets;

/// Maps a flash level onto the alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info => "info",
        _ => "info",
    }
}

/// 303 redirect, the way every mutation route answers.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Renders a template or logs the failure and answers 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Base context carrying the operator, the nav highlight and the alerts:
/// flash messages from the previous request first, then anything this
/// request's operations left on the bridge.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    ui: &UiState,
    user: &AuthenticatedUser,
    current_page: &str,
) -> Context {
    let mut alerts: Vec<(String, &'static str)> = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect();

    if let Some(message) = ui.take_message() {
        match message {
            UiMessage::Success(text) => alerts.push((text, "success")),
            UiMessage::Error(text) => alerts.push((text, "danger")),
        }
    }

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user.sub);
    context.insert("current_page", current_page);
    context
}

/// Forwards operation messages into the flash store ahead of a redirect.
pub fn flash_ui_messages(ui: &UiState) {
    if let Some(message) = ui.take_message() {
        match message {
            UiMessage::Success(text) => FlashMessage::success(text).send(),
            UiMessage::Error(text) => FlashMessage::error(text).send(),
        }
    }
}
