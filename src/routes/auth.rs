use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};
use validator::Validate;

use crate::backend::http;
use crate::forms::auth::SignInForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{alert_level_to_str, redirect, render_template};

#[get("/auth/signin")]
pub async fn signin_page(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", "");
    context.insert("current_page", "signin");

    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    request: HttpRequest,
    http_client: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    if form.validate().is_err() {
        FlashMessage::error("Credenciales inválidas").send();
        return redirect("/auth/signin");
    }

    let response = match http::login(
        &http_client,
        &server_config.api_base_url,
        &form.email,
        &form.password,
    )
    .await
    {
        Ok(response) => response,
        Err(err) => {
            FlashMessage::error(err.message()).send();
            return redirect("/auth/signin");
        }
    };

    let user = AuthenticatedUser::new(&form.email, response.token);
    let jwt = match user.to_jwt(&server_config.secret) {
        Ok(jwt) => jwt,
        Err(err) => {
            log::error!("Failed to sign session claims: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if let Err(err) = Identity::login(&request.extensions(), jwt) {
        log::error!("Failed to establish session: {err}");
        return HttpResponse::InternalServerError().finish();
    }

    redirect("/")
}

#[post("/auth/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/auth/signin")
}
