use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;
use tera::{Context, Tera};

use clientela_admin::routes::{alert_level_to_str, redirect, render_template};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn redirect_answers_303_with_the_location() {
    let response = redirect("/clients");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/clients"
    );
}

#[test]
fn render_template_renders_a_known_template() {
    let mut tera = Tera::default();
    tera.add_raw_template("hello.html", "Hola {{ name }}")
        .unwrap();

    let mut context = Context::new();
    context.insert("name", "Alice");

    let response = render_template(&tera, "hello.html", &context);
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn render_template_answers_500_on_a_missing_template() {
    let tera = Tera::default();
    let response = render_template(&tera, "missing.html", &Context::new());
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
