//! Server-rendered administrative console for the clientela back office.
//!
//! Every page is a thin view over the remote business API: tables, detail
//! pages and forms are rendered here, while all records live behind the
//! bearer-authenticated HTTP backend.

pub mod backend;
pub mod confirm;
pub mod controller;
pub mod domain;
pub mod pagination;
pub mod presenter;
pub mod ui;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware as actix_middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes::auth::{logout, signin, signin_page};
    use crate::routes::bills::{bill_detail, delete_bill, delete_bill_page, list_bills};
    use crate::routes::bookings::{booking_detail, list_bookings};
    use crate::routes::clients::{
        client_detail, create_client, create_client_page, delete_client, delete_client_page,
        edit_client, edit_client_page, list_clients,
    };
    use crate::routes::jobs::{
        create_job, create_job_page, delete_job, delete_job_page, edit_job, edit_job_page,
        list_jobs,
    };
    use crate::routes::main::show_index;
    use crate::routes::products::{
        create_product, create_product_page, delete_product, delete_product_page, edit_product,
        edit_product_page, list_products, product_detail,
    };
    use crate::routes::wallets::{
        create_wallet, create_wallet_page, delete_wallet, delete_wallet_page, edit_wallet,
        edit_wallet_page, list_wallets,
    };

    /// Builds and runs the Actix-Web HTTP server using the provided
    /// configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Keys and stores for identity, sessions, and flash messages.
        let secret_key = Key::from(server_config.secret.as_bytes());

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        // One shared client; per-request backends borrow its pool.
        let http_client = reqwest::Client::new();

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(Some(format!(".{}", server_config.domain)))
                        .build(),
                )
                .wrap(actix_middleware::Compress::default())
                .wrap(actix_middleware::Logger::default())
                .service(Files::new("/assets", server_config.assets_dir.clone()))
                .service(signin_page)
                .service(signin)
                .service(
                    web::scope("")
                        .wrap(RedirectUnauthorized)
                        .service(show_index)
                        .service(logout)
                        .service(list_clients)
                        .service(client_detail)
                        .service(create_client_page)
                        .service(create_client)
                        .service(edit_client_page)
                        .service(edit_client)
                        .service(delete_client_page)
                        .service(delete_client)
                        .service(list_bills)
                        .service(bill_detail)
                        .service(delete_bill_page)
                        .service(delete_bill)
                        .service(list_jobs)
                        .service(create_job_page)
                        .service(create_job)
                        .service(edit_job_page)
                        .service(edit_job)
                        .service(delete_job_page)
                        .service(delete_job)
                        .service(list_wallets)
                        .service(create_wallet_page)
                        .service(create_wallet)
                        .service(edit_wallet_page)
                        .service(edit_wallet)
                        .service(delete_wallet_page)
                        .service(delete_wallet)
                        .service(list_products)
                        .service(product_detail)
                        .service(create_product_page)
                        .service(create_product)
                        .service(edit_product_page)
                        .service(edit_product)
                        .service(delete_product_page)
                        .service(delete_product)
                        .service(list_bookings)
                        .service(booking_detail),
                )
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(http_client.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::run;
