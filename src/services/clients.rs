//! Services coordinating client workflows.

use validator::Validate;

use crate::backend::{ClientReader, ClientWriter};
use crate::confirm::DeleteConfirmation;
use crate::controller::{ListRefresh, ListState};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::dto::list::ListPageData;
use crate::forms::clients::{CreateClientForm, EditClientForm};
use crate::pagination::PageSelector;
use crate::presenter::{ColumnSource, ColumnSpec, RowAction, render_table};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::UiState;

/// Groups a local phone for display (`04141234567` → `0414 123 4567`).
fn format_phone(raw: &str) -> String {
    let grouped = raw.len() >= 11
        && raw.is_char_boundary(4)
        && raw.is_char_boundary(7)
        && raw.is_char_boundary(11);
    if grouped {
        format!("{} {} {}", &raw[..4], &raw[4..7], &raw[7..11])
    } else {
        raw.to_string()
    }
}

fn columns() -> Vec<ColumnSpec<Client>> {
    vec![
        ColumnSpec {
            label: "ID",
            source: ColumnSource::Field("clientId"),
        },
        ColumnSpec {
            label: "Nombre",
            source: ColumnSource::Field("name"),
        },
        ColumnSpec {
            label: "Teléfono principal",
            source: ColumnSource::Computed(|client| format_phone(&client.main_phone)),
        },
        ColumnSpec {
            label: "Teléfono secundario",
            source: ColumnSource::Computed(|client| format_phone(&client.secondary_phone)),
        },
        ColumnSpec {
            label: "Creación",
            source: ColumnSource::Field("createdAt"),
        },
    ]
}

fn actions() -> Vec<RowAction<Client>> {
    vec![
        RowAction {
            label: "Detalle",
            icon: "eye",
            href: |client| format!("/clients/detail/{}", client.dni),
        },
        RowAction {
            label: "Editar",
            icon: "edit",
            href: |client| format!("/clients/edit/{}", client.dni),
        },
        RowAction {
            label: "Eliminar",
            icon: "trash",
            href: |client| format!("/clients/delete/{}", client.dni),
        },
    ]
}

/// Loads one page of the clients table.
pub async fn load_list_page<R>(backend: &R, ui: &UiState, page: Option<usize>) -> ListPageData
where
    R: ClientReader,
{
    let mut state = ListState::new();
    state
        .fetch_items(ui, page, |query| backend.list_clients(query))
        .await;

    ListPageData {
        title: "Clientes".to_string(),
        create_url: Some("/clients/create".to_string()),
        table: render_table(state.items(), &columns(), &actions()),
        selector: PageSelector::new(state.paginate()),
        total: state.paginate().total,
    }
}

/// Fetches a single client for the detail and edit pages.
pub async fn get_client<R>(backend: &R, dni: &str) -> ServiceResult<Client>
where
    R: ClientReader,
{
    backend
        .get_client_by_dni(dni)
        .await
        .map_err(ServiceError::from)
}

/// Validates the form and registers a new client.
pub async fn create_client<R>(
    backend: &R,
    ui: &UiState,
    form: &CreateClientForm,
) -> ServiceResult<ListRefresh>
where
    R: ClientWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate client form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let payload = NewClient::from(form);

    ui.set_is_loading(true);
    let result = backend.create_client(&payload).await;
    match &result {
        Ok(client) => ui.set_success_message(format!("Cliente {} creado correctamente", client.name)),
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::Required)
        .map_err(ServiceError::from)
}

/// Validates the form and saves the client's editable fields.
pub async fn update_client<R>(
    backend: &R,
    ui: &UiState,
    dni: &str,
    form: &EditClientForm,
) -> ServiceResult<ListRefresh>
where
    R: ClientWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate client form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let updates = UpdateClient::from(form);

    ui.set_is_loading(true);
    let result = backend.update_client(dni, &updates).await;
    match &result {
        Ok(_) => ui.set_success_message("Cliente actualizado correctamente"),
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::NotRequired)
        .map_err(ServiceError::from)
}

/// Runs the delete-confirmation flow for one client.
pub async fn delete_client<R>(backend: &R, ui: &UiState, dni: String) -> ListRefresh
where
    R: ClientWriter,
{
    let mut confirmation = DeleteConfirmation::open(dni);
    confirmation
        .confirm(ui, "Cliente eliminado correctamente", |dni| async move {
            backend.delete_client(&dni).await
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    use crate::backend::errors::BackendError;
    use crate::backend::{ListPage, ListQuery};
    use crate::backend::mock::MockBackend;
    use crate::pagination::Paginate;
    use crate::ui::UiMessage;

    fn client(dni: &str, name: &str) -> Client {
        Client {
            dni: dni.to_string(),
            name: name.to_string(),
            main_phone: "04141234567".to_string(),
            secondary_phone: String::new(),
            created_at: Default::default(),
        }
    }

    #[actix_web::test]
    async fn list_page_renders_one_row_per_client() {
        let mut backend = MockBackend::new();
        backend
            .expect_list_clients()
            .withf(|query: &ListQuery| query.page == 1 && query.per_page == 5)
            .returning(|_| {
                Ok(ListPage {
                    items: vec![client("1", "Alice"), client("2", "Bob")],
                    paginate: Paginate::new(12, 1, 5),
                })
            });

        let ui = UiState::new();
        let view = load_list_page(&backend, &ui, None).await;

        assert_eq!(view.title, "Clientes");
        assert_eq!(view.total, 12);
        assert_eq!(view.table.rows.len(), 2);
        assert_eq!(view.table.rows[0].cells[0], "1");
        assert_eq!(view.table.rows[0].cells[2], "0414 123 4567");
        assert_eq!(view.selector.pages, vec![Some(1), Some(2), Some(3)]);
        assert!(!ui.is_loading());
    }

    #[actix_web::test]
    async fn list_page_failure_surfaces_the_backend_message() {
        let mut backend = MockBackend::new();
        backend.expect_list_clients().returning(|_| {
            Err(BackendError::Api {
                status: StatusCode::NOT_FOUND,
                message: "not found".to_string(),
            })
        });

        let ui = UiState::new();
        let view = load_list_page(&backend, &ui, Some(2)).await;

        assert!(view.table.rows.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(ui.message(), Some(UiMessage::Error("not found".to_string())));
        assert!(!ui.is_loading());
    }

    #[actix_web::test]
    async fn create_rejects_an_invalid_form_without_calling_the_backend() {
        let backend = MockBackend::new();
        let ui = UiState::new();
        let form = CreateClientForm {
            dni: String::new(),
            name: "Alice".into(),
            main_phone: String::new(),
            secondary_phone: String::new(),
        };

        let result = create_client(&backend, &ui, &form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert_eq!(
            ui.message(),
            Some(UiMessage::Error("Formulario inválido".to_string()))
        );
    }

    #[actix_web::test]
    async fn create_requires_a_list_refresh() {
        let mut backend = MockBackend::new();
        backend
            .expect_create_client()
            .times(1)
            .returning(|payload: &NewClient| {
                Ok(Client {
                    dni: payload.dni.clone(),
                    name: payload.name.clone(),
                    main_phone: payload.main_phone.clone(),
                    secondary_phone: payload.secondary_phone.clone(),
                    created_at: Default::default(),
                })
            });

        let ui = UiState::new();
        let form = CreateClientForm {
            dni: "12345678".into(),
            name: "Alice".into(),
            main_phone: String::new(),
            secondary_phone: String::new(),
        };

        let refresh = create_client(&backend, &ui, &form).await.unwrap();

        assert_eq!(refresh, ListRefresh::Required);
        assert_eq!(
            ui.message(),
            Some(UiMessage::Success(
                "Cliente Alice creado correctamente".to_string()
            ))
        );
        assert!(!ui.is_loading());
    }

    #[actix_web::test]
    async fn update_does_not_require_a_list_refresh() {
        let mut backend = MockBackend::new();
        backend
            .expect_update_client()
            .times(1)
            .returning(|dni: &str, _: &UpdateClient| Ok(client(dni, "Alice")));

        let ui = UiState::new();
        let form = EditClientForm {
            name: "Alice".into(),
            main_phone: String::new(),
            secondary_phone: String::new(),
        };

        let refresh = update_client(&backend, &ui, "12345678", &form).await.unwrap();

        assert_eq!(refresh, ListRefresh::NotRequired);
    }

    #[actix_web::test]
    async fn delete_calls_the_backend_once_and_requires_a_refresh() {
        let mut backend = MockBackend::new();
        backend
            .expect_delete_client()
            .times(1)
            .returning(|_: &str| Ok(()));

        let ui = UiState::new();
        let refresh = delete_client(&backend, &ui, "12345678".to_string()).await;

        assert_eq!(refresh, ListRefresh::Required);
        assert_eq!(
            ui.message(),
            Some(UiMessage::Success(
                "Cliente eliminado correctamente".to_string()
            ))
        );
        assert!(!ui.is_loading());
    }

    #[test]
    fn phone_grouping_matches_the_table_format() {
        assert_eq!(format_phone("04141234567"), "0414 123 4567");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("555"), "555");
    }
}
