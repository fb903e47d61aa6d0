//! Services coordinating job ("cargo") workflows.

use validator::Validate;

use crate::backend::{JobReader, JobWriter};
use crate::confirm::DeleteConfirmation;
use crate::controller::{ListRefresh, ListState};
use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::dto::list::ListPageData;
use crate::forms::jobs::JobForm;
use crate::pagination::PageSelector;
use crate::presenter::{ColumnSource, ColumnSpec, RowAction, render_table};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::UiState;

fn columns() -> Vec<ColumnSpec<Job>> {
    vec![
        ColumnSpec {
            label: "ID",
            source: ColumnSource::Field("jobId"),
        },
        ColumnSpec {
            label: "Descripción",
            source: ColumnSource::Field("description"),
        },
        ColumnSpec {
            label: "Creación",
            source: ColumnSource::Field("createdAt"),
        },
    ]
}

fn actions() -> Vec<RowAction<Job>> {
    vec![
        RowAction {
            label: "Editar",
            icon: "edit",
            href: |job| format!("/jobs/edit/{}", job.job_id),
        },
        RowAction {
            label: "Eliminar",
            icon: "trash",
            href: |job| format!("/jobs/delete/{}", job.job_id),
        },
    ]
}

/// Loads one page of the jobs table.
pub async fn load_list_page<R>(backend: &R, ui: &UiState, page: Option<usize>) -> ListPageData
where
    R: JobReader,
{
    let mut state = ListState::new();
    state
        .fetch_items(ui, page, |query| backend.list_jobs(query))
        .await;

    ListPageData {
        title: "Cargos".to_string(),
        create_url: Some("/jobs/create".to_string()),
        table: render_table(state.items(), &columns(), &actions()),
        selector: PageSelector::new(state.paginate()),
        total: state.paginate().total,
    }
}

/// Fetches a single job for the edit page.
pub async fn get_job<R>(backend: &R, id: i32) -> ServiceResult<Job>
where
    R: JobReader,
{
    backend.get_job_by_id(id).await.map_err(ServiceError::from)
}

/// Validates the form and creates a new job.
pub async fn create_job<R>(backend: &R, ui: &UiState, form: &JobForm) -> ServiceResult<ListRefresh>
where
    R: JobWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate job form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let payload = NewJob::from(form);

    ui.set_is_loading(true);
    let result = backend.create_job(&payload).await;
    match &result {
        Ok(job) => {
            ui.set_success_message(format!("Cargo {} creado correctamente", job.description));
        }
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::Required)
        .map_err(ServiceError::from)
}

/// Validates the form and saves the job description.
pub async fn update_job<R>(
    backend: &R,
    ui: &UiState,
    id: i32,
    form: &JobForm,
) -> ServiceResult<ListRefresh>
where
    R: JobWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate job form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let updates = UpdateJob::from(form);

    ui.set_is_loading(true);
    let result = backend.update_job(id, &updates).await;
    match &result {
        Ok(_) => ui.set_success_message("Cargo actualizado correctamente"),
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::NotRequired)
        .map_err(ServiceError::from)
}

/// Runs the delete-confirmation flow for one job.
pub async fn delete_job<R>(backend: &R, ui: &UiState, id: i32) -> ListRefresh
where
    R: JobWriter,
{
    let mut confirmation = DeleteConfirmation::open(id);
    confirmation
        .confirm(ui, "Cargo eliminado correctamente", |id| async move {
            backend.delete_job(id).await
        })
        .await
}
