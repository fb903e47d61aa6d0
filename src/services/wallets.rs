//! Services coordinating wallet workflows.

use validator::Validate;

use crate::backend::{WalletReader, WalletWriter};
use crate::confirm::DeleteConfirmation;
use crate::controller::{ListRefresh, ListState};
use crate::domain::wallet::{NewWallet, UpdateWallet, Wallet};
use crate::dto::list::ListPageData;
use crate::forms::wallets::{CreateWalletForm, EditWalletForm};
use crate::pagination::PageSelector;
use crate::presenter::{ColumnSource, ColumnSpec, RowAction, render_table};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::UiState;

fn columns() -> Vec<ColumnSpec<Wallet>> {
    vec![
        ColumnSpec {
            label: "ID",
            source: ColumnSource::Field("walletId"),
        },
        ColumnSpec {
            label: "Cliente",
            source: ColumnSource::Field("clientDni"),
        },
        ColumnSpec {
            label: "Saldo",
            source: ColumnSource::Computed(|wallet| format!("${:.2}", wallet.balance)),
        },
        ColumnSpec {
            label: "Creación",
            source: ColumnSource::Field("createdAt"),
        },
    ]
}

fn actions() -> Vec<RowAction<Wallet>> {
    vec![
        RowAction {
            label: "Editar",
            icon: "edit",
            href: |wallet| format!("/wallets/edit/{}", wallet.wallet_id),
        },
        RowAction {
            label: "Eliminar",
            icon: "trash",
            href: |wallet| format!("/wallets/delete/{}", wallet.wallet_id),
        },
    ]
}

/// Loads one page of the wallets table.
pub async fn load_list_page<R>(backend: &R, ui: &UiState, page: Option<usize>) -> ListPageData
where
    R: WalletReader,
{
    let mut state = ListState::new();
    state
        .fetch_items(ui, page, |query| backend.list_wallets(query))
        .await;

    ListPageData {
        title: "Monederos".to_string(),
        create_url: Some("/wallets/create".to_string()),
        table: render_table(state.items(), &columns(), &actions()),
        selector: PageSelector::new(state.paginate()),
        total: state.paginate().total,
    }
}

/// Fetches a single wallet for the edit page.
pub async fn get_wallet<R>(backend: &R, id: i32) -> ServiceResult<Wallet>
where
    R: WalletReader,
{
    backend
        .get_wallet_by_id(id)
        .await
        .map_err(ServiceError::from)
}

/// Validates the form and opens a wallet for a client.
pub async fn create_wallet<R>(
    backend: &R,
    ui: &UiState,
    form: &CreateWalletForm,
) -> ServiceResult<ListRefresh>
where
    R: WalletWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate wallet form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let payload = NewWallet::from(form);

    ui.set_is_loading(true);
    let result = backend.create_wallet(&payload).await;
    match &result {
        Ok(_) => ui.set_success_message("Monedero creado correctamente"),
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::Required)
        .map_err(ServiceError::from)
}

/// Validates the form and saves the wallet balance.
pub async fn update_wallet<R>(
    backend: &R,
    ui: &UiState,
    id: i32,
    form: &EditWalletForm,
) -> ServiceResult<ListRefresh>
where
    R: WalletWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate wallet form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let updates = UpdateWallet::from(form);

    ui.set_is_loading(true);
    let result = backend.update_wallet(id, &updates).await;
    match &result {
        Ok(_) => ui.set_success_message("Monedero actualizado correctamente"),
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::NotRequired)
        .map_err(ServiceError::from)
}

/// Runs the delete-confirmation flow for one wallet.
pub async fn delete_wallet<R>(backend: &R, ui: &UiState, id: i32) -> ListRefresh
where
    R: WalletWriter,
{
    let mut confirmation = DeleteConfirmation::open(id);
    confirmation
        .confirm(ui, "Monedero eliminado correctamente", |id| async move {
            backend.delete_wallet(id).await
        })
        .await
}
