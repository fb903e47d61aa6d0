//! Services coordinating product workflows.

use validator::Validate;

use crate::backend::{ProductReader, ProductWriter};
use crate::confirm::DeleteConfirmation;
use crate::controller::{ListRefresh, ListState};
use crate::domain::product::{Product, ProductPayload};
use crate::dto::list::ListPageData;
use crate::forms::products::ProductForm;
use crate::pagination::PageSelector;
use crate::presenter::{ColumnSource, ColumnSpec, RowAction, render_table};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::UiState;

fn columns() -> Vec<ColumnSpec<Product>> {
    vec![
        ColumnSpec {
            label: "ID",
            source: ColumnSource::Field("productId"),
        },
        ColumnSpec {
            label: "Nombre",
            source: ColumnSource::Field("name"),
        },
        ColumnSpec {
            label: "Precio",
            source: ColumnSource::Computed(|product| format!("${:.2}", product.price)),
        },
        ColumnSpec {
            label: "Existencias",
            source: ColumnSource::Field("quantity"),
        },
        ColumnSpec {
            label: "Ganancia",
            source: ColumnSource::Computed(|product| format!("${:.2}", product.profit)),
        },
        ColumnSpec {
            label: "Creación",
            source: ColumnSource::Field("createdAt"),
        },
    ]
}

fn actions() -> Vec<RowAction<Product>> {
    vec![
        RowAction {
            label: "Detalle",
            icon: "eye",
            href: |product| format!("/products/detail/{}", product.product_id),
        },
        RowAction {
            label: "Editar",
            icon: "edit",
            href: |product| format!("/products/edit/{}", product.product_id),
        },
        RowAction {
            label: "Eliminar",
            icon: "trash",
            href: |product| format!("/products/delete/{}", product.product_id),
        },
    ]
}

/// Loads one page of the products table.
pub async fn load_list_page<R>(backend: &R, ui: &UiState, page: Option<usize>) -> ListPageData
where
    R: ProductReader,
{
    let mut state = ListState::new();
    state
        .fetch_items(ui, page, |query| backend.list_products(query))
        .await;

    ListPageData {
        title: "Productos".to_string(),
        create_url: Some("/products/create".to_string()),
        table: render_table(state.items(), &columns(), &actions()),
        selector: PageSelector::new(state.paginate()),
        total: state.paginate().total,
    }
}

/// Fetches a single product for the detail and edit pages.
pub async fn get_product<R>(backend: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader,
{
    backend
        .get_product_by_id(id)
        .await
        .map_err(ServiceError::from)
}

/// Validates the form and creates a new product.
pub async fn create_product<R>(
    backend: &R,
    ui: &UiState,
    form: &ProductForm,
) -> ServiceResult<ListRefresh>
where
    R: ProductWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate product form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let payload = ProductPayload::from(form);

    ui.set_is_loading(true);
    let result = backend.create_product(&payload).await;
    match &result {
        Ok(product) => {
            ui.set_success_message(format!("Producto {} creado correctamente", product.name));
        }
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::Required)
        .map_err(ServiceError::from)
}

/// Validates the form and saves the product's name and price.
pub async fn update_product<R>(
    backend: &R,
    ui: &UiState,
    id: i32,
    form: &ProductForm,
) -> ServiceResult<ListRefresh>
where
    R: ProductWriter,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate product form: {err}");
        ui.set_error_message("Formulario inválido");
        return Err(ServiceError::Form("Formulario inválido".to_string()));
    }

    let payload = ProductPayload::from(form);

    ui.set_is_loading(true);
    let result = backend.update_product(id, &payload).await;
    match &result {
        Ok(_) => ui.set_success_message("Producto actualizado correctamente"),
        Err(err) => ui.set_error_message(err.message()),
    }
    ui.set_is_loading(false);

    result
        .map(|_| ListRefresh::NotRequired)
        .map_err(ServiceError::from)
}

/// Runs the delete-confirmation flow for one product.
pub async fn delete_product<R>(backend: &R, ui: &UiState, id: i32) -> ListRefresh
where
    R: ProductWriter,
{
    let mut confirmation = DeleteConfirmation::open(id);
    confirmation
        .confirm(ui, "Producto eliminado correctamente", |id| async move {
            backend.delete_product(id).await
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::backend::mock::MockBackend;
    use crate::ui::UiMessage;

    #[actix_web::test]
    async fn update_sends_only_name_and_price() {
        let mut backend = MockBackend::new();
        backend
            .expect_update_product()
            .times(1)
            .withf(|id: &i32, payload: &ProductPayload| {
                *id == 3 && payload.name == "Cera" && payload.price == 12.5
            })
            .returning(|id: i32, payload: &ProductPayload| {
                Ok(Product {
                    product_id: id,
                    name: payload.name.clone(),
                    price: payload.price,
                    quantity: 7,
                    profit: 2.0,
                    created_at: Default::default(),
                })
            });

        let ui = UiState::new();
        let form = ProductForm {
            name: "Cera".into(),
            price: 12.5,
        };

        let refresh = update_product(&backend, &ui, 3, &form).await.unwrap();

        assert_eq!(refresh, ListRefresh::NotRequired);
        assert_eq!(
            ui.message(),
            Some(UiMessage::Success(
                "Producto actualizado correctamente".to_string()
            ))
        );
    }
}
