//! Services coordinating bill workflows. Bills are issued by the API when
//! an order closes, so the console only lists, inspects and voids them.

use crate::backend::{BillReader, BillWriter};
use crate::confirm::DeleteConfirmation;
use crate::controller::{ListRefresh, ListState};
use crate::domain::bill::Bill;
use crate::dto::list::ListPageData;
use crate::pagination::PageSelector;
use crate::presenter::{ColumnSource, ColumnSpec, RowAction, render_table};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::UiState;

fn money(amount: f64) -> String {
    if amount == 0.0 {
        String::new()
    } else {
        format!("${amount:.2}")
    }
}

fn columns() -> Vec<ColumnSpec<Bill>> {
    vec![
        ColumnSpec {
            label: "ID",
            source: ColumnSource::Field("billId"),
        },
        ColumnSpec {
            label: "Cliente",
            source: ColumnSource::Field("clientName"),
        },
        ColumnSpec {
            label: "ID de Orden",
            source: ColumnSource::Field("orderId"),
        },
        ColumnSpec {
            label: "SubTotal",
            source: ColumnSource::Computed(|bill| money(bill.subtotal)),
        },
        ColumnSpec {
            label: "Descuento",
            source: ColumnSource::Computed(|bill| money(bill.discount_amount)),
        },
        ColumnSpec {
            label: "Coste total",
            source: ColumnSource::Computed(|bill| money(bill.total_cost)),
        },
        ColumnSpec {
            label: "Fecha de Emisión",
            source: ColumnSource::Field("createdAt"),
        },
    ]
}

fn actions() -> Vec<RowAction<Bill>> {
    vec![
        RowAction {
            label: "Detalle",
            icon: "eye",
            href: |bill| format!("/bills/detail/{}", bill.bill_id),
        },
        RowAction {
            label: "Eliminar",
            icon: "trash",
            href: |bill| format!("/bills/delete/{}", bill.bill_id),
        },
    ]
}

/// Loads one page of the bills table.
pub async fn load_list_page<R>(backend: &R, ui: &UiState, page: Option<usize>) -> ListPageData
where
    R: BillReader,
{
    let mut state = ListState::new();
    state
        .fetch_items(ui, page, |query| backend.list_bills(query))
        .await;

    ListPageData {
        title: "Facturas".to_string(),
        create_url: None,
        table: render_table(state.items(), &columns(), &actions()),
        selector: PageSelector::new(state.paginate()),
        total: state.paginate().total,
    }
}

/// Fetches a single bill for the detail page.
pub async fn get_bill<R>(backend: &R, id: i32) -> ServiceResult<Bill>
where
    R: BillReader,
{
    backend.get_bill_by_id(id).await.map_err(ServiceError::from)
}

/// Runs the delete-confirmation flow for one bill.
pub async fn delete_bill<R>(backend: &R, ui: &UiState, id: i32) -> ListRefresh
where
    R: BillWriter,
{
    let mut confirmation = DeleteConfirmation::open(id);
    confirmation
        .confirm(ui, "Factura eliminada correctamente", |id| async move {
            backend.delete_bill(id).await
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::backend::ListPage;
    use crate::backend::mock::MockBackend;
    use crate::pagination::Paginate;

    #[actix_web::test]
    async fn amounts_render_as_currency_and_zeroes_stay_blank() {
        let mut backend = MockBackend::new();
        backend.expect_list_bills().returning(|_| {
            Ok(ListPage {
                items: vec![Bill {
                    bill_id: 9,
                    order_id: 41,
                    client_name: "Alice".to_string(),
                    subtotal: 100.0,
                    discount_amount: 0.0,
                    total_cost: 100.0,
                    created_at: Default::default(),
                }],
                paginate: Paginate::new(1, 1, 5),
            })
        });

        let ui = UiState::new();
        let view = load_list_page(&backend, &ui, None).await;

        let cells = &view.table.rows[0].cells;
        assert_eq!(cells[3], "$100.00");
        assert_eq!(cells[4], "");
        assert_eq!(cells[5], "$100.00");
        assert!(view.create_url.is_none());
    }
}
