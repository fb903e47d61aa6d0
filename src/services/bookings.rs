//! Services coordinating booking workflows. Read-only: bookings are placed
//! and cancelled from the customer-facing app.

use crate::backend::BookingReader;
use crate::domain::booking::Booking;
use crate::dto::list::ListPageData;
use crate::pagination::PageSelector;
use crate::presenter::{ColumnSource, ColumnSpec, RowAction, render_table};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::UiState;
use crate::controller::ListState;

fn columns() -> Vec<ColumnSpec<Booking>> {
    vec![
        ColumnSpec {
            label: "ID",
            source: ColumnSource::Field("bookingId"),
        },
        ColumnSpec {
            label: "Cliente",
            source: ColumnSource::Field("clientName"),
        },
        ColumnSpec {
            label: "Servicio",
            source: ColumnSource::Field("serviceName"),
        },
        ColumnSpec {
            label: "Agendado para",
            source: ColumnSource::Field("scheduledAt"),
        },
        ColumnSpec {
            label: "Creación",
            source: ColumnSource::Field("createdAt"),
        },
    ]
}

fn actions() -> Vec<RowAction<Booking>> {
    vec![RowAction {
        label: "Detalle",
        icon: "eye",
        href: |booking| format!("/bookings/detail/{}", booking.booking_id),
    }]
}

/// Loads one page of the bookings table.
pub async fn load_list_page<R>(backend: &R, ui: &UiState, page: Option<usize>) -> ListPageData
where
    R: BookingReader,
{
    let mut state = ListState::new();
    state
        .fetch_items(ui, page, |query| backend.list_bookings(query))
        .await;

    ListPageData {
        title: "Reservas".to_string(),
        create_url: None,
        table: render_table(state.items(), &columns(), &actions()),
        selector: PageSelector::new(state.paginate()),
        total: state.paginate().total,
    }
}

/// Fetches a single booking for the detail page.
pub async fn get_booking<R>(backend: &R, id: i32) -> ServiceResult<Booking>
where
    R: BookingReader,
{
    backend
        .get_booking_by_id(id)
        .await
        .map_err(ServiceError::from)
}
