use std::cell::Cell;

use reqwest::StatusCode;

use clientela_admin::backend::errors::BackendError;
use clientela_admin::backend::{ListPage, ListQuery};
use clientela_admin::confirm::DeleteConfirmation;
use clientela_admin::controller::{ListRefresh, ListState};
use clientela_admin::domain::job::Job;
use clientela_admin::pagination::Paginate;
use clientela_admin::ui::{UiMessage, UiState};

fn job(id: i32) -> Job {
    Job {
        job_id: id,
        description: format!("Cargo {id}"),
        created_at: Default::default(),
    }
}

fn page_of(ids: &[i32], total: usize, page: usize, per_page: usize) -> ListPage<Job> {
    ListPage {
        items: ids.iter().copied().map(job).collect(),
        paginate: Paginate::new(total, page, per_page),
    }
}

#[actix_web::test]
async fn a_successful_fetch_replaces_items_and_paginate() {
    let mut state = ListState::new();
    let ui = UiState::new();

    state
        .fetch_items(&ui, Some(2), |query: ListQuery| async move {
            assert_eq!(query.page, 2);
            assert_eq!(query.per_page, 5);
            Ok(page_of(&[6, 7, 8, 9, 10], 12, 2, 5))
        })
        .await;

    assert_eq!(state.items().len(), 5);
    assert_eq!(state.items()[0].job_id, 6);
    assert_eq!(state.page(), 2);
    assert_eq!(state.paginate().page, 2);
    assert_eq!(state.paginate().total, 12);
    assert_eq!(state.paginate().pages, 3);
    assert!(!ui.is_loading());
    assert!(ui.message().is_none());
}

#[actix_web::test]
async fn pages_always_equals_total_over_per_page_rounded_up() {
    let mut state = ListState::new();
    let ui = UiState::new();

    for (total, expected_pages) in [(0usize, 0usize), (1, 1), (5, 1), (6, 2), (12, 3)] {
        state
            .fetch_items(&ui, None, |_| async move { Ok(page_of(&[], total, 1, 5)) })
            .await;
        assert_eq!(state.paginate().pages, expected_pages);
    }
}

#[actix_web::test]
async fn refetching_an_unchanged_page_is_idempotent() {
    let mut state = ListState::new();
    let ui = UiState::new();

    let fetch = |_: ListQuery| async { Ok(page_of(&[1, 2, 3], 3, 1, 5)) };

    state.fetch_items(&ui, None, fetch).await;
    let first_items: Vec<i32> = state.items().iter().map(|j| j.job_id).collect();
    let first_paginate = *state.paginate();

    state.fetch_items(&ui, None, fetch).await;
    let second_items: Vec<i32> = state.items().iter().map(|j| j.job_id).collect();

    assert_eq!(first_items, second_items);
    assert_eq!(first_paginate, *state.paginate());
}

#[actix_web::test]
async fn a_failing_fetch_leaves_prior_state_untouched() {
    let mut state = ListState::new();
    let ui = UiState::new();

    state
        .fetch_items(&ui, Some(1), |_| async { Ok(page_of(&[1, 2], 2, 1, 5)) })
        .await;

    state
        .fetch_items(&ui, Some(2), |_| async {
            Err(BackendError::Api {
                status: StatusCode::NOT_FOUND,
                message: "not found".to_string(),
            })
        })
        .await;

    assert_eq!(state.items().len(), 2);
    assert_eq!(state.paginate().total, 2);
    assert_eq!(state.paginate().page, 1);
    assert_eq!(ui.message(), Some(UiMessage::Error("not found".to_string())));
    assert!(!ui.is_loading());
}

#[actix_web::test]
async fn the_last_page_holds_the_remainder_and_overflow_is_not_clamped() {
    let mut state = ListState::new();
    let ui = UiState::new();

    // total=12, per_page=5: page 3 holds the last two records.
    state
        .fetch_items(&ui, Some(3), |_| async { Ok(page_of(&[11, 12], 12, 3, 5)) })
        .await;
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.paginate().pages, 3);

    // Page 4 is past the end; the server answers an empty slice and the
    // state keeps the out-of-range page as-is.
    state
        .fetch_items(&ui, Some(4), |_| async { Ok(page_of(&[], 12, 4, 5)) })
        .await;
    assert!(state.items().is_empty());
    assert_eq!(state.page(), 4);
    assert_eq!(state.paginate().pages, 3);
}

#[actix_web::test]
async fn set_page_takes_effect_on_the_next_fetch() {
    let mut state: ListState<Job> = ListState::new();
    assert_eq!(state.page(), 1);

    state.set_page(3);
    assert_eq!(state.page(), 3);

    let ui = UiState::new();
    state
        .fetch_items(&ui, Some(state.page()), |query: ListQuery| async move {
            assert_eq!(query.page, 3);
            Ok(page_of(&[11, 12], 12, 3, 5))
        })
        .await;
    assert_eq!(state.page(), 3);
}

#[actix_web::test]
async fn cancel_closes_without_calling_delete() {
    let mut confirmation = DeleteConfirmation::open(7);

    assert!(confirmation.is_open());
    assert_eq!(confirmation.target(), Some(&7));

    let refresh = confirmation.cancel();

    assert_eq!(refresh, ListRefresh::NotRequired);
    assert!(!confirmation.is_open());
    assert_eq!(confirmation.target(), None);
}

#[actix_web::test]
async fn confirm_deletes_exactly_once_then_requires_one_refresh() {
    let ui = UiState::new();
    let calls = Cell::new(0);
    let mut confirmation = DeleteConfirmation::open(7);

    let refresh = confirmation
        .confirm(&ui, "Registro eliminado", |id| {
            calls.set(calls.get() + 1);
            assert_eq!(id, 7);
            async { Ok(()) }
        })
        .await;

    assert_eq!(calls.get(), 1);
    assert_eq!(refresh, ListRefresh::Required);
    assert!(!confirmation.is_open());
    assert_eq!(
        ui.message(),
        Some(UiMessage::Success("Registro eliminado".to_string()))
    );
    assert!(!ui.is_loading());

    // Confirming the now-closed dialog never reaches the backend again.
    let refresh = confirmation
        .confirm(&ui, "Registro eliminado", |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        })
        .await;
    assert_eq!(refresh, ListRefresh::NotRequired);
    assert_eq!(calls.get(), 1);
}

#[actix_web::test]
async fn a_failed_delete_still_closes_and_requires_a_refresh() {
    let ui = UiState::new();
    let mut confirmation = DeleteConfirmation::open(7);

    let refresh = confirmation
        .confirm(&ui, "Registro eliminado", |_| async {
            Err(BackendError::Api {
                status: StatusCode::CONFLICT,
                message: "registro en uso".to_string(),
            })
        })
        .await;

    assert_eq!(refresh, ListRefresh::Required);
    assert!(!confirmation.is_open());
    assert_eq!(
        ui.message(),
        Some(UiMessage::Error("registro en uso".to_string()))
    );
    assert!(!ui.is_loading());
}
