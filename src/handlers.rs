use crate::config::MAX_WEEKS;
use crate::errors::AppError;
use crate::grid::clamp_num_weeks;
use crate::models::{MidweekRequest, SettingsForm, SettingsRequest, TableResponse, ToggleRequest};
use crate::state::AppState;
use crate::stats::build_table_view;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{debug, info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let table = state.table.lock().await;
    Html(render_index(&build_table_view(&table)))
}

pub async fn get_table(State(state): State<AppState>) -> Json<TableResponse> {
    let table = state.table.lock().await;
    Json(build_table_view(&table))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsRequest>,
) -> Result<Json<TableResponse>, AppError> {
    let response =
        apply_settings(&state, payload.num_weeks, payload.start_date.as_deref()).await?;
    Ok(Json(response))
}

pub async fn settings_form(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect, AppError> {
    // a blank or non-numeric field reads as zero and is floored to one week
    let num_weeks = form.num_weeks.trim().parse::<i64>().unwrap_or(0);
    apply_settings(&state, Some(num_weeks), Some(&form.start_date)).await?;
    Ok(Redirect::to("/"))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<TableResponse>, AppError> {
    let response = apply_toggle(&state, payload.week, payload.day).await?;
    Ok(Json(response))
}

pub async fn toggle_form(
    State(state): State<AppState>,
    Path((week, day)): Path<(usize, usize)>,
) -> Result<Redirect, AppError> {
    apply_toggle(&state, week, day).await?;
    Ok(Redirect::to("/"))
}

pub async fn midweek(
    State(state): State<AppState>,
    Json(payload): Json<MidweekRequest>,
) -> Result<Json<TableResponse>, AppError> {
    let response = apply_midweek(&state, payload.week).await?;
    Ok(Json(response))
}

pub async fn midweek_form(
    State(state): State<AppState>,
    Path(week): Path<usize>,
) -> Result<Redirect, AppError> {
    apply_midweek(&state, week).await?;
    Ok(Redirect::to("/"))
}

async fn apply_settings(
    state: &AppState,
    num_weeks: Option<i64>,
    start_date: Option<&str>,
) -> Result<TableResponse, AppError> {
    let num_weeks = num_weeks.map(clamp_num_weeks);
    if let Some(requested) = num_weeks.filter(|n| *n > MAX_WEEKS) {
        warn!("rejected num_weeks={requested}");
        return Err(AppError::too_many_weeks(MAX_WEEKS));
    }

    let mut table = state.table.lock().await;
    if let Some(start_date) = start_date {
        table.set_start_date(start_date);
    }
    if let Some(num_weeks) = num_weeks {
        table.set_num_weeks(num_weeks);
    }
    info!(
        num_weeks = table.num_weeks(),
        start_date = table.start_date(),
        "table settings updated"
    );

    Ok(build_table_view(&table))
}

async fn apply_toggle(state: &AppState, week: usize, day: usize) -> Result<TableResponse, AppError> {
    let mut table = state.table.lock().await;
    if !table.contains(week, day) {
        warn!("rejected toggle of ({week}, {day})");
        return Err(AppError::cell_out_of_range(week, day));
    }

    table.toggle(week, day);
    debug!(week, day, checked = table.grid()[week][day], "cell toggled");
    Ok(build_table_view(&table))
}

async fn apply_midweek(state: &AppState, week: usize) -> Result<TableResponse, AppError> {
    let mut table = state.table.lock().await;
    if !table.contains(week, 0) {
        warn!("rejected midweek check of week {week}");
        return Err(AppError::week_out_of_range(week));
    }

    table.check_midweek(week);
    debug!(week, "midweek days checked");
    Ok(build_table_view(&table))
}
