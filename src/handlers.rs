use crate::aggregate::{demographics, devices, regional_performance, weekly_performance};
use crate::errors::AppError;
use crate::models::{
    DemographicsResponse, DevicesResponse, MarketingData, RegionMetrics, WeekMetrics,
};
use crate::state::AppState;
use crate::ui::{
    render_demographic_view, render_device_view, render_error, render_index, render_region_view,
    render_weekly_view,
};
use axum::{extract::State, response::Html, Json};
use tracing::error;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn demographic_view(State(state): State<AppState>) -> Html<String> {
    view(&state, "Demographic Analytics", |data| {
        render_demographic_view(&demographics(data))
    })
    .await
}

pub async fn device_view(State(state): State<AppState>) -> Html<String> {
    view(&state, "Device Performance", |data| {
        let summary = devices(data);
        render_device_view(&summary.devices, &summary.totals)
    })
    .await
}

pub async fn region_view(State(state): State<AppState>) -> Html<String> {
    view(&state, "Region View", |data| {
        render_region_view(&regional_performance(data))
    })
    .await
}

pub async fn weekly_view(State(state): State<AppState>) -> Html<String> {
    view(&state, "Weekly View", |data| {
        render_weekly_view(&weekly_performance(data))
    })
    .await
}

pub async fn get_marketing_data(
    State(state): State<AppState>,
) -> Result<Json<MarketingData>, AppError> {
    Ok(Json(load(&state).await?))
}

pub async fn get_demographics(
    State(state): State<AppState>,
) -> Result<Json<DemographicsResponse>, AppError> {
    let data = load(&state).await?;
    Ok(Json(demographics(&data)))
}

pub async fn get_devices(State(state): State<AppState>) -> Result<Json<DevicesResponse>, AppError> {
    let data = load(&state).await?;
    Ok(Json(devices(&data)))
}

pub async fn get_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionMetrics>>, AppError> {
    let data = load(&state).await?;
    Ok(Json(regional_performance(&data)))
}

pub async fn get_weekly(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeekMetrics>>, AppError> {
    let data = load(&state).await?;
    Ok(Json(weekly_performance(&data)))
}

/// Fetches the dataset once and renders it, or the generic error in place of content.
async fn view(
    state: &AppState,
    title: &str,
    render: impl FnOnce(&MarketingData) -> String,
) -> Html<String> {
    match load(state).await {
        Ok(data) => Html(render(&data)),
        Err(err) => Html(render_error(title, &err.message)),
    }
}

async fn load(state: &AppState) -> Result<MarketingData, AppError> {
    state.source.fetch(&state.client).await.map_err(|err| {
        error!("failed to load marketing data: {err}");
        AppError::load_failed()
    })
}
