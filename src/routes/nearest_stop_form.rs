use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use tracing::{error, warn};

use crate::{
    templates::IndexPage,
    types::app_state::AppState,
    utils::app_error::{AppError, LOCATION_NOT_FOUND_MESSAGE},
};

pub const MISSING_PLACE_MESSAGE: &str = "Please provide a valid place name.";

#[derive(Deserialize)]
pub struct NearestStopForm {
    #[serde(default)]
    pub place: String,
}

fn render(state: &AppState, page: &IndexPage) -> Result<Html<String>, AppError> {
    state.templates.render_index(page).map(Html).map_err(|e| {
        error!("Failed to render page: {}", e);
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    })
}

pub async fn get_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, &IndexPage::default())
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<NearestStopForm>,
) -> Result<Html<String>, AppError> {
    let place = form.place.trim();

    if place.is_empty() {
        return render(&state, &IndexPage::error(MISSING_PLACE_MESSAGE));
    }

    match state.stop_finder.locate(place).await {
        Ok(location) => render(
            &state,
            &IndexPage::found(place, &location, state.map_display_key.as_deref()),
        ),
        Err(e) => {
            warn!("Lookup failed: {}", e);
            render(&state, &IndexPage::error(LOCATION_NOT_FOUND_MESSAGE))
        }
    }
}
