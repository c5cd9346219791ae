use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_nearest_stop;
mod nearest_stop_form;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/",
        get(nearest_stop_form::get_form).post(nearest_stop_form::submit_form),
    )
    .route("/nearest-stop", get(get_nearest_stop::get_nearest_stop))
}
