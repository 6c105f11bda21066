//! JSON API over the selection store.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::server::AppState;
use crate::store::PokemonRef;

pub const SELECTION_PATH: &str = "/api/selection";

/// `GET /api/selection` — the selected Pokemon, or 204 when none is.
pub async fn get_selection(State(state): State<AppState>) -> Response {
    match state.store.selected() {
        Some(pokemon) => Json(PokemonRef::clone(&pokemon)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// `PUT /api/selection` — replace the selection.
pub async fn put_selection(
    State(state): State<AppState>,
    Json(pokemon): Json<PokemonRef>,
) -> StatusCode {
    state.store.set_selected(pokemon);
    StatusCode::NO_CONTENT
}
