//! Selection store JSON API.

use axum::http::{Method, StatusCode};
use pokedex_shell::PokemonRef;

mod common;

const BULBASAUR: &str =
    r#"{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}"#;

#[tokio::test]
async fn test_empty_before_any_selection() {
    let (app, _) = common::app();
    let (status, body) = common::get(&app, "/api/selection").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_put_then_get() {
    let (app, store) = common::app();

    let (status, _, _) =
        common::send(&app, Method::PUT, "/api/selection", Some(BULBASAUR)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let expected = PokemonRef::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/");
    assert_eq!(store.selected().as_deref(), Some(&expected));

    let (status, body) = common::get(&app, "/api/selection").await;
    assert_eq!(status, StatusCode::OK);
    let returned: PokemonRef = serde_json::from_str(&body).unwrap();
    assert_eq!(returned, expected);
}

#[tokio::test]
async fn test_repeated_put_keeps_value() {
    let (app, store) = common::app();
    for _ in 0..2 {
        common::send(&app, Method::PUT, "/api/selection", Some(BULBASAUR)).await;
    }
    assert_eq!(store.selected().unwrap().name, "bulbasaur");
}

#[tokio::test]
async fn test_malformed_body_leaves_selection_untouched() {
    let (app, store) = common::app();

    let (status, _, _) =
        common::send(&app, Method::PUT, "/api/selection", Some(r#"{"name":"x"}"#)).await;
    assert!(status.is_client_error());
    assert!(store.selected().is_none());
}
