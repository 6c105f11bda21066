//! Client for the selection API of a running shell.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::http::api::SELECTION_PATH;
use crate::store::PokemonRef;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(StatusCode),
}

pub struct ShellClient {
    client: Client,
    selection_url: Url,
}

impl ShellClient {
    pub fn new(server: &Url) -> Result<Self, ClientError> {
        Self::with_client(server, Client::new())
    }

    /// Use a preconfigured `reqwest` client.
    ///
    /// A path prefix on `server` is kept whether or not it ends in `/`.
    pub fn with_client(server: &Url, client: Client) -> Result<Self, ClientError> {
        let mut base = server.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let selection_url = base.join(SELECTION_PATH.trim_start_matches('/'))?;

        Ok(Self {
            client,
            selection_url,
        })
    }

    pub fn selection_url(&self) -> &Url {
        &self.selection_url
    }

    /// Replace the selection on the server.
    pub async fn select(&self, pokemon: &PokemonRef) -> Result<(), ClientError> {
        let res = self
            .client
            .put(self.selection_url.clone())
            .json(pokemon)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status()));
        }
        tracing::debug!(name = %pokemon.name, status = %res.status(), "Selection sent");
        Ok(())
    }

    /// Fetch the selection, `None` when nothing is selected.
    pub async fn selected(&self) -> Result<Option<PokemonRef>, ClientError> {
        let res = self.client.get(self.selection_url.clone()).send().await?;

        match res.status() {
            StatusCode::NO_CONTENT => Ok(None),
            status if status.is_success() => Ok(Some(res.json().await?)),
            status => Err(ClientError::Status(status)),
        }
    }
}
