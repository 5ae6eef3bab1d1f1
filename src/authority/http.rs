//! HTTP implementation of the authority contract
//!
//! Talks to the game server's REST API with a blocking client. Requests are
//! short-lived; there is no retry and no client-side timeout handling beyond
//! surfacing the failure.

use super::{Authority, AuthorityError, GameCreated, GuessOutcome};
use crate::core::Word;
use crate::game::Difficulty;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default backend address, the development server's
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct GuessRequest<'a> {
    guess: &'a str,
}

/// Client for the game server's REST API
#[derive(Debug, Clone)]
pub struct HttpAuthority {
    client: Client,
    base_url: String,
}

impl HttpAuthority {
    /// Create a client for the server at `base_url`
    ///
    /// # Errors
    /// `AuthorityError::Transport` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AuthorityError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decode a response body, mapping 4xx error bodies to `Rejected`
    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthorityError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .map_err(|err| AuthorityError::Malformed(err.to_string()));
        }

        if status.is_client_error() {
            if let Ok(body) = response.json::<ErrorBody>() {
                return Err(AuthorityError::Rejected(body.error));
            }
        }
        Err(AuthorityError::Status(status.as_u16()))
    }
}

impl Authority for HttpAuthority {
    fn create_game(&self, difficulty: Difficulty) -> Result<GameCreated, AuthorityError> {
        let response = self
            .client
            .post(format!("{}/api/game/new", self.base_url))
            .query(&[("difficulty", difficulty.as_str())])
            .send()?;
        Self::decode(response)
    }

    fn submit_guess(&self, game_id: &str, word: &Word) -> Result<GuessOutcome, AuthorityError> {
        let response = self
            .client
            .post(format!("{}/api/game/{game_id}/guess", self.base_url))
            .json(&GuessRequest { guess: word.text() })
            .send()?;
        Self::decode(response)
    }

    fn delete_game(&self, game_id: &str) -> Result<(), AuthorityError> {
        let response = self
            .client
            .delete(format!("{}/api/game/{game_id}", self.base_url))
            .send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AuthorityError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let authority = HttpAuthority::new("http://localhost:8080/").unwrap();
        assert_eq!(authority.base_url(), "http://localhost:8080");
    }

    #[test]
    fn error_body_parses() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Not a valid word: XXXXX"}"#).unwrap();
        assert_eq!(body.error, "Not a valid word: XXXXX");
    }

    #[test]
    fn guess_request_serializes_wire_shape() {
        let body = serde_json::to_string(&GuessRequest { guess: "CRANE" }).unwrap();
        assert_eq!(body, r#"{"guess":"CRANE"}"#);
    }
}
