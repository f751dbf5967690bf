use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use scoreboard_app::repository::LeaderboardRepository;
use scoreboard_types::{
    errors::{ApplicationError, StoreError},
    leaderboard::{LeaderboardEntry, NewEntry, Score},
};

/// Asks PostgREST to send back the rows affected by a write.
const RETURN_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");

/// Error body returned by PostgREST on failed queries.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

/// Talks to the hosted `leaderboard` table through its REST interface.
#[derive(Debug, Clone)]
pub struct RestLeaderboardRepository {
    client: Client,
    rows_url: String,
}

impl RestLeaderboardRepository {
    pub fn new(client: Client, rows_url: String) -> Self {
        Self { client, rows_url }
    }

    pub fn rows_url(&self) -> &str {
        &self.rows_url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
        let response = request.send().await.map_err(StoreError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(StoreError::from)?;

        if !status.is_success() {
            let message = rejection_message(&body).unwrap_or_else(|| status.to_string());
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        // Writes that match nothing may come back with an empty body.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&body).map_err(StoreError::Decode)?)
    }
}

fn rejection_message(body: &[u8]) -> Option<String> {
    if let Ok(PostgrestError {
        message: Some(message),
    }) = serde_json::from_slice::<PostgrestError>(body)
    {
        return Some(message);
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn id_filter(id: i64) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

#[async_trait::async_trait]
impl LeaderboardRepository for RestLeaderboardRepository {
    async fn list_by_score_desc(&self) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
        let request = self
            .client
            .get(&self.rows_url)
            .query(&[("select", "*"), ("order", "score.desc")]);
        self.send(request).await
    }

    async fn insert(&self, entry: &NewEntry) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
        let request = self
            .client
            .post(&self.rows_url)
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(entry);
        self.send(request).await
    }

    async fn update_score(
        &self,
        id: i64,
        score: Score,
    ) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
        let request = self
            .client
            .patch(&self.rows_url)
            .query(&id_filter(id))
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&json!({ "score": score }));
        self.send(request).await
    }

    async fn delete(&self, id: i64) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
        let request = self
            .client
            .delete(&self.rows_url)
            .query(&id_filter(id))
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1);
        self.send(request).await
    }
}
