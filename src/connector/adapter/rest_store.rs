use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use crate::application::{
    MessageRepository, ProfileRepository, RoleRepository, TicketRepository,
};
use crate::domain::{
    ChatMessage, DomainError, NewChatMessage, Profile, RoleGrant, Ticket,
};

const REST_PATH: &str = "/rest/v1";

/// Adapter for the managed row-level store, speaking its PostgREST-style
/// query grammar (`?user_id=eq.{id}&order=created_at.desc`, writes with
/// `Prefer: return=representation`).
///
/// The store enforces its own row-level policy; a policy rejection (401/403)
/// surfaces as [`DomainError::Forbidden`] and every other failure as a
/// generic [`DomainError::Storage`] with the detail logged server-side.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            base_url: base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Construct from `STORE_URL` / `STORE_SERVICE_KEY`; `None` when either
    /// is absent.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("STORE_URL").ok()?;
        let key = std::env::var("STORE_SERVICE_KEY").ok()?;
        Some(Self::new(url, key))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.base_url, REST_PATH, table)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_rows<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<Vec<T>, DomainError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DomainError::forbidden("access denied"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("store returned {status} for {context}: {body}");
            return Err(DomainError::storage("store request failed"));
        }
        response.json::<Vec<T>>().await.map_err(|e| {
            warn!("failed to decode store response for {context}: {e}");
            DomainError::storage("store returned an unreadable response")
        })
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<reqwest::Response, DomainError> {
        builder.send().await.map_err(|e| {
            warn!("store request failed for {context}: {e}");
            DomainError::storage("store is unreachable")
        })
    }

    fn single_row<T>(mut rows: Vec<T>, context: &str) -> Result<T, DomainError> {
        if rows.is_empty() {
            warn!("store returned no representation for {context}");
            return Err(DomainError::storage("store returned no row"));
        }
        Ok(rows.remove(0))
    }
}

#[async_trait]
impl MessageRepository for RestStore {
    async fn append(&self, message: NewChatMessage) -> Result<ChatMessage, DomainError> {
        let response = self
            .send(
                self.request(reqwest::Method::POST, self.table_url("chat_messages"))
                    .header("Prefer", "return=representation")
                    .json(&message),
                "chat_messages insert",
            )
            .await?;
        let rows = self.read_rows(response, "chat_messages insert").await?;
        Self::single_row(rows, "chat_messages insert")
    }

    async fn history(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        // Fetch descending so `limit` bounds the most recent window, then
        // flip back to display order.
        let mut url = format!(
            "{}?user_id=eq.{}&order=created_at.desc",
            self.table_url("chat_messages"),
            user_id
        );
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={limit}"));
        }

        let response = self
            .send(
                self.request(reqwest::Method::GET, url),
                "chat_messages list",
            )
            .await?;
        let mut messages: Vec<ChatMessage> =
            self.read_rows(response, "chat_messages list").await?;
        messages.reverse();
        Ok(messages)
    }
}

#[async_trait]
impl TicketRepository for RestStore {
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket, DomainError> {
        let response = self
            .send(
                self.request(reqwest::Method::POST, self.table_url("tickets"))
                    .header("Prefer", "return=representation")
                    .json(ticket),
                "tickets insert",
            )
            .await?;
        let rows = self.read_rows(response, "tickets insert").await?;
        Self::single_row(rows, "tickets insert")
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError> {
        let url = format!("{}?id=eq.{}", self.table_url("tickets"), id);
        let response = self
            .send(self.request(reqwest::Method::GET, url), "tickets find")
            .await?;
        let mut rows: Vec<Ticket> = self.read_rows(response, "tickets find").await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError> {
        let url = format!(
            "{}?user_id=eq.{}&order=created_at.desc",
            self.table_url("tickets"),
            user_id
        );
        let response = self
            .send(self.request(reqwest::Method::GET, url), "tickets list")
            .await?;
        self.read_rows(response, "tickets list").await
    }

    async fn list_all(&self) -> Result<Vec<Ticket>, DomainError> {
        let url = format!("{}?order=created_at.desc", self.table_url("tickets"));
        let response = self
            .send(self.request(reqwest::Method::GET, url), "tickets list all")
            .await?;
        self.read_rows(response, "tickets list all").await
    }

    async fn update(&self, ticket: &Ticket) -> Result<Ticket, DomainError> {
        let url = format!("{}?id=eq.{}", self.table_url("tickets"), ticket.id());
        let response = self
            .send(
                self.request(reqwest::Method::PATCH, url)
                    .header("Prefer", "return=representation")
                    .json(ticket),
                "tickets update",
            )
            .await?;
        let rows = self.read_rows(response, "tickets update").await?;
        Self::single_row(rows, "tickets update")
    }
}

#[async_trait]
impl RoleRepository for RestStore {
    async fn is_admin(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let url = format!(
            "{}?user_id=eq.{}&role=eq.admin",
            self.table_url("user_roles"),
            user_id
        );
        let response = self
            .send(self.request(reqwest::Method::GET, url), "user_roles check")
            .await?;
        let rows: Vec<RoleGrant> = self.read_rows(response, "user_roles check").await?;
        Ok(!rows.is_empty())
    }

    async fn list_grants(&self) -> Result<Vec<RoleGrant>, DomainError> {
        let response = self
            .send(
                self.request(reqwest::Method::GET, self.table_url("user_roles")),
                "user_roles list",
            )
            .await?;
        self.read_rows(response, "user_roles list").await
    }
}

#[async_trait]
impl ProfileRepository for RestStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        let url = format!("{}?order=created_at.desc", self.table_url("profiles"));
        let response = self
            .send(self.request(reqwest::Method::GET, url), "profiles list")
            .await?;
        self.read_rows(response, "profiles list").await
    }
}
