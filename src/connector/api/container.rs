use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{
    AdminOverviewUseCase, AuthProvider, ChatHistoryUseCase, ChatRelayUseCase, ChatSession,
    CompletionClient, CreateTicketUseCase, ListTicketsUseCase, MessageRepository,
    ProfileRepository, RoleRepository, SuggestPlanUseCase, TicketRepository, UpdateTicketUseCase,
};
use crate::connector::adapter::{
    GatewayCompletionClient, InMemoryStore, RestAuth, RestStore, StaticTokenAuth,
    UnconfiguredCompletion,
};
use crate::domain::Identity;

pub struct ContainerConfig {
    /// Run against the in-memory store and static token auth instead of the
    /// managed services. State dies with the process.
    pub memory_store: bool,
}

/// Builds and owns the adapter graph; hands out use cases wired with
/// `Arc<dyn Trait>` dependencies.
pub struct Container {
    completion: Arc<dyn CompletionClient>,
    messages: Arc<dyn MessageRepository>,
    tickets: Arc<dyn TicketRepository>,
    roles: Arc<dyn RoleRepository>,
    profiles: Arc<dyn ProfileRepository>,
    auth: Arc<dyn AuthProvider>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let completion: Arc<dyn CompletionClient> = match GatewayCompletionClient::from_env() {
            Some(client) => Arc::new(client),
            None => {
                warn!(
                    "AI_GATEWAY_API_KEY not set; completion-backed endpoints will return \
                     configuration errors"
                );
                Arc::new(UnconfiguredCompletion)
            }
        };

        if config.memory_store {
            info!("Using in-memory store and static token auth");
            let store = Arc::new(InMemoryStore::new());
            let auth = match std::env::var("DEV_TOKEN_USER") {
                Ok(user_id) => match user_id.parse() {
                    Ok(user_id) => Arc::new(
                        StaticTokenAuth::new().with_token(
                            std::env::var("DEV_TOKEN").unwrap_or_else(|_| "dev".to_string()),
                            user_id,
                        ),
                    ),
                    Err(e) => {
                        warn!("DEV_TOKEN_USER is not a UUID ({e}); all requests unauthorized");
                        Arc::new(StaticTokenAuth::new())
                    }
                },
                Err(_) => Arc::new(StaticTokenAuth::new()),
            };
            return Self::with_parts(
                completion,
                store.clone(),
                store.clone(),
                store.clone(),
                store,
                auth,
            );
        }

        let (messages, tickets, roles, profiles): (
            Arc<dyn MessageRepository>,
            Arc<dyn TicketRepository>,
            Arc<dyn RoleRepository>,
            Arc<dyn ProfileRepository>,
        ) = match RestStore::from_env() {
            Some(store) => {
                let store = Arc::new(store);
                (store.clone(), store.clone(), store.clone(), store)
            }
            None => {
                warn!(
                    "STORE_URL / STORE_SERVICE_KEY not set; falling back to in-memory storage"
                );
                let store = Arc::new(InMemoryStore::new());
                (store.clone(), store.clone(), store.clone(), store)
            }
        };

        let auth: Arc<dyn AuthProvider> = match RestAuth::from_env() {
            Some(auth) => Arc::new(auth),
            None => {
                warn!("AUTH_URL not set; all authenticated requests will be rejected");
                Arc::new(StaticTokenAuth::new())
            }
        };

        Self::with_parts(completion, messages, tickets, roles, profiles, auth)
    }

    /// Assemble from explicit adapters (tests inject stubs here).
    pub fn with_parts(
        completion: Arc<dyn CompletionClient>,
        messages: Arc<dyn MessageRepository>,
        tickets: Arc<dyn TicketRepository>,
        roles: Arc<dyn RoleRepository>,
        profiles: Arc<dyn ProfileRepository>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            completion,
            messages,
            tickets,
            roles,
            profiles,
            auth,
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthProvider> {
        self.auth.clone()
    }

    pub fn suggest_plan_use_case(&self) -> SuggestPlanUseCase {
        SuggestPlanUseCase::new(self.completion.clone())
    }

    pub fn chat_relay_use_case(&self) -> ChatRelayUseCase {
        ChatRelayUseCase::new(self.completion.clone())
    }

    pub fn chat_history_use_case(&self) -> ChatHistoryUseCase {
        ChatHistoryUseCase::new(self.messages.clone())
    }

    pub fn create_ticket_use_case(&self) -> CreateTicketUseCase {
        CreateTicketUseCase::new(self.tickets.clone())
    }

    pub fn list_tickets_use_case(&self) -> ListTicketsUseCase {
        ListTicketsUseCase::new(self.tickets.clone())
    }

    pub fn update_ticket_use_case(&self) -> UpdateTicketUseCase {
        UpdateTicketUseCase::new(self.tickets.clone(), self.roles.clone())
    }

    pub fn admin_overview_use_case(&self) -> AdminOverviewUseCase {
        AdminOverviewUseCase::new(
            self.tickets.clone(),
            self.profiles.clone(),
            self.roles.clone(),
        )
    }

    /// A chat session for an authenticated identity (library callers; the
    /// HTTP relay endpoint itself stays persistence-free).
    pub fn chat_session(&self, identity: Identity) -> ChatSession {
        ChatSession::new(
            identity,
            self.messages.clone(),
            Arc::new(self.chat_relay_use_case()),
        )
    }
}
