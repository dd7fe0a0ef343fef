pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AdminOverviewUseCase, AuthProvider, ChatHistoryUseCase, ChatRelayUseCase, ChatSession,
    ChatTurn, CompletionClient, CreateTicketUseCase, ListTicketsUseCase, MessageRepository,
    ProfileRepository, RoleRepository, SessionState, SuggestPlanUseCase, TicketRepository,
    TicketUpdate, UpdateTicketUseCase, UserAccount, DEFAULT_HISTORY_WINDOW,
};

pub use connector::{
    build_router, ApiError, Container, ContainerConfig, GatewayCompletionClient, InMemoryStore,
    RestAuth, RestStore, StaticTokenAuth, UnconfiguredCompletion,
};

pub use domain::{
    plan_catalog, ChatMessage, DomainError, Identity, MessageRole, NewChatMessage, PlanCategory,
    PlanEntry, Profile, Role, RoleGrant, Ticket, TicketPriority, TicketStatus,
};
