use std::sync::Arc;

use serde::Serialize;

use crate::application::{ProfileRepository, RoleRepository, TicketRepository};
use crate::domain::{DomainError, Identity, Profile, Role, Ticket};

/// A profile joined with its effective role for the dashboard's Users tab.
#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    #[serde(flatten)]
    pub profile: Profile,
    pub role: Role,
}

/// Read paths for the admin dashboard. Every call re-checks the acting
/// principal's role before touching data.
pub struct AdminOverviewUseCase {
    tickets: Arc<dyn TicketRepository>,
    profiles: Arc<dyn ProfileRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl AdminOverviewUseCase {
    pub fn new(
        tickets: Arc<dyn TicketRepository>,
        profiles: Arc<dyn ProfileRepository>,
        roles: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            tickets,
            profiles,
            roles,
        }
    }

    async fn require_admin(&self, actor: &Identity) -> Result<(), DomainError> {
        if self.roles.is_admin(actor.user_id).await? {
            Ok(())
        } else {
            Err(DomainError::forbidden(
                "Access denied. Admin privileges required.",
            ))
        }
    }

    /// Every ticket in the system, newest first.
    pub async fn list_tickets(&self, actor: &Identity) -> Result<Vec<Ticket>, DomainError> {
        self.require_admin(actor).await?;
        self.tickets.list_all().await
    }

    /// Every profile joined with its role; users without a grant render as
    /// plain users.
    pub async fn list_users(&self, actor: &Identity) -> Result<Vec<UserAccount>, DomainError> {
        self.require_admin(actor).await?;

        let profiles = self.profiles.list_profiles().await?;
        let grants = self.roles.list_grants().await?;

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let role = grants
                    .iter()
                    .find(|g| g.user_id == profile.user_id)
                    .map(|g| g.role)
                    .unwrap_or(Role::User);
                UserAccount { profile, role }
            })
            .collect())
    }
}
