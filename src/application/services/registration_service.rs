//! Member Registration Service
//!
//! Orchestrates new member sign-up: uniqueness check, credential policy,
//! password hashing and persistence.

use std::sync::Arc;

use tracing::info;

use crate::application::dto::RegisterMemberCommand;
use crate::application::error::ApplicationError;
use crate::domain::entities::{Member, MemberRepository};
use crate::domain::services::{CredentialPolicy, PasswordHasher};
use crate::domain::value_objects::{MemberId, Password};
use crate::shared::error::{DomainError, DomainErrorCode};

/// Application service for the member registration use case.
pub struct MemberRegistrationService<M, P, H>
where
    M: MemberRepository,
    P: CredentialPolicy,
    H: PasswordHasher,
{
    members: Arc<M>,
    policy: Arc<P>,
    hasher: Arc<H>,
}

impl<M, P, H> MemberRegistrationService<M, P, H>
where
    M: MemberRepository,
    P: CredentialPolicy,
    H: PasswordHasher,
{
    pub fn new(members: Arc<M>, policy: Arc<P>, hasher: Arc<H>) -> Self {
        Self {
            members,
            policy,
            hasher,
        }
    }

    /// Register a new member and return the generated member id.
    pub async fn register_member(
        &self,
        command: RegisterMemberCommand,
    ) -> Result<MemberId, ApplicationError> {
        // Uniqueness first, so duplicates fail before any hashing work.
        if self
            .members
            .exists_by_username_or_nickname(&command.username, &command.nickname)
            .await?
        {
            return Err(
                DomainError::new(DomainErrorCode::UsernameOrNicknameAlreadyExists)
                    .detail("username", command.username.as_str())
                    .into(),
            );
        }

        let password = command.password.map(Password::new).transpose()?;

        let member = Member::register(
            MemberId::generate(),
            &command.username,
            &command.nickname,
            password,
            self.policy.as_ref(),
            self.hasher.as_ref(),
        )?;

        self.members.save(&member).await?;

        info!(member_id = %member.id(), username = %member.username(), "member registered");

        Ok(member.id().clone())
    }
}
