use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Session, UserPatch};
use rendezvous_infra::RendezvousContext;

pub async fn update_profile(
    ctx: &RendezvousContext,
    patch: UserPatch,
) -> Result<Session, RendezvousError> {
    let usecase = UpdateProfileUseCase { patch };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Edits the profile of the signed in `User`
#[derive(Debug)]
pub struct UpdateProfileUseCase {
    pub patch: UserPatch,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotSignedIn,
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotSignedIn => {
                Self::Unauthorized("A user must be signed in to edit the profile".into())
            }
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateProfileUseCase {
    type Response = Session;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateProfile";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let mut session = ctx
            .repos
            .session
            .get()
            .await
            .ok_or(UseCaseError::NotSignedIn)?;
        session.user.apply(self.patch.clone());

        let known = ctx
            .repos
            .users
            .save(&session.user)
            .await
            .map_err(UseCaseError::StorageError)?;
        if !known {
            ctx.repos
                .users
                .insert(&session.user)
                .await
                .map_err(UseCaseError::StorageError)?;
        }
        ctx.repos
            .session
            .set(&session)
            .await
            .map_err(UseCaseError::StorageError)?;

        Ok(session)
    }
}
