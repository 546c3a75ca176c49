use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Session, UserType};
use rendezvous_infra::RendezvousContext;
use tracing::info;

pub async fn login(
    ctx: &RendezvousContext,
    email: String,
    user_type: UserType,
) -> Result<Session, RendezvousError> {
    let usecase = LoginUseCase { email, user_type };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Signs in the known user with this email. No credentials are checked.
#[derive(Debug)]
pub struct LoginUseCase {
    pub email: String,
    pub user_type: UserType,
}

#[derive(Debug)]
pub enum UseCaseError {
    UnknownUser(String, UserType),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UnknownUser(email, user_type) => Self::NotFound(format!(
                "No {} with email: {} was found.",
                user_type, email
            )),
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = Session;

    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim();
        let user = ctx
            .repos
            .users
            .find_by_email(email, self.user_type)
            .await
            .ok_or_else(|| UseCaseError::UnknownUser(email.to_string(), self.user_type))?;

        let session = Session::new(user);
        ctx.repos
            .session
            .set(&session)
            .await
            .map_err(UseCaseError::StorageError)?;
        info!("User {} signed in as {}", session.user.id, self.user_type);

        Ok(session)
    }
}
