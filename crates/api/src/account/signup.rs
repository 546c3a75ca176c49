use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Session, User, UserType};
use rendezvous_infra::RendezvousContext;

pub async fn signup(
    ctx: &RendezvousContext,
    name: String,
    email: String,
    user_type: UserType,
) -> Result<Session, RendezvousError> {
    let usecase = SignupUseCase {
        name,
        email,
        user_type,
    };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Creates a `User` and signs it in
#[derive(Debug)]
pub struct SignupUseCase {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingName,
    MissingEmail,
    EmailTaken(String),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingName => Self::Validation("A name is required".into()),
            UseCaseError::MissingEmail => Self::Validation("An email is required".into()),
            UseCaseError::EmailTaken(email) => Self::Conflict(format!(
                "A user with email: {} already exists.",
                email
            )),
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SignupUseCase {
    type Response = Session;

    type Error = UseCaseError;

    const NAME: &'static str = "Signup";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UseCaseError::MissingEmail);
        }
        if ctx
            .repos
            .users
            .find_by_email(email, self.user_type)
            .await
            .is_some()
        {
            return Err(UseCaseError::EmailTaken(email.to_string()));
        }

        let user = User::new(name.to_string(), email.to_string(), self.user_type);
        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(UseCaseError::StorageError)?;

        let session = Session::new(user);
        ctx.repos
            .session
            .set(&session)
            .await
            .map_err(UseCaseError::StorageError)?;

        Ok(session)
    }
}
