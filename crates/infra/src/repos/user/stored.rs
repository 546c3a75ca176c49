use super::IUserRepo;
use crate::repos::shared::collection_store::CollectionStore;
use rendezvous_domain::{User, UserType, ID};

/// Directory kept under the `users` key
pub struct StoredUserRepo {
    users: CollectionStore<User>,
}

impl StoredUserRepo {
    pub fn new(users: CollectionStore<User>) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl IUserRepo for StoredUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        self.users.append(user.clone()).await?;
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<bool> {
        let res = self
            .users
            .replace_by_id(&user.id, |u| *u = user.clone())
            .await?;
        Ok(res.is_some())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        self.users.find(user_id)
    }

    async fn find_by_email(&self, email: &str, user_type: UserType) -> Option<User> {
        self.users
            .find_by(|u| u.email.eq_ignore_ascii_case(email) && u.user_type == user_type)
            .into_iter()
            .next()
    }
}
