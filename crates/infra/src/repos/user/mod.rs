mod stored;

use rendezvous_domain::{User, UserType, ID};
pub use stored::StoredUserRepo;

/// Directory of the known clients and providers
#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<bool>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_email(&self, email: &str, user_type: UserType) -> Option<User>;
}
