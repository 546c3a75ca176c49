use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub const DEFAULT_USER_PHOTO: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Client,
    Provider,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            Self::Client => "c",
            Self::Provider => "p",
        }
    }
}

impl Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid user type: `{0}`")]
pub struct InvalidUserTypeError(pub String);

impl FromStr for UserType {
    type Err = InvalidUserTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "provider" => Ok(Self::Provider),
            _ => Err(InvalidUserTypeError(s.to_string())),
        }
    }
}

/// A client or a provider.
///
/// Providers additionally carry a business name and a list of specialties,
/// these fields are left out for clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<String>,
}

impl User {
    /// A freshly signed up `User`. Providers start with an empty business
    /// profile.
    pub fn new(name: String, email: String, user_type: UserType) -> Self {
        let is_provider = user_type == UserType::Provider;
        Self {
            id: ID::generate(user_type.id_prefix()),
            name,
            email,
            phone: String::new(),
            photo: Some(DEFAULT_USER_PHOTO.into()),
            user_type,
            address: Some(String::new()),
            bio: if is_provider { Some(String::new()) } else { None },
            business_name: if is_provider { Some(String::new()) } else { None },
            specialties: Vec::new(),
        }
    }

    pub fn is_provider(&self) -> bool {
        self.user_type == UserType::Provider
    }

    /// Name shown on the catalogue: the business name of a provider when
    /// it is set, the personal name otherwise
    pub fn display_name(&self) -> &str {
        match &self.business_name {
            Some(business) if !business.trim().is_empty() => business,
            _ => &self.name,
        }
    }

    /// Merges a profile edit into this `User`. Identity and type never change.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(photo) = patch.photo {
            self.photo = Some(photo);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if self.is_provider() {
            if let Some(business_name) = patch.business_name {
                self.business_name = Some(business_name);
            }
            if let Some(specialties) = patch.specialties {
                self.specialties = specialties;
            }
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub business_name: Option<String>,
    pub specialties: Option<Vec<String>>,
}

/// The signed in `User`
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user_type(&self) -> UserType {
        self.user.user_type
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_signs_up_providers_with_empty_business_profile() {
        let provider = User::new("Sophie".into(), "s@x.com".into(), UserType::Provider);
        assert!(provider.id.as_str().starts_with('p'));
        assert_eq!(provider.business_name.as_deref(), Some(""));
        assert_eq!(provider.display_name(), "Sophie");

        let client = User::new("Marie".into(), "m@x.com".into(), UserType::Client);
        assert!(client.id.as_str().starts_with('c'));
        assert_eq!(client.business_name, None);
    }

    #[test]
    fn clients_ignore_provider_fields_in_patch() {
        let mut client = User::new("Marie".into(), "m@x.com".into(), UserType::Client);
        client.apply(UserPatch {
            phone: Some("06 12 34 56 78".into()),
            business_name: Some("Shop".into()),
            ..Default::default()
        });
        assert_eq!(client.phone, "06 12 34 56 78");
        assert_eq!(client.business_name, None);
    }

    #[test]
    fn it_reads_provider_json() {
        let json = r#"{"id":"p1","name":"Sophie Bernard","email":"sophie@salonelegance.com","phone":"06","userType":"provider","businessName":"Salon Élégance","specialties":["Coiffure"],"bio":"Salon"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_provider());
        assert_eq!(user.display_name(), "Salon Élégance");
        assert_eq!(user.specialties, vec!["Coiffure".to_string()]);
    }
}
