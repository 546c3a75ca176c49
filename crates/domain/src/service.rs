use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SERVICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=400&h=300&fit=crop";

/// A bookable offer in the catalogue of a provider.
///
/// The provider's display name is not stored on the `Service`, it is
/// looked up through `providerId` whenever it is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ID,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Duration in minutes
    pub duration: u32,
    pub description: String,
    pub provider_id: ID,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

/// Fields of a `Service` that its provider is allowed to change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidServiceError {
    #[error("Service name can not be empty")]
    EmptyName,
    #[error("Service description can not be empty")]
    EmptyDescription,
    #[error("Service price must be positive, got: {0}")]
    InvalidPrice(f64),
    #[error("Service duration must be positive")]
    InvalidDuration,
}

impl Service {
    pub fn new(
        provider_id: ID,
        name: String,
        category: String,
        price: f64,
        duration: u32,
        description: String,
    ) -> Result<Self, InvalidServiceError> {
        let service = Self {
            id: ID::generate("s"),
            name,
            category,
            price,
            duration,
            description,
            provider_id,
            image: DEFAULT_SERVICE_IMAGE.into(),
            rating: 0.0,
            reviews: 0,
        };
        service.validate()?;
        Ok(service)
    }

    pub fn validate(&self) -> Result<(), InvalidServiceError> {
        if self.name.trim().is_empty() {
            return Err(InvalidServiceError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(InvalidServiceError::EmptyDescription);
        }
        if !(self.price > 0.0) {
            return Err(InvalidServiceError::InvalidPrice(self.price));
        }
        if self.duration == 0 {
            return Err(InvalidServiceError::InvalidDuration);
        }
        Ok(())
    }

    /// Merges the patch over this `Service`. Identity and owner never change.
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

impl Entity for Service {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn service() -> Service {
        Service::new(
            "p1".into(),
            "Coupe".into(),
            "Beauté".into(),
            45.0,
            60,
            "Coupe professionnelle".into(),
        )
        .unwrap()
    }

    #[test]
    fn it_creates_service_with_defaults() {
        let service = service();
        assert!(service.id.as_str().starts_with('s'));
        assert_eq!(service.rating, 0.0);
        assert_eq!(service.reviews, 0);
        assert_eq!(service.image, DEFAULT_SERVICE_IMAGE);
    }

    #[test]
    fn it_rejects_invalid_services() {
        let res = Service::new("p1".into(), "".into(), "Beauté".into(), 10.0, 30, "d".into());
        assert_eq!(res.unwrap_err(), InvalidServiceError::EmptyName);
        let res = Service::new("p1".into(), "n".into(), "Beauté".into(), 0.0, 30, "d".into());
        assert_eq!(res.unwrap_err(), InvalidServiceError::InvalidPrice(0.0));
        let res = Service::new("p1".into(), "n".into(), "Beauté".into(), 10.0, 0, "d".into());
        assert_eq!(res.unwrap_err(), InvalidServiceError::InvalidDuration);
    }

    #[test]
    fn it_applies_patch_without_touching_identity() {
        let mut service = service();
        let id = service.id.clone();
        service.apply(ServicePatch {
            price: Some(50.0),
            name: Some("Coupe homme".into()),
            ..Default::default()
        });
        assert_eq!(service.id, id);
        assert_eq!(service.provider_id, ID::from("p1"));
        assert_eq!(service.price, 50.0);
        assert_eq!(service.name, "Coupe homme");
        assert_eq!(service.duration, 60);
    }
}
