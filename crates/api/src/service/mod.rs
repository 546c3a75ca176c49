mod create_service;
mod delete_service;
mod get_categories;
mod get_service;
mod list_services;
mod update_service;

pub use create_service::{create_service, CreateServiceInput, CreateServiceUseCase};
pub use delete_service::{delete_service, DeleteServiceUseCase};
pub use get_categories::{get_categories, GetCategoriesUseCase};
pub use get_service::{get_service, resolve_provider, GetServiceUseCase, ServiceWithProvider};
pub use list_services::{list_services, search_services, ListServicesUseCase, ServiceQuery};
pub use update_service::{update_service, UpdateServiceUseCase};
