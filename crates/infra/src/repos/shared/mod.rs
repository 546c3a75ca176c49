pub mod collection_store;
pub mod inmemory_repo;
