pub mod request;
pub mod version;
