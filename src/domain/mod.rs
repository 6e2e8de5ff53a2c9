pub mod credentials;
pub mod group;
