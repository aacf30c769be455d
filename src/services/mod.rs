pub mod contacts;
pub mod errors;
