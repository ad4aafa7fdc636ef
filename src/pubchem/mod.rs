pub mod client;
pub mod error;
pub mod key;
pub mod response;

pub use client::{PubChemClient, PubChemRecord, DEFAULT_BASE_URL};
pub use error::LookupError;
pub use key::StructureKey;
