pub mod compound_processing;
pub mod descriptors;

pub use compound_processing::{Compound, InvalidSmiles};
pub use descriptors::MolecularDescriptors;
