pub mod civic;
pub mod social;
