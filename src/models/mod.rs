pub mod movie;
pub mod quote;

pub use movie::*;
pub use quote::*;
