pub mod error;
pub mod contact;
pub mod social;
pub mod logo;
pub mod landing;
pub mod validation;
pub mod user_info;

pub use error::ErrorResponse;
pub use contact::*;
pub use social::*;
pub use logo::*;
pub use landing::*;
pub use validation::*;
pub use user_info::*;

#[cfg(test)]
mod tests;
