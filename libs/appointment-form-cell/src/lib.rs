pub mod component;
pub mod form;
pub mod models;
pub mod services;
pub mod validation;
pub mod view;

pub use component::*;
pub use form::FormState;
pub use models::*;
pub use services::*;
