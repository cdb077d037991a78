pub mod atoms;
pub mod foundation;

pub use foundation::ButtonVariant;

pub use atoms::*;
