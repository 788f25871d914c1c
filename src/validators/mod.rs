pub mod error;
pub mod reservation_validator;
