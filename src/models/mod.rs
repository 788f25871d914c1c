pub mod action_status;
pub mod reservation;
pub mod timestamp;
