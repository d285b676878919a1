pub mod event;
pub mod purchase;
