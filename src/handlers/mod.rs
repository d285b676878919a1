pub mod api;
pub mod event;
pub mod purchase;

pub use api::handle_api_event;
pub use event::handle_purchase_event;
pub use purchase::record_purchase;
