pub mod body;
pub mod http;
pub mod logging;
