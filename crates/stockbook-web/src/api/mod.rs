mod http;
mod sync;

pub use http::BrowserTransport;
pub use sync::{spawn_refresh, spawn_submit};
