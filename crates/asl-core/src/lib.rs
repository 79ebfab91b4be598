pub mod logging;
pub mod lookup;
pub mod store_url;
