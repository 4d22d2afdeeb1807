pub mod spdx_client;
pub mod text_cache;

pub use spdx_client::{SpdxClient, DEFAULT_EXCEPTION_LIST_URL, DEFAULT_LICENSE_LIST_URL};
pub use text_cache::TextCache;
