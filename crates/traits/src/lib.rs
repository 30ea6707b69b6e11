pub mod data_url;
pub mod resource;

pub use data_url::{DataUrl, encode_data_url};
pub use resource::{DataUrlResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
