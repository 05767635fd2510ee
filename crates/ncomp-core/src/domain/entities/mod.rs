pub mod config;
pub mod request;
pub mod result;
pub mod template;

pub use config::*;
pub use request::*;
pub use result::*;
pub use template::*;
