pub mod client;
pub mod error;
pub mod payload;
pub mod transport;

pub use client::*;
pub use error::*;
pub use payload::*;
pub use transport::*;
