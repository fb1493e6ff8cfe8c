//! Identity provider adapter.

mod userinfo;

pub use userinfo::{UserinfoClient, UserinfoConfig};
