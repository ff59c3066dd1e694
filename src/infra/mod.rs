//! Infrastructure layer — side-effectful implementations of application
//! ports.

pub mod hostname;

pub use hostname::UnameHostIdentity;
