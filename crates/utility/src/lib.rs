pub mod id;
pub mod serde;
