mod asset;
mod site;

pub use asset::*;
pub use site::*;
