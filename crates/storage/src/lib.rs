mod backend;
mod local;
mod remote;
mod retry;
mod errors;

#[cfg(feature = "s3")]
mod s3;

pub use backend::StorageBackend;
pub use local::LocalBackend;
pub use remote::{ObjectClient, PutReceipt, RemoteBackend};
pub use retry::RetryPolicy;
pub use errors::*;

#[cfg(feature = "s3")]
pub use s3::S3ObjectClient;
