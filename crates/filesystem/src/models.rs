/// Namespace for the filesystem helpers shared by bootstrap and storage
pub struct FileSystem;
