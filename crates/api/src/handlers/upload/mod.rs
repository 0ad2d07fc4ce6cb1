mod handler;
mod models;
mod parser;
mod validator;

pub use handler::upload_file;
