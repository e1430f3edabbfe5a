pub mod errors;
pub mod handler;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;
