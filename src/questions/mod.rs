pub mod parser;
pub mod question;
