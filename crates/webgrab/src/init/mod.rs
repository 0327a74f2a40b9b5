pub mod cmd;
pub mod logger;
