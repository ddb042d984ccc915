pub mod games;
pub mod logger;
