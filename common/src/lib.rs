pub mod constants;
pub mod error;
pub mod logger;
pub mod random;
pub mod storage;
pub mod types;
pub mod utils;
