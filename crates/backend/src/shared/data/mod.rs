pub mod fixtures;
pub mod storage;
