pub mod locale;
pub mod platform;
pub mod storage;
pub mod timing;
