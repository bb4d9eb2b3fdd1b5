pub mod captions;
pub mod crawler;
pub mod export;
