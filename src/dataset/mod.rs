pub mod clean;
pub mod error;
pub mod export;
pub mod split;
