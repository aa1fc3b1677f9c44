pub mod decision;
pub mod impl_fake;
pub mod impl_tract;
pub mod interface;
pub mod models;
pub mod pipeline;
pub mod preprocess;
pub mod tract;
