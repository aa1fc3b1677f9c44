#[cfg(test)]
pub mod impl_fake;
pub mod impl_path_slot;
pub mod interface;
