pub mod collect;
pub mod groups;
pub mod validate;
