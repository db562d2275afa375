pub mod dispatch;
pub mod frameworks;
pub mod list;
pub mod schema;
pub mod status;
pub mod summary;
pub mod validate;

mod shared;
