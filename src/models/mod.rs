pub mod dashboard;
pub mod generation;
pub mod recipe;
pub mod schema;

pub use dashboard::*;
pub use generation::*;
pub use recipe::*;
pub use schema::*;
