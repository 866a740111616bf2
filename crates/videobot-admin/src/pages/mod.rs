//! One page per panel section

pub mod dashboard;
pub mod downloads;
pub mod products;
pub mod sales;
pub mod settings;
pub mod users;

pub use dashboard::*;
pub use downloads::*;
pub use products::*;
pub use sales::*;
pub use settings::*;
pub use users::*;
