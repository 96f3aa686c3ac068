pub mod config;
pub mod error;

// CopMap domain modules
pub mod alert;
pub mod duty;
pub mod officer;
pub mod session;
pub mod stats;

pub use config::*;
pub use error::*;

pub use alert::*;
pub use duty::*;
pub use officer::*;
pub use session::*;
pub use stats::*;
