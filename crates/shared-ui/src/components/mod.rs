// Standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod meter;
pub mod page_header;
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use meter::*;
pub use page_header::*;
pub use sidebar::*;
