//! Reusable UI components

pub mod chart_canvas;
pub mod forms;
pub mod icons;
pub mod modal;
pub mod sidebar;
pub mod spinner;
pub mod stat_card;
pub mod table;
pub mod toast;

pub use chart_canvas::*;
pub use forms::*;
pub use icons::*;
pub use modal::*;
pub use sidebar::*;
pub use spinner::*;
pub use stat_card::*;
pub use table::*;
pub use toast::*;
