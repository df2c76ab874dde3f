//! HTML rendering handlers for the portfolio page.

mod contact;
mod home;
mod page;
mod theme;

pub use contact::contact_handler;
pub use home::home_handler;
pub use page::PageTemplate;
pub use theme::theme_handler;
