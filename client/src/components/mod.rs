//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (nav bar, footer, theme toggle), the page
//! transition host, and the small content blocks pages are built from.

pub mod avatar;
pub mod contact_buttons;
pub mod footer;
pub mod nav_bar;
pub mod page_host;
pub mod project_card;
pub mod theme_toggle;
