//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so each piece has exactly one writer: `theme`
//! owns the light/dark mode, `route` owns path matching, and `transition`
//! owns the mount/unmount sequencing of pages.

pub mod route;
pub mod theme;
pub mod transition;
