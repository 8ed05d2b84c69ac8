//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one route's presentation. Document structure and metadata
//! live in `app`; pages render only what appears inside `<body>`.

pub mod home;
pub mod not_found;
