//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence so route handlers can stay focused on
//! request decoding and response shaping.

pub mod marks;
