//! User interface components for the chip screen.
//!
//! The home route renders the filter chips in a wrapping row with a submit
//! button underneath. Selected filters are announced through toasts.

mod chip;         // Filter chip and the elevated surface it sits on
pub mod home;     // Chip section screen (public for routing)
mod toast;        // Transient notification host
