//! `fl-status` - point-in-time package status.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`resolver`] | `resolve_status` - pure status decision                 |
//! | [`view`]     | `StatusView` - the displayed line for one package       |
//!
//! # Design notes
//!
//! Status is a pure projection of `(package, query time, dispatch time)`.
//! [`resolve_status`] only reads; writing the result back into the stored
//! package is a separate, explicit step ([`StatusView::apply_to`]).  Keeping
//! the two apart means queries can run while nothing else holds `&mut` to
//! the table, and the one mutating path is easy to find.

pub mod resolver;
pub mod view;

#[cfg(test)]
mod tests;

pub use resolver::resolve_status;
pub use view::StatusView;
