//! Presentation of a built grid.
//!
//! The grid builder decides what goes where; this module only lays the
//! result out. Hidden cells are skipped entirely, visible cells carry
//! their rowspan, and colors come from a static [`Palette`].

pub mod html;
mod palette;

pub use html::{render_page, render_table};
pub use palette::{Palette, Rgb};
