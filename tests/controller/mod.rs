//! Handler behaviour through the assembled application.

mod index;
mod post;
