//! Helpers for making the generated site installable as a PWA.

mod tags;

pub use tags::{inject_into_file, inject_pwa_tags, render_tag_block};
