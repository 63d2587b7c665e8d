pub mod consolidate;
pub mod overlay;
pub mod rules;
pub mod selection;

mod overlay_test;
