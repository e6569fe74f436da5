//! Form rendering for the login screen

mod field_renderer;

pub use field_renderer::draw_field_with_value;
