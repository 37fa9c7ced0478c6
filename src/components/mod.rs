pub mod app;
pub mod blog_modal;
pub mod blog_post_page;
pub mod camera_controls;
pub mod control_center;
pub mod hero_section;
pub mod link;
pub mod star_map;
pub mod star_marker;
pub mod universe_page;
