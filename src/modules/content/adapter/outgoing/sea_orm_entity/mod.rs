pub mod blog_posts;
pub mod education;
pub mod experiences;
pub mod hero_image;
pub mod projects;
pub mod skills;
