pub mod blogs;
pub mod education;
pub mod experiences;
pub mod hero_image;
pub mod projects;
pub mod skills;

pub use blogs::{create_blog_post_handler, delete_blog_post_handler, get_public_blogs_handler};
pub use education::{
    create_education_handler, delete_education_handler, get_public_education_handler,
};
pub use experiences::{
    create_experience_handler, delete_experience_handler, get_public_experiences_handler,
};
pub use hero_image::{
    delete_hero_image_handler, get_public_hero_image_handler, set_hero_image_handler,
};
pub use projects::{create_project_handler, delete_project_handler, get_public_projects_handler};
pub use skills::{create_skill_handler, delete_skill_handler, get_public_skills_handler};
