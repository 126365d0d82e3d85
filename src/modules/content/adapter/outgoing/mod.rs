pub mod sea_orm_entity;

pub mod blog_post_repository_postgres;
pub mod education_repository_postgres;
pub mod experience_repository_postgres;
pub mod hero_image_repository_postgres;
pub mod project_repository_postgres;
pub mod skill_repository_postgres;
