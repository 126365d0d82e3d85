pub use sea_orm_migration::prelude::*;

mod m20260712_101000_create_table_projects;
mod m20260712_101200_create_table_skills;
mod m20260712_101400_create_table_experiences;
mod m20260712_101600_create_table_education;
mod m20260712_101800_create_table_blog_posts;
mod m20260712_102000_create_table_hero_image;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_101000_create_table_projects::Migration),
            Box::new(m20260712_101200_create_table_skills::Migration),
            Box::new(m20260712_101400_create_table_experiences::Migration),
            Box::new(m20260712_101600_create_table_education::Migration),
            Box::new(m20260712_101800_create_table_blog_posts::Migration),
            Box::new(m20260712_102000_create_table_hero_image::Migration),
        ]
    }
}
