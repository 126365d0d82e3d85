//! Plain Vec/Option-backed repositories for exercising use cases and
//! routes without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::content::application::ports::outgoing::blog_posts::{
    BlogPostRecord, BlogPostRepository, NewBlogPost,
};
use crate::content::application::ports::outgoing::education::{
    EducationRecord, EducationRepository, NewEducation,
};
use crate::content::application::ports::outgoing::experiences::{
    ExperienceRecord, ExperienceRepository, NewExperience,
};
use crate::content::application::ports::outgoing::hero_image::{
    HeroImageRecord, HeroImageRepository,
};
use crate::content::application::ports::outgoing::projects::{
    NewProject, ProjectRecord, ProjectRepository,
};
use crate::content::application::ports::outgoing::skills::{
    NewSkill, SkillRecord, SkillRepository,
};
use crate::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Default)]
pub struct InMemoryProjects {
    rows: Mutex<Vec<ProjectRecord>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn insert(&self, data: NewProject) -> Result<ProjectRecord, ContentRepositoryError> {
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            stack: data.stack,
            image_url: data.image_url,
            video_url: data.video_url,
            created_at: Utc::now().fixed_offset(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ProjectRecord>, ContentRepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySkills {
    rows: Mutex<Vec<SkillRecord>>,
}

#[async_trait]
impl SkillRepository for InMemorySkills {
    async fn insert(&self, data: NewSkill) -> Result<SkillRecord, ContentRepositoryError> {
        let record = SkillRecord {
            id: Uuid::new_v4(),
            name: data.name,
            proficiency: data.proficiency,
            created_at: Utc::now().fixed_offset(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<SkillRecord>, ContentRepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryExperiences {
    rows: Mutex<Vec<ExperienceRecord>>,
}

#[async_trait]
impl ExperienceRepository for InMemoryExperiences {
    async fn insert(
        &self,
        data: NewExperience,
    ) -> Result<ExperienceRecord, ContentRepositoryError> {
        let record = ExperienceRecord {
            id: Uuid::new_v4(),
            title: data.title,
            company: data.company,
            period: data.period,
            description: data.description,
            created_at: Utc::now().fixed_offset(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ExperienceRecord>, ContentRepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEducation {
    rows: Mutex<Vec<EducationRecord>>,
}

#[async_trait]
impl EducationRepository for InMemoryEducation {
    async fn insert(&self, data: NewEducation) -> Result<EducationRecord, ContentRepositoryError> {
        let record = EducationRecord {
            id: Uuid::new_v4(),
            degree: data.degree,
            institution: data.institution,
            period: data.period,
            description: data.description,
            created_at: Utc::now().fixed_offset(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<EducationRecord>, ContentRepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBlogPosts {
    rows: Mutex<Vec<BlogPostRecord>>,
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPosts {
    async fn insert(&self, data: NewBlogPost) -> Result<BlogPostRecord, ContentRepositoryError> {
        // Publication time is assigned here, same as the Postgres adapter.
        let now = Utc::now().fixed_offset();
        let record = BlogPostRecord {
            id: Uuid::new_v4(),
            title: data.title,
            content: data.content,
            image_url: data.image_url,
            published_at: now,
            created_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<BlogPostRecord>, ContentRepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryHeroImage {
    current: Mutex<Option<HeroImageRecord>>,
}

#[async_trait]
impl HeroImageRepository for InMemoryHeroImage {
    async fn get(&self) -> Result<Option<HeroImageRecord>, ContentRepositoryError> {
        Ok(self.current.lock().unwrap().clone())
    }

    async fn set(&self, image_url: String) -> Result<HeroImageRecord, ContentRepositoryError> {
        let record = HeroImageRecord {
            image_url,
            updated_at: Utc::now().fixed_offset(),
        };
        *self.current.lock().unwrap() = Some(record.clone());
        Ok(record)
    }

    async fn delete(&self) -> Result<(), ContentRepositoryError> {
        *self.current.lock().unwrap() = None;
        Ok(())
    }
}
