pub mod blog_posts;
pub mod education;
pub mod experiences;
pub mod hero_image;
pub mod projects;
pub mod skills;

use std::sync::Arc;

/// Error surface shared by every content use case.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<super::ports::outgoing::ContentRepositoryError> for ContentError {
    fn from(e: super::ports::outgoing::ContentRepositoryError) -> Self {
        ContentError::DatabaseError(e.to_string())
    }
}

// One handle per collection, grouped so the application state stays flat.
// Route handlers only ever see these trait objects.

#[derive(Clone)]
pub struct ProjectOps {
    pub add: Arc<dyn projects::AddProjectUseCase>,
    pub list: Arc<dyn projects::ListProjectsUseCase>,
    pub delete: Arc<dyn projects::DeleteProjectUseCase>,
}

impl ProjectOps {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: projects::AddProjectUseCase
            + projects::ListProjectsUseCase
            + projects::DeleteProjectUseCase
            + 'static,
    {
        Self {
            add: service.clone(),
            list: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct SkillOps {
    pub add: Arc<dyn skills::AddSkillUseCase>,
    pub list: Arc<dyn skills::ListSkillsUseCase>,
    pub delete: Arc<dyn skills::DeleteSkillUseCase>,
}

impl SkillOps {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: skills::AddSkillUseCase + skills::ListSkillsUseCase + skills::DeleteSkillUseCase + 'static,
    {
        Self {
            add: service.clone(),
            list: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct ExperienceOps {
    pub add: Arc<dyn experiences::AddExperienceUseCase>,
    pub list: Arc<dyn experiences::ListExperiencesUseCase>,
    pub delete: Arc<dyn experiences::DeleteExperienceUseCase>,
}

impl ExperienceOps {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: experiences::AddExperienceUseCase
            + experiences::ListExperiencesUseCase
            + experiences::DeleteExperienceUseCase
            + 'static,
    {
        Self {
            add: service.clone(),
            list: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct EducationOps {
    pub add: Arc<dyn education::AddEducationUseCase>,
    pub list: Arc<dyn education::ListEducationUseCase>,
    pub delete: Arc<dyn education::DeleteEducationUseCase>,
}

impl EducationOps {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: education::AddEducationUseCase
            + education::ListEducationUseCase
            + education::DeleteEducationUseCase
            + 'static,
    {
        Self {
            add: service.clone(),
            list: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct BlogPostOps {
    pub add: Arc<dyn blog_posts::AddBlogPostUseCase>,
    pub list: Arc<dyn blog_posts::ListBlogPostsUseCase>,
    pub delete: Arc<dyn blog_posts::DeleteBlogPostUseCase>,
}

impl BlogPostOps {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: blog_posts::AddBlogPostUseCase
            + blog_posts::ListBlogPostsUseCase
            + blog_posts::DeleteBlogPostUseCase
            + 'static,
    {
        Self {
            add: service.clone(),
            list: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct HeroImageOps {
    pub get: Arc<dyn hero_image::GetHeroImageUseCase>,
    pub set: Arc<dyn hero_image::SetHeroImageUseCase>,
    pub delete: Arc<dyn hero_image::DeleteHeroImageUseCase>,
}

impl HeroImageOps {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: hero_image::GetHeroImageUseCase
            + hero_image::SetHeroImageUseCase
            + hero_image::DeleteHeroImageUseCase
            + 'static,
    {
        Self {
            get: service.clone(),
            set: service.clone(),
            delete: service,
        }
    }
}
