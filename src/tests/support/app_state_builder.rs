use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::check_session::CheckSessionUseCase;
use crate::auth::application::use_cases::login_operator::LoginOperatorUseCase;
use crate::auth::application::use_cases::logout_operator::LogoutOperatorUseCase;
use crate::contact::application::use_cases::SubmitContactUseCase;
use crate::content::application::use_cases::blog_posts::BlogPostContentService;
use crate::content::application::use_cases::education::EducationContentService;
use crate::content::application::use_cases::experiences::ExperienceContentService;
use crate::content::application::use_cases::hero_image::HeroImageService;
use crate::content::application::use_cases::projects::ProjectContentService;
use crate::content::application::use_cases::skills::SkillContentService;
use crate::content::application::use_cases::{
    BlogPostOps, EducationOps, ExperienceOps, HeroImageOps, ProjectOps, SkillOps,
};
use crate::media::application::use_cases::upload_asset::UploadAssetUseCase;
use crate::tests::support::memory::{
    InMemoryBlogPosts, InMemoryEducation, InMemoryExperiences, InMemoryHeroImage,
    InMemoryProjects, InMemorySkills,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` for route tests. Content collections default to
/// real services over in-memory repositories; everything else defaults
/// to a stub that panics if the test reaches it unexpectedly.
pub struct TestAppStateBuilder {
    login_operator: Arc<dyn LoginOperatorUseCase>,
    logout_operator: Arc<dyn LogoutOperatorUseCase>,
    check_session: Arc<dyn CheckSessionUseCase>,
    projects: ProjectOps,
    skills: SkillOps,
    experiences: ExperienceOps,
    education: EducationOps,
    blogs: BlogPostOps,
    hero: HeroImageOps,
    upload_asset: Arc<dyn UploadAssetUseCase>,
    submit_contact: Arc<dyn SubmitContactUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_operator: Arc::new(StubLoginOperator),
            logout_operator: Arc::new(StubLogoutOperator),
            check_session: Arc::new(StubCheckSession),
            projects: ProjectOps::from_service(Arc::new(ProjectContentService::new(Arc::new(
                InMemoryProjects::default(),
            )))),
            skills: SkillOps::from_service(Arc::new(SkillContentService::new(Arc::new(
                InMemorySkills::default(),
            )))),
            experiences: ExperienceOps::from_service(Arc::new(ExperienceContentService::new(
                Arc::new(InMemoryExperiences::default()),
            ))),
            education: EducationOps::from_service(Arc::new(EducationContentService::new(
                Arc::new(InMemoryEducation::default()),
            ))),
            blogs: BlogPostOps::from_service(Arc::new(BlogPostContentService::new(Arc::new(
                InMemoryBlogPosts::default(),
            )))),
            hero: HeroImageOps::from_service(Arc::new(HeroImageService::new(Arc::new(
                InMemoryHeroImage::default(),
            )))),
            upload_asset: Arc::new(StubUploadAsset),
            submit_contact: Arc::new(StubSubmitContact),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_operator(mut self, uc: impl LoginOperatorUseCase + 'static) -> Self {
        self.login_operator = Arc::new(uc);
        self
    }

    pub fn with_logout_operator(mut self, uc: impl LogoutOperatorUseCase + 'static) -> Self {
        self.logout_operator = Arc::new(uc);
        self
    }

    pub fn with_check_session(mut self, uc: impl CheckSessionUseCase + 'static) -> Self {
        self.check_session = Arc::new(uc);
        self
    }

    pub fn with_project_ops(mut self, ops: ProjectOps) -> Self {
        self.projects = ops;
        self
    }

    pub fn with_skill_ops(mut self, ops: SkillOps) -> Self {
        self.skills = ops;
        self
    }

    pub fn with_experience_ops(mut self, ops: ExperienceOps) -> Self {
        self.experiences = ops;
        self
    }

    pub fn with_education_ops(mut self, ops: EducationOps) -> Self {
        self.education = ops;
        self
    }

    pub fn with_blog_post_ops(mut self, ops: BlogPostOps) -> Self {
        self.blogs = ops;
        self
    }

    pub fn with_hero_ops(mut self, ops: HeroImageOps) -> Self {
        self.hero = ops;
        self
    }

    pub fn with_upload_asset(mut self, uc: impl UploadAssetUseCase + 'static) -> Self {
        self.upload_asset = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: Arc<dyn SubmitContactUseCase>) -> Self {
        self.submit_contact = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_operator: self.login_operator,
            logout_operator: self.logout_operator,
            check_session: self.check_session,
            projects: self.projects,
            skills: self.skills,
            experiences: self.experiences,
            education: self.education,
            blogs: self.blogs,
            hero: self.hero,
            upload_asset: self.upload_asset,
            submit_contact: self.submit_contact,
        })
    }
}
