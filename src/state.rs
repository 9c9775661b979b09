//! Shared application state for the screens layer.
//!
//! The profile / opportunities / selected-idea / plan bundle threaded to
//! every screen, held as one explicit object with setters as the only
//! mutation path. Single writer, many readers; reads hand out clones so no
//! lock is held across an await.

use std::sync::{Arc, RwLock};

use crate::model::{Opportunity, Plan, UserProfile};

#[derive(Debug, Default)]
struct Inner {
    user: Option<UserProfile>,
    opportunities: Vec<Opportunity>,
    selected_idea: Option<Opportunity>,
    plan: Option<Plan>,
}

/// Application-wide state bundle. Clone the `Arc`-wrapped value to share it.
#[derive(Debug, Default)]
pub struct AppState {
    inner: RwLock<Inner>,
}

impl AppState {
    /// Fresh, empty state.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Replaces the profile wholesale.
    pub fn set_user(&self, user: UserProfile) {
        self.write().user = Some(user);
    }

    /// Current profile, if onboarding has completed.
    pub fn user(&self) -> Option<UserProfile> {
        self.read().user.clone()
    }

    /// Replaces the generated opportunity list.
    pub fn set_opportunities(&self, opportunities: Vec<Opportunity>) {
        self.write().opportunities = opportunities;
    }

    /// Currently held opportunity list.
    pub fn opportunities(&self) -> Vec<Opportunity> {
        self.read().opportunities.clone()
    }

    /// Selects the current project idea. A plan generated for a previous
    /// idea is stale, so it is dropped.
    pub fn select_idea(&self, idea: Opportunity) {
        let mut inner = self.write();
        inner.selected_idea = Some(idea);
        inner.plan = None;
    }

    /// The idea downstream generation calls run against.
    pub fn selected_idea(&self) -> Option<Opportunity> {
        self.read().selected_idea.clone()
    }

    /// Replaces the execution plan.
    pub fn set_plan(&self, plan: Plan) {
        self.write().plan = Some(plan);
    }

    /// Current execution plan.
    pub fn plan(&self) -> Option<Plan> {
        self.read().plan.clone()
    }

    /// Appends a completed lesson topic to the profile. No-op when the topic
    /// is already recorded or no profile exists.
    pub fn mark_lesson_complete(&self, topic: &str) {
        let mut inner = self.write();
        if let Some(user) = inner.user.as_mut() {
            if !user.completed_lessons.iter().any(|t| t == topic) {
                user.completed_lessons.push(topic.to_string());
            }
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("state lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("state lock poisoned")
    }
}
