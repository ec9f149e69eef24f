//! UI state of the portfolio page, independent of the renderer.
//!
//! [`PortfolioView`] owns every piece of page state. Timed transitions are not run by the
//! view itself: it hands out [`Deferred`] requests and the driver (browser timers, or a
//! virtual clock in tests) calls [`PortfolioView::fire`] when each one is due. Once the
//! view is unmounted, late firings are ignored.

mod contact;
mod nav;
mod progress;
mod section;
mod tabs;

pub use contact::{
    ContactDraft, ContactForm, Field, FormPhase, LocalSubmitter, SubmitError, Submitter,
    CONFIRMATION_DELAY,
};
pub use nav::{NavState, ScrollMetrics, SCROLL_THRESHOLD, SPY_LINE};
pub use progress::{ProgressError, SkillProgress, REVEAL_DELAY};
pub use section::{Section, SectionError};
pub use tabs::TabSelector;

use std::{collections::BTreeMap, time::Duration};

use thiserror::Error;

use crate::content::{Category, SkillGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    RevealProgress,
    ResetContact,
}

impl Task {
    pub fn delay(self) -> Duration {
        match self {
            Task::RevealProgress => REVEAL_DELAY,
            Task::ResetContact => CONFIRMATION_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A timer the driver must start: call [`PortfolioView::fire`] with `id` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub id: TaskId,
    pub task: Task,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    Disposed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("view is {0:?}, not mounted")]
    NotMounted(Lifecycle),
    #[error("view was already mounted")]
    AlreadyMounted,
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

#[derive(Debug, Clone)]
pub struct PortfolioView {
    nav: NavState,
    progress: SkillProgress,
    contact: ContactForm,
    tabs: TabSelector,
    lifecycle: Lifecycle,
    pending: BTreeMap<TaskId, Task>,
    next_id: u64,
}

impl PortfolioView {
    pub fn new(skills: &[SkillGroup]) -> Result<Self, ViewError> {
        Ok(Self {
            nav: NavState::new(),
            progress: SkillProgress::from_registry(skills)?,
            contact: ContactForm::new(),
            tabs: TabSelector::new(),
            lifecycle: Lifecycle::Created,
            pending: BTreeMap::new(),
            next_id: 0,
        })
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn progress(&self) -> &SkillProgress {
        &self.progress
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn tabs(&self) -> &TabSelector {
        &self.tabs
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Tasks waiting on a timer, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = (TaskId, Task)> + '_ {
        self.pending.iter().map(|(id, task)| (*id, *task))
    }

    /// Start the view's lifetime. Returns the progress reveal timer to start.
    pub fn mount(&mut self) -> Result<Deferred, ViewError> {
        if self.lifecycle != Lifecycle::Created {
            return Err(ViewError::AlreadyMounted);
        }
        self.lifecycle = Lifecycle::Mounted;
        log::debug!("portfolio view mounted");
        Ok(self.schedule(Task::RevealProgress))
    }

    /// End the view's lifetime. Returns the timers the driver still has to clear.
    pub fn unmount(&mut self) -> Vec<TaskId> {
        self.lifecycle = Lifecycle::Disposed;
        let cancelled = std::mem::take(&mut self.pending);
        if !cancelled.is_empty() {
            log::debug!("cancelling {} pending task(s) on unmount", cancelled.len());
        }
        cancelled.into_keys().collect()
    }

    /// Run a due task. Unknown, already-fired and post-unmount ids are ignored;
    /// returns whether anything was applied.
    pub fn fire(&mut self, id: TaskId) -> bool {
        if self.lifecycle != Lifecycle::Mounted {
            log::debug!("ignoring task {id:?} on a {:?} view", self.lifecycle);
            return false;
        }
        let Some(task) = self.pending.remove(&id) else {
            return false;
        };
        match task {
            Task::RevealProgress => {
                self.progress.reveal();
            }
            Task::ResetContact => self.contact.reset(),
        }
        true
    }

    pub fn activate(&mut self, section: Section) {
        self.nav.activate(section);
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    /// Recompute the scrolled flag. Cheap enough for every scroll event.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        self.nav.observe_scroll(offset)
    }

    pub fn spy(&mut self, metrics: &ScrollMetrics, tops: &[(Section, f64)]) -> bool {
        self.nav.spy(metrics, tops)
    }

    pub fn select_tab(&mut self, category: Category) -> bool {
        self.tabs.select(category)
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.contact.edit(field, value)
    }

    /// Submit the contact draft. On success returns the timer that ends the confirmation.
    pub fn submit<S: Submitter + ?Sized>(&mut self, submitter: &S) -> Result<Deferred, ViewError> {
        if self.lifecycle != Lifecycle::Mounted {
            return Err(ViewError::NotMounted(self.lifecycle));
        }
        self.contact.submit(submitter)?;
        Ok(self.schedule(Task::ResetContact))
    }

    fn schedule(&mut self, task: Task) -> Deferred {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, task);
        Deferred {
            id,
            task,
            delay: task.delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    /// Deterministic stand-in for browser timers.
    #[derive(Default)]
    struct VirtualClock {
        now: Duration,
        timers: Vec<(Duration, TaskId)>,
    }

    impl VirtualClock {
        fn start(&mut self, deferred: Deferred) {
            self.timers.push((self.now + deferred.delay, deferred.id));
        }

        fn cancel(&mut self, ids: &[TaskId]) {
            self.timers.retain(|(_, id)| !ids.contains(id));
        }

        fn advance(&mut self, view: &mut PortfolioView, by: Duration) -> usize {
            self.now += by;
            let now = self.now;
            let mut due = self
                .timers
                .iter()
                .filter(|(at, _)| *at <= now)
                .copied()
                .collect::<Vec<_>>();
            due.sort();
            self.timers.retain(|(at, _)| *at > now);
            due.into_iter().filter(|(_, id)| view.fire(*id)).count()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mounted() -> (PortfolioView, VirtualClock) {
        let mut view = PortfolioView::new(&SKILLS).unwrap();
        let mut clock = VirtualClock::default();
        clock.start(view.mount().unwrap());
        (view, clock)
    }

    fn fill(view: &mut PortfolioView) {
        view.edit(Field::Name, "Ada");
        view.edit(Field::Email, "ada@example.com");
        view.edit(Field::Message, "Let's build something");
    }

    #[test]
    fn test_progress_reveal_after_delay() {
        let (mut view, mut clock) = mounted();
        assert_eq!(clock.advance(&mut view, ms(499)), 0);
        assert!(view.progress().values().all(|(_, v)| v == 0));

        assert_eq!(clock.advance(&mut view, ms(1)), 1);
        for skill in SKILLS.iter().flat_map(|g| g.skills.iter()) {
            assert_eq!(view.progress().value(skill.name), Ok(skill.level));
        }

        // one-shot
        assert_eq!(clock.advance(&mut view, ms(10_000)), 0);
        assert_eq!(view.pending().count(), 0);
    }

    #[test]
    fn test_submit_then_reset() {
        let (mut view, mut clock) = mounted();
        clock.advance(&mut view, ms(600));
        fill(&mut view);

        let deferred = view.submit(&LocalSubmitter).unwrap();
        assert_eq!(deferred.task, Task::ResetContact);
        assert_eq!(deferred.delay, CONFIRMATION_DELAY);
        assert_eq!(view.contact().phase(), FormPhase::Confirmed);
        clock.start(deferred);

        clock.advance(&mut view, ms(2999));
        assert!(view.contact().is_confirmed());
        assert_eq!(view.contact().draft().name, "Ada");

        assert_eq!(clock.advance(&mut view, ms(1)), 1);
        assert_eq!(view.contact().phase(), FormPhase::Editing);
        assert!(view.contact().draft().is_empty());
    }

    #[test]
    fn test_failed_submit_schedules_nothing() {
        let (mut view, _clock) = mounted();
        view.edit(Field::Name, "Ada");
        let err = view.submit(&LocalSubmitter).unwrap_err();
        assert_eq!(err, ViewError::Submit(SubmitError::MissingField(Field::Email)));
        assert_eq!(
            view.pending().map(|(_, t)| t).collect::<Vec<_>>(),
            vec![Task::RevealProgress]
        );
    }

    #[test]
    fn test_unmount_during_reveal() {
        let (mut view, mut clock) = mounted();
        clock.advance(&mut view, ms(200));
        let cancelled = view.unmount();
        assert_eq!(cancelled.len(), 1);

        // a driver that forgot to cancel still cannot update the disposed view
        assert_eq!(clock.advance(&mut view, ms(1000)), 0);
        assert!(!view.progress().is_revealed());

        clock.cancel(&cancelled);
        assert!(clock.timers.is_empty());
    }

    #[test]
    fn test_unmount_during_confirmation() {
        let (mut view, mut clock) = mounted();
        clock.advance(&mut view, ms(500));
        fill(&mut view);
        clock.start(view.submit(&LocalSubmitter).unwrap());
        clock.advance(&mut view, ms(1000));

        let cancelled = view.unmount();
        assert_eq!(cancelled.len(), 1);
        clock.cancel(&cancelled);
        assert_eq!(clock.advance(&mut view, ms(5000)), 0);
        assert!(view.contact().is_confirmed());
        assert_eq!(view.lifecycle(), Lifecycle::Disposed);
    }

    #[test]
    fn test_fire_twice_applies_once() {
        let mut view = PortfolioView::new(&SKILLS).unwrap();
        let deferred = view.mount().unwrap();
        assert!(view.fire(deferred.id));
        assert!(!view.fire(deferred.id));
    }

    #[test]
    fn test_lifecycle_misuse() {
        let mut view = PortfolioView::new(&SKILLS).unwrap();
        fill(&mut view);
        assert_eq!(
            view.submit(&LocalSubmitter),
            Err(ViewError::NotMounted(Lifecycle::Created))
        );
        view.mount().unwrap();
        assert_eq!(view.mount(), Err(ViewError::AlreadyMounted));
        view.unmount();
        assert_eq!(view.mount(), Err(ViewError::AlreadyMounted));
        assert_eq!(
            view.submit(&LocalSubmitter),
            Err(ViewError::NotMounted(Lifecycle::Disposed))
        );
    }

    #[test]
    fn test_nav_scenario() {
        let (mut view, _clock) = mounted();
        view.toggle_menu();
        assert!(view.nav().menu_open());
        view.activate(Section::Projects);
        assert_eq!(view.nav().active(), Section::Projects);
        assert!(!view.nav().menu_open());

        // the smooth scroll's first tick must not pull the highlight back to home
        let metrics = ScrollMetrics {
            offset: 60.0,
            viewport_height: 800.0,
            document_height: 4000.0,
        };
        let tops = [
            (Section::Home, -60.0),
            (Section::Projects, 940.0),
            (Section::Skills, 1940.0),
            (Section::Contact, 2940.0),
        ];
        assert!(view.observe_scroll(metrics.offset));
        assert!(!view.spy(&metrics, &tops));
        assert_eq!(view.nav().active(), Section::Projects);
        assert!(view.nav().scrolled());
    }

    #[test]
    fn test_typing_scenario() {
        let (mut view, _clock) = mounted();
        view.edit(Field::Email, "ada@example.com");
        view.edit(Field::Name, "Ada");
        assert_eq!(view.contact().draft().name, "Ada");
        assert_eq!(view.contact().draft().email, "ada@example.com");
        assert_eq!(view.contact().draft().message, "");
    }

    #[test]
    fn test_tab_selection() {
        let (mut view, _clock) = mounted();
        assert_eq!(view.tabs().selected(), Category::Frontend);
        assert!(!view.select_tab(Category::Frontend));
        assert!(view.select_tab(Category::Backend));
        assert_eq!(view.tabs().visible_skills()[2].name, "PostgreSQL");
    }
}
