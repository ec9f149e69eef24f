use crate::content::{skills_in, Category, Skill};

/// Which skill category is showing. Starts on the first declared category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelector {
    selected: Category,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected == category
    }

    /// Returns whether the visible category changed.
    pub fn select(&mut self, category: Category) -> bool {
        let changed = self.selected != category;
        self.selected = category;
        changed
    }

    pub fn visible_skills(&self) -> &'static [Skill] {
        skills_in(self.selected)
    }
}
