use crate::domain::model::{ContentStore, Experience, Highlight, LinkSet, Project};

/// Read-only view of the page content, shared by the validator and the view layer.
pub trait ContentProvider: Send + Sync {
    fn links(&self) -> &LinkSet;
    fn highlights(&self) -> &[Highlight];
    fn skills(&self) -> &[String];
    fn experiences(&self) -> &[Experience];
    fn projects(&self) -> &[Project];
}

impl ContentProvider for ContentStore {
    fn links(&self) -> &LinkSet {
        &self.links
    }

    fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    fn skills(&self) -> &[String] {
        &self.skills
    }

    fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }
}
