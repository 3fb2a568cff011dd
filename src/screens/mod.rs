pub mod dashboard;
pub mod sources;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Page {
    Dashboard,
    Sources,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Sources];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Sources => "Sources",
        }
    }

    /// Single-letter mark shown while the sidebar is collapsed.
    pub fn short_label(&self) -> &'static str {
        match self {
            Page::Dashboard => "D",
            Page::Sources => "S",
        }
    }
}
