#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Drafts,
    OneDraft,
}

impl Endpoint {
    pub fn template(self) -> &'static str {
        match self {
            Endpoint::Drafts => "/drafts",
            Endpoint::OneDraft => "/drafts/{id}",
        }
    }

    /// Path without the id slot; the executor appends the path segment.
    pub fn collection(self) -> &'static str {
        match self {
            Endpoint::Drafts | Endpoint::OneDraft => "/drafts",
        }
    }

    pub fn takes_path(self) -> bool {
        matches!(self, Endpoint::OneDraft)
    }
}
