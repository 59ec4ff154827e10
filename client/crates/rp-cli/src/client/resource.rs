/// Content collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Techniques,
    Mistakes,
    Solutions,
    Videos,
    Screenshots,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Self::Techniques => "/techniques",
            Self::Mistakes => "/mistakes",
            Self::Solutions => "/solutions",
            Self::Videos => "/videos",
            Self::Screenshots => "/screenshots",
        }
    }

    pub fn item_path(self, id: &str) -> String {
        format!("{}/{}", self.path(), id)
    }
}
