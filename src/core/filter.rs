/// Project card filter selected by a button's `data-filter` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
    /// Button without `data-filter`: shows only cards without a category.
    Uncategorized,
}

impl ProjectFilter {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("all") => ProjectFilter::All,
            Some(other) => ProjectFilter::Category(other.to_string()),
            None => ProjectFilter::Uncategorized,
        }
    }

    /// Categories compare exactly, as attribute strings.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(want) => category == Some(want.as_str()),
            ProjectFilter::Uncategorized => category.is_none(),
        }
    }
}
