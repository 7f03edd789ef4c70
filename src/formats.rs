use serde::{Deserialize, Serialize};

/// Settings handed to the documentation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    pub autodoc_default_options: AutodocOptions,
    pub autosummary_generate: bool,
    pub autosummary_generate_overwrite: bool,
    pub numpydoc_show_class_members: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            autodoc_default_options: AutodocOptions::default(),
            autosummary_generate: true,
            autosummary_generate_overwrite: true,
            numpydoc_show_class_members: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutodocOptions {
    pub members: bool,
    pub member_order: MemberOrder,
    #[serde(rename = "show-inheritance")]
    pub show_inheritance: bool,
}

impl Default for AutodocOptions {
    fn default() -> Self {
        Self {
            members: true,
            member_order: MemberOrder::BySource,
            show_inheritance: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberOrder {
    Alphabetical,
    GroupWise,
    #[default]
    BySource,
}

impl MemberOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::GroupWise => "groupwise",
            Self::BySource => "bysource",
        }
    }
}
