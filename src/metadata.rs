//! Placeholder package metadata left for a manual find-and-replace.

use crate::cli::MetadataArgs;

pub const AUTHOR_PLACEHOLDER: &str = "replaceWithAuthorName";
pub const PACKAGE_PLACEHOLDER: &str = "replaceWithPackageName";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub author: String,
    pub package: String,
}

impl PackageMetadata {
    pub fn placeholder() -> Self {
        Self {
            author: AUTHOR_PLACEHOLDER.to_owned(),
            package: PACKAGE_PLACEHOLDER.to_owned(),
        }
    }

    /// True once neither field still carries its placeholder.
    pub fn is_customized(&self) -> bool {
        self.author != AUTHOR_PLACEHOLDER && self.package != PACKAGE_PLACEHOLDER
    }

    pub fn copyright_line(&self, year: u16) -> String {
        format!("Copyright (C) {year} by {}", self.author)
    }
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self::placeholder()
    }
}

pub fn run(args: MetadataArgs) -> anyhow::Result<()> {
    let defaults = PackageMetadata::placeholder();
    let metadata = PackageMetadata {
        author: args.author.unwrap_or(defaults.author),
        package: args.package.unwrap_or(defaults.package),
    };

    if !metadata.is_customized() {
        tracing::warn!(
            author = %metadata.author,
            package = %metadata.package,
            "package metadata still contains template placeholders"
        );
    }

    println!("{}", metadata.copyright_line(args.year));
    Ok(())
}
