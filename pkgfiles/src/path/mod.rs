//! Contains helpers to deal with the file paths found in package content
//! listings.
//!
//! These are plain strings using whatever separator convention the host or
//! the package author used, so both `/` and `\` separate components, and
//! empty components (leading, trailing or doubled separators) are ignored.
use std::fmt::{self, Display};

mod name_key;
pub use name_key::NameKey;

/// The characters accepted as directory separators.
pub const SEPARATORS: [char; 2] = ['/', '\\'];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// A borrowed view of a full file path, split into its directory portion and
/// its file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackagePath<'a> {
    full: &'a str,
    directory: &'a str,
    file_name: &'a str,
}

impl<'a> PackagePath<'a> {
    pub fn new(full: &'a str) -> Self {
        let (directory, file_name) = match full.rfind(is_separator) {
            // separators are ASCII, so i + 1 is still a char boundary.
            Some(i) => (&full[..i], &full[i + 1..]),
            None => ("", full),
        };

        Self {
            full,
            directory,
            file_name,
        }
    }

    /// The path exactly as it was supplied.
    pub fn as_str(&self) -> &'a str {
        self.full
    }

    /// The final component. Empty if the path ends in a separator.
    pub fn file_name(&self) -> &'a str {
        self.file_name
    }

    /// Provides an iterator over the non-empty directory components leading
    /// up to the file name.
    /// A bare file name yields an empty iterator.
    pub fn components(&self) -> impl Iterator<Item = &'a str> {
        self.directory
            .split(is_separator)
            .filter(|component| !component.is_empty())
    }
}

impl Display for PackagePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self.full, f)
    }
}

#[cfg(test)]
mod test {
    use super::PackagePath;
    use rstest::rstest;

    #[rstest]
    #[case::bare("a.dll", vec![], "a.dll")]
    #[case("lib/a.dll", vec!["lib"], "a.dll")]
    #[case("lib/net45/a.dll", vec!["lib", "net45"], "a.dll")]
    #[case::backslash("lib\\net45\\a.dll", vec!["lib", "net45"], "a.dll")]
    #[case::mixed("lib\\net45/a.dll", vec!["lib", "net45"], "a.dll")]
    #[case::absolute("/pkgs/lib/a.dll", vec!["pkgs", "lib"], "a.dll")]
    #[case::doubled("lib//net45\\\\a.dll", vec!["lib", "net45"], "a.dll")]
    #[case::root_file("/a.dll", vec![], "a.dll")]
    #[case::trailing("lib/net45/", vec!["lib", "net45"], "")]
    #[case::empty("", vec![], "")]
    pub fn split(
        #[case] s: &str,
        #[case] exp_components: Vec<&str>,
        #[case] exp_file_name: &str,
    ) {
        let p = PackagePath::new(s);

        assert_eq!(s, p.as_str());
        assert_eq!(exp_components, p.components().collect::<Vec<_>>());
        assert_eq!(exp_file_name, p.file_name());
    }

    #[test]
    fn display_keeps_original() {
        assert_eq!(
            "Lib\\net45//A.dll",
            PackagePath::new("Lib\\net45//A.dll").to_string()
        );
    }
}
