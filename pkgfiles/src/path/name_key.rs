use std::fmt::{self, Debug, Display};

/// A case-folded name, used wherever directory segments, file names or full
/// paths are compared.
///
/// Two names that differ only in case produce equal keys, and keys order the
/// same way their folded strings do.
#[repr(transparent)]
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey {
    inner: String,
}

impl NameKey {
    pub fn new(name: &str) -> Self {
        Self {
            inner: name.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for NameKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::NameKey;
    use rstest::rstest;

    #[rstest]
    #[case("README.txt", "readme.TXT")]
    #[case("Lib", "lib")]
    #[case("Ä.dll", "ä.DLL")]
    fn case_variants_are_equal(#[case] a: &str, #[case] b: &str) {
        assert_eq!(NameKey::new(a), NameKey::new(b));
    }

    #[test]
    fn orders_ignoring_case() {
        let mut keys: Vec<NameKey> = ["b.dll", "A.dll", "C.dll"]
            .into_iter()
            .map(NameKey::from)
            .collect();
        keys.sort();

        assert_eq!(
            vec!["a.dll", "b.dll", "c.dll"],
            keys.iter().map(NameKey::as_str).collect::<Vec<_>>()
        );
    }
}
