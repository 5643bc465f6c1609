//! Locating the reference assemblies a framework is compiled against, for
//! the platforms whose reference assemblies are not shipped as packages.
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::import::{subdirectories_with_match, ASSEMBLY_EXTENSIONS};
use crate::Error;

/// Environment variable naming a single directory holding the reference
/// assemblies of all platforms, for hosts without a well-known location.
pub const REFERENCE_ASSEMBLIES_ENV: &str = "PKGFILES_REFERENCE_ASSEMBLIES";

const MAC_IOS_ROOT: &str = "/Library/Frameworks/Xamarin.iOS.framework/Versions/Current/lib/mono/";
const MAC_MAC_ROOT: &str = "/Library/Frameworks/Xamarin.Mac.framework/Versions/Current/lib/mono/";
const MAC_ANDROID_ROOT: &str = "/Library/Frameworks/Xamarin.Android.framework/Versions/Current/lib/xamarin.android/xbuild-frameworks";

/// A target framework, as far as locating its reference assemblies goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framework {
    /// The framework identifier, like `MonoAndroid` or `Xamarin.iOS`.
    pub identifier: String,
    pub major: u32,
    pub minor: u32,
}

impl Framework {
    pub fn new(identifier: impl Into<String>, major: u32, minor: u32) -> Self {
        Self {
            identifier: identifier.into(),
            major,
            minor,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},Version=v{}.{}", self.identifier, self.major, self.minor)
    }
}

/// Where the reference assemblies of each platform family live on this host.
/// A missing entry means the family can't be resolved here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceRoots {
    /// Holds `Xamarin.iOS`, `Xamarin.TVOS` and `Xamarin.WatchOS`.
    #[serde(default)]
    pub ios: Option<PathBuf>,
    /// Holds `Xamarin.Mac`.
    #[serde(default)]
    pub mac: Option<PathBuf>,
    /// Holds `MonoAndroid/v*`.
    #[serde(default)]
    pub android: Option<PathBuf>,
}

impl ReferenceRoots {
    /// Uses the same directory for every platform family.
    pub fn shared(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            ios: Some(root.clone()),
            mac: Some(root.clone()),
            android: Some(root),
        }
    }

    /// The locations known for the current host.
    ///
    /// macOS has fixed install locations. Elsewhere, the directory named by
    /// [REFERENCE_ASSEMBLIES_ENV] is used for all families, if set.
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            return Self {
                ios: Some(MAC_IOS_ROOT.into()),
                mac: Some(MAC_MAC_ROOT.into()),
                android: Some(MAC_ANDROID_ROOT.into()),
            };
        }

        match std::env::var_os(REFERENCE_ASSEMBLIES_ENV) {
            Some(root) if !root.is_empty() => Self::shared(root),
            _ => Self::default(),
        }
    }
}

fn require<'a>(root: &'a Option<PathBuf>, framework: &Framework) -> Result<&'a Path, Error> {
    root.as_deref().ok_or_else(|| Error::UnsupportedPlatform {
        framework: framework.to_string(),
    })
}

/// Returns the candidate reference assembly directories for a framework.
///
/// Frameworks whose reference assemblies come from packages yield an empty
/// list. The directories are not checked for existence.
#[instrument(skip_all, fields(framework = %framework), err)]
pub fn reference_folders(
    framework: &Framework,
    roots: &ReferenceRoots,
) -> Result<Vec<PathBuf>, Error> {
    let folders = match framework.identifier.to_lowercase().as_str() {
        "monoandroid" => {
            let root = require(&roots.android, framework)?.join("MonoAndroid");
            vec![
                root.join(format!("v{}.{}", framework.major, framework.minor)),
                root.join("v1.0"),
            ]
        }
        "xamarin.ios" => vec![require(&roots.ios, framework)?.join("Xamarin.iOS")],
        "xamarin.tvos" => vec![require(&roots.ios, framework)?.join("Xamarin.TVOS")],
        "xamarin.watchos" => vec![require(&roots.ios, framework)?.join("Xamarin.WatchOS")],
        "xamarin.mac" => vec![require(&roots.mac, framework)?.join("Xamarin.Mac")],
        _ => vec![],
    };

    debug!(count = folders.len(), "resolved reference folders");
    Ok(folders)
}

/// Returns the directories below the reference folders of `framework` that
/// actually contain assemblies.
pub fn framework_folders(
    framework: &Framework,
    roots: &ReferenceRoots,
) -> Result<Vec<PathBuf>, Error> {
    subdirectories_with_match(reference_folders(framework, roots)?, ASSEMBLY_EXTENSIONS)
}

#[cfg(test)]
mod tests {
    use super::{
        framework_folders, reference_folders, Framework, ReferenceRoots, REFERENCE_ASSEMBLIES_ENV,
    };
    use crate::Error;
    use rstest::rstest;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[rstest]
    #[case::ios("Xamarin.iOS", vec!["/ref/Xamarin.iOS"])]
    #[case::tvos("Xamarin.TVOS", vec!["/ref/Xamarin.TVOS"])]
    #[case::watchos("xamarin.watchos", vec!["/ref/Xamarin.WatchOS"])]
    #[case::mac("Xamarin.Mac", vec!["/ref/Xamarin.Mac"])]
    #[case::android("MonoAndroid", vec!["/ref/MonoAndroid/v8.1", "/ref/MonoAndroid/v1.0"])]
    #[case::package_based(".NETStandard", vec![])]
    fn folders(#[case] identifier: &str, #[case] exp: Vec<&str>) {
        let roots = ReferenceRoots::shared("/ref");
        let folders = reference_folders(&Framework::new(identifier, 8, 1), &roots)
            .expect("must succeed");

        assert_eq!(
            exp.into_iter().map(PathBuf::from).collect::<Vec<_>>(),
            folders
        );
    }

    #[test]
    fn missing_root_is_unsupported() {
        let roots = ReferenceRoots {
            ios: Some("/ref".into()),
            ..Default::default()
        };

        match reference_folders(&Framework::new("Xamarin.Mac", 2, 0), &roots) {
            Err(Error::UnsupportedPlatform { framework }) => {
                assert_eq!("Xamarin.Mac,Version=v2.0", framework)
            }
            other => panic!("unexpected result: {other:?}"),
        }

        // Package based frameworks never need a root.
        assert!(
            reference_folders(&Framework::new(".NETCoreApp", 8, 0), &ReferenceRoots::default())
                .expect("must succeed")
                .is_empty()
        );
    }

    #[test]
    fn host_roots() {
        let roots = ReferenceRoots::host();

        if cfg!(target_os = "macos") {
            assert!(roots.ios.is_some() && roots.mac.is_some() && roots.android.is_some());
        } else if std::env::var_os(REFERENCE_ASSEMBLIES_ENV).is_none() {
            assert_eq!(ReferenceRoots::default(), roots);
        }
    }

    #[test]
    fn parse_roots() {
        let roots: ReferenceRoots =
            serde_json::from_str(r#"{"ios": "/opt/ios", "android": "/opt/android"}"#)
                .expect("must parse");

        assert_eq!(Some(PathBuf::from("/opt/ios")), roots.ios);
        assert_eq!(None, roots.mac);
        assert_eq!(Some(PathBuf::from("/opt/android")), roots.android);

        serde_json::from_str::<ReferenceRoots>(r#"{"tizen": "/opt/tizen"}"#)
            .expect_err("unknown fields must be rejected");
    }

    #[test]
    fn existing_folders_only() {
        let tmpdir = TempDir::new().unwrap();
        let v81 = tmpdir.path().join("MonoAndroid/v8.1");
        fs::create_dir_all(&v81).unwrap();
        fs::write(v81.join("Mono.Android.dll"), b"").unwrap();

        let folders = framework_folders(
            &Framework::new("MonoAndroid", 8, 1),
            &ReferenceRoots::shared(tmpdir.path()),
        )
        .unwrap();

        assert_eq!(vec![v81], folders);
    }
}
