use lazy_static::lazy_static;

lazy_static! {
    /// Content listing of a typical multi-targeted package, in the order a
    /// package reader hands it out.
    pub static ref PACKAGE_LISTING: Vec<&'static str> = vec![
        "lib/netstandard2.0/ReactiveUI.dll",
        "lib/netstandard2.0/ReactiveUI.xml",
        "lib/net6.0/ReactiveUI.dll",
        "lib/net6.0/ReactiveUI.xml",
        "lib/net6.0/de/ReactiveUI.resources.dll",
        "lib/MonoAndroid10.0/ReactiveUI.dll",
        "lib/MonoAndroid10.0/ReactiveUI.Android.dll",
        "build/ReactiveUI.targets",
        "README.md",
    ];

    /// The same kind of listing, as produced on a Windows host.
    pub static ref WINDOWS_LISTING: Vec<&'static str> = vec![
        "C:\\packages\\splat\\lib\\net6.0\\Splat.dll",
        "C:\\packages\\splat\\lib\\net6.0\\Splat.xml",
        "C:\\packages\\splat\\lib\\netstandard2.0\\Splat.dll",
        "C:\\packages\\Splat\\LIB\\Net6.0\\Splat.Drawing.dll",
    ];
}
