//! Property tests for overlay path resolution.

use proptest::prelude::*;

use distmodel::Vfs;

fn segments() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,12}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..");
    proptest::collection::vec(segment, 0..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolving never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,128}") {
        let mut vfs = Vfs::new();
        let root = vfs.add_root("root", "/root");
        let _ = vfs.resolve_path(root, &s);
        let _ = vfs.find_path(root, &s);
    }

    /// PROPERTY: a resolved path is found again, and resolving twice
    /// creates nothing new.
    #[test]
    fn property_resolve_is_idempotent(parts in segments(), absolute in any::<bool>()) {
        let joined = parts.join("/");
        let path = if absolute { format!("/{}", joined) } else { joined };
        let mut vfs = Vfs::new();
        let root = vfs.add_root("root", "/root");

        let first = vfs.resolve_path(root, &path).unwrap();
        let size = vfs.len();
        let second = vfs.resolve_path(root, &path).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(vfs.len(), size);
        prop_assert_eq!(vfs.find_path(root, &path), Some(first));
    }
}
