//! Descriptor contracts
//!
//! Descriptor names are unique per parent, and every collision is visible
//! through the diagnostics sink.

use std::collections::HashSet;
use std::path::Path;

use crate::common::*;

use distmodel::infrastructure::events::CollectingSink;
use distmodel::infrastructure::{decode_str, MemoryFs};
use distmodel::{DescriptorBuilder, DescriptorKind, DescriptorNode, Flattener};

fn assert_unique_names(node: &DescriptorNode) {
    let mut seen = HashSet::new();
    for child in node.children() {
        assert!(
            seen.insert(child.name()),
            "duplicate descriptor '{}' under '{}'",
            child.name(),
            node.name()
        );
        assert_unique_names(child);
    }
}

/// CONTRACT: a copy and a same-named child produce one descriptor
///
/// The copy wins; the child is reported as a duplicate.
mod dedup {
    use super::*;

    #[test]
    fn contract_copy_covers_directory_child() {
        let document = node(
            "/r",
            "r",
            vec![],
            vec![
                node("/r/dist", "dist", vec![copy("/a")], vec![node("/r/dist/a", "a", vec![], vec![])]),
                node("/a", "a", vec![], vec![]),
            ],
        )
        .to_string();
        let (vfs, root) = decode_str(&document).unwrap();
        let dist = vfs.child(root, "dist").unwrap();
        let fs = MemoryFs::new().with_file("/a");
        let sink = CollectingSink::new();

        let tree = DescriptorBuilder::new(&fs, &sink).build_descriptors(&vfs, dist, false);

        assert_eq!(
            descriptor_children(&tree),
            vec![("FILE".to_string(), "/a".to_string())]
        );
        assert_eq!(sink.count("duplicate_child_descriptor"), 1);
    }

    #[test]
    fn contract_fixture_names_are_unique_per_parent() {
        let document = dist_document(Path::new("/w"));
        let (mut vfs, root) = decode_str(&document).unwrap();
        let dist = vfs.find_path(root, "dist").unwrap();
        let fs = MemoryFs::everything_exists();
        let sink = CollectingSink::new();
        let flat = Flattener::new(&fs, &sink).flatten(&mut vfs, dist);

        let tree = DescriptorBuilder::new(&fs, &sink).build_descriptors(&vfs, flat, false);

        assert_unique_names(&tree);
    }
}

/// CONTRACT: descriptor kinds follow the jar and directory rules
mod kinds {
    use super::*;

    #[test]
    fn contract_jar_inside_archive_is_extracted() {
        let document = dist_document(Path::new("/w"));
        let (mut vfs, root) = decode_str(&document).unwrap();
        let dist = vfs.find_path(root, "dist").unwrap();
        let fs = MemoryFs::everything_exists().with_dir("/w/license");
        let sink = CollectingSink::new();
        let flat = Flattener::new(&fs, &sink).flatten(&mut vfs, dist);

        let tree = DescriptorBuilder::new(&fs, &sink).build_descriptors(&vfs, flat, false);

        let plugin = tree
            .child("artifacts")
            .and_then(|n| n.child("ideaPlugin"))
            .and_then(|n| n.child("Kotlin"))
            .and_then(|n| n.child("lib"))
            .and_then(|n| n.child("kotlin-plugin.jar"))
            .unwrap();
        assert_eq!(plugin.kind(), DescriptorKind::Archive);
        assert_eq!(
            descriptor_children(plugin),
            vec![
                ("MODULE_OUTPUT".to_string(), ":idea".to_string()),
                (
                    "EXTRACTED_DIRECTORY".to_string(),
                    "/w/out/kotlin-stdlib.jar".to_string()
                ),
            ]
        );

        let license = tree
            .child("kotlinc")
            .and_then(|n| n.child("license"))
            .unwrap();
        assert_eq!(
            descriptor_children(license),
            vec![("DIR_CONTENT".to_string(), "/w/license".to_string())]
        );
    }

    #[test]
    fn contract_root_is_a_dir_named_after_the_node() {
        let document = node("/r/dist", "dist", vec![compile(":a")], vec![]).to_string();
        let (vfs, root) = decode_str(&document).unwrap();
        let fs = MemoryFs::new();
        let sink = CollectingSink::new();

        let tree = DescriptorBuilder::new(&fs, &sink).build_descriptors(&vfs, root, false);

        assert_eq!(tree.kind(), DescriptorKind::Dir);
        assert_eq!(tree.name(), "dist");
        assert_eq!(tree.descriptor_count(), 2);
    }
}
