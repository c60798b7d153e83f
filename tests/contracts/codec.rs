//! VFS document codec contracts
//!
//! Decoding resolves every reference or fails; encoding a decoded document
//! and decoding it again yields the same structure.

use crate::common::*;

use distmodel::infrastructure::{decode_str, encode_to_string};
use distmodel::{ContentElement, DistError};

/// CONTRACT: decode(encode(g)) is structurally equal to g
///
/// Covers ordering of children and contents, custom target names, and
/// references to nodes declared later in the document.
mod round_trip {
    use super::*;
    use std::path::Path;

    #[test]
    fn contract_fixture_round_trips() {
        let document = dist_document(Path::new("/work"));
        let (vfs, root) = decode_str(&document).unwrap();

        let encoded = encode_to_string(&vfs, root).unwrap();
        let (again, again_root) = decode_str(&encoded).unwrap();

        assert!(vfs.structurally_eq(root, &again, again_root));
        assert_eq!(vfs.node_count(root), again.node_count(again_root));
    }

    #[test]
    fn contract_custom_target_name_survives() {
        let document = node(
            "/r",
            "r",
            vec![copy_as("/r/a", "renamed")],
            vec![node("/r/a", "a", vec![], vec![])],
        )
        .to_string();
        let (vfs, root) = decode_str(&document).unwrap();

        let (again, again_root) = decode_str(&encode_to_string(&vfs, root).unwrap()).unwrap();

        match &again.node(again_root).contents()[0] {
            ContentElement::Copy(copy) => assert_eq!(copy.target_name(), Some("renamed")),
            other => panic!("expected copy, got {:?}", other),
        }
    }
}

/// CONTRACT: every copy source resolves to a node of the same document
///
/// Prevents: a later stage dereferencing an identity that never existed.
mod references {
    use super::*;

    #[test]
    fn contract_forward_and_backward_references_link() {
        let document = node(
            "/r",
            "r",
            vec![],
            vec![
                node("/r/a", "a", vec![copy("/r/b")], vec![]),
                node("/r/b", "b", vec![copy("/r/a")], vec![]),
            ],
        )
        .to_string();

        let (vfs, root) = decode_str(&document).unwrap();

        let a = vfs.child(root, "a").unwrap();
        let b = vfs.child(root, "b").unwrap();
        match &vfs.node(a).contents()[0] {
            ContentElement::Copy(copy) => assert_eq!(copy.source(), b),
            other => panic!("expected copy, got {:?}", other),
        }
    }

    #[test]
    fn contract_dangling_reference_names_both_ends() {
        let document = node("/r", "r", vec![copy("/nowhere")], vec![]).to_string();

        let err = decode_str(&document).unwrap_err();

        match err {
            DistError::DanglingReference {
                id,
                referenced_from,
            } => {
                assert_eq!(id, "/nowhere");
                assert_eq!(referenced_from, "/r");
            }
            other => panic!("expected DanglingReference, got {:?}", other),
        }
    }

    #[test]
    fn contract_duplicate_identity_is_rejected() {
        let document = node(
            "/r",
            "r",
            vec![],
            vec![
                node("/r/a", "a", vec![], vec![]),
                node("/r/a", "b", vec![], vec![]),
            ],
        )
        .to_string();

        assert!(matches!(
            decode_str(&document),
            Err(DistError::DuplicateIdentity { .. })
        ));
    }
}

/// CONTRACT: unknown input is an error, never silently dropped
mod strictness {
    use super::*;

    #[test]
    fn contract_unknown_content_type_is_rejected() {
        let document = node(
            "/r",
            "r",
            vec![serde_json::json!({"@type": "symlink", "target": "/b", "mode": 511})],
            vec![],
        )
        .to_string();

        match decode_str(&document) {
            Err(DistError::UnsupportedContentType { type_tag, .. }) => {
                assert_eq!(type_tag, "symlink")
            }
            other => panic!("expected UnsupportedContentType, got {:?}", other),
        }
    }

    #[test]
    fn contract_truncated_document_is_malformed() {
        assert!(matches!(
            decode_str(r#"{"@id": "/r", "name": "r", "contents": ["#),
            Err(DistError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn contract_fields_follow_document_order() {
        let reordered = r#"{"name": "r", "@id": "/r", "contents": [], "children": []}"#;
        assert!(matches!(
            decode_str(reordered),
            Err(DistError::MalformedDocument { .. })
        ));

        let no_target_name = r#"{"@id": "/r", "name": "r",
            "contents": [{"@type": "copy", "src": "/r"}], "children": []}"#;
        assert!(matches!(
            decode_str(no_target_name),
            Err(DistError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn contract_unknown_field_is_malformed() {
        let document = r#"{"@id": "/r", "name": "r", "contents": [], "children": [], "extra": 1}"#;

        assert!(matches!(
            decode_str(document),
            Err(DistError::MalformedDocument { .. })
        ));
    }
}
