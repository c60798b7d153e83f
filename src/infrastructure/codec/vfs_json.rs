//! VFS JSON Codec
//!
//! Document layout, one object per node:
//!
//! ```json
//! {"@id": "/real/path", "name": "path", "contents": [...], "children": [...]}
//! ```
//!
//! Content elements are tagged by `@type`:
//! `{"@type": "copy", "src": "<@id>", "customTargetName": null}` or
//! `{"@type": "compile", "project": ":module"}`.
//!
//! Every field is required and must appear in exactly this order. The
//! `@type` tag is read first, so an unknown tag is reported as
//! [`DistError::UnsupportedContentType`] whatever fields follow it.
//!
//! Decoding runs in two phases. Phase 1 allocates every node and records
//! copy sources as unresolved [`NodeRef`]s; phase 2 resolves them against the
//! identity table, so a copy may point at a node that appears later in the
//! document or at one of its own ancestors.

use std::collections::HashMap;
use std::fmt;
use std::io::{Read, Write};

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::entities::{ContentElement, NodeId, Vfs};
use crate::error::{DistError, DistResult};

const COPY_TYPE: &str = "copy";
const COMPILE_TYPE: &str = "compile";

#[derive(Debug)]
struct RawNode {
    id: String,
    name: String,
    contents: Vec<RawContent>,
    children: Vec<RawNode>,
}

#[derive(Debug)]
enum RawContent {
    Copy {
        src: String,
        custom_target_name: Option<String>,
    },
    Compile {
        project: String,
    },
    Unsupported {
        type_tag: String,
    },
}

/// Consume the next key and require it to be `expected`
fn expect_key<'de, A: MapAccess<'de>>(map: &mut A, expected: &'static str) -> Result<(), A::Error> {
    match map.next_key::<String>()? {
        Some(key) if key == expected => Ok(()),
        Some(key) => Err(de::Error::custom(format_args!(
            "expected field `{expected}`, found `{key}`"
        ))),
        None => Err(de::Error::missing_field(expected)),
    }
}

/// Require the object to have no keys left after `last`
fn expect_end<'de, A: MapAccess<'de>>(map: &mut A, last: &'static str) -> Result<(), A::Error> {
    match map.next_key::<String>()? {
        Some(key) => Err(de::Error::custom(format_args!(
            "unexpected field `{key}` after `{last}`"
        ))),
        None => Ok(()),
    }
}

impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawNodeVisitor;

        impl<'de> Visitor<'de> for RawNodeVisitor {
            type Value = RawNode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a VFS node object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                expect_key(&mut map, "@id")?;
                let id = map.next_value()?;
                expect_key(&mut map, "name")?;
                let name = map.next_value()?;
                expect_key(&mut map, "contents")?;
                let contents = map.next_value()?;
                expect_key(&mut map, "children")?;
                let children = map.next_value()?;
                expect_end(&mut map, "children")?;

                Ok(RawNode {
                    id,
                    name,
                    contents,
                    children,
                })
            }
        }

        deserializer.deserialize_map(RawNodeVisitor)
    }
}

impl<'de> Deserialize<'de> for RawContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawContentVisitor;

        impl<'de> Visitor<'de> for RawContentVisitor {
            type Value = RawContent;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a content element object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                expect_key(&mut map, "@type")?;
                let type_tag: String = map.next_value()?;

                let (content, last) = match type_tag.as_str() {
                    COPY_TYPE => {
                        expect_key(&mut map, "src")?;
                        let src = map.next_value()?;
                        expect_key(&mut map, "customTargetName")?;
                        let custom_target_name = map.next_value()?;
                        (
                            RawContent::Copy {
                                src,
                                custom_target_name,
                            },
                            "customTargetName",
                        )
                    }
                    COMPILE_TYPE => {
                        expect_key(&mut map, "project")?;
                        let project = map.next_value()?;
                        (RawContent::Compile { project }, "project")
                    }
                    _ => {
                        // Unknown layouts are skipped; the loader reports the tag
                        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                        return Ok(RawContent::Unsupported { type_tag });
                    }
                };

                expect_end(&mut map, last)?;
                Ok(content)
            }
        }

        deserializer.deserialize_map(RawContentVisitor)
    }
}

/// Deferred handle to a node, by identity, resolved after the whole
/// document is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    id: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look the identity up in a loader's table
    fn resolve(&self, table: &HashMap<String, NodeId>) -> Option<NodeId> {
        table.get(&self.id).copied()
    }
}

#[derive(Debug)]
enum PendingElement {
    Copy {
        source: NodeRef,
        target_name: Option<String>,
    },
    ModuleOutput(String),
}

#[derive(Debug)]
struct Pending {
    owner: NodeId,
    element: PendingElement,
}

/// Per-document loader state
#[derive(Default)]
struct Loader {
    vfs: Vfs,
    by_id: HashMap<String, NodeId>,
    pending: Vec<Pending>,
}

impl Loader {
    /// Allocate `root` and its whole subtree in document order.
    ///
    /// Walks with an explicit stack so document depth is bounded by memory
    /// only.
    fn load_tree(&mut self, root: RawNode) -> DistResult<NodeId> {
        let mut stack = vec![(root, None)];
        let mut root_id = None;

        while let Some((raw, parent)) = stack.pop() {
            let RawNode {
                id: real_path,
                name,
                contents,
                children,
            } = raw;

            if self.by_id.contains_key(&real_path) {
                return Err(DistError::DuplicateIdentity { id: real_path });
            }

            let id = match parent {
                Some(parent) => self.vfs.add_child_with_path(parent, name, &real_path)?,
                None => self.vfs.add_root(name, &real_path),
            };
            root_id.get_or_insert(id);

            for content in contents {
                let element = Self::parse_content(content, &real_path)?;
                self.pending.push(Pending { owner: id, element });
            }
            self.by_id.insert(real_path, id);

            stack.extend(children.into_iter().rev().map(|child| (child, Some(id))));
        }

        root_id.ok_or_else(|| DistError::malformed("document has no root node"))
    }

    fn parse_content(raw: RawContent, node: &str) -> DistResult<PendingElement> {
        match raw {
            RawContent::Copy {
                src,
                custom_target_name,
            } => Ok(PendingElement::Copy {
                source: NodeRef::new(src),
                target_name: custom_target_name,
            }),
            RawContent::Compile { project } => Ok(PendingElement::ModuleOutput(project)),
            RawContent::Unsupported { type_tag } => Err(DistError::UnsupportedContentType {
                type_tag,
                node: node.to_string(),
            }),
        }
    }

    fn link(mut self) -> DistResult<Vfs> {
        for Pending { owner, element } in std::mem::take(&mut self.pending) {
            let element = match element {
                PendingElement::Copy {
                    source,
                    target_name,
                } => {
                    let resolved = source.resolve(&self.by_id).ok_or_else(|| {
                        DistError::DanglingReference {
                            id: source.id().to_string(),
                            referenced_from: self
                                .vfs
                                .node(owner)
                                .real_path()
                                .display()
                                .to_string(),
                        }
                    })?;
                    ContentElement::copy(resolved, target_name)
                }
                PendingElement::ModuleOutput(project) => ContentElement::module_output(project),
            };
            self.vfs.add_content(owner, element);
        }
        Ok(self.vfs)
    }
}

/// Decode a VFS document and resolve every reference in it.
///
/// Returns the arena and the document's root.
pub fn decode<R: Read>(reader: R) -> DistResult<(Vfs, NodeId)> {
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    decode_raw(read_document(&mut deserializer)?)
}

/// Decode a VFS document held in memory
pub fn decode_str(document: &str) -> DistResult<(Vfs, NodeId)> {
    let mut deserializer = serde_json::Deserializer::from_str(document);
    decode_raw(read_document(&mut deserializer)?)
}

/// Parse one document with no nesting limit, growing the stack on demand.
fn read_document<'de, R>(deserializer: &mut serde_json::Deserializer<R>) -> DistResult<RawNode>
where
    R: serde_json::de::Read<'de>,
{
    deserializer.disable_recursion_limit();
    let raw = RawNode::deserialize(serde_stacker::Deserializer::new(&mut *deserializer))
        .map_err(DistError::malformed)?;
    deserializer.end().map_err(DistError::malformed)?;
    Ok(raw)
}

fn decode_raw(raw: RawNode) -> DistResult<(Vfs, NodeId)> {
    let mut loader = Loader::default();
    let root = loader.load_tree(raw)?;
    let vfs = loader.link()?;
    tracing::debug!(nodes = vfs.len(), "decoded VFS document");
    Ok((vfs, root))
}

/// Serializable view of a subtree
pub struct EncodedNode<'a> {
    vfs: &'a Vfs,
    id: NodeId,
}

impl<'a> EncodedNode<'a> {
    pub fn new(vfs: &'a Vfs, id: NodeId) -> Self {
        Self { vfs, id }
    }
}

#[derive(Serialize)]
#[serde(tag = "@type")]
enum EncodedContent<'a> {
    #[serde(rename = "copy")]
    Copy {
        src: String,
        #[serde(rename = "customTargetName")]
        custom_target_name: Option<&'a str>,
    },
    #[serde(rename = "compile")]
    Compile { project: &'a str },
}

impl<'a> EncodedContent<'a> {
    fn from_element(vfs: &'a Vfs, element: &'a ContentElement) -> Self {
        match element {
            ContentElement::Copy(copy) => EncodedContent::Copy {
                src: vfs.node(copy.source()).real_path().to_string_lossy().into_owned(),
                custom_target_name: copy.target_name(),
            },
            ContentElement::ModuleOutput(output) => EncodedContent::Compile {
                project: output.project_id(),
            },
        }
    }
}

impl Serialize for EncodedNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.vfs.node(self.id);
        let contents: Vec<EncodedContent<'_>> = node
            .contents()
            .iter()
            .map(|element| EncodedContent::from_element(self.vfs, element))
            .collect();
        let children: Vec<EncodedNode<'_>> = node
            .children()
            .iter()
            .map(|&id| EncodedNode::new(self.vfs, id))
            .collect();

        let mut state = serializer.serialize_struct("VNode", 4)?;
        state.serialize_field("@id", &node.real_path().to_string_lossy())?;
        state.serialize_field("name", node.name())?;
        state.serialize_field("contents", &contents)?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

/// Encode the subtree under `root` as compact JSON
pub fn encode<W: Write>(vfs: &Vfs, root: NodeId, writer: W) -> DistResult<()> {
    serde_json::to_writer(writer, &EncodedNode::new(vfs, root))?;
    Ok(())
}

/// Encode the subtree under `root` as indented JSON
pub fn encode_pretty<W: Write>(vfs: &Vfs, root: NodeId, writer: W) -> DistResult<()> {
    serde_json::to_writer_pretty(writer, &EncodedNode::new(vfs, root))?;
    Ok(())
}

/// Encode the subtree under `root` into a `String`
pub fn encode_to_string(vfs: &Vfs, root: NodeId) -> DistResult<String> {
    Ok(serde_json::to_string(&EncodedNode::new(vfs, root))?)
}
