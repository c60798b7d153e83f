//! Test fixtures: VFS documents and small graph helpers.

use std::path::Path;

use serde_json::{json, Value};

use distmodel::{DescriptorNode, NodeId, Vfs};

/// A document node in wire form
pub fn node(id: &str, name: &str, contents: Vec<Value>, children: Vec<Value>) -> Value {
    json!({
        "@id": id,
        "name": name,
        "contents": contents,
        "children": children,
    })
}

pub fn copy(src: &str) -> Value {
    json!({"@type": "copy", "src": src, "customTargetName": null})
}

pub fn copy_as(src: &str, name: &str) -> Value {
    json!({"@type": "copy", "src": src, "customTargetName": name})
}

pub fn compile(project: &str) -> Value {
    json!({"@type": "compile", "project": project})
}

/// A miniature compiler distribution rooted at `root`.
///
/// ```text
/// <root>
///   dist
///     kotlinc/lib       copies out/kotlin-compiler.jar, out/kotlin-stdlib.jar
///     kotlinc/license   copies the license directory
///     artifacts/ideaPlugin/Kotlin
///       kotlinc         copies dist/kotlinc
///       lib/kotlin-plugin.jar   compiles :idea, copies out/kotlin-stdlib.jar
///       junk
///     artifacts/jps
///     kotlin-compiler.zip
///   out/*.jar           compile outputs
///   license
/// ```
pub fn dist_document(root: &Path) -> String {
    let r = root.to_string_lossy();
    let p = |rel: &str| format!("{}/{}", r, rel);

    let document = node(
        &r,
        "project",
        vec![],
        vec![
            node(
                &p("dist"),
                "dist",
                vec![],
                vec![
                    node(
                        &p("dist/kotlinc"),
                        "kotlinc",
                        vec![],
                        vec![
                            node(
                                &p("dist/kotlinc/lib"),
                                "lib",
                                vec![
                                    copy(&p("out/kotlin-compiler.jar")),
                                    copy(&p("out/kotlin-stdlib.jar")),
                                ],
                                vec![],
                            ),
                            node(
                                &p("dist/kotlinc/license"),
                                "license",
                                vec![copy(&p("license"))],
                                vec![],
                            ),
                        ],
                    ),
                    node(
                        &p("dist/artifacts"),
                        "artifacts",
                        vec![],
                        vec![
                            node(
                                &p("dist/artifacts/ideaPlugin"),
                                "ideaPlugin",
                                vec![],
                                vec![node(
                                    &p("dist/artifacts/ideaPlugin/Kotlin"),
                                    "Kotlin",
                                    vec![],
                                    vec![
                                        node(
                                            &p("dist/artifacts/ideaPlugin/Kotlin/kotlinc"),
                                            "kotlinc",
                                            vec![copy(&p("dist/kotlinc"))],
                                            vec![],
                                        ),
                                        node(
                                            &p("dist/artifacts/ideaPlugin/Kotlin/lib"),
                                            "lib",
                                            vec![],
                                            vec![node(
                                                &p("dist/artifacts/ideaPlugin/Kotlin/lib/kotlin-plugin.jar"),
                                                "kotlin-plugin.jar",
                                                vec![
                                                    compile(":idea"),
                                                    copy(&p("out/kotlin-stdlib.jar")),
                                                ],
                                                vec![],
                                            )],
                                        ),
                                        node(
                                            &p("dist/artifacts/ideaPlugin/Kotlin/junk"),
                                            "junk",
                                            vec![],
                                            vec![],
                                        ),
                                    ],
                                )],
                            ),
                            node(&p("dist/artifacts/jps"), "jps", vec![], vec![]),
                        ],
                    ),
                    node(
                        &p("dist/kotlin-compiler.zip"),
                        "kotlin-compiler.zip",
                        vec![copy(&p("dist/kotlinc"))],
                        vec![],
                    ),
                ],
            ),
            node(
                &p("out"),
                "out",
                vec![],
                vec![
                    node(
                        &p("out/kotlin-compiler.jar"),
                        "kotlin-compiler.jar",
                        vec![compile(":compiler")],
                        vec![],
                    ),
                    node(
                        &p("out/kotlin-stdlib.jar"),
                        "kotlin-stdlib.jar",
                        vec![compile(":kotlin-stdlib"), copy(&p("out/annotations.jar"))],
                        vec![],
                    ),
                    node(
                        &p("out/annotations.jar"),
                        "annotations.jar",
                        vec![compile(":annotations")],
                        vec![],
                    ),
                ],
            ),
            node(&p("license"), "license", vec![], vec![]),
        ],
    );

    serde_json::to_string_pretty(&document).expect("fixture serializes")
}

/// Prune rules matching the fixture, as `distmodel.toml` text
pub const DIST_PRUNE_TOML: &str = r#"
[[prune]]
path = "artifacts"
keep = ["ideaPlugin"]

[[prune]]
path = "artifacts/ideaPlugin/Kotlin"
keep = ["kotlinc", "lib"]

[[prune]]
drop_suffixes = [".zip"]
"#;

/// Names of `id`'s children, in order
pub fn child_names(vfs: &Vfs, id: NodeId) -> Vec<String> {
    vfs.node(id)
        .children()
        .iter()
        .map(|&c| vfs.node(c).name().to_string())
        .collect()
}

/// `(kind, name)` pairs of a descriptor's children
pub fn descriptor_children(node: &DescriptorNode) -> Vec<(String, String)> {
    node.children()
        .iter()
        .map(|c| (c.kind().to_string(), c.name().to_string()))
        .collect()
}
