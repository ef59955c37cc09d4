//! GEXF 1.3 rendering of the contact graph.
//!
//! The document is produced by a streaming XML writer, so markup characters
//! in display names and phone numbers are escaped. Characters XML 1.0 cannot
//! carry at all (C0 controls other than tab and newlines) are dropped. See
//! <https://gexf.net/> for the format.

use petgraph::visit::EdgeRef;
use quick_xml::events::{BytesDecl, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::RenderConfig;
use crate::error::{GraphError, GraphResult};
use crate::node_identification::ContactGraph;
use crate::output::write_atomically;

const GEXF_NAMESPACE: &str = "http://gexf.net/1.3";
const VIZ_NAMESPACE: &str = "http://gexf.net/1.3/viz";
const GEXF_VERSION: &str = "1.3";

/// Node attribute declarations as `(id, title)`.
const NODE_ATTRIBUTES: [(&str, &str); 3] = [("0", "id"), ("1", "name"), ("2", "phone")];

pub fn write_gexf<W: Write>(graph: &ContactGraph, config: &RenderConfig, sink: W) -> GraphResult<W> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element("gexf")
        .with_attribute(("xmlns", GEXF_NAMESPACE))
        .with_attribute(("xmlns:viz", VIZ_NAMESPACE))
        .with_attribute(("version", GEXF_VERSION))
        .write_inner_content(|w| {
            w.create_element("graph")
                .with_attribute(("mode", "static"))
                .with_attribute(("defaultedgetype", "directed"))
                .write_inner_content(|w| {
                    write_attribute_declarations(w)?;
                    write_nodes(w, graph, config)?;
                    write_edges(w, graph, config)
                })?;
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(writer.into_inner())
}

pub fn render_gexf(graph: &ContactGraph, config: &RenderConfig) -> GraphResult<String> {
    let bytes = write_gexf(graph, config, Vec::new())?;
    // Everything written came from &str values.
    String::from_utf8(bytes).map_err(|e| {
        GraphError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Renders into a temporary file beside `path` and renames it into place, so
/// a failed run never leaves a partial document behind.
pub fn write_gexf_file(
    graph: &ContactGraph,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> GraphResult<()> {
    let path = path.as_ref();
    write_atomically(path, |file| {
        write_gexf(graph, config, BufWriter::new(file))?.flush()?;
        Ok(())
    })?;

    info!(path = %path.display(), "wrote gexf document");
    Ok(())
}

/// Drops characters that are not allowed anywhere in an XML 1.0 document.
fn xml_safe(value: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        !matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
    }

    if value.chars().all(allowed) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.chars().filter(|&c| allowed(c)).collect())
    }
}

fn write_attribute_declarations<W: Write>(w: &mut Writer<W>) -> quick_xml::Result<()> {
    w.create_element("attributes")
        .with_attribute(("class", "node"))
        .write_inner_content(|w| {
            for (id, title) in NODE_ATTRIBUTES {
                w.create_element("attribute")
                    .with_attribute(("id", id))
                    .with_attribute(("title", title))
                    .with_attribute(("type", "string"))
                    .write_empty()?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(())
}

fn write_nodes<W: Write>(
    w: &mut Writer<W>,
    graph: &ContactGraph,
    config: &RenderConfig,
) -> quick_xml::Result<()> {
    w.create_element("nodes").write_inner_content(|w| {
        for node in graph.node_weights() {
            let color = format!("#{}", node.category.color(config));
            let id = xml_safe(&node.phone);
            let label = xml_safe(&node.label);
            w.create_element("node")
                .with_attribute(("id", id.as_ref()))
                .with_attribute(("label", label.as_ref()))
                .write_inner_content(|w| {
                    w.create_element("viz:color")
                        .with_attribute(("hex", color.as_str()))
                        .write_empty()?;
                    w.create_element("attvalues").write_inner_content(|w| {
                        let values = [
                            node.account_id.as_str(),
                            node.name.as_str(),
                            node.shown_phone.as_str(),
                        ];
                        for ((id, _), value) in NODE_ATTRIBUTES.iter().zip(values) {
                            let value = xml_safe(value);
                            w.create_element("attvalue")
                                .with_attribute(("for", *id))
                                .with_attribute(("value", value.as_ref()))
                                .write_empty()?;
                        }
                        Ok::<(), quick_xml::Error>(())
                    })?;
                    Ok::<(), quick_xml::Error>(())
                })?;
        }
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

fn write_edges<W: Write>(
    w: &mut Writer<W>,
    graph: &ContactGraph,
    config: &RenderConfig,
) -> quick_xml::Result<()> {
    let color = format!("#{}", config.palette.edge);
    w.create_element("edges").write_inner_content(|w| {
        for edge in graph.edge_references() {
            let source = xml_safe(&graph[edge.source()].phone);
            let target = xml_safe(&graph[edge.target()].phone);
            w.create_element("edge")
                .with_attribute(("source", source.as_ref()))
                .with_attribute(("target", target.as_ref()))
                .write_inner_content(|w| {
                    w.create_element("viz:color")
                        .with_attribute(("hex", color.as_str()))
                        .write_empty()?;
                    Ok::<(), quick_xml::Error>(())
                })?;
        }
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ContactBookAnalysis;
    use crate::node_identification::build_graph;
    use crate::registry::tests::record;

    fn render(records: &[crate::contacts::ContactRecord], config: &RenderConfig) -> String {
        let analysis = ContactBookAnalysis::from_records(records).unwrap();
        render_gexf(&build_graph(&analysis, config), config).unwrap()
    }

    #[test]
    fn test_document_structure() {
        let config = RenderConfig::default().with_threshold(2);
        let doc = render(
            &[record("111", &["222", "333", "444"]), record("222", &["333"])],
            &config,
        );

        assert!(doc.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(doc.contains(
            r#"<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://gexf.net/1.3/viz" version="1.3">"#
        ));
        assert!(doc.contains(r#"<graph mode="static" defaultedgetype="directed">"#));
        assert!(doc.contains(r#"<attribute id="0" title="id" type="string"/>"#));
        assert!(doc.contains(r#"<attribute id="1" title="name" type="string"/>"#));
        assert!(doc.contains(r#"<attribute id="2" title="phone" type="string"/>"#));

        assert!(doc.contains(r#"<node id="111" label="User 111">"#));
        assert!(doc.contains(r##"<viz:color hex="#ce54ff"/>"##));
        assert!(doc.contains(r#"<attvalue for="0" value="acc-111"/>"#));
        assert!(doc.contains(r#"<attvalue for="1" value="User 111"/>"#));

        assert!(doc.contains(r#"<node id="333" label="???">"#));
        assert!(doc.contains(r##"<viz:color hex="#ffff00"/>"##));
        assert!(doc.contains(r#"<attvalue for="2" value="333"/>"#));

        assert!(doc.contains(r#"<node id="444" label="???">"#));
        assert!(doc.contains(r##"<viz:color hex="#333333"/>"##));
        assert!(doc.contains(r#"<attvalue for="2" value="444..."/>"#));

        assert_eq!(doc.matches("<node ").count(), 4);
        assert_eq!(doc.matches("<edge ").count(), 3);
        assert_eq!(doc.matches(r##"<viz:color hex="#000"/>"##).count(), 3);
        assert!(doc.contains(r#"<edge source="111" target="333">"#));
        assert!(doc.contains(r#"<edge source="222" target="333">"#));
        assert!(!doc.contains("<edge id="));
    }

    #[test]
    fn test_markup_in_names_is_escaped() {
        let mut user = record("111", &[]);
        user.display_name = r#"Tom & "Jerry" <3"#.to_string();
        let doc = render(&[user], &RenderConfig::default());

        assert!(doc.contains("Tom &amp; &quot;Jerry&quot; &lt;3"));
        assert!(!doc.contains("<3"));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let mut user = record("111", &["22\u{7}2"]);
        user.display_name = "An\u{1}na\tK".to_string();
        let doc = render(&[user], &RenderConfig::default());

        assert!(!doc.contains('\u{1}'));
        assert!(!doc.contains('\u{7}'));
        assert!(doc.contains("label=\"Anna\tK\""));
        assert!(doc.contains(r#"<edge source="111" target="222">"#));
    }

    #[test]
    fn test_xml_safe_borrows_clean_values() {
        assert!(matches!(xml_safe("+380501234567"), Cow::Borrowed(_)));
        assert_eq!(xml_safe("a\u{0}b\u{1f}c\u{fffe}"), "abc");
        assert_eq!(xml_safe("line\r\nnext"), "line\r\nnext");
    }

    #[test]
    fn test_render_is_reproducible() {
        let records = vec![record("111", &["555", "333"]), record("222", &["333", "444"])];
        let config = RenderConfig::default();
        assert_eq!(render(&records, &config), render(&records, &config));
    }

    #[test]
    fn test_write_gexf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.gexf");
        let config = RenderConfig::default();
        let analysis = ContactBookAnalysis::from_records(&[record("111", &["222"])]).unwrap();
        let graph = build_graph(&analysis, &config);

        write_gexf_file(&graph, &config, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_gexf(&graph, &config).unwrap());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("graph.gexf");
        let config = RenderConfig::default();
        let analysis = ContactBookAnalysis::from_records(&[record("111", &[])]).unwrap();

        let result = write_gexf_file(&build_graph(&analysis, &config), &config, &path);
        assert!(matches!(result, Err(GraphError::Io(_))));
        assert!(!path.exists());
    }
}
