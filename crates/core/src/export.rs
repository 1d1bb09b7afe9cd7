use crate::collapse::CollapsedFolders;
use crate::error::Result;
use crate::model::*;

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::File => "file",
        NodeKind::Folder => "folder",
    }
}

pub fn to_csv(nodes: &[&Node], mut w: impl std::io::Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut w);
    writer.write_record(["id", "depth", "name", "path", "kind"])?;
    for n in nodes {
        writer.write_record([
            n.id.0.to_string(),
            n.depth.to_string(),
            n.name.clone(),
            n.full_path.clone(),
            kind_label(n.kind).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_json(nodes: &[&Node]) -> serde_json::Value {
    serde_json::Value::Array(
        nodes
            .iter()
            .map(|n| {
                serde_json::json!({
                    "id": n.id.0,
                    "depth": n.depth,
                    "name": n.name,
                    "path": n.full_path,
                    "kind": kind_label(n.kind),
                })
            })
            .collect(),
    )
}

/// Indented listing, two spaces per depth level. Folders are marked `▸`
/// when collapsed and `▾` otherwise.
pub fn render_text(nodes: &[&Node], collapsed: &CollapsedFolders) -> String {
    let mut out = String::new();
    for n in nodes {
        out.push_str(&"  ".repeat(n.depth));
        if n.is_folder() {
            out.push_str(if collapsed.contains(&n.full_path) { "▸ " } else { "▾ " });
        }
        out.push_str(&n.name);
        out.push('\n');
    }
    out
}
