//! weft demo - Main Entry Point
//!
//! Renders a keyed list, renders it again with the rows reordered and one
//! removed, and prints the document after each pass. Rows keep their nodes
//! across passes.
//!
//! Usage: `weft-demo [config.json]`

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use weft::dom::{Document, HostTree, HtmlSerializer};
use weft::{element, Config, ElementCache, ElementKey, NodeId, Props, Scope};

struct Row {
    key: ElementKey,
    label: &'static str,
}

fn render(scope: &mut Scope<'_, Document>, list: &ElementKey, rows: &[&Row]) -> weft::BuildResult<NodeId> {
    let mut items = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let props = Props::new().with_key(&row.key).attr("class", if i % 2 == 0 { "even" } else { "odd" });
        items.push(element!(scope, "li", props, row.label)?);
    }
    element!(scope, "ul", Props::new().with_key(list), items)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            Config::from_json(&text).with_context(|| format!("parsing {path}"))?
        }
        None => Config::default(),
    };
    tracing::info!(key_attribute = %config.key_attribute, "weft v{}", weft::VERSION);

    let mut doc = Document::new();
    let mut cache = ElementCache::with_config(config);
    let serializer = HtmlSerializer::pretty();

    let list = ElementKey::with_string("todo");
    let rows: Vec<Row> = ["write", "review", "ship"]
        .into_iter()
        .map(|label| Row { key: ElementKey::with_string(label), label })
        .collect();

    let first = {
        let mut scope = Scope::new(&mut doc, &mut cache);
        render(&mut scope, &list, &rows.iter().collect::<Vec<_>>())?
    };
    let body = doc.body();
    doc.append_child(body, first)?;
    println!("{}", serializer.serialize_outer(doc.tree(), body));

    let mut scope = Scope::new(&mut doc, &mut cache);
    let second = render(&mut scope, &list, &[&rows[2], &rows[0]])?;
    anyhow::ensure!(first == second, "list node was rebuilt");
    println!("{}", serializer.serialize_outer(doc.tree(), body));

    Ok(())
}
