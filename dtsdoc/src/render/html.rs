//! HTML renderer: a standalone page with an index and anchored sections.
//!
//! Comment text in the document tree is already HTML; names and type
//! signatures are escaped here.

use crate::highlight::escape_html;
use crate::markup::Markup;
use crate::model::*;
use crate::render::Renderer;
use crate::toc::{self, TocEntry};
use anyhow::Result;

pub struct HtmlRenderer<'a> {
    markup: &'a dyn Markup,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(markup: &'a dyn Markup) -> Self {
        HtmlRenderer { markup }
    }
}

impl Renderer for HtmlRenderer<'_> {
    fn render(&self, title: &str, doc: &DocumentNode) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 52em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("code.codeBlock { display: block; white-space: pre; padding: 1em; overflow-x: auto; }\n");
        out.push_str(".signature { font-family: monospace; margin: 0.25em 0; }\n");
        out.push_str(".kind { display: inline-block; font-size: 0.7em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; background: #e8e8e8; }\n");
        out.push_str(".note dt { font-weight: bold; }\n");
        out.push_str(".token.keyword, .token.block-keyword { color: #07a; }\n");
        out.push_str(".token.string { color: #690; }\n");
        out.push_str(".token.comment { color: #708090; }\n");
        out.push_str(".token.function { color: #dd4a68; }\n");
        out.push_str(".token.number, .token.boolean { color: #905; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

        let index = toc::build_index(doc);
        if !index.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul class=\"index\">\n");
            for entry in &index {
                out.push_str(&render_index_item(entry));
            }
            out.push_str("</ul>\n");
        }

        self.render_node(&mut out, doc, "", 2);

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_index_item(entry: &TocEntry) -> String {
    format!(
        "  <li style=\"margin-left: {}em\"><a href=\"#{}\">{}</a> <span class=\"kind\">{}</span></li>\n",
        entry.depth * 2,
        entry.anchor(),
        escape_html(&entry.title),
        entry.kind.label()
    )
}

impl HtmlRenderer<'_> {
    fn render_node(&self, out: &mut String, node: &DocumentNode, parent: &str, level: usize) {
        for (name, entry) in &node.entries {
            let path = toc::child_path(parent, name);
            out.push_str(&format!(
                "<section id=\"{}\">\n<h{level}>{}<span class=\"kind\">{}</span></h{level}>\n",
                toc::slug(&path),
                escape_html(&path),
                toc::entry_kind(entry).label(),
                level = level.min(6)
            ));
            if let Some(doc) = &entry.doc {
                render_doc(out, doc);
            }
            if let Some(call) = &entry.call {
                render_call(out, name, call);
            }
            if let Some(iface) = &entry.interface {
                self.render_interface(out, name, &path, iface, level + 1);
            }
            out.push_str("</section>\n");
            if let Some(module) = &entry.module {
                self.render_node(out, module, &path, level + 1);
            }
        }
    }

    fn render_interface(&self, out: &mut String, name: &str, path: &str, iface: &InterfaceEntry, level: usize) {
        let mut header = format!("interface {}", name);
        if let Some(params) = &iface.type_params {
            header.push_str(&format!("<{}>", params.join(", ")));
        }
        for (keyword, types) in [("extends", &iface.extends), ("implements", &iface.implements)] {
            if let Some(types) = types {
                let list: Vec<String> = types.iter().map(|t| t.to_string()).collect();
                header.push_str(&format!(" {} {}", keyword, list.join(", ")));
            }
        }
        out.push_str(&format!("<p class=\"signature\">{}</p>\n", escape_html(&header)));
        if let Some(doc) = &iface.doc {
            render_doc(out, doc);
        }

        let level = level.min(6);
        for group in &iface.groups {
            if let Some(title) = &group.title {
                out.push_str(&format!(
                    "<h{level}>{}</h{level}>\n",
                    self.markup.render_inline(title)
                ));
            }
            for (key, property) in &group.properties {
                let member = member_name(key);
                out.push_str(&format!(
                    "<div id=\"{}\" class=\"member\">\n",
                    toc::slug(&toc::member_path(path, member))
                ));
                let signature = match &property.ty {
                    Some(ty) => format!("{}: {}", member, ty),
                    None => member.to_string(),
                };
                out.push_str(&format!("<p class=\"signature\">{}</p>\n", escape_html(&signature)));
                if let Some(doc) = &property.doc {
                    render_doc(out, doc);
                }
                out.push_str("</div>\n");
            }
            for (key, method) in &group.methods {
                let member = member_name(key);
                out.push_str(&format!(
                    "<div id=\"{}\" class=\"member\">\n",
                    toc::slug(&toc::member_path(path, member))
                ));
                render_call(out, member, method);
                out.push_str("</div>\n");
            }
        }
    }
}

fn render_call(out: &mut String, name: &str, call: &CallEntry) {
    for signature in &call.signatures {
        out.push_str(&format!(
            "<p class=\"signature\">{}</p>\n",
            escape_html(&signature_text(name, signature))
        ));
        if let Some(doc) = &signature.doc {
            render_doc(out, doc);
        }
    }
    if let Some(doc) = &call.doc {
        render_doc(out, doc);
    }
}

/// `name<T>(a: T): R` in source syntax.
pub fn signature_text(name: &str, signature: &CallSignature) -> String {
    let mut text = name.to_string();
    if let Some(params) = &signature.type_params {
        text.push_str(&format!("<{}>", params.join(", ")));
    }
    let params = signature.params.as_deref().unwrap_or_default();
    text.push_str(&format!("({})", ParamList(params)));
    if let Some(returns) = &signature.returns {
        text.push_str(&format!(": {}", returns));
    }
    text
}

fn render_doc(out: &mut String, doc: &DocComment) {
    if !doc.synopsis.is_empty() {
        out.push_str(&format!("<div class=\"synopsis\">{}</div>\n", doc.synopsis));
    }
    if let Some(description) = &doc.description {
        out.push_str(&format!("<div class=\"description\">{}</div>\n", description));
    }
    let notes: Vec<&Note> = doc.notes.iter().filter(|n| n.name != "alias").collect();
    if !notes.is_empty() {
        out.push_str("<dl class=\"note\">\n");
        for note in notes {
            out.push_str(&format!("  <dt>@{}</dt>\n", escape_html(&note.name)));
            if let Some(body) = &note.body {
                out.push_str(&format!("  <dd>{}</dd>\n", body));
            }
        }
        out.push_str("</dl>\n");
    }
    for alias in doc.aliases() {
        out.push_str(&format!(
            "<p class=\"alias\">Alias: <code>{}</code></p>\n",
            escape_html(alias)
        ));
    }
}
