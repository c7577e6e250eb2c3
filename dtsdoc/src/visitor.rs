//! Declaration visitor.
//!
//! Walks a parsed file top-down and feeds documented declarations into the
//! builders. Type-parameter scopes and alias frames travel down the
//! recursion as arguments; nothing is kept between calls.

use crate::builder::{non_empty, AliasLevel, DocumentBuilder, InterfaceBuilder};
use crate::comment::{parse_comment, should_ignore};
use crate::error::{ExtractError, Result};
use crate::markup::Markup;
use crate::model::{CallSignature, DocComment, DocumentNode, InterfaceEntry, PropertyEntry};
use crate::scope::{AliasFrame, TypeScope};
use crate::types::{normalize, params, type_param_names};
use dtsdoc_syntax::{
    Declaration, FunctionDeclaration, InterfaceDeclaration, InterfaceMember, LineMap,
    MethodSignature, ModuleDeclaration, NodeStart, PropertySignature, SourceFile, SyntaxKind,
};
use tracing::{debug, trace};

/// Extract the document tree of a parsed file.
pub fn extract_file(file: &SourceFile, markup: &dyn Markup) -> Result<DocumentNode> {
    let visitor = Visitor {
        line_map: &file.line_map,
        markup,
    };
    let mut builder = DocumentBuilder::new();
    visitor.visit_level(&file.declarations, &TypeScope::root(), &mut builder)?;
    Ok(builder.finish())
}

/// What to do with a declaration after reading its comment.
enum Admission {
    /// Emit an entry with this comment.
    Emit(Option<DocComment>),
    /// `@ignore`: no entry, children still visited.
    Ignored,
    /// An alias of a sibling: nothing at all.
    Aliased,
}

struct Visitor<'a> {
    line_map: &'a LineMap,
    markup: &'a dyn Markup,
}

impl Visitor<'_> {
    fn line(&self, start: &NodeStart) -> usize {
        self.line_map.line_of(start.offset)
    }

    /// The last doc comment before a node.
    fn doc(&self, start: &NodeStart) -> Option<DocComment> {
        parse_comment(start.doc_comments().last().copied(), self.markup)
    }

    fn admit(
        &self,
        name: &str,
        doc: Option<DocComment>,
        aliases: &mut AliasFrame,
        level: &mut dyn AliasLevel,
    ) -> Admission {
        aliases.note_sibling(name);
        if should_ignore(doc.as_ref()) {
            debug!(name, "ignored declaration");
            return Admission::Ignored;
        }
        if aliases.is_aliased(name) {
            debug!(name, "skipping alias of a sibling");
            return Admission::Aliased;
        }

        if let Some(doc) = &doc {
            let targets: Vec<String> = doc
                .aliases()
                .filter(|target| *target != name)
                .map(str::to_string)
                .collect();
            if !targets.is_empty() {
                for target in targets {
                    let adopted = aliases.register(&target, name, doc);
                    if aliases.has_sibling(&target) {
                        level.adopt_doc(&target, adopted);
                        aliases.take_doc(&target);
                    }
                    debug!(alias = name, target = target.as_str(), "registered alias");
                }
                // Earlier overloads of the alias go too.
                if level.remove(name) {
                    debug!(name, "dropped entry of an alias");
                }
                return Admission::Aliased;
            }
        }

        match doc {
            Some(doc) => {
                aliases.take_doc(name);
                Admission::Emit(Some(doc))
            }
            None => Admission::Emit(aliases.take_doc(name)),
        }
    }

    // -- Levels ---------------------------------------------------------------

    /// Visit the declarations of one container into `builder`.
    fn visit_level(
        &self,
        declarations: &[Declaration],
        scope: &TypeScope<'_>,
        builder: &mut DocumentBuilder,
    ) -> Result<()> {
        let mut aliases = AliasFrame::new();
        for declaration in declarations {
            self.visit_declaration(declaration, scope, builder, &mut aliases)?;
        }
        aliases.finish()
    }

    fn visit_declaration(
        &self,
        declaration: &Declaration,
        scope: &TypeScope<'_>,
        builder: &mut DocumentBuilder,
        aliases: &mut AliasFrame,
    ) -> Result<()> {
        match declaration {
            Declaration::Module(module) => self.visit_module(module, scope, builder, aliases),
            Declaration::Function(function) => {
                self.visit_function(function, scope, builder, aliases)
            }
            Declaration::Interface(interface) => {
                self.visit_interface(interface, scope, builder, aliases)
            }
            Declaration::Variable(variable) => {
                aliases.note_sibling(&variable.name.text);
                trace!(name = variable.name.text.as_str(), "variable not documented");
                Ok(())
            }
            Declaration::TypeAlias(alias) => {
                aliases.note_sibling(&alias.name.text);
                trace!(name = alias.name.text.as_str(), "type alias not documented");
                Ok(())
            }
            Declaration::ExportAssignment(_) => Ok(()),
        }
    }

    fn visit_module(
        &self,
        module: &ModuleDeclaration,
        scope: &TypeScope<'_>,
        builder: &mut DocumentBuilder,
        aliases: &mut AliasFrame,
    ) -> Result<()> {
        let name = module.name.text();
        let line = self.line(&module.start);
        match self.admit(&name, self.doc(&module.start), aliases, builder) {
            Admission::Aliased => Ok(()),
            // Children of an ignored module land in the enclosing level.
            Admission::Ignored => self
                .visit_level(&module.body, scope, builder)
                .map_err(|e| e.at(&name, line)),
            Admission::Emit(doc) => {
                debug!(name = name.as_str(), line, "entering module");
                let mut inner = DocumentBuilder::new();
                self.visit_level(&module.body, scope, &mut inner)
                    .map_err(|e| e.at(&name, line))?;
                builder.upsert_module(&name, doc, inner.finish());
                trace!(name = name.as_str(), "module");
                Ok(())
            }
        }
    }

    fn visit_function(
        &self,
        function: &FunctionDeclaration,
        scope: &TypeScope<'_>,
        builder: &mut DocumentBuilder,
        aliases: &mut AliasFrame,
    ) -> Result<()> {
        let name = &function.name.text;
        let line = self.line(&function.start);
        let Admission::Emit(doc) = self.admit(name, self.doc(&function.start), aliases, builder)
        else {
            return Ok(());
        };
        let signature = self
            .call_signature(&function.signature, line, scope)
            .map_err(|e| e.at(name, line))?;
        builder.push_call_signature(name, signature, doc);
        trace!(name = name.as_str(), line, "function");
        Ok(())
    }

    fn visit_interface(
        &self,
        interface: &InterfaceDeclaration,
        scope: &TypeScope<'_>,
        builder: &mut DocumentBuilder,
        aliases: &mut AliasFrame,
    ) -> Result<()> {
        let name = &interface.name.text;
        let line = self.line(&interface.start);
        let admission = self.admit(name, self.doc(&interface.start), aliases, builder);
        let doc = match admission {
            Admission::Aliased => return Ok(()),
            Admission::Ignored => None,
            Admission::Emit(ref doc) => doc.clone(),
        };

        debug!(name = name.as_str(), line, "entering interface");
        // Members of an ignored interface are still checked.
        let entry = self
            .interface_entry(interface, line, doc, scope)
            .map_err(|e| e.at(name, line))?;
        if let Admission::Emit(_) = admission {
            builder.upsert_interface(name, entry);
            trace!(name = name.as_str(), "interface");
        }
        Ok(())
    }

    fn interface_entry(
        &self,
        interface: &InterfaceDeclaration,
        line: usize,
        doc: Option<DocComment>,
        scope: &TypeScope<'_>,
    ) -> Result<InterfaceEntry> {
        let type_params = type_param_names(&interface.type_params)?;
        let inner = scope.push(type_params.iter().cloned());
        let mut iface = InterfaceBuilder::new(line, doc, type_params);

        for clause in &interface.heritage {
            let types = clause
                .types
                .iter()
                .map(|ty| normalize(ty, &inner))
                .collect::<Result<Vec<_>>>()?;
            match clause.keyword {
                SyntaxKind::ExtendsKeyword => iface.extend(types),
                SyntaxKind::ImplementsKeyword => iface.implement(types),
                other => return Err(ExtractError::invalid_heritage(other)),
            }
        }

        let mut aliases = AliasFrame::new();
        for member in &interface.members {
            match member {
                InterfaceMember::Property(property) => {
                    self.visit_property(property, &inner, &mut iface, &mut aliases)?
                }
                InterfaceMember::Method(method) => {
                    self.visit_method(method, &inner, &mut iface, &mut aliases)?
                }
                InterfaceMember::Index(_)
                | InterfaceMember::Call(_)
                | InterfaceMember::Construct(_) => {
                    trace!(kind = %member.kind(), "member kind not documented");
                }
            }
        }
        aliases.finish()?;
        Ok(iface.finish())
    }

    // -- Members --------------------------------------------------------------

    fn visit_property(
        &self,
        property: &PropertySignature,
        scope: &TypeScope<'_>,
        iface: &mut InterfaceBuilder,
        aliases: &mut AliasFrame,
    ) -> Result<()> {
        let name = &property.name.text;
        let line = self.line(&property.start);
        let Admission::Emit(doc) = self.admit(name, self.doc(&property.start), aliases, iface)
        else {
            return Ok(());
        };
        if property.question {
            return Err(ExtractError::unsupported("optional property").at(name, line));
        }
        let ty = property
            .type_annotation
            .as_ref()
            .map(|ty| normalize(ty, scope))
            .transpose()
            .map_err(|e| e.at(name, line))?;
        iface.upsert_property(
            &group_titles(&property.start),
            name,
            PropertyEntry { line, doc, ty },
        );
        trace!(name = name.as_str(), line, "property");
        Ok(())
    }

    fn visit_method(
        &self,
        method: &MethodSignature,
        scope: &TypeScope<'_>,
        iface: &mut InterfaceBuilder,
        aliases: &mut AliasFrame,
    ) -> Result<()> {
        let name = &method.name.text;
        let line = self.line(&method.start);
        let Admission::Emit(doc) = self.admit(name, self.doc(&method.start), aliases, iface) else {
            return Ok(());
        };
        if method.question {
            return Err(ExtractError::unsupported("optional method").at(name, line));
        }
        let signature = self
            .call_signature(&method.signature, line, scope)
            .map_err(|e| e.at(name, line))?;
        iface.push_method_signature(&group_titles(&method.start), name, signature, doc);
        trace!(name = name.as_str(), line, "method");
        Ok(())
    }

    /// Normalize a signature inside a frame for its own type parameters.
    fn call_signature(
        &self,
        signature: &dtsdoc_syntax::CallSignature,
        line: usize,
        scope: &TypeScope<'_>,
    ) -> Result<CallSignature> {
        let type_params = type_param_names(&signature.type_params)?;
        let inner = scope.push(type_params.iter().cloned());
        Ok(CallSignature {
            type_params: non_empty(type_params),
            params: non_empty(params(&signature.params, &inner)?),
            returns: signature
                .return_type
                .as_ref()
                .map(|ty| normalize(ty, &inner))
                .transpose()?,
            line,
            doc: None,
        })
    }
}

/// Titles of the groups a member's `//` comments open, in order.
fn group_titles(start: &NodeStart) -> Vec<String> {
    start
        .line_comments()
        .iter()
        .map(|comment| {
            let text = comment.text.strip_prefix("//").unwrap_or(&comment.text);
            let text = text.strip_prefix(' ').unwrap_or(text);
            text.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{TypeDescriptor, MEMBER_KEY_PREFIX};
    use dtsdoc_syntax::{parse, HeritageClause, Identifier, TypeNode};

    /// Renders text unchanged so assertions can compare raw comment text.
    struct Raw;

    impl Markup for Raw {
        fn render_inline(&self, text: &str) -> String {
            text.to_string()
        }
        fn render_block(&self, text: &str) -> String {
            text.to_string()
        }
    }

    fn extract(source: &str) -> Result<DocumentNode> {
        let file = parse(source).unwrap();
        extract_file(&file, &Raw)
    }

    fn keys(node: &DocumentNode) -> Vec<String> {
        node.entries.keys().cloned().collect()
    }

    const MAP: &str = r#"
/**
 * Immutable collections.
 */
declare module Immutable {

  /**
   * Creates a new Map.
   *
   * Keys may be of any type.
   */
  export function Map<K, V>(obj: {[key: string]: V}): Map<string, V>;
  export function Map<K, V>(entries: Array<any>): Map<K, V>;

  /**
   * A keyed collection.
   * @see `Immutable.Seq`
   */
  export interface Map<K, V> extends Collection.Keyed<K, V> {

    // Reading values

    /**
     * Number of entries.
     */
    size: number;

    get(key: K, notSetValue?: V): V;

    // Persistent changes

    set(key: K, value: V): Map<K, V>;
    update<R>(updater: (value: Map<K, V>) => R): R;
  }
}
"#;

    #[test]
    fn extracts_module_function_and_interface() {
        let root = extract(MAP).unwrap();
        assert_eq!(keys(&root), vec!["Immutable"]);

        let immutable = root.get("Immutable").unwrap();
        assert_eq!(immutable.doc.as_ref().unwrap().synopsis, "Immutable collections.");
        let module = immutable.module.as_ref().unwrap();
        assert_eq!(keys(module), vec!["Map"]);

        let map = module.get("Map").unwrap();
        let call = map.call.as_ref().unwrap();
        assert_eq!(call.signatures.len(), 2);
        assert_eq!(call.doc.as_ref().unwrap().synopsis, "Creates a new Map.");
        assert_eq!(
            call.doc.as_ref().unwrap().description.as_deref(),
            Some("Keys may be of any type.")
        );
        assert_eq!(
            call.signatures[0].returns.as_ref().unwrap().to_string(),
            "Map<string, V>"
        );

        let iface = map.interface.as_ref().unwrap();
        assert_eq!(iface.doc.as_ref().unwrap().notes[0].name, "see");
        assert_eq!(
            iface.type_params,
            Some(vec!["K".to_string(), "V".to_string()])
        );
        assert_eq!(
            iface.extends,
            Some(vec![TypeDescriptor::NamedType {
                name: "Keyed".into(),
                qualifier: Some(vec!["Collection".into()]),
                type_args: Some(vec![TypeDescriptor::param("K"), TypeDescriptor::param("V")]),
            }])
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = serde_json::to_string(&extract(MAP).unwrap()).unwrap();
        let second = serde_json::to_string(&extract(MAP).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn records_source_lines() {
        let root = extract(MAP).unwrap();
        let map = root.get("Immutable").unwrap().module.as_ref().unwrap().get("Map").unwrap();
        let call = map.call.as_ref().unwrap();
        assert_eq!(call.signatures[0].line, 12);
        assert_eq!(call.signatures[1].line, 13);
        let iface = map.interface.as_ref().unwrap();
        assert_eq!(iface.line, 19);
        assert_eq!(iface.groups[0].property("size").unwrap().line, 26);
        assert_eq!(iface.groups[1].method("set").unwrap().signatures[0].line, 32);
    }

    #[test]
    fn groups_partition_members() {
        let root = extract(MAP).unwrap();
        let map = root.get("Immutable").unwrap().module.as_ref().unwrap().get("Map").unwrap();
        let groups = &map.interface.as_ref().unwrap().groups;
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].title.as_deref(), Some("Reading values"));
        let props: Vec<_> = groups[0].properties.keys().cloned().collect();
        assert_eq!(props, vec![format!("{}size", MEMBER_KEY_PREFIX)]);
        let methods: Vec<_> = groups[0].methods.keys().cloned().collect();
        assert_eq!(methods, vec!["#get"]);

        assert_eq!(groups[1].title.as_deref(), Some("Persistent changes"));
        let methods: Vec<_> = groups[1].methods.keys().cloned().collect();
        assert_eq!(methods, vec!["#set", "#update"]);
    }

    #[test]
    fn group_comments_on_consecutive_members() {
        let root = extract(
            "interface I {\n  // Group One\n  foo: number;\n  bar: number;\n  // Group Two\n  baz: number;\n}",
        )
        .unwrap();
        let groups = &root.get("I").unwrap().interface.as_ref().unwrap().groups;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title.as_deref(), Some("Group One"));
        assert_eq!(groups[0].properties.len(), 2);
        assert_eq!(groups[1].title.as_deref(), Some("Group Two"));
        assert!(groups[1].property("baz").is_some());
    }

    #[test]
    fn same_line_comments_do_not_open_groups() {
        let root = extract(
            "interface I { // opened\n  foo: number; // the foo\n  bar: number;\n  // Group Two\n  baz: number;\n}",
        )
        .unwrap();
        let groups = &root.get("I").unwrap().interface.as_ref().unwrap().groups;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, None);
        let props: Vec<_> = groups[0].properties.keys().cloned().collect();
        assert_eq!(props, vec!["#foo", "#bar"]);
        assert_eq!(groups[1].title.as_deref(), Some("Group Two"));
    }

    #[test]
    fn untitled_group_when_no_comment() {
        let root = extract("interface I {\n  a: string;\n  b(): number;\n}").unwrap();
        let groups = &root.get("I").unwrap().interface.as_ref().unwrap().groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, None);
    }

    #[test]
    fn type_parameters_are_scoped() {
        let root = extract(MAP).unwrap();
        let map = root.get("Immutable").unwrap().module.as_ref().unwrap().get("Map").unwrap();
        let iface = map.interface.as_ref().unwrap();

        let update = &iface.groups[1].method("update").unwrap().signatures[0];
        assert_eq!(update.type_params, Some(vec!["R".to_string()]));
        assert_eq!(update.returns, Some(TypeDescriptor::param("R")));
        assert_eq!(
            update.params.as_ref().unwrap()[0].ty.as_ref().unwrap().to_string(),
            "(value: Map<K, V>) => R"
        );

        let get = &iface.groups[0].method("get").unwrap().signatures[0];
        assert_eq!(get.returns, Some(TypeDescriptor::param("V")));
        assert!(get.params.as_ref().unwrap()[1].optional);
    }

    #[test]
    fn method_type_params_do_not_leak() {
        let root = extract(
            "interface I<T> {\n  map<M>(f: (v: T) => M): M;\n  last(): M;\n}\nfunction free(): T;",
        )
        .unwrap();
        let iface = root.get("I").unwrap().interface.as_ref().unwrap();
        let last = &iface.groups[0].method("last").unwrap().signatures[0];
        assert_eq!(last.returns, Some(TypeDescriptor::named("M")));
        let free = &root.get("free").unwrap().call.as_ref().unwrap().signatures[0];
        assert_eq!(free.returns, Some(TypeDescriptor::named("T")));
    }

    #[test]
    fn ignored_declarations_have_no_entry() {
        let root = extract(
            r#"
/** @ignore */
declare function hidden(): string;
/** @ignore */
interface Hidden { a: number; }
/** Shown. */
declare function shown(): string;
"#,
        )
        .unwrap();
        assert_eq!(keys(&root), vec!["shown"]);
    }

    #[test]
    fn ignored_module_children_are_hoisted() {
        let root = extract(
            r#"
/** @ignore */
declare module Internal {
  /** Visible. */
  function helper(): string;
  /** @ignore */
  function secret(): string;
}
"#,
        )
        .unwrap();
        assert_eq!(keys(&root), vec!["helper"]);
    }

    #[test]
    fn ignored_members_are_skipped() {
        let root = extract("interface I {\n  /** @ignore */\n  a: number;\n  b: number;\n}").unwrap();
        let group = &root.get("I").unwrap().interface.as_ref().unwrap().groups[0];
        assert!(group.property("a").is_none());
        assert!(group.property("b").is_some());
    }

    #[test]
    fn ignored_interface_members_are_still_checked() {
        let err = extract("/** @ignore */\ninterface I {\n  a?: number;\n}").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedFeature(_)));
    }

    #[test]
    fn alias_redirects_to_target() {
        let root = extract(
            r#"
interface List {
  /** Number of values. */
  size: number;
  /**
   * Alias of size.
   * @alias size
   */
  length: number;
}
"#,
        )
        .unwrap();
        let group = &root.get("List").unwrap().interface.as_ref().unwrap().groups[0];
        let names: Vec<_> = group.properties.keys().cloned().collect();
        assert_eq!(names, vec!["#size"]);
        assert_eq!(
            group.property("size").unwrap().doc.as_ref().unwrap().synopsis,
            "Number of values."
        );
    }

    #[test]
    fn alias_doc_moves_to_undocumented_target() {
        let root = extract(
            r#"
declare function first(): number;
/**
 * Returns the first value.
 * @alias first
 */
declare function head(): number;
declare function head(n: number): number;
declare function last(): number;
"#,
        )
        .unwrap();
        assert_eq!(keys(&root), vec!["first", "last"]);
        let doc = root.get("first").unwrap().call.as_ref().unwrap().doc.as_ref().unwrap();
        assert_eq!(doc.synopsis, "Returns the first value.");
        assert_eq!(doc.notes[0].name, "alias");
        assert_eq!(doc.notes[0].body.as_deref(), Some("head"));
    }

    #[test]
    fn alias_on_later_overload_drops_earlier_ones() {
        let root = extract(
            r#"
declare function head(): number;
/** @alias first */
declare function head(n: number): number;
declare function first(): number;
"#,
        )
        .unwrap();
        assert_eq!(keys(&root), vec!["first"]);
    }

    #[test]
    fn alias_on_later_member_drops_earlier_one() {
        let root = extract(
            r#"
interface List {
  count(): number;
  size: number;
  /** @alias size */
  count(predicate: any): number;
}
"#,
        )
        .unwrap();
        let group = &root.get("List").unwrap().interface.as_ref().unwrap().groups[0];
        assert!(group.method("count").is_none());
        assert!(group.property("size").is_some());
    }

    #[test]
    fn alias_before_target() {
        let root = extract(
            r#"
interface Seq {
  /**
   * Tests membership.
   * @alias has
   */
  contains(value: any): boolean;
  has(value: any): boolean;
}
"#,
        )
        .unwrap();
        let group = &root.get("Seq").unwrap().interface.as_ref().unwrap().groups[0];
        let names: Vec<_> = group.methods.keys().cloned().collect();
        assert_eq!(names, vec!["#has"]);
        let doc = group.method("has").unwrap().doc.as_ref().unwrap();
        assert_eq!(doc.synopsis, "Tests membership.");
    }

    #[test]
    fn alias_frames_are_per_container() {
        let root = extract(
            r#"
declare module A {
  /** @alias x */
  function y(): number;
  function x(): number;
}
declare module B {
  function y(): number;
}
"#,
        )
        .unwrap();
        let b = root.get("B").unwrap().module.as_ref().unwrap();
        assert_eq!(keys(b), vec!["y"]);
    }

    #[test]
    fn cross_container_alias_is_unsupported() {
        let err = extract(
            r#"
declare function size(): number;
declare module Inner {
  /** @alias size */
  function count(): number;
}
"#,
        )
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedFeature(_)));
        assert_eq!(err.site.unwrap().name, "Inner");
    }

    #[test]
    fn last_documented_overload_documents_the_call() {
        let root = extract(
            r#"
/** Creates an empty list. */
declare function of(): List;
declare function of(a: any): List;
/** Creates a list of values. */
declare function of(...values: any[]): List;
"#,
        )
        .unwrap();
        let call = root.get("of").unwrap().call.as_ref().unwrap();
        assert_eq!(call.signatures.len(), 3);
        assert_eq!(call.doc.as_ref().unwrap().synopsis, "Creates a list of values.");
    }

    #[test]
    fn last_stacked_comment_wins() {
        let root = extract("/** First. */\n/** Second. */\ndeclare function f(): string;").unwrap();
        let doc = root.get("f").unwrap().call.as_ref().unwrap().doc.as_ref().unwrap();
        assert_eq!(doc.synopsis, "Second.");
    }

    #[test]
    fn optional_property_is_unsupported() {
        let err = extract("interface I {\n  name?: string;\n}").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedFeature(_)));
        let site = err.site.unwrap();
        assert_eq!(site.name, "name");
        assert_eq!(site.line, 2);
    }

    #[test]
    fn optional_method_is_unsupported() {
        let err = extract("interface I {\n  run?(): string;\n}").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedFeature(_)));
    }

    #[test]
    fn default_parameter_is_unsupported() {
        let err = extract("function f(x: number = 1): number { return x; }").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedFeature(_)));
        assert_eq!(err.site.unwrap().name, "f");
    }

    #[test]
    fn constraint_is_unsupported() {
        let err = extract("declare function f<T extends string>(x: T): T;").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::UnsupportedFeature("type parameter constraint".into())
        );
    }

    #[test]
    fn unrecognized_type_carries_kind() {
        let err = extract("declare function f(x: string | number): string;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnrecognizedSyntax(SyntaxKind::UnionType));
    }

    #[test]
    fn invalid_heritage_keyword() {
        let mut file = parse("interface I extends J {}").unwrap();
        if let Declaration::Interface(iface) = &mut file.declarations[0] {
            iface.heritage = vec![HeritageClause {
                keyword: SyntaxKind::Parameter,
                types: vec![TypeNode::Identifier(Identifier {
                    text: "J".into(),
                    offset: 20,
                })],
            }];
        }
        let err = extract_file(&file, &Raw).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidHeritage(SyntaxKind::Parameter));
    }

    #[test]
    fn implements_clause() {
        let root = extract("interface I extends A, B implements C {}").unwrap();
        let iface = root.get("I").unwrap().interface.as_ref().unwrap();
        assert_eq!(iface.extends.as_ref().unwrap().len(), 2);
        assert_eq!(iface.implements, Some(vec![TypeDescriptor::named("C")]));
    }

    #[test]
    fn reopened_interface_merges() {
        let root = extract(
            "/** Doc. */\ninterface I { a: number; }\ninterface I extends J { b: string; }",
        )
        .unwrap();
        let iface = root.get("I").unwrap().interface.as_ref().unwrap();
        assert_eq!(iface.line, 2);
        assert!(iface.doc.is_some());
        assert_eq!(iface.groups.len(), 2);
        assert_eq!(iface.extends, Some(vec![TypeDescriptor::named("J")]));
    }

    #[test]
    fn string_named_modules() {
        let root = extract("declare module \"immutable\" {\n  export = Immutable;\n}").unwrap();
        assert!(root.get("immutable").unwrap().module.as_ref().unwrap().is_empty());
    }
}
