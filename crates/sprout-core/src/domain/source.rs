//! Structured representation of the generated source file.
//!
//! The builder does not concatenate strings ad hoc: it constructs a
//! [`SourceModule`] — header comment, import list, declaration list, export
//! clause — and serializes it deterministically. What to emit is decided
//! here; how the final text is polished is the formatter port's concern, so
//! this module is testable without any formatter.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::component::{ComponentKind, ComponentSpec};

const STATE_MAP: &str = "mapStateToProps";
const DISPATCH_MAP: &str = "mapDispatchToProps";

// ── IR nodes ──────────────────────────────────────────────────────────────────

/// A single import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Import {
    /// `import Binding from 'module';`
    Default { binding: String, module: String },
    /// `import { a, b } from 'module';`
    Named { names: Vec<String>, module: String },
}

/// A top-level declaration in the generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    /// `class Name extends React.Component { render() { ... } }`
    ClassComponent { name: String },
    /// `const Name = (props) => { ... };`
    FunctionComponent { name: String },
    /// `const mapStateToProps = (state, ownProps) => { ... };`
    StateToProps,
    /// `const mapDispatchToProps = { ... };`
    DispatchToProps,
    /// `Name.propTypes = { ... };`
    PropTypes { component: String },
}

/// The trailing default export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportClause {
    /// `export default Name;`
    Default(String),
    /// `export default connect(mapStateToProps, mapDispatchToProps)(Name);`
    ConnectedDefault { component: String },
}

/// The whole generated file, as structure rather than text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceModule {
    header: String,
    imports: Vec<Import>,
    declarations: Vec<Declaration>,
    export: ExportClause,
}

// ── Construction ──────────────────────────────────────────────────────────────

impl SourceModule {
    /// Build the module for a component spec.
    ///
    /// Pure and deterministic: the same spec always yields the same module.
    /// No validation happens here — the spec's invariants (normalized name,
    /// valid enums) were established by the collector.
    pub fn for_component(spec: &ComponentSpec) -> Self {
        let name = spec.name().to_string();

        let mut imports = vec![
            Import::Default {
                binding: "React".into(),
                module: "react".into(),
            },
            Import::Default {
                binding: "PropTypes".into(),
                module: "prop-types".into(),
            },
        ];
        if spec.connected() {
            imports.push(Import::Named {
                names: vec!["connect".into()],
                module: "react-redux".into(),
            });
        }

        let mut declarations = vec![match spec.kind() {
            ComponentKind::Class => Declaration::ClassComponent { name: name.clone() },
            ComponentKind::Function => Declaration::FunctionComponent { name: name.clone() },
        }];
        if spec.connected() {
            declarations.push(Declaration::StateToProps);
            declarations.push(Declaration::DispatchToProps);
        }
        declarations.push(Declaration::PropTypes {
            component: name.clone(),
        });

        let export = if spec.connected() {
            ExportClause::ConnectedDefault { component: name }
        } else {
            ExportClause::Default(name)
        };

        Self {
            header: format!("// {}", spec.file_name()),
            imports,
            declarations,
            export,
        }
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn export(&self) -> &ExportClause {
        &self.export
    }
}

// ── Serialization ─────────────────────────────────────────────────────────────

impl SourceModule {
    /// Serialize to source text.
    ///
    /// The output is already well-formed; the formatting pass afterwards only
    /// normalizes style (quotes, arrow parens, indentation).
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.header);
        out.push('\n');

        for import in &self.imports {
            import.render_into(&mut out);
        }
        out.push('\n');

        for decl in &self.declarations {
            decl.render_into(&mut out);
            out.push('\n');
        }

        self.export.render_into(&mut out);

        out
    }
}

impl Import {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Default { binding, module } => {
                let _ = writeln!(out, "import {binding} from '{module}';");
            }
            Self::Named { names, module } => {
                let _ = writeln!(out, "import {{ {} }} from '{module}';", names.join(", "));
            }
        }
    }
}

impl Declaration {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::ClassComponent { name } => {
                let _ = writeln!(out, "class {name} extends React.Component {{");
                out.push_str("  render() {\n");
                push_markup(out, 4, name);
                out.push_str("  }\n");
                out.push_str("}\n");
            }
            Self::FunctionComponent { name } => {
                let _ = writeln!(out, "const {name} = (props) => {{");
                push_markup(out, 2, name);
                out.push_str("};\n");
            }
            Self::StateToProps => {
                let _ = writeln!(out, "const {STATE_MAP} = (state, ownProps) => {{");
                out.push_str("  return {\n");
                out.push_str("    // Map state here\n");
                out.push_str("  };\n");
                out.push_str("};\n");
            }
            Self::DispatchToProps => {
                let _ = writeln!(out, "const {DISPATCH_MAP} = {{");
                out.push_str("  // Map dispatch here\n");
                out.push_str("};\n");
            }
            Self::PropTypes { component } => {
                let _ = writeln!(out, "{component}.propTypes = {{");
                out.push_str("  // Add prop types here\n");
                out.push_str("};\n");
            }
        }
    }
}

impl ExportClause {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Default(name) => {
                let _ = writeln!(out, "export default {name};");
            }
            Self::ConnectedDefault { component } => {
                let _ = writeln!(
                    out,
                    "export default connect({STATE_MAP}, {DISPATCH_MAP})({component});"
                );
            }
        }
    }
}

/// The placeholder markup fragment every component body returns.
///
/// `indent` is the column of the `return` keyword.
fn push_markup(out: &mut String, indent: usize, class_name: &str) {
    let pad = " ".repeat(indent);
    let _ = writeln!(out, "{pad}return (");
    let _ = writeln!(out, "{pad}  <div className=\"{class_name}\">");
    let _ = writeln!(out, "{pad}    {{/* Add content here */}}");
    let _ = writeln!(out, "{pad}  </div>");
    let _ = writeln!(out, "{pad});");
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::component::Extension;

    fn spec(kind: ComponentKind, connected: bool) -> ComponentSpec {
        ComponentSpec::new("my button", kind, connected, Extension::Js, "").unwrap()
    }

    #[test]
    fn header_names_the_file() {
        let module = SourceModule::for_component(&spec(ComponentKind::Function, false));
        let text = module.render();
        assert!(text.starts_with("// MyButton.js\n"));
    }

    #[test]
    fn unconnected_module_has_no_redux_references() {
        let module = SourceModule::for_component(&spec(ComponentKind::Function, false));
        let text = module.render();

        assert!(!text.contains("react-redux"));
        assert!(!text.contains(STATE_MAP));
        assert!(!text.contains(DISPATCH_MAP));
        assert!(text.contains("export default MyButton;"));
    }

    #[test]
    fn connected_module_wires_the_store() {
        let module = SourceModule::for_component(&spec(ComponentKind::Class, true));
        let text = module.render();

        assert_eq!(
            text.matches("import { connect } from 'react-redux';").count(),
            1
        );
        assert_eq!(
            text.matches("const mapStateToProps = (state, ownProps)").count(),
            1
        );
        assert_eq!(text.matches("const mapDispatchToProps = {").count(), 1);
        assert!(text.contains(
            "export default connect(mapStateToProps, mapDispatchToProps)(MyButton);"
        ));
    }

    #[test]
    fn class_component_has_single_render_method() {
        let module = SourceModule::for_component(&spec(ComponentKind::Class, false));
        let text = module.render();

        assert!(text.contains("class MyButton extends React.Component {"));
        assert_eq!(text.matches("render()").count(), 1);
        assert!(!text.contains("const MyButton"));
    }

    #[test]
    fn function_component_takes_props() {
        let module = SourceModule::for_component(&spec(ComponentKind::Function, false));
        let text = module.render();

        assert!(text.contains("const MyButton = (props) => {"));
        assert!(!text.contains("class MyButton"));
    }

    #[test]
    fn markup_fragment_uses_name_as_class_attribute() {
        for kind in ComponentKind::ALL {
            let text = SourceModule::for_component(&spec(kind, false)).render();
            assert!(text.contains("<div className=\"MyButton\">"));
            assert!(text.contains("{/* Add content here */}"));
        }
    }

    #[test]
    fn prop_types_placeholder_is_always_present() {
        for connected in [false, true] {
            let text =
                SourceModule::for_component(&spec(ComponentKind::Function, connected)).render();
            assert!(text.contains("MyButton.propTypes = {"));
            assert!(text.contains("// Add prop types here"));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let module = SourceModule::for_component(&spec(ComponentKind::Class, true));
        assert_eq!(module.render(), module.render());
    }
}
