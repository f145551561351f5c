use crate::ast::class::ClassDecl;
use crate::ast::method::{LocalVar, MethodDecl};
use crate::ast::property::PropertyDecl;
use crate::ast::section::{ForSection, IfSection, LeafSection, Section};
use crate::dialect::{Dialect, DialectRenderer};
use crate::visitor::base_visitor::{walk_block, Visitor};

/// Visitor used to print a class tree in a given dialect.
/// Emits one statement per line, indenting nested scopes by two spaces.
pub struct EmitVisitor {
    output: String,
    renderer: &'static dyn DialectRenderer,
    curr_indent: usize,
    indentation: usize,
}

impl EmitVisitor {
    pub fn new(dialect: Dialect) -> EmitVisitor {
        EmitVisitor {
            output: String::new(),
            renderer: dialect.renderer(),
            curr_indent: 0,
            indentation: 2,
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(&" ".repeat(self.curr_indent));
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn push_blank_line(&mut self) {
        self.output.push('\n');
    }
}

impl Visitor for EmitVisitor {
    fn enter_scope(&mut self) {
        self.curr_indent += self.indentation;
    }
    fn exit_scope(&mut self) {
        self.curr_indent -= self.indentation;
    }

    fn visit_class(&mut self, class: &ClassDecl) {
        self.push_line(&self.renderer.package_decl(&class.package));
        self.push_blank_line();
        self.push_line(&self.renderer.class_header(&class.name));
        self.enter_scope();
        for property in &class.properties {
            self.visit_property(property);
        }
        for method in &class.methods {
            self.push_blank_line();
            self.visit_method(method);
        }
        self.exit_scope();
        self.push_line(&self.renderer.block_end());
    }

    fn visit_property(&mut self, property: &PropertyDecl) {
        self.push_line(&self.renderer.render_property(property));
    }

    fn visit_method(&mut self, method: &MethodDecl) {
        self.push_line(&self.renderer.method_header(&method.name));
        self.enter_scope();
        for local in &method.locals {
            self.visit_local(local);
        }
        self.push_blank_line();
        for section in &method.sections {
            self.visit_section(section);
        }
        self.push_blank_line();
        self.visit_return(method.return_value);
        self.exit_scope();
        self.push_line(&self.renderer.block_end());
    }

    fn visit_local(&mut self, local: &LocalVar) {
        self.push_line(&self.renderer.local_var(local));
    }

    fn visit_return(&mut self, value: usize) {
        self.push_line(&self.renderer.return_stmt(value));
    }

    fn visit_leaf_section(&mut self, section: LeafSection) {
        self.push_line(&self.renderer.leaf(section));
    }

    fn visit_if_section(&mut self, section: &IfSection) {
        for (i, branch) in section.branches.iter().enumerate() {
            let head = if i == 0 {
                self.renderer.if_head(&branch.condition)
            } else {
                self.renderer.else_if_head(&branch.condition)
            };
            self.push_line(&head);
            walk_block(self, &branch.body);
        }
        if let Some(otherwise) = &section.otherwise {
            self.push_line(&self.renderer.else_head());
            walk_block(self, otherwise);
        }
        self.push_line(&self.renderer.block_end());
    }

    fn visit_for_section(&mut self, section: &ForSection) {
        self.push_line(&self.renderer.for_head(section));
        walk_block(self, &section.body);
        self.push_line(&self.renderer.block_end());
    }
}

/// Renders a class tree to source text.
pub fn emit_class(class: &ClassDecl, dialect: Dialect) -> String {
    let mut emit_visitor = EmitVisitor::new(dialect);
    emit_visitor.visit_class(class);
    emit_visitor.into_output()
}

/// Renders a single section at the given indentation.
pub fn emit_section(section: &Section, dialect: Dialect, indent: usize) -> String {
    let mut emit_visitor = EmitVisitor::new(dialect);
    emit_visitor.curr_indent = indent;
    emit_visitor.visit_section(section);
    emit_visitor.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::method::VarInit;
    use crate::ast::property::{DefaultLit, PropertyTy};
    use crate::ast::section::{Atom, Clause, Condition, IfBranch};

    fn condition(value: bool) -> Condition {
        Condition {
            first: Clause {
                negated: false,
                atom: Atom::Bool(value),
            },
            rest: vec![],
        }
    }

    #[test]
    fn emits_if_chain() {
        let section = Section::If(IfSection {
            branches: vec![
                IfBranch {
                    condition: condition(true),
                    body: Box::new(LeafSection::Print.into()),
                },
                IfBranch {
                    condition: condition(false),
                    body: Box::new(LeafSection::Throw.into()),
                },
            ],
            otherwise: Some(Box::new(Section::For(ForSection {
                var: "abcd".to_string(),
                start: 2,
                stop: 5,
                body: Box::new(LeafSection::Print.into()),
            }))),
        });
        let expected = "    if( true ) {
      print(\"Hello World\")
    } else if( false ) {
      throw \"Error\"
    } else {
      for( abcd in 2..5 ) {
        print(\"Hello World\")
      }
    }
";
        assert_eq!(emit_section(&section, Dialect::Core, 4), expected);
    }

    #[test]
    fn emits_class_layout() {
        let class = ClassDecl {
            package: "SIMPLE".to_string(),
            name: "Abcdefgh".to_string(),
            properties: vec![PropertyDecl {
                ordinal: 1,
                ty: PropertyTy::Int,
                readonly: false,
                default: DefaultLit::Ordinal(1),
            }],
            methods: vec![MethodDecl {
                name: "Xyzxyzxy_method".to_string(),
                locals: vec![LocalVar {
                    name: "qwertyui".to_string(),
                    init: VarInit::Int(7),
                }],
                sections: vec![LeafSection::Throw.into()],
                return_value: 42,
            }],
        };
        let expected = "package SIMPLE

public class Abcdefgh {
  var _property1 : int as Property1 = 1

  function Xyzxyzxy_method() : int {
    var qwertyui = 7

    throw \"Error\"

    return 42
  }
}
";
        assert_eq!(emit_class(&class, Dialect::Core), expected);
        assert!(emit_class(&class, Dialect::Extended).starts_with("package SIMPLE;\n"));
    }
}
