use crate::ast::class::ClassDecl;
use crate::ast::method::{LocalVar, MethodDecl};
use crate::ast::property::PropertyDecl;
use crate::ast::section::{Condition, ForSection, IfSection, LeafSection, Section};

/// Class tree visitor trait.
/// The default implementation visits in source order.
pub trait Visitor: Sized {
    fn enter_scope(&mut self) {}
    fn exit_scope(&mut self) {}

    fn visit_class(&mut self, class: &ClassDecl) {
        walk_class(self, class);
    }
    fn visit_property(&mut self, _property: &PropertyDecl) {}
    fn visit_method(&mut self, method: &MethodDecl) {
        walk_method(self, method);
    }
    fn visit_local(&mut self, _local: &LocalVar) {}
    fn visit_return(&mut self, _value: usize) {}

    // Sections
    fn visit_section(&mut self, section: &Section) {
        walk_section(self, section);
    }
    fn visit_leaf_section(&mut self, _section: LeafSection) {}
    fn visit_if_section(&mut self, section: &IfSection) {
        walk_if_section(self, section);
    }
    fn visit_for_section(&mut self, section: &ForSection) {
        walk_for_section(self, section);
    }
    fn visit_condition(&mut self, _condition: &Condition) {}
}

pub fn walk_class<V: Visitor>(visitor: &mut V, class: &ClassDecl) {
    visitor.enter_scope();
    for property in &class.properties {
        visitor.visit_property(property);
    }
    for method in &class.methods {
        visitor.visit_method(method);
    }
    visitor.exit_scope();
}

pub fn walk_method<V: Visitor>(
    visitor: &mut V,
    MethodDecl {
        locals,
        sections,
        return_value,
        ..
    }: &MethodDecl,
) {
    visitor.enter_scope();
    for local in locals {
        visitor.visit_local(local);
    }
    for section in sections {
        visitor.visit_section(section);
    }
    visitor.visit_return(*return_value);
    visitor.exit_scope();
}

pub fn walk_section<V: Visitor>(visitor: &mut V, section: &Section) {
    match section {
        Section::Leaf(leaf) => visitor.visit_leaf_section(*leaf),
        Section::If(if_section) => visitor.visit_if_section(if_section),
        Section::For(for_section) => visitor.visit_for_section(for_section),
    }
}

pub fn walk_if_section<V: Visitor>(
    visitor: &mut V,
    IfSection {
        branches,
        otherwise,
    }: &IfSection,
) {
    for branch in branches {
        visitor.visit_condition(&branch.condition);
        walk_block(visitor, &branch.body);
    }
    if let Some(otherwise) = otherwise {
        walk_block(visitor, otherwise);
    }
}

pub fn walk_for_section<V: Visitor>(visitor: &mut V, ForSection { body, .. }: &ForSection) {
    walk_block(visitor, body);
}

pub fn walk_block<V: Visitor>(visitor: &mut V, body: &Section) {
    visitor.enter_scope();
    visitor.visit_section(body);
    visitor.exit_scope();
}
