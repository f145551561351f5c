use crate::ast::method::{LocalVar, MethodDecl, VarInit, VarInitKind};
use crate::ast::section::Section;
use crate::context::Context;
use crate::names::NameKind;
use tracing::trace;

impl MethodDecl {
    pub fn generate_methods(ctx: &mut Context, count: usize) -> Vec<MethodDecl> {
        (0..count).map(|_| MethodDecl::generate_method(ctx)).collect()
    }

    /// Generates a parameterless method with its locals, top-level sections at
    /// the policy's `max_depth` and a trailing integer return.
    pub fn generate_method(ctx: &mut Context) -> MethodDecl {
        let name = ctx.create_name(NameKind::Method);
        let num_locals = ctx.choose_num_locals();
        let num_sections = ctx.choose_num_sections();
        let locals = (0..num_locals)
            .map(|_| LocalVar::generate_local(ctx))
            .collect();
        let max_depth = ctx.policy.max_depth;
        let sections = (0..num_sections)
            .map(|_| Section::generate_section(ctx, max_depth))
            .collect();
        let return_value = ctx.choose_int_literal();
        trace!(%name, num_locals, num_sections, "generated method");
        MethodDecl {
            name,
            locals,
            sections,
            return_value,
        }
    }
}

impl LocalVar {
    pub fn generate_local(ctx: &mut Context) -> LocalVar {
        let name = ctx.create_name(NameKind::Variable);
        let init = match ctx.choose_var_init_kind() {
            VarInitKind::QuotedBool => VarInit::QuotedBool(ctx.choose_boolean_true()),
            VarInitKind::Int => VarInit::Int(ctx.choose_int_literal()),
            VarInitKind::Float => VarInit::Float(ctx.choose_float_literal()),
            VarInitKind::QuotedIdent => VarInit::QuotedIdent(ctx.create_name(NameKind::Variable)),
        };
        LocalVar { name, init }
    }
}
