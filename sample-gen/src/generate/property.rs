use crate::ast::property::{DefaultLit, PropertyDecl, PropertyTy};
use crate::context::Context;

impl PropertyDecl {
    /// Generates `count` properties named `_property1` to `_property<count>`.
    pub fn generate_properties(ctx: &mut Context, count: usize) -> Vec<PropertyDecl> {
        (1..=count)
            .map(|ordinal| PropertyDecl::generate_property(ctx, ordinal))
            .collect()
    }

    pub fn generate_property(ctx: &mut Context, ordinal: usize) -> PropertyDecl {
        let ty = ctx.choose_property_ty();
        let readonly = ctx.choose_readonly();
        let default = match ty {
            PropertyTy::String => DefaultLit::Text(format!("Property{}", ordinal)),
            PropertyTy::Boolean => DefaultLit::Bool(ctx.choose_boolean_true()),
            PropertyTy::Int
            | PropertyTy::Double
            | PropertyTy::Float
            | PropertyTy::Long
            | PropertyTy::Short => DefaultLit::Ordinal(ordinal),
        };
        PropertyDecl {
            ordinal,
            ty,
            readonly,
            default,
        }
    }
}
