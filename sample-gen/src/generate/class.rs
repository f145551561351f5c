use crate::ast::class::ClassDecl;
use crate::ast::method::MethodDecl;
use crate::ast::property::PropertyDecl;
use crate::context::Context;
use crate::names::NameKind;

impl ClassDecl {
    pub fn generate_class(
        ctx: &mut Context,
        package: &str,
        num_properties: usize,
        num_methods: usize,
    ) -> ClassDecl {
        let name = ctx.create_name(NameKind::Type);
        ClassDecl {
            package: package.to_string(),
            name,
            properties: PropertyDecl::generate_properties(ctx, num_properties),
            methods: MethodDecl::generate_methods(ctx, num_methods),
        }
    }
}
