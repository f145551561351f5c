//! The two fixed grammar dialects.
//!
//! Generation decides *what* goes into a class; a dialect decides how each line
//! reads. `Core` is the reduced type set without casts, `Extended` adds the
//! remaining numeric types and converts ordinal defaults with explicit casts.

use crate::ast::method::{LocalVar, VarInit};
use crate::ast::property::{DefaultLit, PropertyDecl, PropertyTy};
use crate::ast::section::{Condition, ForSection, LeafSection};
use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub trait PropertyRenderer {
    /// Types a property may be declared with, drawn uniformly by the generator.
    fn property_types(&self) -> &'static [PropertyTy];

    fn type_name(&self, ty: PropertyTy) -> &'static str;

    fn default_literal(&self, ty: PropertyTy, default: &DefaultLit) -> String;

    fn render_property(&self, property: &PropertyDecl) -> String {
        let readonly = if property.readonly { "readonly " } else { "" };
        format!(
            "var {} : {} as {}{} = {}",
            property.field_name(),
            self.type_name(property.ty),
            readonly,
            property.accessor_name(),
            self.default_literal(property.ty, &property.default)
        )
    }
}

pub trait MethodRenderer {
    fn method_header(&self, name: &str) -> String {
        format!("function {}() : int {{", name)
    }

    fn local_var(&self, local: &LocalVar) -> String {
        let init = match &local.init {
            VarInit::QuotedBool(value) => format!("\"{}\"", value),
            VarInit::Int(value) => value.to_string(),
            VarInit::Float(value) => format!("{:?}", value),
            VarInit::QuotedIdent(ident) => format!("\"{}\"", ident),
        };
        format!("var {} = {}", local.name, init)
    }

    fn leaf(&self, leaf: LeafSection) -> String {
        match leaf {
            LeafSection::Print => "print(\"Hello World\")".to_string(),
            LeafSection::Throw => "throw \"Error\"".to_string(),
        }
    }

    fn if_head(&self, condition: &Condition) -> String {
        format!("if( {} ) {{", condition)
    }

    fn else_if_head(&self, condition: &Condition) -> String {
        format!("}} else if( {} ) {{", condition)
    }

    fn else_head(&self) -> String {
        "} else {".to_string()
    }

    fn for_head(&self, for_section: &ForSection) -> String {
        format!(
            "for( {} in {}..{} ) {{",
            for_section.var, for_section.start, for_section.stop
        )
    }

    fn block_end(&self) -> String {
        "}".to_string()
    }

    fn return_stmt(&self, value: usize) -> String {
        format!("return {}", value)
    }
}

/// Everything needed to render one class file.
pub trait DialectRenderer: PropertyRenderer + MethodRenderer {
    fn package_decl(&self, package: &str) -> String;

    fn class_header(&self, name: &str) -> String {
        format!("public class {} {{", name)
    }
}

pub struct CoreDialect;

const CORE_TYPES: [PropertyTy; 3] = [PropertyTy::Int, PropertyTy::String, PropertyTy::Boolean];

impl PropertyRenderer for CoreDialect {
    fn property_types(&self) -> &'static [PropertyTy] {
        &CORE_TYPES
    }

    fn type_name(&self, ty: PropertyTy) -> &'static str {
        match ty {
            PropertyTy::Boolean => "Boolean",
            PropertyTy::String => "String",
            // Only reachable for trees built for the extended dialect.
            PropertyTy::Int
            | PropertyTy::Double
            | PropertyTy::Float
            | PropertyTy::Long
            | PropertyTy::Short => "int",
        }
    }

    fn default_literal(&self, _ty: PropertyTy, default: &DefaultLit) -> String {
        render_plain_literal(default)
    }
}

impl MethodRenderer for CoreDialect {}

impl DialectRenderer for CoreDialect {
    fn package_decl(&self, package: &str) -> String {
        format!("package {}", package)
    }
}

pub struct ExtendedDialect;

const EXTENDED_TYPES: [PropertyTy; 7] = [
    PropertyTy::Int,
    PropertyTy::String,
    PropertyTy::Boolean,
    PropertyTy::Double,
    PropertyTy::Float,
    PropertyTy::Long,
    PropertyTy::Short,
];

impl PropertyRenderer for ExtendedDialect {
    fn property_types(&self) -> &'static [PropertyTy] {
        &EXTENDED_TYPES
    }

    fn type_name(&self, ty: PropertyTy) -> &'static str {
        match ty {
            PropertyTy::Int => "int",
            PropertyTy::String => "String",
            PropertyTy::Boolean => "boolean",
            PropertyTy::Double => "double",
            PropertyTy::Float => "float",
            PropertyTy::Long => "long",
            PropertyTy::Short => "short",
        }
    }

    fn default_literal(&self, ty: PropertyTy, default: &DefaultLit) -> String {
        match default {
            DefaultLit::Ordinal(ordinal) if ty.is_numeric() && ty != PropertyTy::Int => {
                format!("{} as {}", ordinal, self.type_name(ty))
            }
            _ => render_plain_literal(default),
        }
    }
}

impl MethodRenderer for ExtendedDialect {}

impl DialectRenderer for ExtendedDialect {
    fn package_decl(&self, package: &str) -> String {
        format!("package {};", package)
    }
}

fn render_plain_literal(default: &DefaultLit) -> String {
    match default {
        DefaultLit::Ordinal(ordinal) => ordinal.to_string(),
        DefaultLit::Text(text) => format!("\"{}\"", text),
        DefaultLit::Bool(value) => value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Reduced type set, no casts.
    Core,
    /// Full numeric type set with explicit casts.
    Extended,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Core
    }
}

impl Dialect {
    pub fn renderer(&self) -> &'static dyn DialectRenderer {
        match self {
            Dialect::Core => &CoreDialect,
            Dialect::Extended => &ExtendedDialect,
        }
    }

    pub fn file_extension(&self) -> &'static str {
        "gs"
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Dialect::Core => "core",
            Dialect::Extended => "extended",
        })
    }
}

impl FromStr for Dialect {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" | "b" => Ok(Dialect::Core),
            "extended" | "a" => Ok(Dialect::Extended),
            _ => Err(GeneratorError::Configuration(format!("unknown dialect {}", s))),
        }
    }
}
