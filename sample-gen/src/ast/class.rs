//! Class nodes. The root node of a generated source file.

use crate::ast::method::MethodDecl;
use crate::ast::property::PropertyDecl;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub package: String,
    pub name: String,
    pub properties: Vec<PropertyDecl>,
    pub methods: Vec<MethodDecl>,
}

/// Output record of the generator: a class name paired with its rendered source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: String,
    pub source: String,
}

impl GeneratedClass {
    /// File name the class is persisted under, e.g. `Abcdefgh.gs`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}
