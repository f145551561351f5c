use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    /// 1-based position within the class. Names are derived from it.
    pub ordinal: usize,
    pub ty: PropertyTy,
    pub readonly: bool,
    pub default: DefaultLit,
}

impl PropertyDecl {
    /// Backing field name such as `_property3`.
    pub fn field_name(&self) -> String {
        format!("_property{}", self.ordinal)
    }

    /// Public accessor name such as `Property3`.
    pub fn accessor_name(&self) -> String {
        format!("Property{}", self.ordinal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyTy {
    Int,
    String,
    Boolean,
    Double,
    Float,
    Long,
    Short,
}

impl PropertyTy {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PropertyTy::Int
                | PropertyTy::Double
                | PropertyTy::Float
                | PropertyTy::Long
                | PropertyTy::Short
        )
    }
}

/// Default value of a property. Always consistent with the declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultLit {
    /// The property ordinal, converted to the numeric type by the renderer.
    Ordinal(usize),
    /// String literal content (unquoted).
    Text(String),
    Bool(bool),
}
