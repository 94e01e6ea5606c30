//! Logical data types understood by the system.
//!
//! These represent *semantic* types, not physical layout.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DataType {
    // Integer types
    Int32,
    Int64,

    // Floating point
    Float64,

    // Boolean
    Boolean,

    // Strings
    Varchar { max_len: Option<u32> },

    // Special
    Null,
}

impl DataType {
    /// Whether a value of type `other` may be stored in a column of this type.
    pub fn accepts(&self, other: &DataType) -> bool {
        match (self, other) {
            (_, DataType::Null) => true,
            (DataType::Varchar { .. }, DataType::Varchar { .. }) => true,
            (a, b) => a == b,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int32 => write!(f, "INT"),
            DataType::Int64 => write!(f, "BIGINT"),
            DataType::Float64 => write!(f, "DOUBLE"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Varchar { max_len: Some(n) } => write!(f, "VARCHAR({n})"),
            DataType::Varchar { max_len: None } => write!(f, "VARCHAR"),
            DataType::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fits_every_column() {
        assert!(DataType::Int32.accepts(&DataType::Null));
        assert!(DataType::Boolean.accepts(&DataType::Null));
    }

    #[test]
    fn varchar_ignores_length() {
        let col = DataType::Varchar { max_len: Some(8) };
        assert!(col.accepts(&DataType::Varchar { max_len: None }));
        assert!(!col.accepts(&DataType::Int64));
    }
}
