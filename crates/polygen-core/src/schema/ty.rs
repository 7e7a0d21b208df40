use std::fmt;

/// The abstract data type of a column.
///
/// Abstract types are independent of any target language. The code
/// synthesizer maps each one to a concrete generated type:
///
/// ```text
/// String      →  String
/// Char        →  char            (String when the length exceeds 1)
/// Boolean     →  bool
/// Byte        →  u8
/// Int16/32/64 →  i16 / i32 / i64
/// Double      →  f64
/// Date        →  support::Date
/// DateTime    →  support::DateTime
/// Binary      →  Vec<u8>
/// RowVersion  →  support::RowVersion
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,

    /// 8-bit unsigned integer
    Byte,

    Int16,
    Int32,
    Int64,

    /// 64-bit floating point number
    Double,

    /// Variable length text with a mandatory maximum length
    String,

    /// Fixed length text, one character unless overridden
    Char,

    /// A civil date in the Gregorian calendar
    Date,

    /// A civil date and wall clock time
    DateTime,

    /// Unconstrained binary data
    Binary,

    /// An opaque token maintained by the data store for optimistic
    /// concurrency checks
    RowVersion,
}

impl Type {
    /// Integer types may be identity columns.
    pub fn is_integer(self) -> bool {
        matches!(self, Type::Byte | Type::Int16 | Type::Int32 | Type::Int64)
    }

    /// Textual types accept a `max_length` facet.
    pub fn is_textual(self) -> bool {
        matches!(self, Type::String | Type::Char)
    }

    pub fn default_max_length(self) -> Option<u32> {
        match self {
            Type::Char => Some(1),
            _ => None,
        }
    }

    /// `String` columns must state their maximum length.
    pub fn requires_max_length(self) -> bool {
        matches!(self, Type::String)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Boolean => "Boolean",
            Type::Byte => "Byte",
            Type::Int16 => "Int16",
            Type::Int32 => "Int32",
            Type::Int64 => "Int64",
            Type::Double => "Double",
            Type::String => "String",
            Type::Char => "Char",
            Type::Date => "Date",
            Type::DateTime => "DateTime",
            Type::Binary => "Binary",
            Type::RowVersion => "RowVersion",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
