use heck::{ToSnakeCase, ToUpperCamelCase};

/// A schema name split into lowercase words.
///
/// Generated modules and properties use [`Name::snake_case`], generated types
/// use [`Name::upper_camel_case`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

/// Paths keywords that cannot be used even as raw identifiers.
const RESERVED: &[&str] = &["self", "Self", "super", "crate"];

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    /// Returns `true` if `src` is made of ASCII letters, digits and
    /// underscores, does not start with a digit, and derives identifiers that
    /// can be emitted.
    pub fn is_valid(src: &str) -> bool {
        let mut chars = src.chars();

        let Some(first) = chars.next() else {
            return false;
        };

        if !(first.is_ascii_alphabetic() || first == '_') {
            return false;
        }

        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }

        let name = Name::new(src);

        let leading_digit = name
            .parts
            .first()
            .is_none_or(|part| part.starts_with(|c: char| c.is_ascii_digit()));

        !leading_digit
            && !RESERVED.contains(&name.snake_case().as_str())
            && !RESERVED.contains(&name.upper_camel_case().as_str())
    }
}
