//! Splitting a `#define` directive into name, parameters and replacement
//! text.
//!
//! Only the shape of the directive is recognized here; the replacement text
//! is passed on untouched. A definition is function-like exactly when `(`
//! follows the name with no whitespace in between.

/// One macro definition in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MacroDefinition {
    pub name: String,
    /// `Some` for function-like macros, even with an empty list.
    pub params: Option<Vec<String>>,
    /// Replacement text, without surrounding whitespace.
    pub body: String,
}

impl MacroDefinition {
    /// An object-like definition.
    pub fn object_like(name: impl Into<String>, body: impl Into<String>) -> Self {
        MacroDefinition {
            name: name.into(),
            params: None,
            body: body.into(),
        }
    }

    pub fn function_like(
        name: impl Into<String>,
        params: Vec<String>,
        body: impl Into<String>,
    ) -> Self {
        MacroDefinition {
            name: name.into(),
            params: Some(params),
            body: body.into(),
        }
    }

    #[inline]
    pub fn is_function_like(&self) -> bool {
        self.params.is_some()
    }

    /// Parse the text following `#define`: `NAME body` or
    /// `NAME(params) body`.
    ///
    /// Returns `None` when there is no name or the parameter list is not
    /// closed.
    pub fn parse_directive_body(text: &str) -> Option<Self> {
        let text = text.trim_start();
        let name_len = identifier_len(text);
        if name_len == 0 {
            return None;
        }
        let (name, rest) = text.split_at(name_len);

        let (params, body) = match rest.strip_prefix('(') {
            Some(after_open) => {
                let close = after_open.find(')')?;
                let list = &after_open[..close];
                let params = if list.trim().is_empty() {
                    Vec::new()
                } else {
                    list.split(',').map(|p| p.trim().to_owned()).collect()
                };
                (Some(params), &after_open[close + 1..])
            }
            None => (None, rest),
        };

        Some(MacroDefinition {
            name: name.to_owned(),
            params,
            body: body.trim().to_owned(),
        })
    }

    /// Parse a whole directive line such as `#define NAME 1`.
    ///
    /// Whitespace is allowed around `#`. Lines that are not `#define`
    /// directives give `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.trim_start().strip_prefix('#')?;
        let rest = rest.trim_start().strip_prefix("define")?;
        if !rest.starts_with(|c: char| c == ' ' || c == '\t') {
            return None;
        }
        Self::parse_directive_body(rest)
    }
}

/// Byte length of the C identifier at the start of `text`.
fn identifier_len(text: &str) -> usize {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return 0,
    }
    1 + bytes
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

#[cfg(test)]
mod tests;
