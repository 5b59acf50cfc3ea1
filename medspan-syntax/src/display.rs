//! Snapshot-friendly rendering of labeled dependency edges.

use medspan::ParseToken;
use unicode_width::UnicodeWidthStr;

use crate::Dependency;

const SPACE_PADDING: usize = 2;

/// Renders a sentence's tokens with one row per dependency edge beneath the
/// dependent token, e.g.
///
/// ```text
/// Patient  denies  alcohol  use
///          ╰root
/// ╰nsubj─>denies
/// ```
///
/// Edges are rendered in the order given, which for linearizer output is
/// resolution order.
pub struct DependencyTreeDisplay<'a> {
    tokens: &'a [ParseToken],
    dependencies: &'a [Dependency],
}

impl<'a> DependencyTreeDisplay<'a> {
    pub fn new(tokens: &'a [ParseToken], dependencies: &'a [Dependency]) -> Self {
        Self {
            tokens,
            dependencies,
        }
    }
}

impl<'a> std::fmt::Display for DependencyTreeDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut token_start_columns = Vec::with_capacity(self.tokens.len());
        let mut opening_line = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_start_columns.push(UnicodeWidthStr::width(opening_line.as_str()));
            opening_line.push_str(&token.text);
        }
        f.write_str(&opening_line)?;

        for dependency in self.dependencies {
            writeln!(f)?;

            let column = self
                .tokens
                .iter()
                .position(|token| token.span == dependency.dep.span)
                .map(|idx| token_start_columns[idx])
                .unwrap_or(0);
            for _ in 0..column {
                write!(f, " ")?;
            }

            write!(f, "╰{}", dependency.relation)?;
            if let Some(head) = dependency.head_token() {
                write!(f, "─>{}", head.text)?;
            }
        }

        Ok(())
    }
}
