//! Line-oriented N-Triples parser
//!
//! Each non-blank, non-comment line must hold exactly one statement:
//! subject (IRI or blank node), predicate (IRI), object (IRI, blank node,
//! or literal with optional `@lang` / `^^<datatype>`), terminated by `.`.

use crate::error::{NtriplesError, Result};
use rdfsync_graph_ir::{Graph, Term};

/// Parse an N-Triples document into a graph
///
/// Triples appear in the graph in document order. Blank lines and lines
/// starting with `#` are skipped.
pub fn parse(input: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cursor = Cursor::new(line, line_no);
        let triple = cursor.statement()?;
        graph.add(triple);
    }

    Ok(graph)
}

/// Character cursor over a single statement line
struct Cursor<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str, line_no: usize) -> Self {
        Self {
            chars: line.chars().peekable(),
            line: line_no,
        }
    }

    fn statement(&mut self) -> Result<rdfsync_graph_ir::Triple> {
        let s = self.term()?;
        if s.is_literal() {
            return Err(NtriplesError::syntax(self.line, "literal in subject position"));
        }
        self.whitespace();

        let p = self.term()?;
        if !p.is_iri() {
            return Err(NtriplesError::syntax(self.line, "predicate must be an IRI"));
        }
        self.whitespace();

        let o = self.term()?;
        self.whitespace();

        match self.chars.next() {
            Some('.') => {}
            other => {
                return Err(NtriplesError::syntax(
                    self.line,
                    format!("expected '.' terminator, found {:?}", other),
                ))
            }
        }

        self.whitespace();
        match self.chars.peek() {
            None => {}
            Some('#') => {}
            Some(c) => {
                return Err(NtriplesError::syntax(
                    self.line,
                    format!("trailing content after '.': {:?}", c),
                ))
            }
        }

        Ok(rdfsync_graph_ir::Triple::new(s, p, o))
    }

    fn whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn term(&mut self) -> Result<Term> {
        match self.chars.peek() {
            Some('<') => self.iri(),
            Some('_') => self.blank_node(),
            Some('"') => self.literal(),
            other => Err(NtriplesError::syntax(
                self.line,
                format!("expected term, found {:?}", other),
            )),
        }
    }

    fn iri(&mut self) -> Result<Term> {
        Ok(Term::iri(self.iri_text()?))
    }

    fn iri_text(&mut self) -> Result<String> {
        self.chars.next(); // consume '<'
        let mut iri = String::new();
        loop {
            match self.chars.next() {
                Some('>') => return Ok(iri),
                Some('\\') => iri.push(self.escape()?),
                Some(c) => iri.push(c),
                None => return Err(NtriplesError::syntax(self.line, "unterminated IRI")),
            }
        }
    }

    fn blank_node(&mut self) -> Result<Term> {
        self.chars.next(); // consume '_'
        match self.chars.next() {
            Some(':') => {}
            _ => return Err(NtriplesError::syntax(self.line, "expected ':' after '_'")),
        }

        let mut label = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                label.push(c);
                self.chars.next();
            } else {
                break;
            }
        }

        if label.is_empty() {
            return Err(NtriplesError::syntax(self.line, "empty blank node label"));
        }
        Ok(Term::blank(label))
    }

    fn literal(&mut self) -> Result<Term> {
        self.chars.next(); // consume '"'
        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some('"') => break,
                Some('\\') => value.push(self.escape()?),
                Some(c) => value.push(c),
                None => return Err(NtriplesError::syntax(self.line, "unterminated literal")),
            }
        }

        match self.chars.peek() {
            Some('@') => {
                self.chars.next();
                let mut lang = String::new();
                while let Some(&c) = self.chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '-' {
                        lang.push(c);
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                if lang.is_empty() {
                    return Err(NtriplesError::syntax(self.line, "empty language tag"));
                }
                Ok(Term::lang_string(value, lang))
            }
            Some('^') => {
                self.chars.next();
                match self.chars.next() {
                    Some('^') => {}
                    _ => {
                        return Err(NtriplesError::syntax(
                            self.line,
                            "expected '^^' before datatype",
                        ))
                    }
                }
                if self.chars.peek() != Some(&'<') {
                    return Err(NtriplesError::syntax(self.line, "expected IRI datatype"));
                }
                let datatype = self.iri_text()?;
                Ok(Term::typed(value, datatype))
            }
            _ => Ok(Term::string(value)),
        }
    }

    /// Resolve the character after a backslash
    fn escape(&mut self) -> Result<char> {
        match self.chars.next() {
            Some('t') => Ok('\t'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('u') => self.unicode_escape(4),
            Some('U') => self.unicode_escape(8),
            other => Err(NtriplesError::escape(
                self.line,
                format!("unknown escape {:?}", other),
            )),
        }
    }

    fn unicode_escape(&mut self, digits: usize) -> Result<char> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                other => {
                    return Err(NtriplesError::escape(
                        self.line,
                        format!("expected hex digit, found {:?}", other),
                    ))
                }
            }
        }
        let code = u32::from_str_radix(&hex, 16)
            .map_err(|e| NtriplesError::escape(self.line, e.to_string()))?;
        char::from_u32(code).ok_or_else(|| {
            NtriplesError::escape(self.line, format!("invalid code point U+{}", hex))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let graph = parse("<urn:s> <urn:p> \"o\" .").unwrap();
        assert_eq!(graph.len(), 1);
        let t = graph.iter().next().unwrap();
        assert_eq!(t.s.as_iri(), Some("urn:s"));
        assert_eq!(t.p.as_iri(), Some("urn:p"));
        assert_eq!(t.o.as_literal(), Some("o"));
    }

    #[test]
    fn test_parse_resource_object() {
        let graph = parse("<urn:s> <urn:p> <urn:o> .").unwrap();
        let t = graph.iter().next().unwrap();
        assert_eq!(t.o.as_iri(), Some("urn:o"));
    }

    #[test]
    fn test_parse_blank_nodes() {
        let graph = parse("_:b0 <urn:p> _:b1 .").unwrap();
        let t = graph.iter().next().unwrap();
        assert!(t.s.is_blank());
        assert!(t.o.is_blank());
    }

    #[test]
    fn test_parse_comments_and_blanks() {
        let doc = "\n# a comment\n<urn:s> <urn:p> \"o\" . # trailing\n\n";
        let graph = parse(doc).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_parse_language_tag() {
        let graph = parse("<urn:s> <urn:p> \"bonjour\"@fr .").unwrap();
        let t = graph.iter().next().unwrap();
        match &t.o {
            Term::Literal { language, .. } => assert_eq!(language.as_deref(), Some("fr")),
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_datatype() {
        let graph =
            parse("<urn:s> <urn:p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .").unwrap();
        let t = graph.iter().next().unwrap();
        match &t.o {
            Term::Literal { datatype, .. } => assert_eq!(
                datatype.as_deref(),
                Some("http://www.w3.org/2001/XMLSchema#integer")
            ),
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_escapes() {
        let graph = parse(r#"<urn:s> <urn:p> "line\nbreak \"quoted\" A" ."#).unwrap();
        let t = graph.iter().next().unwrap();
        assert_eq!(t.o.as_literal(), Some("line\nbreak \"quoted\" A"));
    }

    #[test]
    fn test_error_carries_line_number() {
        let err = parse("<urn:s> <urn:p> \"o\" .\nnot a triple").unwrap_err();
        match err {
            NtriplesError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_terminator() {
        assert!(parse("<urn:s> <urn:p> \"o\"").is_err());
    }

    #[test]
    fn test_literal_subject_rejected() {
        assert!(parse("\"s\" <urn:p> \"o\" .").is_err());
    }

    #[test]
    fn test_literal_predicate_rejected() {
        assert!(parse("<urn:s> \"p\" \"o\" .").is_err());
    }
}
