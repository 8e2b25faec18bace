//! Canonical N-Triples formatter
//!
//! Output is SPO-sorted so the same graph always serializes to the same
//! bytes regardless of insertion order.

use rdfsync_graph_ir::{Graph, Term};

/// Serialize a graph to canonical N-Triples text
pub fn format(graph: &Graph) -> String {
    let mut sorted = graph.clone();
    sorted.sort();

    let mut out = String::new();
    for triple in sorted.iter() {
        write_term(&mut out, &triple.s);
        out.push(' ');
        write_term(&mut out, &triple.p);
        out.push(' ');
        write_term(&mut out, &triple.o);
        out.push_str(" .\n");
    }
    out
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Term::BlankNode(id) => {
            out.push_str("_:");
            out.push_str(id.as_str());
        }
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            out.push('"');
            for c in value.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    c => out.push(c),
                }
            }
            out.push('"');
            if let Some(lang) = language {
                out.push('@');
                out.push_str(lang);
            } else if let Some(dt) = datatype {
                out.push_str("^^<");
                out.push_str(dt);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_format_simple() {
        let graph = parse("<urn:s> <urn:p> \"o\" .").unwrap();
        assert_eq!(format(&graph), "<urn:s> <urn:p> \"o\" .\n");
    }

    #[test]
    fn test_format_is_sorted() {
        let doc = "<urn:b> <urn:p> \"2\" .\n<urn:a> <urn:p> \"1\" .";
        let graph = parse(doc).unwrap();
        let out = format(&graph);
        assert_eq!(out, "<urn:a> <urn:p> \"1\" .\n<urn:b> <urn:p> \"2\" .\n");
    }

    #[test]
    fn test_format_escapes() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("urn:s"),
            Term::iri("urn:p"),
            Term::string("line\nbreak \"quoted\" back\\slash"),
        );
        let out = format(&graph);
        assert_eq!(
            out,
            "<urn:s> <urn:p> \"line\\nbreak \\\"quoted\\\" back\\\\slash\" .\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let doc = concat!(
            "<urn:animals:lion> <urn:zoo:class> \"Mammal\" .\n",
            "<urn:animals:lion> <urn:zoo:species> \"Panthera leo\" .\n",
            "<urn:animals:lion> <urn:zoo:kin> <urn:animals:tiger> .\n",
            "<urn:animals:lion> <urn:zoo:cry> \"roar\"@en .\n",
            "<urn:animals:lion> <urn:zoo:weight> \"190\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n",
        );
        let graph = parse(doc).unwrap();
        let reparsed = parse(&format(&graph)).unwrap();

        let mut a = graph.clone();
        let mut b = reparsed.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
