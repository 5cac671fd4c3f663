use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while1},
    character::complete::{char, space0},
    combinator::{map, opt, value},
    sequence::{delimited, preceded, terminated, tuple},
};

use crate::{Graph, Literal, RdfError, Statement, Term};

/// Parse an N-Triples document into a [Graph].
///
/// Blank lines and `#` comments are skipped. The first malformed line aborts
/// parsing with [RdfError::Syntax].
pub fn parse_n_triples(input: &str) -> Result<Graph, RdfError> {
    let mut graph = Graph::default();

    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (rest, statement) = statement(trimmed).map_err(|error| RdfError::Syntax {
            line: index + 1,
            message: format!("{error}"),
        })?;

        let rest = rest.trim_start();
        if !(rest.is_empty() || rest.starts_with('#')) {
            return Err(RdfError::Syntax {
                line: index + 1,
                message: format!("Unexpected trailing input {rest:?}"),
            });
        }

        graph.insert(statement);
    }

    Ok(graph)
}

fn statement(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            terminated(subject, space0),
            terminated(iri, space0),
            terminated(object, space0),
            char('.'),
        )),
        |(subject, predicate, object, _)| Statement {
            subject,
            predicate,
            object,
        },
    )(input)
}

fn subject(input: &str) -> IResult<&str, Term> {
    alt((iri, blank_node))(input)
}

fn object(input: &str) -> IResult<&str, Term> {
    alt((iri, blank_node, map(literal, Term::Literal)))(input)
}

fn iri_reference(input: &str) -> IResult<&str, &str> {
    delimited(
        char('<'),
        take_while1(|c: char| c != '>' && !c.is_whitespace()),
        char('>'),
    )(input)
}

fn iri(input: &str) -> IResult<&str, Term> {
    map(iri_reference, Term::iri)(input)
}

fn blank_node(input: &str) -> IResult<&str, Term> {
    map(
        preceded(
            tag("_:"),
            take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        ),
        Term::blank,
    )(input)
}

enum Annotation {
    Language(String),
    Datatype(String),
}

fn literal(input: &str) -> IResult<&str, Literal> {
    let (input, value) = delimited(
        char('"'),
        map(opt(lexical_form), Option::unwrap_or_default),
        char('"'),
    )(input)?;

    let (input, annotation) = opt(alt((
        map(
            preceded(
                char('@'),
                take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
            ),
            |language: &str| Annotation::Language(language.to_owned()),
        ),
        map(preceded(tag("^^"), iri_reference), |datatype: &str| {
            Annotation::Datatype(datatype.to_owned())
        }),
    )))(input)?;

    let mut literal = Literal::new(value);
    match annotation {
        Some(Annotation::Language(language)) => literal.language = Some(language),
        Some(Annotation::Datatype(datatype)) => literal.datatype = Some(datatype),
        None => {}
    }

    Ok((input, literal))
}

fn lexical_form(input: &str) -> IResult<&str, String> {
    escaped_transform(
        is_not("\\\""),
        '\\',
        alt((
            value("\\", char('\\')),
            value("\"", char('"')),
            value("\n", char('n')),
            value("\r", char('r')),
            value("\t", char('t')),
        )),
    )(input)
}
