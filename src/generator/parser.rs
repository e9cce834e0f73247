use chumsky::prelude::*;

use super::{GeneratorSpec, SpecError};

type Extra<'src> = extra::Err<Rich<'src, char>>;

impl From<Vec<Rich<'_, char>>> for SpecError {
    fn from(value: Vec<Rich<'_, char>>) -> Self {
        SpecError::Parse(
            value
                .iter()
                .map(std::string::ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

fn number<'src>() -> impl Parser<'src, &'src str, usize, Extra<'src>> + Clone {
    text::int::<&'src str, Extra<'src>>(10)
        .try_map(|s: &str, span| s.parse::<usize>().map_err(|e| Rich::custom(span, e)))
        .padded()
        .labelled("number")
}

fn bounds<'src>() -> impl Parser<'src, &'src str, (usize, usize), Extra<'src>> + Clone {
    number()
        .then_ignore(just(','))
        .then(number())
        .delimited_by(just('('), just(')'))
}

fn spec_parser<'src>() -> impl Parser<'src, &'src str, GeneratorSpec, Extra<'src>> + Clone {
    let call = |name: &'static str| {
        text::ascii::keyword::<&'src str, _, Extra<'src>>(name).padded()
    };

    recursive(move |spec| {
        let range = call("range")
            .ignore_then(bounds())
            .map(|(start, stop)| GeneratorSpec::Range { start, stop });
        let choose = call("choose")
            .ignore_then(bounds())
            .map(|(pool_size, k)| GeneratorSpec::Choose { pool_size, k });
        let powerset = call("powerset")
            .ignore_then(bounds())
            .map(|(pool_size, max_size)| GeneratorSpec::PowerSet {
                pool_size,
                max_size,
            });
        let product = call("product")
            .ignore_then(
                spec.clone()
                    .then_ignore(just(','))
                    .then(spec)
                    .delimited_by(just('('), just(')')),
            )
            .map(|(inner, outer)| GeneratorSpec::Product {
                inner: Box::new(inner),
                outer: Box::new(outer),
            });

        choice((range, choose, powerset, product)).padded()
    })
}

pub(super) fn parse_spec(s: &str) -> Result<GeneratorSpec, SpecError> {
    Ok(spec_parser().then_ignore(end()).parse(s).into_result()?)
}
