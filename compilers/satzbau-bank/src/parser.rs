use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::value,
    sequence::{terminated, tuple},
    IResult,
};
use satzbau_morph::subject_label;
use satzbau_protocol::Conjugation;

use crate::error::{BankError, Result};

/// A form runs up to the next comma; separable verbs keep their particle.
fn form(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ',')(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    value((), tuple((multispace0, char(','), multispace0)))(input)
}

fn labelled<'a>(label: &'static str, input: &'a str) -> IResult<&'a str, &'a str> {
    let (rest, _) = terminated(tag(label), multispace1)(input)?;
    form(rest)
}

/// Parses a one-line conjugation table such as
/// `ich habe, du hast, er/sie/es hat, wir haben, ihr habt, Sie haben`.
///
/// The six labels must appear in that order; each is followed by whitespace
/// and the form.
pub fn parse_conjugation_summary(original_input: &str) -> Result<Conjugation> {
    let fail = |reason: String| BankError::Conjugation {
        input: original_input.to_string(),
        reason,
    };

    // 1. Skip leading whitespace
    let (mut input, _) = multispace0::<&str, nom::error::Error<&str>>(original_input)
        .map_err(|e| fail(e.to_string()))?;

    // 2. One labelled form per slot, comma separated
    let mut forms = Vec::with_capacity(Conjugation::SLOTS.len());
    for (i, (person, cardinality)) in Conjugation::SLOTS.iter().enumerate() {
        if i > 0 {
            let (rest, _) = separator(input).map_err(|_| fail(format!("expected ',' before '{}'", subject_label(*person, *cardinality))))?;
            input = rest;
        }

        let label = subject_label(*person, *cardinality);
        let (rest, found) = labelled(label, input).map_err(|_| fail(format!("expected '{}' form", label)))?;
        forms.push(Some(found.trim().to_string()));
        input = rest;
    }

    // 3. Nothing but whitespace may follow
    let (rest, _) = multispace0::<&str, nom::error::Error<&str>>(input).map_err(|e| fail(e.to_string()))?;
    if !rest.is_empty() {
        return Err(fail(format!("unexpected trailing input {:?}", rest)));
    }

    let mut forms = forms.into_iter();
    let mut slot = || forms.next().flatten();
    Ok(Conjugation {
        first_singular: slot(),
        second_singular: slot(),
        third_singular: slot(),
        first_plural: slot(),
        second_plural: slot(),
        third_plural: slot(),
    })
}

/// Inverse of [`parse_conjugation_summary`]; missing forms are left blank.
pub fn conjugation_summary(conjugation: &Conjugation) -> String {
    Conjugation::SLOTS
        .iter()
        .map(|(person, cardinality)| {
            format!(
                "{} {}",
                subject_label(*person, *cardinality),
                conjugation.form(*person, *cardinality).unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
