/*!
Tools for building a model from an ASCII AIGER circuit.

The grammar read here is the `aag` fragment the checker cares about:
a header `aag M I L O A`, then `I` input lines (one literal), `L` latch lines (`current next`), `O` output lines (one literal), and `A` AND gate lines (`out left right`).
Symbol table lines (beginning `i`, `l`, or `o`) are skipped wherever they occur, and a line consisting of `c` ends the parsable region.

AIG literals pack a variable and a polarity: literal `ℓ` is variable `ℓ >> 1`, negated iff `ℓ & 1` is set, with `0` and `1` reserved for the constants.
Each literal becomes a literal node in the [Formulas] arena built alongside the model: `±(ℓ >> 1)` for ordinary literals, the pinned constant variables for `0` and `1`.

Parsing is fatal on the first malformed line, on a body shorter than the header declares, on a literal above the declared maximum variable, and on a latch or gate defined through a negated or constant literal.
*/

use crate::{
    misc::log::targets,
    structures::{Formulas, Model, NodeId},
    types::err::{self, AigerError},
};

/// Reads an ASCII AIGER circuit into a model for a check at the given bound.
///
/// The bound fixes the index layout of the model; see [Model] for details.
pub fn parse_aiger(aiger: &str, bound: u32) -> Result<(Model, Formulas), err::ErrorKind> {
    let mut lines = aiger.lines().enumerate().filter_map(|(n, line)| {
        let line = line.trim();
        match line.chars().next() {
            None => None,
            Some('i') | Some('l') | Some('o') => None,
            _ => Some((n, line)),
        }
    });

    let mut body = Vec::default();
    let mut header: Option<(usize, &str)> = None;

    for (n, line) in &mut lines {
        if line == "c" {
            break;
        }
        match header {
            None => header = Some((n, line)),
            Some(_) => body.push((n, line)),
        }
    }

    let Some((header_line, header)) = header else {
        return Err(err::ErrorKind::from(AigerError::MissingHeader));
    };

    let mut fields = header.split_whitespace();
    if fields.next() != Some("aag") {
        return Err(err::ErrorKind::from(AigerError::MalformedHeader));
    }
    let mut counts = [0_u64; 5];
    for count in counts.iter_mut() {
        *count = match fields.next().map(str::parse) {
            Some(Ok(value)) => value,
            _ => return Err(err::ErrorKind::from(AigerError::MalformedHeader)),
        };
    }
    if fields.next().is_some() {
        return Err(err::ErrorKind::from(AigerError::Line(header_line)));
    }
    let [maximum_variable_index, input_count, latch_count, output_count, and_gate_count] = counts;

    if output_count == 0 {
        return Err(err::ErrorKind::from(AigerError::NoBadOutput));
    }

    let mut model = Model::new(maximum_variable_index as i64, bound);
    let mut formulas = Formulas::new();
    model.input_count = input_count as usize;
    model.latch_count = latch_count as usize;
    model.output_count = output_count as usize;
    model.and_gate_count = and_gate_count as usize;

    let mut body = body.into_iter();
    let mut next_line = |arity: usize| -> Result<(usize, Vec<u64>), err::ErrorKind> {
        let Some((n, line)) = body.next() else {
            return Err(err::ErrorKind::from(AigerError::TruncatedBody));
        };
        let mut literals = Vec::with_capacity(arity);
        for field in line.split_whitespace() {
            match field.parse() {
                Ok(literal) => literals.push(literal),
                Err(_) => return Err(err::ErrorKind::from(AigerError::Line(n))),
            }
        }
        if literals.len() != arity {
            return Err(err::ErrorKind::from(AigerError::Line(n)));
        }
        Ok((n, literals))
    };

    for _ in 0..model.input_count {
        let (_, literals) = next_line(1)?;
        let node = literal_node(&mut formulas, &model, literals[0])?;
        model.inputs.push(node);
    }

    for _ in 0..model.latch_count {
        let (_, literals) = next_line(2)?;
        let current = definition_node(&mut formulas, &model, literals[0])?;
        let next = literal_node(&mut formulas, &model, literals[1])?;
        model.latches.push((current, next));
    }

    for _ in 0..model.output_count {
        let (_, literals) = next_line(1)?;
        let node = literal_node(&mut formulas, &model, literals[0])?;
        model.outputs.push(node);
    }

    for _ in 0..model.and_gate_count {
        let (_, literals) = next_line(3)?;
        let out = definition_node(&mut formulas, &model, literals[0])?;
        let left = literal_node(&mut formulas, &model, literals[1])?;
        let right = literal_node(&mut formulas, &model, literals[2])?;
        model.and_gates.push((out, (left, right)));
    }

    log::info!(target: targets::AIGER,
        "Parsed: {} inputs, {} latches, {} outputs, {} gates, maximum variable {}",
        model.input_count,
        model.latch_count,
        model.output_count,
        model.and_gate_count,
        model.maximum_variable_index
    );

    Ok((model, formulas))
}

/// The literal node of a single AIG literal: a constant for `0`/`1`, a signed step-0 variable otherwise.
fn literal_node(
    formulas: &mut Formulas,
    model: &Model,
    literal: u64,
) -> Result<NodeId, err::ErrorKind> {
    match literal {
        0 => Ok(formulas.literal(model.false_index)),
        1 => Ok(formulas.literal(model.true_index)),
        _ => {
            let variable = (literal >> 1) as i64;
            if variable > model.maximum_variable_index {
                return Err(err::ErrorKind::from(AigerError::UndefinedVariable(literal)));
            }
            match literal & 1 {
                0 => Ok(formulas.literal(variable)),
                _ => Ok(formulas.literal(-variable)),
            }
        }
    }
}

/// As [literal_node], though restricted to literals which may define a latch or gate output.
fn definition_node(
    formulas: &mut Formulas,
    model: &Model,
    literal: u64,
) -> Result<NodeId, err::ErrorKind> {
    if literal < 2 || literal & 1 == 1 {
        return Err(err::ErrorKind::from(AigerError::NegatedDefinition(literal)));
    }
    literal_node(formulas, model, literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATCH_TO_ZERO: &str = "aag 2 1 1 1 0\n2\n4 0\n4\n";

    #[test]
    fn latch_to_zero() {
        let (model, formulas) = parse_aiger(LATCH_TO_ZERO, 1).expect("Parse failure");

        assert_eq!(model.maximum_variable_index, 2);
        assert_eq!(model.false_index, 5);
        assert_eq!(model.true_index, 6);
        assert_eq!(model.label_running_index, 6);

        assert_eq!(model.inputs.len(), 1);
        assert_eq!(formulas.label(model.inputs[0]), 1);

        let (current, next) = model.latches[0];
        assert_eq!(formulas.label(current), 2);
        assert_eq!(formulas.label(next), model.false_index);

        assert_eq!(formulas.label(model.outputs[0]), 2);
    }

    #[test]
    fn symbol_table_and_comments_skipped() {
        let aiger = "aag 1 1 0 1 0\n2\n3\ni0 request\no0 grant\nc\nignored text\n";
        let (model, formulas) = parse_aiger(aiger, 0).expect("Parse failure");
        assert_eq!(formulas.label(model.outputs[0]), -1);
    }

    #[test]
    fn negated_polarity() {
        let aiger = "aag 2 2 0 1 0\n2\n4\n5\n";
        let (model, formulas) = parse_aiger(aiger, 0).expect("Parse failure");
        assert_eq!(formulas.label(model.outputs[0]), -2);
    }

    #[test]
    fn header_required() {
        assert!(matches!(
            parse_aiger("", 0),
            Err(err::ErrorKind::Aiger(AigerError::MissingHeader))
        ));
        assert!(matches!(
            parse_aiger("nag 1 1 0 1 0\n2\n2\n", 0),
            Err(err::ErrorKind::Aiger(AigerError::MalformedHeader))
        ));
    }

    #[test]
    fn truncated_body() {
        assert!(matches!(
            parse_aiger("aag 2 1 1 1 0\n2\n4 0\n", 0),
            Err(err::ErrorKind::Aiger(AigerError::TruncatedBody))
        ));
    }

    #[test]
    fn undefined_variable() {
        assert!(matches!(
            parse_aiger("aag 1 1 0 1 0\n2\n6\n", 0),
            Err(err::ErrorKind::Aiger(AigerError::UndefinedVariable(6)))
        ));
    }

    #[test]
    fn negated_gate_output() {
        assert!(matches!(
            parse_aiger("aag 3 2 0 1 1\n2\n4\n6\n7 2 4\n", 0),
            Err(err::ErrorKind::Aiger(AigerError::NegatedDefinition(7)))
        ));
    }
}
