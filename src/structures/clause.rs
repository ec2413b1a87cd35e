/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is as a sorted vector of distinct non-zero signed integers.
Sorting makes the representation canonical, and so two clauses with the same literals are equal --- the property the [proof](crate::proof) module relies on to address clauses by content.

- The empty clause is always false (never true).
- Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
*/

use std::collections::HashSet;

/// A sorted, duplicate-free clause of signed integer literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: Vec<i64>,
}

/// A set of clauses, interpreted as their conjunction.
pub type ClauseSet = HashSet<Clause>;

impl Clause {
    /// The empty clause, ⊥.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// A clause from any collection of literals, sorted and deduplicated.
    pub fn from_literals(literals: impl IntoIterator<Item = i64>) -> Self {
        let mut literals: Vec<i64> = literals.into_iter().collect();
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// The unit clause of a single literal.
    pub fn unit(literal: i64) -> Self {
        Clause {
            literals: vec![literal],
        }
    }

    /// The literals of the clause, in sorted order.
    pub fn literals(&self) -> &[i64] {
        &self.literals
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over the variables of the clause.
    pub fn variables(&self) -> impl Iterator<Item = i64> + '_ {
        self.literals.iter().map(|l| l.abs())
    }

    /// The resolvent of two clauses on the given pivot variable.
    ///
    /// Both polarities of the pivot are removed from the union of the parents, and the result is deduplicated.
    pub fn resolve(left: &Clause, right: &Clause, pivot: i64) -> Clause {
        Clause::from_literals(
            left.literals
                .iter()
                .chain(right.literals.iter())
                .copied()
                .filter(|l| l.abs() != pivot.abs()),
        )
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in &self.literals {
            the_string.push_str(&format!("{literal} "));
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }
}

/// The set of variables occurring in a clause set.
pub fn variables(clauses: &ClauseSet) -> HashSet<i64> {
    let mut the_set = HashSet::default();
    for clause in clauses {
        the_set.extend(clause.variables());
    }
    the_set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form() {
        let clause = Clause::from_literals([3, -1, 3, 2, -1]);
        assert_eq!(clause.literals(), &[-1, 2, 3]);
        assert_eq!(clause, Clause::from_literals([-1, 2, 3]));
    }

    #[test]
    fn resolution() {
        let left = Clause::from_literals([1, 2]);
        let right = Clause::from_literals([-1, 3]);
        assert_eq!(
            Clause::resolve(&left, &right, 1),
            Clause::from_literals([2, 3])
        );

        let left = Clause::from_literals([1]);
        let right = Clause::from_literals([-1]);
        assert!(Clause::resolve(&left, &right, 1).is_empty());
    }

    #[test]
    fn dimacs_form() {
        let clause = Clause::from_literals([2, -1]);
        assert_eq!(clause.as_dimacs(true), "-1 2 0");
        assert_eq!(clause.as_dimacs(false), "-1 2");
    }

    #[test]
    fn set_variables() {
        let mut the_set = ClauseSet::default();
        the_set.insert(Clause::from_literals([1, -2]));
        the_set.insert(Clause::from_literals([-1, 4]));
        let vars = variables(&the_set);
        assert_eq!(vars, HashSet::from([1, 2, 4]));
    }
}
