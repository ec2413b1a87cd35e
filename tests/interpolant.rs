use otter_mc::{
    encoder::Encoder,
    proof::{parse_proof, ProofTree, Resolution},
    structures::{Clause, ClauseSet},
};

// Any circuit will do: these tests hand the encoder artificial partitions,
// and only its index layout matters. M = 2, so with a bound of 1 the
// constants sit at 5 (false) and 6 (true), and variables 3, 4 are the
// step-1 copies of 1, 2.
const LATCH_TO_ZERO: &str = "aag 2 1 1 1 0\n2\n4 0\n4\n";

fn encoder() -> Encoder {
    Encoder::from_aiger(LATCH_TO_ZERO, 1).expect("Parse failure")
}

fn clause_set(clauses: &[&[i64]]) -> ClauseSet {
    clauses
        .iter()
        .map(|literals| Clause::from_literals(literals.iter().copied()))
        .collect()
}

mod labelling {
    use super::*;

    #[test]
    fn shared_literals_survive_shifted() {
        // A: {1}, {-1, 3}. B: {-3}. Variable 3 is shared; 1 is local to A.
        let first = clause_set(&[&[1], &[-1, 3]]);
        let second = clause_set(&[&[-3]]);

        let mut proof = ProofTree::new();
        let one = proof.register(Clause::unit(1), None);
        let bridge = proof.register(Clause::from_literals([-1, 3]), None);
        let not_three = proof.register(Clause::unit(-3), None);
        let three = proof.register(
            Clause::unit(3),
            Some(Resolution {
                left: one,
                pivot: 1,
                right: bridge,
            }),
        );
        proof.register(
            Clause::empty(),
            Some(Resolution {
                left: three,
                pivot: 3,
                right: not_three,
            }),
        );

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        // {1} projects to false, {-1, 3} to the literal 3; the A-local pivot
        // disjoins them, folding the false away, and the B pivot conjoins
        // with true, folding likewise. Variable 3 steps back to variable 1.
        assert!(encoder.formulas.is_literal(interpolant));
        assert_eq!(encoder.formulas.label(interpolant), 1);
    }

    #[test]
    fn refutation_within_the_first_partition_is_false() {
        let first = clause_set(&[&[3], &[-3]]);
        let second = clause_set(&[&[4]]);

        let mut proof = ProofTree::new();
        let three = proof.register(Clause::unit(3), None);
        let not_three = proof.register(Clause::unit(-3), None);
        proof.register(
            Clause::empty(),
            Some(Resolution {
                left: three,
                pivot: 3,
                right: not_three,
            }),
        );

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        assert!(encoder.is_false(interpolant));
    }

    #[test]
    fn refutation_within_the_second_partition_is_true() {
        let first = clause_set(&[&[4]]);
        let second = clause_set(&[&[3], &[-3]]);

        let mut proof = ProofTree::new();
        let three = proof.register(Clause::unit(3), None);
        let not_three = proof.register(Clause::unit(-3), None);
        proof.register(
            Clause::empty(),
            Some(Resolution {
                left: three,
                pivot: 3,
                right: not_three,
            }),
        );

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        assert!(encoder.is_true(interpolant));
    }

    #[test]
    fn clauses_in_both_partitions_count_as_first() {
        // {3} sits in both partitions; it must project, not label true.
        let first = clause_set(&[&[3]]);
        let second = clause_set(&[&[3], &[-3]]);

        let mut proof = ProofTree::new();
        let three = proof.register(Clause::unit(3), None);
        let not_three = proof.register(Clause::unit(-3), None);
        proof.register(
            Clause::empty(),
            Some(Resolution {
                left: three,
                pivot: 3,
                right: not_three,
            }),
        );

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        // And(project({3}), true) = Literal(3) shifted back = Literal(1)
        assert_eq!(encoder.formulas.label(interpolant), 1);
    }

    #[test]
    fn constants_project_unshifted() {
        let t = {
            let encoder = encoder();
            encoder.model.true_index
        };

        let first = clause_set(&[&[t], &[3, -t]]);
        let second = clause_set(&[&[-3], &[t]]);

        let mut proof = ProofTree::new();
        let truth = proof.register(Clause::unit(t), None);
        let bridge = proof.register(Clause::from_literals([3, -t]), None);
        let not_three = proof.register(Clause::unit(-3), None);
        let three = proof.register(
            Clause::unit(3),
            Some(Resolution {
                left: truth,
                pivot: t,
                right: bridge,
            }),
        );
        proof.register(
            Clause::empty(),
            Some(Resolution {
                left: three,
                pivot: 3,
                right: not_three,
            }),
        );

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        // {t} projects to the true constant, untouched by the shift; the
        // shared pivot t conjoins Or(3 shifted, …) with it along the way.
        let rendered = encoder.formulas.render(interpolant);
        assert!(rendered.contains('1'), "unexpected interpolant {rendered}");
        assert!(!rendered.contains('3'), "unshifted variable in {rendered}");
    }

    #[test]
    fn unrolled_chains_label_through_intermediates() {
        // The refutation below reaches the empty clause through a chain of
        // three resolutions, exactly as a trace line would unroll.
        let first = clause_set(&[&[1, 2, 3], &[-1, 3], &[-2]]);
        let second = clause_set(&[&[-3]]);

        let trace = "...\
                     \n0: ROOT 1 2 3\
                     \n1: ROOT -1 3\
                     \n2: ROOT -2\
                     \n3: ROOT -3\
                     \n4: CHAIN 0 [1] 1 [2] 2 [3] 3 => \
                     \nFinal clause: <empty>\n";
        let proof = parse_proof(trace).expect("Parse failure");

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        // Pivots 1 and 2 are A-local, so the projections {3}, {3}, false
        // disjoin; pivot 3 conjoins with true. After the step back the
        // interpolant is a disjunction over the literal 1.
        let rendered = encoder.formulas.render(interpolant);
        assert_eq!(rendered, "(1) or (1)");
    }
}

mod parsing {
    use super::*;

    #[test]
    fn trivial_traces_interpolate() {
        // Two complementary unit roots across the partitions.
        let first = clause_set(&[&[3]]);
        let second = clause_set(&[&[-3]]);

        let trace = "...\n0: ROOT 3\n1: ROOT -3\nFinal clause: 3\nTrivial problem\n";
        let proof = parse_proof(trace).expect("Parse failure");

        let mut encoder = encoder();
        let interpolant = encoder
            .interpolant(&first, &second, &proof)
            .expect("Labelling failure");

        assert_eq!(encoder.formulas.label(interpolant), 1);
    }

    #[test]
    fn roots_outside_both_partitions_are_rejected() {
        let first = clause_set(&[&[4]]);
        let second = clause_set(&[&[-4]]);

        let mut proof = ProofTree::new();
        let three = proof.register(Clause::unit(3), None);
        let not_three = proof.register(Clause::unit(-3), None);
        proof.register(
            Clause::empty(),
            Some(Resolution {
                left: three,
                pivot: 3,
                right: not_three,
            }),
        );

        let mut encoder = encoder();
        assert!(encoder.interpolant(&first, &second, &proof).is_err());
    }
}
