//! Property-based tests for the erasure channel and the peeling decoder.

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use peel::qubit_graph::erasure_forest::ErasureForest;
use peel::{Pauli, SurfaceCode};

fn noisy_code(size: i32, p: f64, seed: u64) -> SurfaceCode {
    let mut code = SurfaceCode::new(size).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);
    code.apply_random_errors(p, &mut rng).unwrap();
    code.measure_syndrome();
    code
}

proptest! {
    /// Errors confined to the erasure set are always cured.
    #[test]
    fn prop_erasure_is_always_cured(size in 0i32..12, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut code = noisy_code(size, p, seed);
        let erasure = code.erasure().clone();

        let correction = code.erasure_decoder();
        for kind in Pauli::ALL {
            for qubit in correction.qubits(kind) {
                prop_assert!(erasure.contains(qubit), "{:?} corrected but not erased", qubit);
            }
        }

        code.measure_syndrome();
        prop_assert!(!code.error_detected(), "residual syndrome on size {}", size);
    }

    /// Each erased qubit is a tree edge at most once per stabilizer type.
    #[test]
    fn prop_forest_edges_are_distinct_erasures(size in 1i32..12, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let code = noisy_code(size, p, seed);
        for kind in Pauli::ALL {
            let forest = ErasureForest::grow(
                code.lattice(),
                code.open_boundary(kind),
                code.erasure(),
                code.syndrome(kind),
                kind,
            );
            let edges: Vec<_> = forest.edges().collect();
            let distinct: hashbrown::HashSet<_> = edges.iter().copied().collect();
            prop_assert_eq!(edges.len(), distinct.len());
            prop_assert!(distinct.is_subset(code.erasure()));
            for node in forest.nodes() {
                prop_assert!(node.parent.is_some() == node.parent_qubit.is_some());
            }
        }
    }

    /// Measuring twice without mutation gives the same syndrome.
    #[test]
    fn prop_syndrome_is_idempotent(size in 0i32..12, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut code = noisy_code(size, p, seed);
        let x = code.syndrome(Pauli::X).clone();
        let z = code.syndrome(Pauli::Z).clone();
        code.measure_syndrome();
        prop_assert_eq!(code.syndrome(Pauli::X), &x);
        prop_assert_eq!(code.syndrome(Pauli::Z), &z);
    }

    /// The same seed reproduces the same erasure pattern.
    #[test]
    fn prop_channel_is_reproducible(size in 0i32..10, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let a = noisy_code(size, p, seed);
        let b = noisy_code(size, p, seed);
        prop_assert_eq!(a.pauli_frame(), b.pauli_frame());
    }

    /// Operators only ever land on erased data qubits.
    #[test]
    fn prop_operators_stay_inside_erasure(size in 0i32..10, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let code = noisy_code(size, p, seed);
        for kind in Pauli::ALL {
            prop_assert!(code.errors(kind).is_subset(code.erasure()));
        }
        for qubit in code.erasure() {
            prop_assert!(code.lattice().is_data_qubit(*qubit));
        }
    }
}
