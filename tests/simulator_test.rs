use rand::{rngs::SmallRng, SeedableRng};

use peel::simulator::{run_trial, simulate, Outcome, SweepConfig, SweepTable};
use peel::{CodeError, SurfaceCode};

#[test]
fn sweep_config_validation() {
    assert!(matches!(
        SweepConfig::new(-1, 0.0, 0.5, 3, 10),
        Err(CodeError::Configuration { .. })
    ));
    assert!(matches!(
        SweepConfig::new(5, 0.6, 0.5, 3, 10),
        Err(CodeError::Sweep(_))
    ));
    assert!(SweepConfig::new(5, 0.0, 1.5, 3, 10).is_err());
    assert!(SweepConfig::new(5, 0.0, 0.5, 0, 10).is_err());
    assert!(SweepConfig::new(5, 0.0, 0.5, 3, 0).is_err());
}

#[test]
fn error_rates_are_evenly_spaced() {
    let config = SweepConfig::new(5, 0.0, 0.5, 3, 10).unwrap();
    let rates = config.error_rates();
    assert_eq!(rates.len(), 3);
    assert!((rates[0] - 0.0).abs() < 1e-12);
    assert!((rates[1] - 0.25).abs() < 1e-12);
    assert!((rates[2] - 0.5).abs() < 1e-12);

    let single = SweepConfig::new(5, 0.1, 0.5, 1, 10).unwrap();
    assert_eq!(single.error_rates(), vec![0.1]);
}

#[test]
fn noiseless_trials_have_no_error() {
    let mut code = SurfaceCode::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..20 {
        assert_eq!(run_trial(&mut code, 0.0, &mut rng).unwrap(), Outcome::NoError);
    }
}

#[test]
fn invalid_probability_is_rejected() {
    let mut code = SurfaceCode::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(matches!(
        run_trial(&mut code, 1.5, &mut rng),
        Err(CodeError::InvalidProbability(_))
    ));
    assert!(code.apply_random_errors(f64::NAN, &mut rng).is_err());
}

#[test]
fn full_erasure_erases_every_qubit() {
    let mut code = SurfaceCode::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let erased = code.apply_random_errors(1.0, &mut rng).unwrap();
    assert_eq!(erased, 13);
    assert_eq!(code.erasure().len(), 13);
    for kind in peel::Pauli::ALL {
        assert!(code.errors(kind).is_subset(code.erasure()));
    }
}

#[test]
fn test_simulate() {
    let config = SweepConfig::new(5, 0.0, 0.5, 3, 200).unwrap().with_seed(3);
    assert_eq!((config.size(), config.n_samples(), config.seed()), (5, 200, 3));
    let table = simulate(&config, false).unwrap();

    assert_eq!(table.error_rates().len(), 3);
    assert_eq!(table.samples(), 200);
    assert_eq!(table.counts().dim(), (3, Outcome::ALL.len()));
    for row in 0..3 {
        let total: u64 = Outcome::ALL.iter().map(|&o| table.count(row, o)).sum();
        assert_eq!(total, 200);
        let rate = table.failure_rate(row);
        assert!((0.0..=1.0).contains(&rate));
    }
    assert_eq!(table.count(0, Outcome::NoError), 200);
    assert_eq!(table.failure_rate(0), 0.0);
    assert!(table.count(2, Outcome::CorrectedError) > 0);

    let again = simulate(&config, false).unwrap();
    assert_eq!(table, again);
}

#[test]
fn confidence_interval_brackets_the_rate() {
    let mut table = SweepTable::new(vec![0.1], 100);
    for _ in 0..80 {
        table.record(0, Outcome::CorrectedError);
    }
    for _ in 0..20 {
        table.record(0, Outcome::UncorrectedError);
    }
    assert!((table.failure_rate(0) - 0.2).abs() < 1e-12);

    let (low, high) = table.confidence_interval(0, 0.95).unwrap();
    assert!(low < 0.2 && 0.2 < high);
    // 1.96 * sqrt(0.2 * 0.8 / 100)
    assert!((high - 0.2 - 0.0784).abs() < 1e-3);

    assert!(table.confidence_interval(0, 1.0).is_err());
    assert!(table.to_string().contains("uncorrected_error"));
}
