use fftbench::{BackendError, Checker, Registry, Signal, Strategy};

// Every backend that accepts a size must return exactly n/2 + 1 bins.
#[test]
fn canonical_length_holds_for_all_backends() {
    let registry = Registry::detect();
    for &n in &[32usize, 64, 512, 1000, 1024] {
        let signal = Signal::random(n, 1);
        for backend in registry.backends() {
            if backend.validate_size(n).is_err() {
                continue;
            }
            let spectrum = backend.transform(&signal, Strategy::Heuristic).unwrap();
            assert_eq!(
                spectrum.len(),
                n / 2 + 1,
                "{} at n = {n}",
                backend.name()
            );
        }
    }
}

// Re-running the same input through the same backend and strategy must be
// bit-for-bit identical.
#[test]
fn backends_are_deterministic() {
    let registry = Registry::detect();
    let signal = Signal::random(1024, 7);
    for backend in registry.backends() {
        for &strategy in backend.strategies() {
            let first = backend.transform(&signal, strategy).unwrap();
            let second = backend.transform(&signal, strategy).unwrap();
            assert_eq!(first, second, "{} ({strategy})", backend.name());
        }
    }
}

// The strategy hint may change preparation cost, never the spectrum.
#[test]
fn unsupported_strategy_hints_are_ignored() {
    let registry = Registry::detect();
    let signal = Signal::random(512, 3);
    let backend = registry.get("realfft").unwrap();
    let heuristic = backend.transform(&signal, Strategy::Heuristic).unwrap();
    let exhaustive = backend.transform(&signal, Strategy::Exhaustive).unwrap();
    assert_eq!(heuristic, exhaustive);
}

// The DC bin of a real-input DFT is the plain sum of the samples; checked
// end to end against the reference backend, independent of its internals.
#[test]
fn dc_bin_is_the_sample_sum_at_n32() {
    let registry = Registry::detect();
    let signal = Signal::random(32, 42);
    let reference = registry.reference().unwrap();
    let spectrum = reference.transform(&signal, Strategy::Heuristic).unwrap();
    let sum: f32 = signal.samples().iter().sum();
    let dc = spectrum.bins()[0];
    assert!((dc.re - sum).abs() < 1e-3, "dc = {}, sum = {sum}", dc.re);
    assert!(dc.im.abs() < 1e-3);
}

// n = 1000 factors as 2^3 * 5^3: fine for arbitrary-length backends, out of
// reach for the power-of-two-only one, which must suggest 1024.
#[test]
fn n1000_splits_the_backend_set() {
    let registry = Registry::detect();
    let signal = Signal::random(1000, 9);
    let checker = Checker::default();

    match registry.get("microfft").unwrap().validate_size(1000) {
        Err(BackendError::InvalidSize {
            size,
            next_valid,
            next_pow2,
        }) => {
            assert_eq!(size, 1000);
            assert_eq!(next_valid, 1024);
            assert_eq!(next_pow2, 1024);
        }
        other => panic!("expected InvalidSize, got {other:?}"),
    }

    let reference = registry
        .get("realfft")
        .unwrap()
        .transform(&signal, Strategy::Heuristic)
        .unwrap();
    for name in ["rustfft", "kofft"] {
        let candidate = registry
            .get(name)
            .unwrap()
            .transform(&signal, Strategy::Heuristic)
            .unwrap();
        assert!(
            checker.compare(name, &reference, &candidate).passed(),
            "{name} diverged at n = 1000"
        );
    }
}

// All backends must agree pairwise at a power-of-two size, where the whole
// set participates.
#[test]
fn all_backends_agree_at_n1024() {
    let registry = Registry::detect();
    let signal = Signal::random(1024, 11);
    let checker = Checker::default();
    let reference = registry
        .reference()
        .unwrap()
        .transform(&signal, Strategy::Heuristic)
        .unwrap();
    for backend in registry.backends() {
        let candidate = backend.transform(&signal, Strategy::Heuristic).unwrap();
        let report = checker.compare(backend.name(), &reference, &candidate);
        assert!(report.passed(), "{report}");
    }
}
