use ldagibbs::{CorpusState, GibbsSampler, Lda, LdaConfig, LdaError, RandomSource, SeededRandom, SimpleTokenizer};

/// Always returns the same value.
struct Constant(f64);

impl RandomSource for Constant {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Small linear congruential generator, independent of `rand`.
struct Lcg(u64);

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn assert_distribution(dist: &[f64], k: usize) {
    assert_eq!(dist.len(), k);
    assert!(dist.iter().all(|&p| p >= 0.0), "negative probability in {dist:?}");
    assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-9, "{dist:?} does not sum to 1");
}

#[test]
fn doc_topic_rows_match_lengths_after_initialize() {
    let texts = ["the cat sat on the mat", "", "dogs bark", "a b c d e f g"];
    let state = CorpusState::initialize(&texts, &SimpleTokenizer, 4, &mut SeededRandom::new(3)).unwrap();
    for d in 0..state.num_docs() {
        assert_eq!(state.doc_topic().row(d).iter().sum::<usize>(), state.doc_lengths()[d]);
    }
    assert_eq!(state.doc_lengths(), &[6, 0, 2, 7]);
}

#[test]
fn word_topic_columns_match_totals_after_every_sweep() {
    let texts = [
        "stars galaxy telescope orbit",
        "orbit planet stars moon",
        "bread butter flour oven",
        "oven flour sugar bread butter",
    ];
    let mut rng = SeededRandom::new(17);
    let mut state = CorpusState::initialize(&texts, &SimpleTokenizer, 3, &mut rng).unwrap();
    let sampler = GibbsSampler::new(0.1, 0.01);
    for _ in 0..100 {
        sampler.sweep(&mut state, &mut rng);
        assert_eq!(state.word_topic().column_sums(), state.topic_totals());
        assert!(state.is_consistent());
    }
}

#[test]
fn transform_is_a_distribution_for_any_text() {
    let mut lda = Lda::new(LdaConfig::new(3).iterations(100)).unwrap();
    lda.fit(&["red green blue", "green yellow", "blue blue red"]).unwrap();
    for text in ["", "red", "green blue yellow", "RED!!! red, red.", "nothing known here", "   "] {
        assert_distribution(&lda.transform(text), 3);
    }
}

#[test]
fn identical_seeds_are_bit_identical() {
    let texts = ["rust borrow checker", "ownership borrow lifetimes", "garden tomato soil", "soil compost garden"];
    let config = LdaConfig::new(3).alpha(0.2).beta(0.05).iterations(200).seed(1234);

    let mut a = Lda::new(config).unwrap();
    let mut b = Lda::new(config).unwrap();
    a.fit(&texts).unwrap();
    b.fit(&texts).unwrap();

    assert_eq!(a.assignments(), b.assignments());
    assert_eq!(a.state(), b.state());
    for q in ["borrow garden", "tomato", "unknown"] {
        let da: Vec<u64> = a.transform(q).iter().map(|p| p.to_bits()).collect();
        let db: Vec<u64> = b.transform(q).iter().map(|p| p.to_bits()).collect();
        assert_eq!(da, db);
    }
}

#[test]
fn injected_source_is_reproducible() {
    let texts = ["alpha beta gamma", "gamma delta", "beta beta alpha"];
    let config = LdaConfig::new(2).iterations(50);

    let mut a = Lda::with_random(config, Lcg(99)).unwrap();
    let mut b = Lda::with_random(config, Lcg(99)).unwrap();
    a.fit(&texts).unwrap();
    b.fit(&texts).unwrap();
    assert_eq!(a.assignments(), b.assignments());
}

#[test]
fn constant_zero_source_keeps_first_topic() {
    let mut lda = Lda::with_random(LdaConfig::new(3).iterations(10), Constant(0.0)).unwrap();
    lda.fit(&["x y z", "z y"]).unwrap();
    let state = lda.state().unwrap();
    assert!(state.assignments().iter().flatten().all(|&k| k == 0));
    assert_eq!(state.topic_totals(), &[5, 0, 0]);
}

fn majority_topic(assignments: &[usize], k: usize) -> usize {
    let mut counts = vec![0usize; k];
    for &t in assignments {
        counts[t] += 1;
    }
    (0..k).max_by_key(|&t| counts[t]).unwrap()
}

#[test]
fn separable_words_end_up_in_different_topics() {
    let runs = 10;
    let mut separated = 0;
    for seed in 0..runs {
        let config = LdaConfig::new(2).alpha(0.1).beta(0.01).iterations(500).seed(seed);
        let mut lda = Lda::new(config).unwrap();
        lda.fit(&["a a a", "b b b"]).unwrap();
        let assignments = lda.assignments().unwrap();
        if majority_topic(&assignments[0], 2) != majority_topic(&assignments[1], 2) {
            separated += 1;
        }
    }
    assert!(separated >= 7, "only {separated}/{runs} runs separated the words");
}

#[test]
fn zero_iterations_uses_initial_counts() {
    let texts = ["the cat sat", "the dog ran"];
    let (alpha, beta) = (0.1, 0.01);
    let config = LdaConfig::new(2).alpha(alpha).beta(beta).iterations(0).seed(5);

    let mut lda = Lda::new(config).unwrap();
    lda.fit(&texts).unwrap();

    // same seed, initialization only
    let initial = CorpusState::initialize(&texts, &SimpleTokenizer, 2, &mut SeededRandom::new(5)).unwrap();
    assert_eq!(lda.state(), Some(&initial));

    let v = initial.vocabulary().len() as f64;
    let mut expected = vec![alpha; 2];
    for token in ["the", "cat"] {
        let w = initial.vocabulary().get(token).unwrap();
        for (k, e) in expected.iter_mut().enumerate() {
            *e *= (initial.word_topic().get(w, k) as f64 + beta)
                / (initial.topic_totals()[k] as f64 + v * beta);
        }
    }
    let sum: f64 = expected.iter().sum();
    let expected: Vec<f64> = expected.iter().map(|p| p / sum).collect();

    let got = lda.transform("the cat");
    for (g, e) in got.iter().zip(&expected) {
        assert!((g - e).abs() < 1e-12, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn unknown_text_gives_exact_uniform() {
    for k in [1, 2, 3, 5, 8] {
        let mut lda = Lda::new(LdaConfig::new(k).iterations(20)).unwrap();
        lda.fit(&["apple orange", "pear plum apple"]).unwrap();
        assert_eq!(lda.transform("xyzabc"), vec![1.0 / k as f64; k]);
    }
}

#[test]
fn invalid_configuration_fails_before_state() {
    for config in [
        LdaConfig::new(0),
        LdaConfig::new(2).alpha(0.0),
        LdaConfig::new(2).beta(0.0),
        LdaConfig::new(2).alpha(-0.1),
    ] {
        assert!(matches!(Lda::new(config), Err(LdaError::InvalidConfiguration(_))));
    }
}

#[test]
fn empty_corpus_is_rejected() {
    let mut lda = Lda::new(LdaConfig::new(2)).unwrap();
    let texts: [&str; 0] = [];
    assert_eq!(lda.fit(&texts), Err(LdaError::EmptyCorpus));
    assert!(lda.state().is_none());
}

#[test]
fn default_model_is_initialized_and_trainable() {
    let mut lda = ldagibbs::default(&["expert systems reasoning", "machine learning data"]).unwrap();
    assert_eq!(lda.num_topics(), 3);
    assert!(lda.is_initialized());
    lda.run(25);
    assert!(lda.state().unwrap().is_consistent());
    assert_distribution(&lda.transform("expert data"), 3);
}
