use emphatic_td::{
    Error, Learner, StepParams, Transition, TrueOnlineEmphaticTd, dot, try_dimension,
};
use rand::{SeedableRng, rngs::StdRng};

mod common;

use common::{approx_eq_tol, random_trajectory, random_vector};

fn replay(learner: &mut dyn Learner, steps: &[common::Step]) {
    for step in steps {
        learner
            .learn(&Transition::new(&step.phi, step.reward, &step.phi_next).with_params(step.params))
            .expect("trajectory vectors match the learner dimension");
    }
}

#[test]
fn two_state_scenario_matches_hand_computed_values() {
    let mut learner = TrueOnlineEmphaticTd::new(2).expect("dimension 2 is valid");
    let phi = [1.0, 0.0];
    let phi_next = [0.0, 1.0];
    let delta = learner
        .learn(
            &Transition::new(&phi, 1.0, &phi_next).with_params(StepParams {
                alpha: 0.1,
                gamma: 0.9,
                gamma_next: 0.9,
                interest: 1.0,
                lambda: 0.0,
                rho: 1.0,
            }),
        )
        .expect("valid transition");

    assert!(approx_eq_tol(delta, 1.0, 1e-12));
    assert!(approx_eq_tol(learner.followon(), 0.9, 1e-12));
    assert!(approx_eq_tol(learner.trace()[0], 0.1, 1e-12));
    assert_eq!(learner.trace()[1], 0.0);
    assert!(approx_eq_tol(learner.weights()[0], 0.1, 1e-12));
    assert_eq!(learner.weights()[1], 0.0);
    assert_eq!(learner.dual(), 0.0);
}

#[test]
fn replaying_a_trajectory_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let steps = random_trajectory(6, 500, &mut rng);

    let mut first = TrueOnlineEmphaticTd::new(6).unwrap();
    let mut second = TrueOnlineEmphaticTd::new(6).unwrap();
    replay(&mut first, &steps);
    replay(&mut second, &steps);

    assert_eq!(first.weights(), second.weights());
    assert_eq!(first, second);
}

#[test]
fn zero_features_with_no_target_leave_weights_unchanged() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut learner = TrueOnlineEmphaticTd::new(4).unwrap();
    replay(&mut learner, &random_trajectory(4, 50, &mut rng));
    let before = learner.weights().to_vec();

    let zero = [0.0; 4];
    let phi_next = random_vector(4, &mut rng);
    let delta = learner
        .learn(
            &Transition::new(&zero, 0.0, &phi_next)
                .with_alpha(0.1)
                .with_gamma(0.9)
                .with_gamma_next(0.0)
                .with_lambda(0.0),
        )
        .unwrap();

    assert_eq!(delta, 0.0);
    assert_eq!(learner.trace(), &[0.0; 4]);
    assert_eq!(learner.weights(), before.as_slice());
    assert_eq!(learner.dual(), 0.0);
}

#[test]
fn first_call_with_lambda_zero_is_semi_gradient_td0() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let phi = random_vector(5, &mut rng);
        let phi_next = random_vector(5, &mut rng);
        let mut params = common::random_params(&mut rng);
        params.lambda = 0.0;
        let reward = 0.75;

        let mut learner = TrueOnlineEmphaticTd::new(5).unwrap();
        let delta = learner
            .learn(&Transition::new(&phi, reward, &phi_next).with_params(params))
            .unwrap();

        assert_eq!(delta, reward);
        for (w, x) in learner.weights().iter().zip(&phi) {
            let expected = params.rho * params.alpha * params.interest * delta * x;
            assert!(approx_eq_tol(*w, expected, 1e-12), "{w} vs {expected}");
        }
    }
}

#[test]
fn zero_ratio_clears_traces_without_learning() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut learner = TrueOnlineEmphaticTd::new(3).unwrap();
    replay(&mut learner, &random_trajectory(3, 20, &mut rng));
    let before = learner.weights().to_vec();

    let phi = random_vector(3, &mut rng);
    let phi_next = random_vector(3, &mut rng);
    learner
        .learn(
            &Transition::new(&phi, 1.0, &phi_next)
                .with_alpha(0.1)
                .with_lambda(0.9)
                .with_rho(0.0),
        )
        .unwrap();

    assert_eq!(learner.weights(), before.as_slice());
    assert_eq!(learner.trace(), &[0.0; 3]);
    assert_eq!(learner.followon(), 0.0);
}

#[test]
fn zero_interest_from_the_start_never_learns() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut steps = random_trajectory(3, 100, &mut rng);
    for step in &mut steps {
        step.params.interest = 0.0;
    }
    let mut learner = TrueOnlineEmphaticTd::new(3).unwrap();
    replay(&mut learner, &steps);
    assert_eq!(learner.weights(), &[0.0; 3]);
}

#[test]
fn prediction_matches_dot_product_after_training() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut learner = TrueOnlineEmphaticTd::new(8).unwrap();
    replay(&mut learner, &random_trajectory(8, 200, &mut rng));

    for _ in 0..20 {
        let features = random_vector(8, &mut rng);
        assert_eq!(
            learner.predict(&features).unwrap(),
            dot(learner.weights(), &features).unwrap()
        );
    }
}

#[test]
fn self_loop_converges_to_discounted_return() {
    // v = 1 / (1 - γ) for a single state that loops onto itself with R = 1.
    let mut learner = TrueOnlineEmphaticTd::new(1).unwrap();
    let x = [1.0];
    let t = Transition::new(&x, 1.0, &x)
        .with_alpha(0.1)
        .with_gamma(0.5)
        .with_gamma_next(0.5)
        .with_lambda(0.5);
    for _ in 0..5000 {
        learner.learn(&t).unwrap();
    }
    assert!(approx_eq_tol(learner.predict(&x).unwrap(), 2.0, 1e-6));
}

#[test]
fn dimension_is_enforced() {
    assert!(TrueOnlineEmphaticTd::new(0).unwrap_err().is_invalid_argument());
    assert!(matches!(
        try_dimension(-1),
        Err(Error::NegativeDimension { dimension: -1 })
    ));

    let mut rng = StdRng::seed_from_u64(1);
    let mut learner = TrueOnlineEmphaticTd::new(3).unwrap();
    replay(&mut learner, &random_trajectory(3, 10, &mut rng));
    let before = learner.clone();

    let good = [1.0, 2.0, 3.0];
    let long = [1.0, 2.0, 3.0, 4.0];
    let err = learner
        .learn(&Transition::new(&long, 1.0, &good))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(learner.predict(&long).is_err());
    assert_eq!(learner, before);
}

#[test]
fn rejected_next_features_keep_state() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut learner = TrueOnlineEmphaticTd::new(3).unwrap();
    replay(&mut learner, &random_trajectory(3, 25, &mut rng));
    let before = learner.clone();

    let phi = random_vector(3, &mut rng);
    let short = [0.5, 0.5];
    let err = learner
        .learn(&Transition::new(&phi, 1.0, &short).with_alpha(0.1).with_lambda(0.8))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            argument: "phi_next",
            expected: 3,
            got: 2,
        }
    ));
    assert_eq!(learner, before);
}

#[test]
fn non_finite_inputs_propagate_without_panicking() {
    let mut learner = TrueOnlineEmphaticTd::new(2).unwrap();
    let phi = [1.0, 0.0];
    let phi_next = [0.0, 1.0];
    let delta = learner
        .learn(&Transition::new(&phi, f64::NAN, &phi_next).with_alpha(0.1))
        .unwrap();
    assert!(delta.is_nan());
    assert!(learner.weights()[0].is_nan());
    assert!(learner.predict(&phi).unwrap().is_nan());
}
