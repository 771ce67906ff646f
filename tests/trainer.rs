use machine_learning::training::SolverConfig;
use mis_trainer::{
    config::{ReportFormat, TrainerConfig},
    impact::{ImpactWeights, TRAINING_SET},
    train,
};

const EXPECTED: ImpactWeights = ImpactWeights {
    batting: 1.115_384_6,
    strike_rate: -0.192_307_7,
    bowling: 20.818_426,
    economy: 1.511_628,
    bias: 14.230_769,
};

fn assert_close(got: &ImpactWeights, expected: &ImpactWeights, tol: f32) {
    let pairs = [
        (got.batting, expected.batting),
        (got.strike_rate, expected.strike_rate),
        (got.bowling, expected.bowling),
        (got.economy, expected.economy),
        (got.bias, expected.bias),
    ];

    for (g, e) in pairs {
        assert!((g - e).abs() < tol, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn least_squares_recovers_the_exact_weights() {
    let report = train(&SolverConfig::default()).unwrap();

    assert_close(&report.weights, &EXPECTED, 1e-3);
    assert!(report.mse < 1e-6, "mse {}", report.mse);
    assert!(report.r2 > 0.9999, "r2 {}", report.r2);
}

#[test]
fn weights_reproduce_the_expert_labels() {
    let report = train(&SolverConfig::default()).unwrap();

    for (stats, impact) in &TRAINING_SET {
        let score = report.weights.score(stats);
        assert!((score - impact).abs() < 1e-2, "{stats:?}: {score} != {impact}");
    }
}

#[test]
fn text_report_matches_the_deployment_format() {
    let text = train(&SolverConfig::default())
        .unwrap()
        .render(ReportFormat::Text)
        .unwrap();

    let expected = "\
--- Model Trained Successfully ---
Batting Weight: 1.12
Bowling Weight: 20.82
Strike Rate Bonus: -0.19
Economy Penalty: 1.51
Bias: 14.23

--- Ready for Deployment ---
Copy these weights into MISService.java";

    assert_eq!(text, expected);
}

#[test]
fn json_report_carries_weights_and_fit_quality() {
    let json = train(&SolverConfig::default())
        .unwrap()
        .render(ReportFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["solver"]["kind"], "least_squares");
    let batting = value["weights"]["batting"].as_f64().unwrap();
    assert!((batting - 1.115_384_6).abs() < 1e-3);
    assert!(value["r2"].as_f64().unwrap() > 0.9999);
    assert!(value["mse"].is_number());
}

#[test]
fn gradient_descent_agrees_with_the_closed_form() {
    let report = train(&SolverConfig::gradient_descent()).unwrap();

    assert_close(&report.weights, &EXPECTED, 5e-2);
    assert!(report.r2 > 0.999, "r2 {}", report.r2);
}

#[test]
fn training_is_deterministic() {
    for config in [SolverConfig::default(), SolverConfig::gradient_descent()] {
        let a = train(&config).unwrap();
        let b = train(&config).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn invalid_learning_rate_fails_to_train() {
    let config = SolverConfig::GradientDescent {
        learning_rate: -1.0,
        epochs: std::num::NonZeroUsize::MIN,
        batch_size: None,
        seed: 0,
    };

    assert!(train(&config).is_err());
}

#[test]
fn environment_selects_the_solver() {
    let config = TrainerConfig::from_lookup(|key| match key {
        "MIS_SOLVER" => Some("gradient-descent".to_string()),
        "MIS_EPOCHS" => Some("500".to_string()),
        _ => None,
    })
    .unwrap()
    .with_args(["json".to_string()])
    .unwrap();

    assert!(matches!(
        config.solver,
        SolverConfig::GradientDescent { epochs, .. } if epochs.get() == 500
    ));
    assert_eq!(config.format, ReportFormat::Json);
}
