use sigmanet::backend::ndarray::NdArray;
use sigmanet::engine::activation::{sigmoid, sigmoid_derivative, Activation, SIGMOID_EPSILON};
use sigmanet::Network;

#[test]
fn test_sigmoid() {
    assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
    assert!((sigmoid(2.0) - 0.880_797).abs() < 1e-6);
    assert!((sigmoid(-2.0) - 0.119_203).abs() < 1e-6);
}

#[test]
fn test_sigmoid_extremes_are_finite() {
    for &z in &[-1000.0, -100.0, 100.0, 1000.0] {
        let y = sigmoid(z);
        assert!(y.is_finite());
        assert!(y > 0.0 && y < 1.0);
    }
    assert_eq!(sigmoid(-1000.0), SIGMOID_EPSILON);
    assert_eq!(sigmoid(1000.0), 1.0 - SIGMOID_EPSILON);
}

#[test]
fn test_sigmoid_derivative_from_output() {
    assert!((sigmoid_derivative(0.5) - 0.25).abs() < 1e-6);
    assert_eq!(sigmoid_derivative(0.0), 0.0);
    assert_eq!(sigmoid_derivative(1.0), 0.0);
}

#[test]
fn test_network_uses_sigmoid() {
    let net = Network::<NdArray>::with_seed(2, vec![3], 1, 0.1, 8).unwrap();
    assert_eq!(net.activation().name, Activation::SIGMOID.name);
}

#[test]
fn test_query_with_huge_inputs_stays_finite() {
    let net = Network::<NdArray>::with_seed(3, vec![4], 2, 0.1, 8).unwrap();
    let output = net.query(&[1e6, -1e6, 1e6]).unwrap();
    assert!(output.iter().all(|&y| y.is_finite() && y > 0.0 && y < 1.0));
}

#[test]
fn test_saturated_output_still_learns() {
    // 大きな入力で出力ユニットを飽和させても、重みは更新され続ける
    let mut net = Network::<NdArray>::with_seed(1, vec![], 1, 0.5, 3).unwrap();
    let input = [1e4];
    let before = net.query(&input).unwrap()[0];
    assert!(before > 0.0 && before < 1.0);

    let target = if before > 0.5 { [0.01] } else { [0.99] };
    let weights_before = net.weights().to_vec();
    net.train(&input, &target).unwrap();
    assert_ne!(net.weights(), weights_before.as_slice());
}
