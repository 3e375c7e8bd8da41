use std::path::PathBuf;

use sigmanet::backend::ndarray::NdArray;
use sigmanet::checkpoint::{Checkpoint, LayerWeights};
use sigmanet::{Network, NetworkError};

type Net = Network<NdArray>;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sigmanet_{}_{}.bin", name, std::process::id()))
}

#[test]
fn test_checkpoint_roundtrip() {
    let mut net = Net::with_seed(4, vec![5, 3], 2, 0.2, 10).unwrap();
    net.train(&[0.1, 0.2, 0.3, 0.4], &[0.99, 0.01]).unwrap();

    let path = temp_path("roundtrip");
    Checkpoint::from_network(&net).save(&path).unwrap();
    let loaded = Checkpoint::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.version, Checkpoint::VERSION);
    assert_eq!(loaded.layers.len(), 3);
    assert_eq!((loaded.layers[0].rows, loaded.layers[0].cols), (5, 4));

    let restored: Net = loaded.into_network().unwrap();
    assert_eq!(restored.topology(), net.topology());
    assert_eq!(restored.learning_rate(), net.learning_rate());
    assert_eq!(restored.weights(), net.weights());

    let input = [0.4, 0.3, 0.2, 0.1];
    assert_eq!(restored.query(&input).unwrap(), net.query(&input).unwrap());
}

#[test]
fn test_checkpoint_invalid_magic() {
    let path = temp_path("magic");
    std::fs::write(&path, b"NOPE0000").unwrap();
    let result = Checkpoint::load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(NetworkError::InvalidFormat(_))));
}

#[test]
fn test_checkpoint_version_mismatch() {
    let net = Net::with_seed(2, vec![], 1, 0.1, 1).unwrap();
    let mut checkpoint = Checkpoint::from_network(&net);
    checkpoint.version = Checkpoint::VERSION + 1;

    let path = temp_path("version");
    checkpoint.save(&path).unwrap();
    let result = Checkpoint::load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(NetworkError::VersionMismatch { expected, found })
            if expected == Checkpoint::VERSION && found == Checkpoint::VERSION + 1
    ));
}

#[test]
fn test_tampered_layer_shape_rejected() {
    let net = Net::with_seed(3, vec![2], 1, 0.1, 1).unwrap();
    let mut checkpoint = Checkpoint::from_network(&net);
    checkpoint.layers[0].rows = 3;
    checkpoint.layers[0].cols = 2;

    assert!(matches!(
        checkpoint.into_network::<NdArray>(),
        Err(NetworkError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_future_version_rejected_before_body() {
    // 新しいバージョンの本体は今のレイアウトで読めない前提
    let mut bytes = b"SGNT".to_vec();
    bytes.extend_from_slice(&(Checkpoint::VERSION + 1).to_le_bytes());
    bytes.extend_from_slice(&[0xff; 7]);

    let path = temp_path("future");
    std::fs::write(&path, &bytes).unwrap();
    let result = Checkpoint::load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(NetworkError::VersionMismatch { found, .. }) if found == Checkpoint::VERSION + 1
    ));
}

#[test]
fn test_overflowing_layer_shape_rejected() {
    let net = Net::with_seed(2, vec![], 1, 0.1, 1).unwrap();
    let mut checkpoint = Checkpoint::from_network(&net);
    checkpoint.layers[0] = LayerWeights {
        rows: usize::MAX,
        cols: 2,
        values: vec![0.0; 2],
    };

    assert!(matches!(
        checkpoint.into_network::<NdArray>(),
        Err(NetworkError::ShapeMismatch { .. })
    ));
}
