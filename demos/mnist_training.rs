// MNIST を単純な多層パーセプトロンで学習させる
//
// usage: cargo run --release --example mnist_training -- [data_dir] [config.yaml]

use std::path::PathBuf;

use sigmanet::checkpoint::Checkpoint;
use sigmanet::data::mnist::Mnist;
use sigmanet::engine::trainer::Trainer;
use sigmanet::TrainingConfig;

fn main() -> sigmanet::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "./data/mnist".to_string()));
    let config = match args.next() {
        Some(path) => TrainingConfig::from_file(path)?,
        None => {
            log::info!("Using default configuration");
            TrainingConfig::default()
        }
    };

    let train = Mnist::new(&data_dir, true)?;
    let test = Mnist::new(&data_dir, false)?;

    let network = config.build_network()?;
    log::info!(
        "Network {:?} with {} weights",
        network.topology().layer_sizes(),
        network.parameter_count()
    );

    let mut trainer = Trainer::new(network, config);
    trainer.fit(&train)?;
    let accuracy = trainer.evaluate(&test)?;
    println!("Test accuracy: {:.2}%", accuracy * 100.0);

    Checkpoint::from_network(trainer.network()).save(data_dir.join("mnist.sgnt"))?;
    Ok(())
}
