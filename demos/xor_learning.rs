// XOR を2層の隠れ層で学習させる
//
// バイアス項がないので、入力は 0/1 ではなく 0.01/0.99 にスケールしている

use sigmanet::backend::ndarray::NdArray;
use sigmanet::Network;

fn main() -> sigmanet::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let x_data = vec![
        vec![0.01, 0.01],
        vec![0.01, 0.99],
        vec![0.99, 0.01],
        vec![0.99, 0.99],
    ];
    let y_data = vec![vec![0.01], vec![0.99], vec![0.99], vec![0.01]];

    let mut network = Network::<NdArray>::with_seed(2, vec![8, 4], 1, 0.5, 42)?;

    for j in 0..20000 {
        let i = j % 4;
        let loss = network.train(&x_data[i], &y_data[i])?;

        if j % 2000 == 0 {
            println!("Iter: {}, Loss: {}", j, loss);
        }
    }

    for (x, y) in x_data.iter().zip(&y_data) {
        let output = network.query(x)?;
        println!("{:?} -> {:.3} (target {})", x, output[0], y[0]);
    }
    Ok(())
}
