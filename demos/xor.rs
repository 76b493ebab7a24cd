use backprop_nn::{data, train_network, Network};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> backprop_nn::Result<()> {
    tracing_subscriber::fmt().init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::new(&[2, 4, 2], &mut rng)?;
    let examples = data::xor();

    train_network(&mut network, &examples, 3000, 2, 3.0, Some(&examples), &mut rng)?;

    for example in &examples {
        println!("Input: {:?} -> Output: {:.4?}", example.input, network.predict(&example.input));
    }
    Ok(())
}
