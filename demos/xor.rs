use delta_mlp::{MseLoss, Network};

fn main() {
    let mut network = Network::new(0.5, 2, &[2, 1]);

    let examples: [([f64; 2], [f64; 1]); 4] = [
        ([1.0, 0.0], [1.0]),
        ([1.0, 1.0], [0.0]),
        ([0.0, 1.0], [1.0]),
        ([0.0, 0.0], [0.0]),
    ];

    let passes = 10000;

    for pass in 0..passes {
        let mut loss = 0.0;

        for (input, expected) in &examples {
            network
                .train(input, expected)
                .expect("example widths match the network");
            let output = network.feed(input).expect("input width matches the network");
            loss += MseLoss::loss(&output, expected);
        }

        if pass % 1000 == 0 {
            println!("Pass {pass}: mse = {:.6}", loss / examples.len() as f64);
        }
    }

    for (input, _) in &examples {
        let output = network.feed(input).expect("input width matches the network");
        println!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }
}
