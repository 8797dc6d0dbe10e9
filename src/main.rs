use cryptolab::breaker;
use cryptolab::oracle;
use cryptolab::xor;

fn main() {
    let decoded_data = base64::decode(
        include_str!("../resources/vigenere_demo.txt").replace("\n", ""),
    )
    .unwrap();

    let key = breaker::break_repeating_key_xor(&decoded_data).unwrap();
    println!("recovered key: {}", String::from_utf8_lossy(&key));

    let plaintext = xor::apply_repeating_xor(&decoded_data, &key).unwrap();
    println!("{}", String::from_utf8_lossy(&plaintext));

    let mut rng = rand::thread_rng();
    for _ in 0..16 {
        let (guess, actual) = oracle::probe_oracle_mode(&mut rng).unwrap();
        println!("oracle mode guessed {:?}, actually {:?}", guess, actual);
    }
}
