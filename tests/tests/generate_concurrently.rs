use tests::*;

use std::sync::Arc;
use std::thread;

#[test]
fn threads_share_one_schema_and_generator() {
    let schema = Arc::new(blogging());
    let generator = Generator::default();
    let expected = generator.generate(&schema);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let schema = schema.clone();
            let generator = generator.clone();
            thread::spawn(move || generator.generate(&schema))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn schema_and_generator_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Schema>();
    assert_send_sync::<Generator>();
    assert_send_sync::<Artifact>();
}
