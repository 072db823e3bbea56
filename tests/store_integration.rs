//! Integration tests covering the concurrency contract and end-to-end
//! fixture loading.

use preimage_kv::{Error, Hash, MemKv, PreimageKv};
use std::fs::File;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

#[test]
fn test_concurrent_puts_and_gets_on_disjoint_keys() {
    let kv = Arc::new(MemKv::new());
    let threads = 8;
    let writes_per_thread = 100;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let kv = Arc::clone(&kv);
            thread::spawn(move || {
                for i in 0..writes_per_thread {
                    let key = Hash::digest(format!("thread-{t}-key-{i}").as_bytes());
                    let value = format!("thread-{t}-value-{i}").into_bytes();
                    kv.put(key, &value).unwrap();

                    // Read back immediately while other threads write.
                    assert_eq!(kv.get(key).unwrap(), value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(kv.len(), threads * writes_per_thread);

    // Every thread's writes are intact afterward, with no torn values.
    for t in 0..threads {
        for i in 0..writes_per_thread {
            let key = Hash::digest(format!("thread-{t}-key-{i}").as_bytes());
            let expected = format!("thread-{t}-value-{i}").into_bytes();
            assert_eq!(kv.get(key).unwrap(), expected);
        }
    }
}

#[test]
fn test_concurrent_readers_share_one_key() {
    let kv = Arc::new(MemKv::new());
    let key = Hash::digest(b"shared");
    kv.put(key, b"stable value").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let kv = Arc::clone(&kv);
            thread::spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(kv.get(key).unwrap(), b"stable value");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_store_as_trait_object() {
    let kv: Arc<dyn PreimageKv> = Arc::new(MemKv::new());
    let key = Hash::digest(b"via trait");

    kv.put(key, &[0xab, 0xcd]).unwrap();
    assert_eq!(kv.get(key).unwrap(), vec![0xab, 0xcd]);

    let miss = Hash::digest(b"absent");
    assert!(matches!(kv.get(miss), Err(Error::NotFound(_))));
}

#[test]
fn test_fixture_load_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("witness.json");

    let mut key_bytes = [0u8; 32];
    key_bytes[31] = 0x01;
    let key = Hash::from_bytes(key_bytes);

    let mut file = File::create(&path).unwrap();
    write!(
        file,
        "{{\"witnessData\": {{\"{key}\": \"0xdeadbeef\"}}}}"
    )
    .unwrap();
    drop(file);

    let kv = MemKv::from_fixture(&path).unwrap();
    assert_eq!(kv.get(key).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);

    // The loaded store behaves like any other: overwrites and misses work.
    kv.put(key, &[0x00]).unwrap();
    assert_eq!(kv.get(key).unwrap(), vec![0x00]);
    assert!(matches!(
        kv.get(Hash::digest(b"not in fixture")),
        Err(Error::NotFound(_))
    ));
}
