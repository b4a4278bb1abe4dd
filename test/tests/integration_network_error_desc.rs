/// Error descriptions requested concurrently must come back independent and correct

use std::{io, sync::Barrier, sync::Arc, thread};

use skiff_shared::{network_error_desc, ErrorCode, NativePlatform, SocketPlatform};
use skiff_test::{init_test_logger, unopened_socket_fd};

fn would_block_code() -> ErrorCode {
    if cfg!(windows) {
        10035
    } else if cfg!(any(target_os = "macos", target_os = "ios", target_os = "freebsd")) {
        35
    } else {
        11
    }
}

fn bad_handle_code() -> ErrorCode {
    NativePlatform::default()
        .set_socket_non_blocking(unopened_socket_fd())
        .unwrap_err()
        .code()
        .expect("os error code")
}

fn expected_desc(code: ErrorCode) -> String {
    let text = io::Error::from_raw_os_error(code).to_string();
    match text.find(" (os error") {
        Some(index) => text[..index].to_string(),
        None => text,
    }
}

#[test]
fn concurrent_descriptions_do_not_mix() {
    init_test_logger();

    let codes = [would_block_code(), bad_handle_code()];
    assert_ne!(codes[0], codes[1]);

    let barrier = Arc::new(Barrier::new(codes.len()));
    let handles: Vec<_> = codes
        .into_iter()
        .map(|code| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                let expected = expected_desc(code);
                barrier.wait();
                for _ in 0..5000 {
                    assert_eq!(network_error_desc(code), expected);
                }
                (code, network_error_desc(code))
            })
        })
        .collect();

    let results: Vec<(ErrorCode, String)> = handles
        .into_iter()
        .map(|handle| handle.join().expect("description thread panicked"))
        .collect();

    assert_ne!(results[0].1, results[1].1);
    for (code, description) in results {
        assert_eq!(description, expected_desc(code));
    }
}

#[test]
fn unknown_codes_still_describe() {
    let description = network_error_desc(987_654);
    assert!(!description.is_empty());
}
