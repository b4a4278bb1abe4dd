/// Assert that every bit of `$bitset` outside `[$start, $start + $count)`
/// still matches `$before`, a `Vec<bool>` snapshot taken before the view was used
#[macro_export]
macro_rules! assert_outside_window_unchanged {
    ($bitset:expr, $before:expr, $start:expr, $count:expr) => {
        let start = $start;
        let end = $start + $count;
        for index in 0..$bitset.valid_bit_count() {
            if index >= start && index < end {
                continue;
            }
            assert_eq!(
                $bitset.get_bit(index),
                $before[index as usize],
                "Bit {} outside window [{}, {}) was modified through the view",
                index,
                start,
                end
            );
        }
    };
}

/// Assert that a `Result<_, SocketError>` failed with an OS error code
#[macro_export]
macro_rules! assert_os_error {
    ($result:expr) => {
        match $result {
            Err(err) => assert!(
                err.code().is_some(),
                "Expected an OS error code, got {:?}",
                err
            ),
            Ok(_) => panic!("Expected the socket call to fail"),
        }
    };
}
