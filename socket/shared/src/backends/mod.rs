cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use self::unix::UnixPlatform;

        /// Socket backend for the current build target
        pub type NativePlatform = UnixPlatform;
    } else if #[cfg(windows)] {
        mod win32;
        pub use self::win32::WindowsPlatform;

        /// Socket backend for the current build target
        pub type NativePlatform = WindowsPlatform;
    } else {
        compile_error!("skiff-socket-shared only supports unix and windows targets");
    }
}
