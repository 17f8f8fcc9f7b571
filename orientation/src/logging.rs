// Mimics the log crate so call sites don't need to check whether the feature is enabled.
#![allow(unused_macros)]

#[cfg(feature = "logging")]
macro_rules! trace {
    ($($args:tt)+) => {
        ::log::trace!($($args)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($args:tt)+) => {{
        let _ = format_args!($($args)+);
    }};
}

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($args:tt)+) => {
        ::log::debug!($($args)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($args:tt)+) => {{
        let _ = format_args!($($args)+);
    }};
}
