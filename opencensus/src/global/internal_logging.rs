#![allow(unused_macros)]
///
/// **Note**: These macros (`oc_debug!` and `oc_warn!`) are intended to be used
/// **internally within OpenCensus code** or for **custom samplers and other plugins**.
/// They are not designed for general application logging.
///
/// With the `internal-logs` feature the events are emitted through `tracing`, using
/// the calling crate's name as target. Under `cfg(test)` they are printed to stdout
/// instead, which shows up when running tests with `--nocapture`.
///
/// Macro for logging debug messages in OpenCensus.
///
/// # Fields:
/// - `name`: The operation or action being logged.
/// - Additional optional key-value pairs can be passed as attributes.
///
/// # Example:
/// ```rust
/// use opencensus::oc_debug;
/// oc_debug!(name: "ProbabilitySampler.Created", probability = 0.5);
/// ```
#[macro_export]
macro_rules! oc_debug {
    (name: $name:expr $(,)?) => {
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::debug!(name: $name, target: env!("CARGO_PKG_NAME"), name = $name);
        }

        #[cfg(test)]
        {
            print!("oc_debug: name={}\n", $name);
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = $name;
        }
    };
    (name: $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::debug!(name: $name, target: env!("CARGO_PKG_NAME"), name = $name, $($key = $value),+);
        }

        #[cfg(test)]
        {
            print!("oc_debug: name={}", $name);
            $(
                print!(", {}={}", stringify!($key), $value);
            )+
            print!("\n");
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = ($name, $($value),+);
        }
    };
}

/// Macro for logging warning messages in OpenCensus.
///
/// # Fields:
/// - `name`: The operation or action being logged.
/// - Additional optional key-value pairs can be passed as attributes.
///
/// # Example:
/// ```rust
/// use opencensus::oc_warn;
/// oc_warn!(name: "Config.InvalidSamplerProbability", value = "abc");
/// ```
#[macro_export]
macro_rules! oc_warn {
    (name: $name:expr $(,)?) => {
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::warn!(name: $name, target: env!("CARGO_PKG_NAME"), name = $name);
        }

        #[cfg(test)]
        {
            print!("oc_warn: name={}\n", $name);
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = $name;
        }
    };
    (name: $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::warn!(name: $name,
                            target: env!("CARGO_PKG_NAME"),
                            name = $name,
                            $($key = {
                                    $value
                            }),+,
                    )
        }

        #[cfg(test)]
        {
            print!("oc_warn: name={}", $name);
            $(
                print!(", {}={}", stringify!($key), $value);
            )+
            print!("\n");
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = ($name, $($value),+);
        }
    };
}
