#![forbid(unsafe_code)]

use std::ffi::OsString;

// ---------------------------------------------------------------------------
// get_hostname:
// ---------------------------------------------------------------------------
/** Resolve the machine's host name from the operating system.  The lookup
 * runs on every call rather than being cached at startup, so a host rename
 * is visible on the next request.  A failed lookup yields the empty string.
 */
pub fn get_hostname() -> String {
    hostname::get()
        .unwrap_or_else(|_| OsString::new())
        .to_string_lossy()
        .into_owned()
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::get_hostname;

    #[test]
    fn hostname_is_stable() {
        // Two consecutive lookups on the same host agree.
        assert_eq!(get_hostname(), get_hostname());
    }
}
