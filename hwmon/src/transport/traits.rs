// hwmon/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the debug channel away from protocol logic.
///
/// One call is one request/response pair. Any timeout belongs to the
/// implementation; the protocol layer never imposes one.
pub trait Transport {
    /// Send a raw request and block until the raw reply arrives.
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>>;

    /// Short human-readable description used in log messages.
    fn describe(&self) -> String {
        "transport".to_string()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(request)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(request)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
