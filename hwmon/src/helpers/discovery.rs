// hwmon/src/helpers/discovery.rs

use crate::device::{CameraDevice, DeviceContext, ProductLine};
use crate::firmware::FirmwareVersion;
use crate::{Error, Result};

/// Query devices of `product_line`. No match yields
/// `Error::NoMatchingDevice`, which callers treat as "skip".
pub fn find_devices_by_product_line<C>(ctx: &C, product_line: ProductLine) -> Result<Vec<C::Device>>
where
    C: DeviceContext + ?Sized,
{
    let devices = ctx.query_devices(product_line)?;
    if devices.is_empty() {
        return Err(Error::NoMatchingDevice { product_line });
    }
    log::debug!(
        "found {} device(s) of product line {}",
        devices.len(),
        product_line
    );
    Ok(devices)
}

/// Check the device firmware is at least `minimum` and return the parsed
/// version. Older firmware yields `Error::FirmwareTooOld`.
pub fn require_min_firmware<D>(device: &D, minimum: FirmwareVersion) -> Result<FirmwareVersion>
where
    D: CameraDevice + ?Sized,
{
    let actual = FirmwareVersion::parse(&device.firmware_version()?)?;
    if !actual.meets(&minimum) {
        return Err(Error::FirmwareTooOld { actual, minimum });
    }
    Ok(actual)
}

/// Turn precondition failures into `Ok(None)` so the caller can skip the
/// run. Every other error passes through unchanged.
pub fn skip_unless_available<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_skip() => {
            log::info!("{}; skipping", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Run `f` on the first device of `product_line`, or return `Ok(None)`
/// without calling it when there is none.
pub fn with_first_device<C, F, R>(ctx: &C, product_line: ProductLine, f: F) -> Result<Option<R>>
where
    C: DeviceContext + ?Sized,
    F: FnOnce(&mut C::Device) -> Result<R>,
{
    let devices = match skip_unless_available(find_devices_by_product_line(ctx, product_line))? {
        Some(devices) => devices,
        None => return Ok(None),
    };
    match devices.into_iter().next() {
        Some(mut device) => skip_unless_available(f(&mut device)),
        None => Ok(None),
    }
}
