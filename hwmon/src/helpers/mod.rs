// hwmon/src/helpers/mod.rs

//! Helpers for driving a camera from tests: discovery with skip semantics,
//! firmware gating, stream profile lookup and scoped streaming.

pub mod discovery;
pub mod profiles;
pub mod streaming;

pub use discovery::{
    find_devices_by_product_line, require_min_firmware, skip_unless_available, with_first_device,
};
pub use profiles::{
    confidence_for_depth, default_profile_of, find_confidence_corresponding_to_depth,
    find_default_depth_profile, find_default_ir_profile, find_profile, find_profile_by,
    profile_for_mode,
};
pub use streaming::{StreamingSession, do_while_streaming, remove_arrived_streams};
