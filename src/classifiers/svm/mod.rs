mod kernel;
mod svc;

pub use kernel::Kernel;
pub use svc::{CalibratedSvc, KernelSvc, PlattScaling};
