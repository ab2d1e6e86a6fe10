//! Domain wire types, one module per panel controller.

pub mod packages;
pub mod reseller;
pub mod siteworx;
