//! Endpoint constants for the InterWorx SOAP service.

/// TLS port the panel's SOAP service listens on.
pub const SOAP_PORT: u16 = 2443;

/// Siteworx account controller.
pub const CTRL_SITEWORX: &str = "/nodeworx/siteworx";

/// Reseller account controller.
pub const CTRL_RESELLER: &str = "/nodeworx/reseller";

/// Package/template controller.
pub const CTRL_PACKAGES: &str = "/nodeworx/packages";

/// SOAP endpoint URL for a panel host.
pub fn soap_endpoint(host: &str) -> String {
    format!("https://{}:{}/soap", host, SOAP_PORT)
}

/// WSDL URL, fetched once at connect time as the connection check.
pub fn wsdl_url(host: &str) -> String {
    format!("{}?wsdl", soap_endpoint(host))
}
