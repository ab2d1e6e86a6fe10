//! Trust-store configuration from the platform's system CA bundle.
//!
//! Mirrors the usual probe order: well-known single-file bundles first, then
//! the hashed-certificate directories. Whichever form is installed gets loaded
//! into the HTTPS client's root store; when nothing is found the TLS library's
//! built-in roots are kept.

use crate::error::TransportError;
use reqwest::{Certificate, ClientBuilder};
use std::fs;
use std::path::{Path, PathBuf};

const CA_BUNDLE_FILES: &[&str] = &[
    "/etc/ssl/certs/ca-certificates.crt",
    "/etc/pki/tls/certs/ca-bundle.crt",
    "/etc/ssl/ca-bundle.pem",
    "/etc/pki/ca-trust/extracted/pem/tls-ca-bundle.pem",
    "/etc/ssl/cert.pem",
];

const CA_BUNDLE_DIRS: &[&str] = &["/etc/ssl/certs", "/etc/pki/tls/certs"];

/// Locate the system CA bundle, single-file form preferred.
pub fn system_ca_bundle() -> Option<PathBuf> {
    for file in CA_BUNDLE_FILES {
        let path = Path::new(file);
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }
    for dir in CA_BUNDLE_DIRS {
        let path = Path::new(dir);
        if path.is_dir() {
            return Some(path.to_path_buf());
        }
    }
    None
}

/// An HTTPS client builder with the system CA bundle as the root store.
pub(crate) fn client_builder() -> Result<ClientBuilder, TransportError> {
    let mut builder = reqwest::Client::builder();
    match system_ca_bundle() {
        Some(path) if path.is_dir() => {
            for cert in certs_from_dir(&path) {
                builder = builder.add_root_certificate(cert);
            }
        }
        Some(path) => {
            for cert in certs_from_file(&path)? {
                builder = builder.add_root_certificate(cert);
            }
        }
        None => {
            tracing::warn!("no system CA bundle found, using built-in TLS roots");
        }
    }
    Ok(builder)
}

fn certs_from_file(path: &Path) -> Result<Vec<Certificate>, TransportError> {
    let pem = fs::read(path).map_err(|e| {
        TransportError::Connection(format!("failed to read CA bundle {}: {}", path.display(), e))
    })?;
    Certificate::from_pem_bundle(&pem).map_err(|e| {
        TransportError::Connection(format!("invalid CA bundle {}: {}", path.display(), e))
    })
}

/// Hashed-cert directories hold symlinks and the occasional non-PEM file, so
/// unreadable entries are skipped rather than fatal.
fn certs_from_dir(dir: &Path) -> Vec<Certificate> {
    let mut certs = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to read CA directory");
            return certs;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let is_cert = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("pem") | Some("crt") | Some("0")
        );
        if !path.is_file() || !is_cert {
            continue;
        }
        match certs_from_file(&path) {
            Ok(parsed) => certs.extend(parsed),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "skipping CA entry"),
        }
    }
    certs
}
