// Services module for Urlscope Backend
// Enrichment lookups and the scan pipeline

pub mod dns;
pub mod geo;
pub mod scan;

pub use dns::{DnsError, DohResolver, Resolver};
pub use geo::{GeoError, GeoLocation, GeoLookup, IpWhoisClient};
pub use scan::{ScanReport, ScanService};
