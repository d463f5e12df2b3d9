/// Inbound ports (Driving ports) - Source interfaces
///
/// These ports define the interface a license scanner uses to drive a
/// dependency source.
pub mod dependency_source;

pub use dependency_source::DependencySource;
