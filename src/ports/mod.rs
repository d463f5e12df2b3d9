/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the source
/// interface a scanner drives) and outbound ports (driven ports -
/// infrastructure interfaces).
pub mod inbound;
pub mod outbound;
