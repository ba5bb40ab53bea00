// Domain layer: catalog, request and allocation models plus the ports the
// adapters implement. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
