// Domain layer: colors and style configuration. No dependencies beyond std/serde.

pub mod model;
