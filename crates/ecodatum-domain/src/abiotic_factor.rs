use crate::lookup::lookup_name;

lookup_name! {
    /// Medium a measurement was taken in.
    pub enum AbioticFactorName {
        Air => "AIR",
        Soil => "SOIL",
        Water => "WATER",
    }
}
