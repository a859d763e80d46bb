use crate::lookup::lookup_name;

lookup_name! {
    /// Quantity and unit a measurement value is expressed in.
    pub enum MeasurementUnitName {
        AcidityPh => "ACIDITY_PH",
        CarbonDioxidePpm => "CARBON_DIOXIDE_PPM",
        ConductivityMicrosiemensPerCentimeter => "CONDUCTIVITY_MICROSIEMENS_PER_CENTIMETER",
        DissolvedOxygenMilligramsPerLiter => "DISSOLVED_OXYGEN_MILLIGRAMS_PER_LITER",
        LightIntensityLux => "LIGHT_INTENSITY_LUX",
        PhosphatePpm => "PHOSPHATE_PPM",
        RelativeHumidityPercent => "RELATIVE_HUMIDITY_PERCENT",
        SalinityPartsPerThousand => "SALINITY_PARTS_PER_THOUSAND",
        TemperatureCelsius => "TEMPERATURE_CELSIUS",
        TemperatureFahrenheit => "TEMPERATURE_FAHRENHEIT",
        TurbidityNtu => "TURBIDITY_NTU",
    }
}
