//! Random valid example phone numbers, per region and number type.
//!
//! For every `(region, type)` pair, a numbering oracle supplies an example
//! number; the generator keeps its first three digits and searches random
//! completions until the oracle accepts one. Builds natively and as a
//! WebAssembly module for the demo page, whose exports are below.

pub mod config;
pub mod error;
pub mod generator;
#[cfg(feature = "metadata")]
pub mod metadata;
pub mod oracle;
pub mod rng;
pub mod table;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError, GenerateResult};
pub use generator::{Generated, RandomValidNumberGenerator};
#[cfg(feature = "metadata")]
pub use metadata::MetadataOracle;
pub use oracle::{NumberingOracle, NumberingRule, Rejection, StaticOracle};
pub use rng::{DigitRng, DigitSource, ScriptedDigits};
pub use table::{build_example_table, ExampleCell, ExampleRow};
pub use types::{ExampleNumber, NumberType, PhoneNumberCandidate, Region};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(all(target_arch = "wasm32", feature = "metadata"))]
mod wasm_exports {
    use wasm_bindgen::prelude::*;

    use crate::generator::RandomValidNumberGenerator;
    use crate::metadata::MetadataOracle;
    use crate::oracle::NumberingOracle;
    use crate::table::build_example_table;
    use crate::types::{NumberType, Region};
    use crate::GeneratorConfig;

    /// Optional `{ maxAttempts, seed }` object; `undefined`/`null` means defaults.
    fn config_from_js(config: JsValue) -> Result<GeneratorConfig, JsValue> {
        let config: GeneratorConfig = if config.is_undefined() || config.is_null() {
            GeneratorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(config)
    }

    fn generator(config: JsValue) -> Result<RandomValidNumberGenerator<MetadataOracle>, JsValue> {
        Ok(RandomValidNumberGenerator::new(MetadataOracle::new(), config_from_js(config)?))
    }

    /// All supported region codes, sorted.
    #[wasm_bindgen(js_name = "supportedRegions")]
    pub fn wasm_supported_regions() -> js_sys::Array {
        MetadataOracle::new()
            .supported_regions()
            .iter()
            .map(|region| JsValue::from_str(region.as_str()))
            .collect()
    }

    /// Generate a valid number of `number_type` (e.g. `"MOBILE"`) in `region`.
    /// Returns `{ countryCode, nationalNumber }` or `null` when the region has no such numbers.
    #[wasm_bindgen(js_name = "generateNumber")]
    pub fn wasm_generate_number(
        number_type: &str,
        region: &str,
        config: JsValue,
    ) -> Result<JsValue, JsValue> {
        let number_type: NumberType = number_type
            .parse()
            .map_err(|e: crate::error::ParseNumberTypeError| JsValue::from_str(&e.to_string()))?;
        let generator = generator(config)?;

        match generator
            .generate(number_type, &Region::new(region))
            .map_err(|e| JsValue::from_str(&e.to_string()))?
        {
            Some(candidate) => Ok(serde_wasm_bindgen::to_value(&candidate)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// A mobile number, or a fixed-line one for regions without mobile numbering.
    #[wasm_bindgen(js_name = "generateRandomPhoneNumber")]
    pub fn wasm_generate_random_phone_number(region: &str, config: JsValue) -> Result<JsValue, JsValue> {
        let generator = generator(config)?;
        let mut rng = generator.digit_source();

        match generator
            .generate_preferred(
                &[NumberType::Mobile, NumberType::FixedLine],
                &Region::new(region),
                &mut rng,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))?
        {
            Some(generated) => Ok(serde_wasm_bindgen::to_value(&generated.candidate)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Rows of `{ region, mobile, fixedLine }` for every supported region.
    #[wasm_bindgen(js_name = "exampleTable")]
    pub fn wasm_example_table(config: JsValue) -> Result<JsValue, JsValue> {
        let generator = generator(config)?;
        let mut rng = generator.digit_source();
        let rows = build_example_table(&generator, &mut rng);
        Ok(serde_wasm_bindgen::to_value(&rows)?)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "example number generator ready".to_string()
    }
}
