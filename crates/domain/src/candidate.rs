//! Candidate filter: narrows the device picker to supported purifiers.

use serde::{Deserialize, Serialize};

use crate::device::Device;

/// Manufacturer tokens accepted by default.
pub const DEFAULT_MANUFACTURERS: &[&str] = &["philips"];

/// Supported model families accepted by default.
pub const DEFAULT_MODELS: &[&str] = &[
    "AC0820", "AC0850", "AC0950", "AC0951", "AC1214", "AC1715", "AC2729", "AC2889", "AC2936",
    "AC2939", "AC2958", "AC2959", "AC3033", "AC3036", "AC3039", "AC3055", "AC3059", "AC3210",
    "AC3220", "AC3221", "AC3259", "AC3420", "AC3421", "AC3737", "AC3829", "AC3854", "AC3858",
    "AC4220", "AC4221", "AC4236", "AC4550", "AC4558", "AC5659", "AC5660", "AMF765", "AMF870",
    "CX3120", "CX5120",
];

/// Strip a trailing `/<digits>` revision code (`AC3033/11` → `AC3033`).
#[must_use]
pub fn strip_variant_suffix(model: &str) -> &str {
    match model.rsplit_once('/') {
        Some((base, suffix))
            if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => model,
    }
}

/// Whether `device` is compatible hardware.
///
/// The manufacturer must contain one of `manufacturers` and the model,
/// without its variant suffix, must equal or start with one of `models`.
/// Both comparisons ignore case; missing fields never match.
#[must_use]
pub fn is_candidate_device<M, N>(device: &Device, manufacturers: &[M], models: &[N]) -> bool
where
    M: AsRef<str>,
    N: AsRef<str>,
{
    let manufacturer = device
        .manufacturer
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let model = strip_variant_suffix(device.model.as_deref().unwrap_or_default()).to_lowercase();
    if manufacturer.is_empty() || model.is_empty() {
        return false;
    }

    let manufacturer_ok = manufacturers.iter().any(|token| {
        let token = token.as_ref().to_lowercase();
        !token.is_empty() && manufacturer.contains(&token)
    });
    manufacturer_ok
        && models.iter().any(|entry| {
            let entry = entry.as_ref().to_lowercase();
            !entry.is_empty() && model.starts_with(&entry)
        })
}

/// Manufacturer and model allowlists used to build the device picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidatePolicy {
    pub manufacturers: Vec<String>,
    pub models: Vec<String>,
}

impl Default for CandidatePolicy {
    fn default() -> Self {
        Self {
            manufacturers: DEFAULT_MANUFACTURERS.iter().map(ToString::to_string).collect(),
            models: DEFAULT_MODELS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CandidatePolicy {
    #[must_use]
    pub fn accepts(&self, device: &Device) -> bool {
        is_candidate_device(device, &self.manufacturers, &self.models)
    }

    /// Candidate devices, in input order.
    #[must_use]
    pub fn filter_candidates<'a>(&self, devices: &'a [Device]) -> Vec<&'a Device> {
        devices.iter().filter(|d| self.accepts(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(manufacturer: Option<&str>, model: Option<&str>) -> Device {
        let mut builder = Device::builder().id("d");
        if let Some(m) = manufacturer {
            builder = builder.manufacturer(m);
        }
        if let Some(m) = model {
            builder = builder.model(m);
        }
        builder.build().unwrap()
    }

    #[test]
    fn should_accept_model_with_variant_suffix() {
        let d = device(Some("Philips"), Some("AC3033/11"));
        assert!(is_candidate_device(&d, &["philips"], &["AC3033"]));
    }

    #[test]
    fn should_reject_manufacturer_mismatch() {
        let d = device(Some("Generic"), Some("AC3033"));
        assert!(!is_candidate_device(&d, &["philips"], &["AC3033"]));
    }

    #[test]
    fn should_match_manufacturer_as_substring() {
        let d = device(Some("Koninklijke PHILIPS N.V."), Some("AC2889"));
        assert!(is_candidate_device(&d, &["philips"], &["AC2889"]));
    }

    #[test]
    fn should_accept_model_extending_supported_entry() {
        let d = device(Some("Philips"), Some("AC3858/50 Series"));
        assert!(is_candidate_device(&d, &["philips"], &["AC3858"]));
    }

    #[test]
    fn should_reject_unsupported_model() {
        let d = device(Some("Philips"), Some("HU4803"));
        assert!(!is_candidate_device(&d, &["philips"], &["AC3033"]));
    }

    #[test]
    fn should_reject_missing_fields() {
        assert!(!is_candidate_device(
            &device(None, Some("AC3033")),
            &["philips"],
            &["AC3033"]
        ));
        assert!(!is_candidate_device(
            &device(Some("Philips"), None),
            &["philips"],
            &["AC3033"]
        ));
    }

    #[test]
    fn should_only_strip_numeric_suffix() {
        assert_eq!(strip_variant_suffix("AC3033/11"), "AC3033");
        assert_eq!(strip_variant_suffix("AC3033/ab"), "AC3033/ab");
        assert_eq!(strip_variant_suffix("AC3033/"), "AC3033/");
        assert_eq!(strip_variant_suffix("AC3033"), "AC3033");
    }

    #[test]
    fn should_filter_with_default_policy_in_input_order() {
        let devices = vec![
            Device::builder()
                .id("a")
                .manufacturer("Philips")
                .model("AC4236/10")
                .build()
                .unwrap(),
            Device::builder()
                .id("b")
                .manufacturer("Xiaomi")
                .model("AC3033")
                .build()
                .unwrap(),
            Device::builder()
                .id("c")
                .manufacturer("Philips")
                .model("AC0850/11")
                .build()
                .unwrap(),
        ];
        let policy = CandidatePolicy::default();
        let ids: Vec<&str> = policy
            .filter_candidates(&devices)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
