//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values. Controls it does not
/// mention are reset to their defaults when it is applied.
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    pub fn set_int(mut self, key: &'static str, value: i32) -> Self {
        self.values.insert(key.to_string(), ControlValue::Int(value));
        self
    }

    /// Value this preset gives `key`, falling back to `default`
    fn expected<'a>(&'a self, key: &str, default: &'a ControlValue) -> &'a ControlValue {
        self.values.get(key).unwrap_or(default)
    }

    /// True when applying this preset would not change anything
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            registry.get(control.key).as_ref() == Some(self.expected(control.key, &control.default))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_falls_back_to_default() {
        let preset = Preset::new("One week")
            .set_string("status", "weeks")
            .set_int("weeks", 1);
        let default = ControlValue::Bool(true);
        assert_eq!(preset.expected("weeks", &default), &ControlValue::Int(1));
        assert_eq!(preset.expected("has_link", &default), &ControlValue::Bool(true));
    }
}
