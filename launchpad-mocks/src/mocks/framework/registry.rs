//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{decode_state, encode_state, StateMap};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
    Int(i32),
}

impl ControlValue {
    /// Value as stored in the URL state
    pub(super) fn to_param(&self) -> String {
        match self {
            ControlValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            ControlValue::String(s) => s.clone(),
            ControlValue::Int(i) => i.to_string(),
        }
    }

    /// Parse a URL state value using `self` as the type and fallback
    fn from_param(&self, raw: &str) -> ControlValue {
        match self {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::String(_) => ControlValue::String(raw.to_string()),
            ControlValue::Int(default) => ControlValue::Int(raw.parse().unwrap_or(*default)),
        }
    }
}

/// What kind of input a control renders as
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Bool,
    /// (value, label) pairs
    Enum(Vec<(&'static str, &'static str)>),
    Int { min: i32, max: Option<i32> },
    Text,
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    /// Conditions that must all hold for this control to be shown.
    /// Each tuple is (control_key, required_value in URL form, so "1" for a set bool).
    pub visible_when: Vec<(&'static str, &'static str)>,
}

impl ControlDef {
    pub fn is_visible(&self, registry: &ControlRegistry) -> bool {
        self.visible_when
            .iter()
            .all(|(key, value)| registry.get(key).map(|v| v.to_param()).as_deref() == Some(*value))
    }
}

/// Definition of an action button (not stored in URL params)
#[derive(Clone)]
pub struct ActionDef {
    pub label: &'static str,
    pub callback: Callback<()>,
}

/// Builder for creating a ControlRegistry
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    actions: Vec<ActionDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            actions: Vec::new(),
            presets: Vec::new(),
        }
    }

    fn push(mut self, key: &'static str, label: &'static str, kind: ControlKind, default: ControlValue) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            kind,
            default,
            doc: None,
            visible_when: Vec::new(),
        });
        self
    }

    pub fn bool_control(self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.push(key, label, ControlKind::Bool, ControlValue::Bool(default))
    }

    /// Enum control, stored as the selected option's value string
    pub fn enum_control(
        self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.push(
            key,
            label,
            ControlKind::Enum(options),
            ControlValue::String(default.to_string()),
        )
    }

    pub fn int_control(
        self,
        key: &'static str,
        label: &'static str,
        default: i32,
        min: i32,
        max: Option<i32>,
    ) -> Self {
        self.push(key, label, ControlKind::Int { min, max }, ControlValue::Int(default))
    }

    pub fn string_control(self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.push(
            key,
            label,
            ControlKind::Text,
            ControlValue::String(default.to_string()),
        )
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Show the last control only while `key` has `value`. Repeated calls AND together.
    pub fn visible_when(mut self, key: &'static str, value: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.visible_when.push((key, value));
        }
        self
    }

    pub fn action(mut self, label: &'static str, callback: Callback<()>) -> Self {
        self.actions.push(ActionDef { label, callback });
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Initial values: URL state where present, defaults otherwise
    fn initial_values(&self, state: &StateMap) -> Vec<(&'static str, ControlValue)> {
        self.controls
            .iter()
            .map(|def| {
                let value = match state.get(def.key) {
                    Some(raw) => def.default.from_param(raw),
                    None => def.default.clone(),
                };
                (def.key, value)
            })
            .collect()
    }

    /// Check that every visible_when refers to a real control and, for enums, a real option
    fn validate(&self) {
        for control in &self.controls {
            for (ref_key, ref_value) in &control.visible_when {
                let Some(referenced) = self.controls.iter().find(|c| c.key == *ref_key) else {
                    panic!(
                        "visible_when on '{}' references unknown control '{}'",
                        control.key, ref_key
                    );
                };
                if let ControlKind::Enum(options) = &referenced.kind {
                    if !options.iter().any(|(v, _)| v == ref_value) {
                        panic!(
                            "visible_when on '{}' references invalid value '{}' for control '{}'",
                            control.key, ref_value, ref_key
                        );
                    }
                }
            }
        }
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        self.validate();

        let state = initial_state
            .as_deref()
            .map(decode_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for (key, initial) in self.initial_values(&state) {
            // One hook per control, always in declaration order
            let signal = use_signal(|| initial);
            values.insert(key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            actions: self.actions,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding all controls and their current values
#[derive(Clone)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub actions: Vec<ActionDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl PartialEq for ControlRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.controls == other.controls
            && self.values == other.values
            && self.presets == other.presets
            && self.actions.len() == other.actions.len()
    }
}

impl ControlRegistry {
    /// Current value of a control (reads the signal, creating a subscription)
    pub fn get(&self, key: &str) -> Option<ControlValue> {
        self.values.get(key).map(|s| s.read().clone())
    }

    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(ControlValue::Bool(true)))
    }

    pub fn get_string(&self, key: &str) -> String {
        match self.get(key) {
            Some(ControlValue::String(s)) => s,
            _ => String::new(),
        }
    }

    pub fn get_int(&self, key: &str) -> i32 {
        match self.get(key) {
            Some(ControlValue::Int(i)) => i,
            _ => 0,
        }
    }

    pub fn set(&self, key: &str, value: ControlValue) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(value);
        }
    }

    pub fn set_bool(&self, key: &str, value: bool) {
        self.set(key, ControlValue::Bool(value));
    }

    pub fn set_string(&self, key: &str, value: String) {
        self.set(key, ControlValue::String(value));
    }

    pub fn set_int(&self, key: &str, value: i32) {
        self.set(key, ControlValue::Int(value));
    }

    /// Reset every control to its default, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            self.set(control.key, control.default.clone());
        }
        for (key, value) in &preset.values {
            self.set(key, value.clone());
        }
    }

    /// Values that differ from their defaults, in URL form
    pub fn changed_values(&self) -> StateMap {
        self.controls
            .iter()
            .filter_map(|def| {
                let current = self.values.get(def.key)?.read().clone();
                (current != def.default).then(|| (def.key.to_string(), current.to_param()))
            })
            .collect()
    }

    /// Keep the page URL in step with the controls. `to_route` builds the
    /// mock's route from the encoded state.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            let state = encode_state(&registry.changed_values());

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(state));
        });
    }
}
