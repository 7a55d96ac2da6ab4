#![forbid(unsafe_code)]

use std::sync::{LazyLock, RwLock};

use fg_catalog::{ChordDictionary, ChordRequest};
use fg_core::{ChordStyle, Tuning};
use fg_parser::parse;
use fg_render_svg::{SvgRenderConfig, render_chord_svg, render_variations_svg};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[derive(Debug, Clone, Default)]
struct RuntimeConfig {
    style: ChordStyle,
    tuning: Tuning,
    svg: SvgRenderConfig,
}

/// Options accepted by `init` and by every render call. Per-call options
/// override the values set through `init`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RuntimeInitConfig {
    /// Explicit encoding; replaces the dictionary entry. Ignored by `init`.
    encoding: Option<String>,
    color: Option<String>,
    background_color: Option<String>,
    muted_string_color: Option<String>,
    /// `E|A|D|G|B|E`, lowest string first.
    open_string_notes: Option<String>,
    svg: SvgConfigOverrides,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SvgConfigOverrides {
    responsive: Option<bool>,
    accessible: Option<bool>,
    font_family: Option<String>,
    sheet_columns: Option<usize>,
    sheet_gap: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariationOutput {
    name: String,
    svg: String,
}

static RUNTIME_CONFIG: LazyLock<RwLock<RuntimeConfig>> =
    LazyLock::new(|| RwLock::new(RuntimeConfig::default()));

fn read_runtime_config() -> RuntimeConfig {
    match RUNTIME_CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn write_runtime_config(config: RuntimeConfig) {
    match RUNTIME_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => {
            let mut guard = poisoned.into_inner();
            *guard = config;
        }
    }
}

fn js_error(message: impl Into<String>) -> JsValue {
    JsValue::from_str(&message.into())
}

fn parse_js_value_or_default<T>(value: Option<JsValue>) -> Result<T, JsValue>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(raw) if raw.is_undefined() || raw.is_null() => Ok(T::default()),
        Some(raw) => {
            #[cfg(target_arch = "wasm32")]
            {
                serde_wasm_bindgen::from_value(raw)
                    .map_err(|err| js_error(format!("invalid config: {err}")))
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = raw;
                Ok(T::default())
            }
        }
    }
}

fn to_js_value<T>(value: &T) -> Result<JsValue, JsValue>
where
    T: Serialize,
{
    #[cfg(target_arch = "wasm32")]
    {
        serde_wasm_bindgen::to_value(value)
            .map_err(|err| js_error(format!("failed to serialize response: {err}")))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        serde_json::to_string(value)
            .map(|json| JsValue::from_str(&json))
            .map_err(|err| js_error(format!("failed to serialize response: {err}")))
    }
}

fn merge_runtime_config(base: &RuntimeConfig, overrides: &RuntimeInitConfig) -> RuntimeConfig {
    let mut merged = base.clone();

    if let Some(value) = overrides.color.as_ref() {
        merged.style.color = value.clone();
    }
    if let Some(value) = overrides.background_color.as_ref() {
        merged.style.background_color = value.clone();
    }
    if let Some(value) = overrides.muted_string_color.as_ref() {
        merged.style.muted_string_color = value.clone();
    }
    if let Some(value) = overrides.open_string_notes.as_deref() {
        let Ok(tuning) = value.parse::<Tuning>();
        merged.tuning = tuning;
    }

    let svg = &overrides.svg;
    if let Some(value) = svg.responsive {
        merged.svg.responsive = value;
    }
    if let Some(value) = svg.accessible {
        merged.svg.accessible = value;
    }
    if let Some(value) = svg.font_family.as_ref() {
        merged.svg.font_family = value.clone();
    }
    if let Some(value) = svg.sheet_columns {
        merged.svg.sheet_columns = value;
    }
    if let Some(value) = svg.sheet_gap {
        merged.svg.sheet_gap = value;
    }

    merged
}

fn chord_request(
    name: &str,
    overrides: &RuntimeInitConfig,
    runtime: &RuntimeConfig,
) -> ChordRequest {
    ChordRequest {
        name: name.to_string(),
        encoding: overrides.encoding.clone(),
        style: runtime.style.clone(),
        tuning: runtime.tuning.clone(),
    }
}

/// Render one chord with the current runtime configuration.
///
/// Unknown or missing names produce a placeholder diagram, never an error.
#[must_use]
pub fn render(name: &str) -> String {
    let runtime = read_runtime_config();
    let request = chord_request(name, &RuntimeInitConfig::default(), &runtime);
    render_chord_svg(&request, ChordDictionary::builtin(), &runtime.svg)
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn init(config: Option<JsValue>) -> Result<(), JsValue> {
    let overrides: RuntimeInitConfig = parse_js_value_or_default(config)?;
    let current = read_runtime_config();
    write_runtime_config(merge_runtime_config(&current, &overrides));
    Ok(())
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = renderChord))]
pub fn render_chord_js(name: &str, config: Option<JsValue>) -> Result<String, JsValue> {
    let overrides: RuntimeInitConfig = parse_js_value_or_default(config)?;
    let runtime = merge_runtime_config(&read_runtime_config(), &overrides);
    let request = chord_request(name, &overrides, &runtime);
    Ok(render_chord_svg(
        &request,
        ChordDictionary::builtin(),
        &runtime.svg,
    ))
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = listVariants))]
pub fn list_variants_js(name: &str) -> Result<JsValue, JsValue> {
    to_js_value(&ChordDictionary::builtin().variants(name))
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = renderVariations))]
pub fn render_variations_js(name: &str, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    let overrides: RuntimeInitConfig = parse_js_value_or_default(config)?;
    let runtime = merge_runtime_config(&read_runtime_config(), &overrides);
    let request = chord_request(name, &overrides, &runtime);
    let outputs: Vec<VariationOutput> =
        render_variations_svg(&request, ChordDictionary::builtin(), &runtime.svg)
            .into_iter()
            .map(|(name, svg)| VariationOutput { name, svg })
            .collect();
    to_js_value(&outputs)
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = parseEncoding))]
pub fn parse_encoding_js(encoding: &str) -> Result<JsValue, JsValue> {
    to_js_value(&parse(encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_builtin_dictionary() {
        let svg = render("Am");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("data-chord=\"Am\""));
    }

    #[test]
    fn render_unknown_chord_is_placeholder() {
        let svg = render("H");
        assert!(svg.contains("chord/error/unknown-chord"));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let base = RuntimeConfig::default();
        let overrides = RuntimeInitConfig {
            color: Some(String::from("#222222")),
            open_string_notes: Some(String::from("D|A|D|G|A|D")),
            svg: SvgConfigOverrides {
                responsive: Some(true),
                ..SvgConfigOverrides::default()
            },
            ..RuntimeInitConfig::default()
        };
        let merged = merge_runtime_config(&base, &overrides);
        assert_eq!(merged.style.color, "#222222");
        assert_eq!(merged.style.background_color, base.style.background_color);
        assert_eq!(merged.tuning.note(5), Some("D"));
        assert!(merged.svg.responsive);
        assert_eq!(merged.svg.font_family, base.svg.font_family);
    }

    #[test]
    fn init_config_uses_camel_case_keys() {
        let overrides: RuntimeInitConfig = serde_json::from_str(
            r##"{"backgroundColor":"#101010","mutedStringColor":"#ff0000","encoding":"o|o|o|o|o|o","svg":{"sheetColumns":2}}"##,
        )
        .expect("valid config");
        assert_eq!(overrides.background_color.as_deref(), Some("#101010"));
        assert_eq!(overrides.muted_string_color.as_deref(), Some("#ff0000"));
        assert_eq!(overrides.svg.sheet_columns, Some(2));

        let request = chord_request("Open", &overrides, &RuntimeConfig::default());
        assert_eq!(request.encoding.as_deref(), Some("o|o|o|o|o|o"));
    }
}
