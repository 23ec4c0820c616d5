// ============================================================================
// STYLE HELPERS - Lectura de estilos computados
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::element::window;

/// Obtener el estilo resuelto de un elemento: primero el valor inline si
/// está seteado, si no el estilo computado por el navegador.
/// Acepta "cssFloat" (nombre de propiedad JS) y lo normaliza a "float",
/// que es el nombre CSS que espera getPropertyValue
pub fn get_style(el: &Element, style_name: &str) -> Option<String> {
    if style_name.is_empty() {
        return None;
    }
    let style_name = normalize_style_name(style_name);

    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Ok(inline) = html.style().get_property_value(style_name) {
            if !inline.is_empty() {
                return Some(inline);
            }
        }
    }

    let computed = window()?.get_computed_style(el).ok()??;
    match computed.get_property_value(style_name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn normalize_style_name(style_name: &str) -> &str {
    match style_name {
        "cssFloat" => "float",
        other => other,
    }
}
