// ============================================================================
// SCROLL HELPERS - Medición de scrollbar y toggle de overflow para modales
// ============================================================================
// Estado explícito en un servicio inyectable (ScrollManager) en vez de
// variables globales de módulo: el caller es dueño de la instancia y puede
// resetearla (p.ej. al cambiar el zoom o el tema del navegador).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::element::document;
use crate::style::get_style;

/// Clase aplicada al body mientras se mide el ancho de su scrollbar
pub const BODY_SCROLLBAR_MEASURE_CLASS: &str = "mp-body-scrollbar-measure";

/// Estado original de un elemento antes de ocultarle el overflow
struct OverflowState {
    element: HtmlElement,
    original_padding_right: String,
    original_overflow: String,
}

/// Servicio de medición de scrollbar y bloqueo de scroll para overlays
/// tipo modal. Las mediciones se memoizan hasta `reset`
pub struct ScrollManager {
    scrollbar_width: Option<i32>,
    body_scrollbar_width: Option<i32>,
    overflow_states: Vec<OverflowState>,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self {
            scrollbar_width: None,
            body_scrollbar_width: None,
            overflow_states: Vec::new(),
        }
    }

    /// Ancho de la scrollbar del navegador, medido con un div de prueba
    /// fuera de pantalla con overflow: scroll. Memoizado
    pub fn scrollbar_width(&mut self) -> Result<i32, JsValue> {
        if let Some(width) = self.scrollbar_width {
            return Ok(width);
        }
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let body = doc.body().ok_or_else(|| JsValue::from_str("No body"))?;

        let probe: HtmlElement = doc.create_element("div")?.dyn_into()?;
        probe.style().set_css_text(
            "position: absolute; top: -9999px; width: 50px; height: 50px; overflow: scroll;",
        );
        body.append_child(&probe)?;
        let width = (probe.offset_width() - probe.client_width()).max(0);
        body.remove_child(&probe)?;

        log::debug!("📏 [SCROLL] Ancho de scrollbar medido: {}px", width);
        self.scrollbar_width = Some(width);
        Ok(width)
    }

    /// Ancho de la scrollbar del body (diferencia entre el viewport y el
    /// ancho cliente del body). Deja el body con overflow: scroll para que
    /// la medición futura sea estable. Memoizado
    pub fn body_scrollbar_width(&mut self) -> Result<i32, JsValue> {
        if let Some(width) = self.body_scrollbar_width {
            return Ok(width);
        }
        let win = crate::element::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let body = doc.body().ok_or_else(|| JsValue::from_str("No body"))?;

        body.class_list().add_1(BODY_SCROLLBAR_MEASURE_CLASS)?;
        let inner_width = win.inner_width()?.as_f64().unwrap_or(0.0) as i32;
        let width = (inner_width - body.client_width()).max(0);
        body.style().set_property("overflow", "scroll")?;

        self.body_scrollbar_width = Some(width);
        Ok(width)
    }

    /// Mostrar/ocultar el overflow de un elemento (body por defecto) para
    /// overlays tipo modal. Al ocultar compensa la scrollbar desaparecida
    /// con padding-right; al mostrar restaura los valores originales
    pub fn toggle_overflow(&mut self, show: bool, el: Option<&HtmlElement>) -> Result<(), JsValue> {
        let body;
        let target: &HtmlElement = match el {
            Some(el) => el,
            None => {
                body = document()
                    .and_then(|doc| doc.body())
                    .ok_or_else(|| JsValue::from_str("No body"))?;
                &body
            }
        };

        let index = self
            .overflow_states
            .iter()
            .position(|state| state.element.is_same_node(Some(target.as_ref())));
        let index = match index {
            Some(index) => index,
            None => {
                self.overflow_states.push(OverflowState {
                    element: target.clone(),
                    original_padding_right: String::new(),
                    original_overflow: String::new(),
                });
                self.overflow_states.len() - 1
            }
        };

        if show {
            let original_padding = get_style(target, "padding-right").unwrap_or_default();
            let original_overflow = get_style(target, "overflow-y").unwrap_or_default();
            let state = &mut self.overflow_states[index];
            state.original_padding_right = original_padding.clone();
            state.original_overflow = original_overflow;

            // Solo compensar si el elemento realmente tiene scrollbar visible
            let is_overflow = target.client_width() < target.offset_width();
            if is_overflow {
                let padding = parse_px(&original_padding) + self.scrollbar_width()?;
                let state = &self.overflow_states[index];
                state
                    .element
                    .style()
                    .set_property("padding-right", &format!("{}px", padding))?;
                state.element.style().set_property("overflow", "hidden")?;
            }
        } else {
            let state = &self.overflow_states[index];
            state
                .element
                .style()
                .set_property("padding-right", &state.original_padding_right)?;
            state
                .element
                .style()
                .set_property("overflow", &state.original_overflow)?;
        }
        Ok(())
    }

    /// Descartar mediciones memoizadas y estados de overflow registrados
    pub fn reset(&mut self) {
        self.scrollbar_width = None;
        self.body_scrollbar_width = None;
        self.overflow_states.clear();
    }
}

impl Default for ScrollManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsear el prefijo numérico de un valor CSS en píxeles ("16px" -> 16)
fn parse_px(value: &str) -> i32 {
    let trimmed = value.trim();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_px_valores_comunes() {
        assert_eq!(parse_px("16px"), 16);
        assert_eq!(parse_px(" 8px "), 8);
        assert_eq!(parse_px("0"), 0);
        assert_eq!(parse_px("-4px"), -4);
    }

    #[test]
    fn parse_px_valores_invalidos() {
        assert_eq!(parse_px(""), 0);
        assert_eq!(parse_px("auto"), 0);
        assert_eq!(parse_px("px"), 0);
    }
}
