// ============================================================================
// EVENT HANDLING - Eventos con soporte de delegación
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - `on`/`on_delegated` devuelven un EventBinding que es dueño del Closure
//   registrado. Para remover el listener exacto hay que pasar ese binding a
//   `off` (o llamar `binding.remove()`); remover por el callback original del
//   caller no funciona porque lo registrado es un closure envolvente.
// - Para listeners que deben vivir toda la página, usar `binding.forget()`:
//   cuando el elemento se destruye, el navegador limpia los listeners
//   asociados, por lo que forget() es seguro para listeners locales.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, MouseEvent, Node};

use crate::element::node_list_contains;

/// mouseenter/mouseleave no burbujean, así que para delegación se escuchan
/// sus equivalentes mouseover/mouseout y se filtra con `related_target`
pub fn mapped_event_name(event_name: &str) -> &str {
    match event_name {
        "mouseenter" => "mouseover",
        "mouseleave" => "mouseout",
        other => other,
    }
}

/// Listener nativo registrado. Es dueño del closure envolvente, por lo que
/// mientras el binding viva el listener sigue activo.
pub struct EventBinding {
    target: EventTarget,
    event_name: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    fn register(
        target: &EventTarget,
        event_name: &str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_name: event_name.to_string(),
            closure,
        })
    }

    /// Nombre del evento nativo registrado (ya mapeado, p.ej. "mouseover"
    /// para un binding creado con "mouseenter")
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Remover el listener nativo. Consume el binding: el closure se libera
    /// al salir de scope
    pub fn remove(self) -> Result<(), JsValue> {
        self.target.remove_event_listener_with_callback(
            &self.event_name,
            self.closure.as_ref().unchecked_ref(),
        )
    }

    /// Dejar el listener activo para siempre (leak intencional del closure).
    /// Para listeners locales el navegador limpia al destruir el elemento
    pub fn forget(self) {
        self.closure.forget();
    }
}

/// Registrar un listener sin delegación: el callback recibe cada evento
/// despachado sobre el contenedor. Cada llamada registra un listener nativo
/// nuevo, sin deduplicación
pub fn on<F>(container: &Element, event_name: &str, mut handler: F) -> Result<EventBinding, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(move |evt: Event| handler(evt)) as Box<dyn FnMut(Event)>);
    EventBinding::register(container.unchecked_ref(), mapped_event_name(event_name), closure)
}

/// Registrar un listener delegado: un solo listener nativo sobre el
/// contenedor que invoca el callback solo cuando el target del evento (o un
/// ancestro suyo dentro del contenedor) matchea el selector. El callback
/// recibe el evento y el elemento matcheado ("effective target").
///
/// El selector se evalúa en cada despacho (consulta fresca), por lo que
/// elementos agregados después del bind también disparan. Un selector
/// malformado no falla al registrar: el SyntaxError del navegador se lanza
/// en el primer despacho
pub fn on_delegated<F>(
    container: &Element,
    event_name: &str,
    selector: &str,
    mut handler: F,
) -> Result<EventBinding, JsValue>
where
    F: FnMut(Event, Element) + 'static,
{
    let container_el = container.clone();
    let selector = selector.to_string();
    let is_enter_leave = matches!(event_name, "mouseenter" | "mouseleave");

    let closure = Closure::wrap(Box::new(move |evt: Event| {
        let matched = match resolve_effective_target(&container_el, &selector, &evt) {
            Ok(Some(el)) => el,
            Ok(None) => return,
            // Selector malformado: propagar al manejo global de errores de
            // listeners del navegador, sin envolver
            Err(err) => wasm_bindgen::throw_val(err),
        };
        // Emulación de mouseenter/mouseleave sobre mouseover/mouseout: si el
        // puntero sigue dentro del elemento matcheado, no hubo entrada/salida
        // real y el evento se suprime
        if is_enter_leave && related_target_within(&matched, &evt) {
            return;
        }
        handler(evt, matched);
    }) as Box<dyn FnMut(Event)>);

    EventBinding::register(container.unchecked_ref(), mapped_event_name(event_name), closure)
}

/// Remover un listener registrado con `on`/`on_delegated`
pub fn off(binding: EventBinding) -> Result<(), JsValue> {
    binding.remove()
}

/// Resolver el elemento delegado que disparó el evento: subir desde el
/// target nativo hacia el contenedor (exclusivo) buscando un miembro del
/// conjunto matcheado por el selector
fn resolve_effective_target(
    container: &Element,
    selector: &str,
    evt: &Event,
) -> Result<Option<Element>, JsValue> {
    let target = match evt.target().and_then(|t| t.dyn_into::<Node>().ok()) {
        Some(node) => node,
        None => return Ok(None),
    };
    // Consulta fresca por evento: mutaciones del DOM entre eventos siempre
    // se reflejan
    let matches = container.query_selector_all(selector)?;
    let container_node: &Node = container.unchecked_ref();

    let mut current = target;
    while !current.is_same_node(Some(container_node)) {
        if node_list_contains(&matches, &current) {
            return Ok(current.dyn_into::<Element>().ok());
        }
        // Un nodo sin padre (p.ej. target ya desmontado) corta el recorrido
        // cayendo al contenedor
        current = match current.parent_node() {
            Some(parent) => parent,
            None => container_node.clone(),
        };
    }
    Ok(None)
}

/// Verificar si el related_target del evento es el elemento matcheado o está
/// contenido en él
fn related_target_within(matched: &Element, evt: &Event) -> bool {
    let related = evt
        .dyn_ref::<MouseEvent>()
        .and_then(|mouse| mouse.related_target())
        .and_then(|t| t.dyn_into::<Node>().ok());
    let related = match related {
        Some(node) => node,
        None => return false,
    };
    let matched_node: &Node = matched.unchecked_ref();
    matched_node.is_same_node(Some(&related)) || dom_contains(matched_node, &related)
}

/// Verificar si un nodo contiene a otro (semántica de contains nativo:
/// un nodo no se contiene a sí mismo en el borde). Para un nodo document
/// (nodeType 9) se usa su documentElement como raíz efectiva
pub fn dom_contains(a: &Node, b: &Node) -> bool {
    let a_down: Node = if a.node_type() == Node::DOCUMENT_NODE {
        match a.dyn_ref::<Document>().and_then(|doc| doc.document_element()) {
            Some(root) => root.unchecked_into(),
            None => return false,
        }
    } else {
        a.clone()
    };
    let b_up = match b.parent_node() {
        Some(parent) => parent,
        None => return false,
    };
    a.is_same_node(Some(&b_up))
        || (b_up.node_type() == Node::ELEMENT_NODE && a_down.contains(Some(&b_up)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouseenter_se_mapea_a_mouseover() {
        assert_eq!(mapped_event_name("mouseenter"), "mouseover");
        assert_eq!(mapped_event_name("mouseleave"), "mouseout");
    }

    #[test]
    fn eventos_comunes_no_se_mapean() {
        assert_eq!(mapped_event_name("click"), "click");
        assert_eq!(mapped_event_name("input"), "input");
        assert_eq!(mapped_event_name("mouseover"), "mouseover");
    }
}
