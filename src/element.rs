// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, NodeList, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Verificar si un valor JS es un nodo elemento del DOM
pub fn is_element(value: &JsValue) -> bool {
    value
        .dyn_ref::<Node>()
        .map(|node| node.node_type() == Node::ELEMENT_NODE)
        .unwrap_or(false)
}

/// Remover un elemento de su nodo padre (no-op silencioso si no tiene padre)
pub fn remove_dom(el: &Element) {
    if let Some(parent) = el.parent_element() {
        let _ = parent.remove_child(el);
    }
}

/// Agregar clase
pub fn add_class(el: &Element, class: &str) -> Result<(), JsValue> {
    el.class_list().add_1(class)
}

/// Agregar varias clases (DOMTokenList ya deduplica las existentes)
pub fn add_classes(el: &Element, classes: &[&str]) -> Result<(), JsValue> {
    for class in classes {
        el.class_list().add_1(class)?;
    }
    Ok(())
}

/// Remover clase
pub fn remove_class(el: &Element, class: &str) -> Result<(), JsValue> {
    el.class_list().remove_1(class)
}

/// Remover varias clases
pub fn remove_classes(el: &Element, classes: &[&str]) -> Result<(), JsValue> {
    for class in classes {
        el.class_list().remove_1(class)?;
    }
    Ok(())
}

/// Verificar si tiene clase
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(el: &Element, class: &str) {
    el.set_class_name(class);
}

/// Establecer text content
pub fn set_text_content(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(el: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    el.set_attribute(name, value)
}

/// Obtener atributo
pub fn get_attribute(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

/// Query selector sobre document (buscar elemento por selector CSS)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector all sobre document (buscar múltiples elementos)
pub fn query_selector_all(selector: &str) -> Result<NodeList, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)
}

/// Verificar si un NodeList contiene un nodo (comparación por identidad)
pub fn node_list_contains(list: &NodeList, node: &Node) -> bool {
    for i in 0..list.length() {
        if let Some(item) = list.item(i) {
            if item.is_same_node(Some(node)) {
                return true;
            }
        }
    }
    false
}
