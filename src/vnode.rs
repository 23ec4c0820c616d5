// ============================================================================
// VNODE HELPERS - Clonado profundo de nodos virtuales
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Nodo virtual de un framework de UI que embebe este crate. `data` es
/// opaco para este módulo (props/handlers serializados por el framework)
#[derive(Clone, Debug)]
pub struct VNode {
    pub tag: Option<String>,
    pub data: JsValue,
    pub children: Option<Vec<VNode>>,
    pub text: Option<String>,
    pub is_comment: bool,
    /// Elemento DOM montado, si el nodo ya fue renderizado
    pub element: Option<Element>,
    pub namespace: Option<String>,
    pub is_static: bool,
    pub key: Option<String>,
}

impl VNode {
    pub fn new(tag: Option<&str>, data: JsValue, children: Option<Vec<VNode>>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            data,
            children,
            text: None,
            is_comment: false,
            element: None,
            namespace: None,
            is_static: false,
            key: None,
        }
    }
}

/// Clonar un vnode a través de la fábrica del framework: los hijos se
/// clonan recursivamente primero, la fábrica crea el nodo nuevo a partir de
/// (tag, data, hijos) y después se copian los campos de metadata
pub fn clone_vnode<F>(vnode: &VNode, create: &F) -> VNode
where
    F: Fn(Option<&str>, &JsValue, Option<Vec<VNode>>) -> VNode,
{
    let children = vnode
        .children
        .as_ref()
        .map(|children| children.iter().map(|child| clone_vnode(child, create)).collect());
    let mut cloned = create(vnode.tag.as_deref(), &vnode.data, children);
    cloned.text = vnode.text.clone();
    cloned.is_comment = vnode.is_comment;
    cloned.element = vnode.element.clone();
    cloned.namespace = vnode.namespace.clone();
    cloned.is_static = vnode.is_static;
    cloned.key = vnode.key.clone();
    cloned
}

/// Clonar una lista de vnodes
pub fn clone_vnodes<F>(vnodes: &[VNode], create: &F) -> Vec<VNode>
where
    F: Fn(Option<&str>, &JsValue, Option<Vec<VNode>>) -> VNode,
{
    vnodes.iter().map(|vnode| clone_vnode(vnode, create)).collect()
}
