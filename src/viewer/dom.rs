//! Browser adapter: mounts the engine on a DOM scroll surface.
//!
//! Builds the scroll container (`overflow-y: auto`, viewport-sized) with an
//! inner spacer sized to the total extent so the native scrollbar reflects
//! the whole list, wires the container's `scroll` events to the engine, and
//! absolutely positions the elements the render callback returns.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlDivElement, HtmlElement};

use crate::error::VlistError;
use crate::types::{ItemPlacement, ListOptions};
use crate::viewer::ListView;

/// Shared state accessed by the scroll event closure.
struct SharedState {
    engine: ListView<JsValue, Option<Element>>,
    spacer: HtmlDivElement,
}

/// The browser list viewer exported to JavaScript.
///
/// ```javascript
/// const view = new VListView(host, {
///   itemCount: 10000, itemHeight: 35, height: 400, overscan: 3,
/// }, (index, placement, data) => {
///   const row = document.createElement("div");
///   row.textContent = data ?? `Row ${index}`;
///   return row;
/// }, rows);
/// // ...
/// view.dispose();
/// ```
#[wasm_bindgen]
pub struct VListView {
    state: Rc<RefCell<SharedState>>,
    container: Option<HtmlDivElement>,
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl VListView {
    /// Mount a windowed list inside `host`.
    ///
    /// `options` is a plain object with camelCase fields (`itemCount`,
    /// `itemHeight`, `height`, `width`, `overscan`). `render_item` is
    /// called as `renderItem(index, placement, dataElement)` for every
    /// windowed index on every scroll tick and must return the element for
    /// that index.
    ///
    /// # Errors
    /// Returns an error for invalid options (non-positive item height, a
    /// negative item count) or when the DOM surface cannot be built.
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: &HtmlElement,
        options: JsValue,
        render_item: Function,
        data: Option<js_sys::Array>,
    ) -> Result<VListView, JsValue> {
        console_error_panic_hook::set_once();

        let options: ListOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| VlistError::Options(e.to_string()))?;

        // Wrap the JS callback: feed it (index, placement, data) and place
        // whatever element it returns at the item's absolute position.
        let render = Box::new(
            move |placement: ItemPlacement, element: Option<&JsValue>| -> Option<Element> {
                let index = JsValue::from_f64(placement.index as f64);
                let placement_js =
                    serde_wasm_bindgen::to_value(&placement).unwrap_or(JsValue::NULL);
                let data_js = element.cloned().unwrap_or(JsValue::UNDEFINED);
                let rendered = render_item
                    .call3(&JsValue::NULL, &index, &placement_js, &data_js)
                    .ok()
                    .and_then(|v| v.dyn_into::<Element>().ok())?;
                if let Some(el) = rendered.dyn_ref::<HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("position", "absolute");
                    let _ = style.set_property("top", &format!("{}px", placement.top));
                    let _ = style.set_property("height", &format!("{}px", placement.height));
                    let _ = style.set_property("width", &placement.width.to_string());
                }
                Some(rendered)
            },
        );

        let mut engine = ListView::new(options, render).map_err(JsValue::from)?;
        if let Some(data) = data {
            engine = engine.with_data(data.iter().collect());
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| VlistError::Mount("no document".to_string()))?;

        let create_div = || -> Result<HtmlDivElement, VlistError> {
            document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
                .ok_or_else(|| VlistError::Mount("failed to create div".to_string()))
        };

        let container = create_div()?;
        let spacer = create_div()?;

        // Scroll container: fixed viewport with the native scrollbar.
        let container_style = container.style();
        let _ = container_style.set_property("position", "relative");
        let _ = container_style.set_property("overflow-y", "auto");
        let _ = container_style.set_property("height", &format!("{}px", engine.options().height));
        let _ = container_style.set_property("width", &engine.options().width.to_string());
        let _ = container_style.set_property("border", "1px solid #ccc");
        // Mark so JS can find the scroll surface
        let _ = container.set_attribute("data-vlist-scroll", "");

        // Spacer: sized to the full extent so the scrollbar reflects the
        // whole list even though only the window is materialized.
        let spacer_style = spacer.style();
        let _ = spacer_style.set_property("position", "relative");
        let _ = spacer_style.set_property("height", &format!("{}px", engine.total_extent()));

        let _ = container.append_child(&spacer);
        let _ = host.append_child(&container);

        let state = Rc::new(RefCell::new(SharedState { engine, spacer }));

        // Initial window at offset 0.
        Self::repopulate(&state, 0.0);

        // Scroll events deliver the container's scrollTop to the engine.
        let state_for_scroll = state.clone();
        let container_for_scroll = container.clone();
        let scroll_closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let offset = container_for_scroll.scroll_top() as f32;
            VListView::repopulate(&state_for_scroll, offset);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = container
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref());

        Ok(VListView {
            state,
            container: Some(container),
            scroll_closure: Some(scroll_closure),
        })
    }

    /// Re-render at the current scroll position.
    pub fn refresh(&self) {
        let offset = self.state.borrow().engine.scroll_top();
        Self::repopulate(&self.state, offset);
    }

    /// Full scrollable content height.
    #[wasm_bindgen(getter, js_name = totalExtent)]
    pub fn total_extent(&self) -> f32 {
        self.state.borrow().engine.total_extent()
    }

    /// The engine's currently held scroll offset.
    #[wasm_bindgen(getter, js_name = scrollTop)]
    pub fn scroll_top(&self) -> f32 {
        self.state.borrow().engine.scroll_top()
    }

    /// Most recent scroll metrics as a plain JS object, or null before the
    /// first computation.
    pub fn metrics(&self) -> JsValue {
        self.state
            .borrow()
            .engine
            .scroll_metrics()
            .and_then(|m| serde_wasm_bindgen::to_value(&m).ok())
            .unwrap_or(JsValue::NULL)
    }

    /// Tear down: remove the scroll listener, detach the created DOM, and
    /// dispose the engine. Idempotent; a scroll notification on the
    /// detached source reaches nothing.
    pub fn dispose(&mut self) {
        if let (Some(container), Some(closure)) = (&self.container, &self.scroll_closure) {
            let _ = container.remove_event_listener_with_callback(
                "scroll",
                closure.as_ref().unchecked_ref(),
            );
        }
        if let Some(container) = self.container.take() {
            if let Some(parent) = container.parent_node() {
                let _ = parent.remove_child(&container);
            }
        }
        self.scroll_closure = None;
        self.state.borrow_mut().engine.dispose();
    }
}

impl VListView {
    /// Fold a scroll offset into the engine, then swap the spacer's
    /// children for the new visible set.
    fn repopulate(state: &Rc<RefCell<SharedState>>, offset: f32) {
        // Drop the borrow before touching the DOM; DOM mutation can
        // re-enter the scroll closure, which needs borrow_mut().
        let (items, spacer) = {
            let mut s = state.borrow_mut();
            let items = s.engine.handle_scroll(offset).unwrap_or_default();
            (items, s.spacer.clone())
        };
        spacer.set_inner_html("");
        for element in items.into_iter().flatten() {
            let _ = spacer.append_child(&element);
        }
    }
}

impl Drop for VListView {
    fn drop(&mut self) {
        self.dispose();
    }
}
