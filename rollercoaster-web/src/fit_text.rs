//! Hook that keeps headline lines inside their container.
//!
//! Each run resets every line to the base size, waits two animation frames
//! so the reset is laid out, then measures and shrinks. Runs are triggered
//! once fonts are ready, once after a fallback delay, and on every resize.

use rollercoaster_core::{FitText, FitTextConfig, FontSize};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use {
    crate::dom,
    gloo::events::EventListener,
    gloo::render::{AnimationFrame, request_animation_frame},
    gloo::timers::callback::Timeout,
    rollercoaster_core::{FitPass, LineMeasurement},
    std::cell::Cell,
    web_sys::HtmlElement,
};

pub struct FitTextHandle {
    pub container_ref: NodeRef,
    pub line_refs: Rc<Vec<NodeRef>>,
    pub font_sizes: Vec<FontSize>,
}

impl FitTextHandle {
    /// Inline style for line `index`, empty when the index is out of range.
    #[must_use]
    pub fn line_style(&self, index: usize) -> String {
        self.font_sizes
            .get(index)
            .map(|size| format!("font-size: {size}"))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn line_ref(&self, index: usize) -> NodeRef {
        self.line_refs.get(index).cloned().unwrap_or_default()
    }
}

/// Font sizes for `lines`. The model is rebuilt, and the triggers re-armed,
/// whenever the text or the config changes.
#[hook]
pub fn use_fit_text(lines: &[String], config: FitTextConfig) -> FitTextHandle {
    let container_ref = use_node_ref();
    let line_count = lines.len();
    let line_refs = use_memo(line_count, |count| {
        (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    let deps = (lines.to_vec(), config);
    let model = use_memo(deps.clone(), |(text, cfg)| {
        RefCell::new(FitText::new(text.len(), *cfg))
    });
    let force_update = use_force_update();

    #[cfg(target_arch = "wasm32")]
    {
        let fitter = Fitter {
            container: container_ref.clone(),
            lines: Rc::clone(&line_refs),
            model: Rc::clone(&model),
            frames: Rc::new(RefCell::new(PendingFrames::default())),
            alive: Rc::new(Cell::new(true)),
            rerender: force_update,
        };
        use_effect_with(deps, move |(_, cfg)| {
            let delay_ms = cfg.font_fallback_delay_ms;
            {
                let fitter = fitter.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = dom::fonts_ready().await {
                        log::warn!("font loading failed: {}", dom::js_error_message(&err));
                    }
                    fitter.run();
                });
            }
            let fallback = {
                let fitter = fitter.clone();
                Timeout::new(delay_ms, move || fitter.run())
            };
            let resize = dom::window().map(|win| {
                let fitter = fitter.clone();
                EventListener::new(&win, "resize", move |_| fitter.run())
            });

            move || {
                fitter.alive.set(false);
                drop(resize);
                drop(fallback);
                fitter.frames.replace(PendingFrames::default());
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (force_update, deps);
    }

    let font_sizes = model.borrow().sizes().to_vec();
    FitTextHandle {
        container_ref,
        line_refs,
        font_sizes,
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct PendingFrames {
    outer: Option<AnimationFrame>,
    inner: Option<AnimationFrame>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct Fitter {
    container: NodeRef,
    lines: Rc<Vec<NodeRef>>,
    model: Rc<RefCell<FitText>>,
    frames: Rc<RefCell<PendingFrames>>,
    alive: Rc<Cell<bool>>,
    rerender: UseForceUpdateHandle,
}

#[cfg(target_arch = "wasm32")]
impl Fitter {
    fn elements(&self) -> Vec<Option<HtmlElement>> {
        self.lines.iter().map(NodeRef::cast::<HtmlElement>).collect()
    }

    fn run(&self) {
        if !self.alive.get() {
            return;
        }
        let container_width = self
            .container
            .cast::<HtmlElement>()
            .map(|el| f64::from(el.offset_width()));
        let Some(pass) = self
            .model
            .borrow()
            .begin(dom::viewport_width(), container_width)
        else {
            return;
        };

        reset_font_sizes(&self.elements(), pass.base_px());

        // Measuring in the first frame would still see the old layout.
        let this = self.clone();
        let outer = request_animation_frame(move |_| {
            let measure = this.clone();
            let inner = request_animation_frame(move |_| measure.measure(&pass));
            this.frames.borrow_mut().inner = Some(inner);
        });
        let mut frames = self.frames.borrow_mut();
        frames.inner = None;
        frames.outer = Some(outer);
    }

    fn measure(&self, pass: &FitPass) {
        if !self.alive.get() {
            return;
        }
        let elements = self.elements();
        let changed = fit_elements(&mut self.model.borrow_mut(), pass, &elements);
        if changed {
            self.rerender.force_update();
        }
    }
}

/// Put every mounted line back at the base size before measuring.
#[cfg(target_arch = "wasm32")]
fn reset_font_sizes(elements: &[Option<HtmlElement>], base_px: f64) {
    let base = FontSize::Px(base_px).to_string();
    for el in elements.iter().flatten() {
        let _ = el.style().set_property("font-size", &base);
    }
}

/// Measure the reset lines, update the model, then write every model size
/// back onto its element whether or not it changed.
#[cfg(target_arch = "wasm32")]
fn fit_elements(model: &mut FitText, pass: &FitPass, elements: &[Option<HtmlElement>]) -> bool {
    let measurements: Vec<Option<LineMeasurement>> = elements
        .iter()
        .map(|line| {
            line.as_ref().map(|el| LineMeasurement {
                text_width: f64::from(el.scroll_width()),
                margin_left: dom::computed_margin_left(el),
            })
        })
        .collect();
    let changed = model.finish(pass, &measurements);
    for (el, size) in elements.iter().zip(model.sizes()) {
        if let Some(el) = el {
            let _ = el.style().set_property("font-size", &size.to_string());
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        lines: Vec<String>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let fit = use_fit_text(&props.lines, FitTextConfig::default());
        html! {
            <div ref={fit.container_ref.clone()}>
                { for props.lines.iter().enumerate().map(|(idx, line)| html! {
                    <span ref={fit.line_ref(idx)} style={fit.line_style(idx)}>{ line.clone() }</span>
                }) }
            </div>
        }
    }

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn lines_start_at_the_viewport_base_size() {
        let html = block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { lines: lines(2) })
                .hydratable(false)
                .render(),
        );
        assert_eq!(html.matches("font-size: 15vw").count(), 2, "{html}");
    }

    #[test]
    fn zero_lines_render_an_empty_container() {
        let html = block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { lines: lines(0) })
                .hydratable(false)
                .render(),
        );
        assert!(!html.contains("font-size"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn line_in(container: &HtmlElement, text: &str) -> HtmlElement {
        let doc = dom::document().expect("document");
        let line = doc
            .create_element("span")
            .expect("create line")
            .dyn_into::<HtmlElement>()
            .expect("span is an HtmlElement");
        line.set_text_content(Some(text));
        let style = line.style();
        let _ = style.set_property("white-space", "nowrap");
        let _ = style.set_property("display", "inline-block");
        container.append_child(&line).expect("append line");
        line
    }

    fn font_size(el: &HtmlElement) -> String {
        el.style().get_property_value("font-size").unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn repeated_identical_runs_leave_the_fitted_size_in_place() {
        let doc = dom::document().expect("document");
        let container = doc
            .create_element("div")
            .expect("create container")
            .dyn_into::<HtmlElement>()
            .expect("div is an HtmlElement");
        let _ = container.style().set_property("width", "200px");
        doc.body()
            .expect("document body")
            .append_child(&container)
            .expect("append container");
        let line = line_in(&container, "a headline far wider than two hundred pixels");
        let elements = vec![Some(line.clone())];

        let mut model = FitText::new(1, FitTextConfig::default());
        let viewport = 1000.0;
        let width = f64::from(container.offset_width());

        let first = model.begin(viewport, Some(width)).expect("container present");
        reset_font_sizes(&elements, first.base_px());
        assert!(fit_elements(&mut model, &first, &elements));
        let fitted = font_size(&line);
        assert_ne!(fitted, "150px", "line should shrink below the base size");

        let second = model.begin(viewport, Some(width)).expect("container present");
        reset_font_sizes(&elements, second.base_px());
        assert_eq!(font_size(&line), "150px");
        assert!(!fit_elements(&mut model, &second, &elements));
        assert_eq!(font_size(&line), fitted);

        container.remove();
    }
}
